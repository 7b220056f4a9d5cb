pub mod cancel;
pub mod cli;
pub mod commands;
pub mod record;
pub mod report;
pub mod stream;
pub mod utils;

pub use cancel::{CancelToken, RunOutcome};
pub use record::{AlignmentRecord, CigarKind, CigarOp};
pub use report::{Counters, ProgressReporter};
