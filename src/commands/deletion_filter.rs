use crate::cancel::{CancelToken, RunOutcome};
use crate::record::{AlignmentRecord, CigarKind};
use crate::report::{Counters, LineReporter, ProgressReporter};
use crate::stream::{self, RecordSink, RecordSource};
use crate::utils::progress_bar_builder::{ProgressBarBuilder, SPINNER_UPDATE_INTERVAL};
use anyhow::Result;
use indicatif::ProgressBar;
use std::path::Path;

/// Deletions at least this long get a read thrown out.
pub const MIN_DELETION_LEN: u32 = 4;

/// Records between two progress lines.
pub const PROGRESS_INTERVAL: u64 = 1_000_000;

#[derive(Debug, Clone)]
pub struct DeletionFilterOptions {
    pub min_deletion_len: u32,
    /// Zero disables periodic lines; the final line is always emitted.
    pub progress_interval: u64,
}

impl Default for DeletionFilterOptions {
    fn default() -> Self {
        Self {
            min_deletion_len: MIN_DELETION_LEN,
            progress_interval: PROGRESS_INTERVAL,
        }
    }
}

/// True when any `D` operation reaches `min_len`. Reference skips (`N`)
/// don't count.
pub fn has_long_deletion<R: AlignmentRecord>(record: &R, min_len: u32) -> bool {
    record
        .cigar_ops()
        .any(|op| op.kind == CigarKind::Del && op.len >= min_len)
}

/// Copies every record without a long deletion from `source` to `sink`.
///
/// `reporter` sees the counters every `progress_interval` records and once
/// more when the input runs out. A cancelled token stops the loop before or
/// right after the next read, and the final report is skipped.
pub fn filter_deletions<S, K, P>(
    source: &mut S,
    sink: &mut K,
    reporter: &mut P,
    options: &DeletionFilterOptions,
    cancel: &CancelToken,
    progress: &ProgressBar,
) -> Result<RunOutcome<Counters>>
where
    S: RecordSource,
    K: RecordSink<S::Record>,
    P: ProgressReporter,
{
    let mut counters = Counters::default();
    let mut record = source.new_record();

    loop {
        if cancel.is_cancelled() {
            return Ok(RunOutcome::Cancelled);
        }
        let more = source.read_next(&mut record)?;
        // An interrupt can land while the read blocks.
        if cancel.is_cancelled() {
            return Ok(RunOutcome::Cancelled);
        }
        if !more {
            break;
        }

        if has_long_deletion(&record, options.min_deletion_len) {
            counters.record_removed();
        } else {
            sink.write_record(&record)?;
            counters.record_accepted();
        }

        if options.progress_interval > 0 && counters.total % options.progress_interval == 0 {
            reporter.report(&counters)?;
        }
        if counters.total % SPINNER_UPDATE_INTERVAL == 0 {
            progress.set_position(counters.total);
        }
    }

    progress.set_position(counters.total);
    reporter.report(&counters)?;

    Ok(RunOutcome::Completed(counters))
}

/// Entry point for the `deletion-filter` executable.
pub fn run(input: &Path, output: &Path, cancel: &CancelToken) -> Result<RunOutcome<Counters>> {
    log::info!("Filtering {} -> {}", input.display(), output.display());
    let (mut source, mut sink) = stream::open_pair(input, output)?;

    let progress = ProgressBarBuilder::new("filtering long deletions")
        .with_tick()
        .build()?;
    let mut stdout = LineReporter::stdout();
    let mut reporter = |counters: &Counters| progress.suspend(|| stdout.report(counters));

    let outcome = filter_deletions(
        &mut source,
        &mut sink,
        &mut reporter,
        &DeletionFilterOptions::default(),
        cancel,
        &progress,
    )?;
    progress.finish_and_clear();

    if let RunOutcome::Completed(counters) = &outcome {
        log::info!(
            "Kept {} of {} records ({} removed)",
            counters.accepted,
            counters.total,
            counters.removed
        );
    }

    Ok(outcome)
}
