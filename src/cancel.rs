use anyhow::{Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Exit status used when the user interrupts a run (128 + SIGINT).
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// How a record loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome<T> {
    Completed(T),
    Cancelled,
}

impl<T> RunOutcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunOutcome::Cancelled)
    }
}

/// Shared flag polled by the record loops between records.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Routes Ctrl-C / SIGINT to the returned token. A second interrupt exits at
/// once, for reads stuck on an input that never delivers. Can only be called
/// once per process.
pub fn install_interrupt_handler() -> Result<CancelToken> {
    let token = CancelToken::new();
    let handler_token = token.clone();

    ctrlc::set_handler(move || {
        if handler_token.is_cancelled() {
            eprintln!("user interrupted, exiting");
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
        handler_token.cancel();
    })
    .context("Failed to install interrupt handler")?;

    Ok(token)
}
