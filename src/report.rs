use anyhow::{Context, Result};
use std::fmt;
use std::io::Write;

/// Running totals kept by the deletion filter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    pub total: u64,
    pub accepted: u64,
    pub removed: u64,
}

impl Counters {
    pub fn record_accepted(&mut self) {
        self.total += 1;
        self.accepted += 1;
    }

    pub fn record_removed(&mut self) {
        self.total += 1;
        self.removed += 1;
    }

    pub fn is_consistent(&self) -> bool {
        self.total == self.accepted + self.removed
    }
}

/// `<total> <accepted> <removed>`
impl fmt::Display for Counters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.total, self.accepted, self.removed)
    }
}

/// Receives counter snapshots from a running filter.
/// A failed report aborts the run.
pub trait ProgressReporter {
    fn report(&mut self, counters: &Counters) -> Result<()>;
}

impl<F: FnMut(&Counters) -> Result<()>> ProgressReporter for F {
    fn report(&mut self, counters: &Counters) -> Result<()> {
        self(counters)
    }
}

/// Writes one counter line per report to any `Write`, stdout by default.
pub struct LineReporter<W: Write> {
    out: W,
}

impl LineReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> LineReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressReporter for LineReporter<W> {
    fn report(&mut self, counters: &Counters) -> Result<()> {
        writeln!(self.out, "{}", counters)
            .and_then(|_| self.out.flush())
            .with_context(|| format!("Failed to write counts \"{}\"", counters))
    }
}
