use crate::cancel::{CancelToken, RunOutcome};
use crate::record::AlignmentRecord;
use crate::stream::{self, RecordSink, RecordSource};
use crate::utils::progress_bar_builder::{ProgressBarBuilder, SPINNER_UPDATE_INTERVAL};
use anyhow::Result;
use indicatif::ProgressBar;
use std::path::Path;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeStats {
    pub records: u64,
    pub cleared: u64,
}

/// Clears the secondary flag on a mapped secondary alignment. Unmapped
/// records keep whatever flag they carry. Returns whether the record changed.
pub fn normalize_record<R: AlignmentRecord>(record: &mut R) -> bool {
    if !record.is_unmapped() && record.is_secondary() {
        record.clear_secondary();
        true
    } else {
        false
    }
}

/// Copies every record from `source` to `sink`, promoting mapped secondary
/// alignments to primary on the way.
pub fn normalize_primary_flags<S, K>(
    source: &mut S,
    sink: &mut K,
    cancel: &CancelToken,
    progress: &ProgressBar,
) -> Result<RunOutcome<NormalizeStats>>
where
    S: RecordSource,
    K: RecordSink<S::Record>,
{
    let mut stats = NormalizeStats::default();
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

        if normalize_record(&mut record) {
            stats.cleared += 1;
        }
        sink.write_record(&record)?;
        stats.records += 1;

        if stats.records % SPINNER_UPDATE_INTERVAL == 0 {
            progress.set_position(stats.records);
        }
    }

    progress.set_position(stats.records);
    Ok(RunOutcome::Completed(stats))
}

/// Entry point for the `primary-flag-normalizer` executable. Prints nothing
/// to stdout.
pub fn run(input: &Path, output: &Path, cancel: &CancelToken) -> Result<RunOutcome<NormalizeStats>> {
    log::info!("Normalizing primary flags {} -> {}", input.display(), output.display());
    let (mut source, mut sink) = stream::open_pair(input, output)?;

    let progress = ProgressBarBuilder::new("clearing secondary flags")
        .with_tick()
        .build()?;

    let outcome = normalize_primary_flags(&mut source, &mut sink, cancel, &progress)?;
    progress.finish_and_clear();

    if let RunOutcome::Completed(stats) = &outcome {
        log::info!(
            "Cleared the secondary flag on {} of {} records",
            stats.cleared,
            stats.records
        );
    }

    Ok(outcome)
}
