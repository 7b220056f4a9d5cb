use clap::Parser;
use std::path::PathBuf;

/// Remove reads carrying a deletion of 4 or more bases
#[derive(Parser, Debug)]
#[command(name = "deletion-filter", author, version, long_about = None)]
pub struct DeletionFilterArgs {
    /// Input alignment file (SAM, BAM or CRAM)
    pub input: PathBuf,

    /// Output BAM file
    pub output: PathBuf,
}

/// Set all mapped secondary alignments to primary
#[derive(Parser, Debug)]
#[command(name = "primary-flag-normalizer", author, version, long_about = None)]
pub struct PrimaryFlagArgs {
    /// Input alignment file (SAM, BAM or CRAM)
    pub input: PathBuf,

    /// Output BAM file with secondary flags cleared
    pub output: PathBuf,
}
