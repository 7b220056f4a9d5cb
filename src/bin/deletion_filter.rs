use bam_cleanup_tools::cancel::{self, RunOutcome, INTERRUPTED_EXIT_CODE};
use bam_cleanup_tools::cli::DeletionFilterArgs;
use bam_cleanup_tools::commands::deletion_filter;
use bam_cleanup_tools::utils::logging::init_logging;
use clap::Parser;

fn main() {
    let args = DeletionFilterArgs::parse();
    init_logging();

    let result = cancel::install_interrupt_handler()
        .and_then(|token| deletion_filter::run(&args.input, &args.output, &token));

    match result {
        Ok(RunOutcome::Completed(_)) => {}
        Ok(RunOutcome::Cancelled) => {
            eprintln!("user interrupted, exiting");
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
