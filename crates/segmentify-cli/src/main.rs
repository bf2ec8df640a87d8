use segmentify_cli::cli::SegmentifyCli;
use segmentify_core::logging;

fn main() {
    // File logging when possible; the console is reserved for progress output.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = SegmentifyCli::run_from_args() {
        tracing::error!("segmentify failed: {:#}", err);
        eprintln!("segmentify error: {:#}", err);
        std::process::exit(1);
    }
}
