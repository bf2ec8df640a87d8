use segmentify_cli::cli::FolderCountCli;
use segmentify_core::logging;

fn main() {
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = FolderCountCli::run_from_args() {
        tracing::error!("foldercount failed: {:#}", err);
        eprintln!("foldercount error: {:#}", err);
        std::process::exit(1);
    }
}
