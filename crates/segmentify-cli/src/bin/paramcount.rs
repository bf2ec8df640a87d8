use segmentify_cli::cli::ParamCountCli;
use segmentify_core::logging;

fn main() {
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = ParamCountCli::run_from_args() {
        tracing::error!("paramcount failed: {:#}", err);
        eprintln!("paramcount error: {:#}", err);
        std::process::exit(1);
    }
}
