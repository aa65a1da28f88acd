use file_filter_cli::args::Args;
use file_filter_cli::config::Config;
use file_filter_cli::{logging, presentation};
use file_filter_engine::error::EngineError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::interpret();
    logging::init(args.verbose);

    let config = match Config::try_from(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let inputs = args.input_files();
    log::debug!("{config:?}, {} input files", inputs.len());
    match file_filter_engine::run_with(&config, &inputs, presentation::print_error) {
        Ok(result) => {
            match presentation::print_statistics(&result.stats, config.stats, args.stats_format) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error printing statistics: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e @ EngineError::NoInputFiles) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error processing files: {e}");
            ExitCode::FAILURE
        }
    }
}
