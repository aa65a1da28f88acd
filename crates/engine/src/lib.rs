// crates/engine/src/lib.rs
use std::path::{Path, PathBuf};

pub mod classify;
pub mod config;
pub mod error;
pub mod options;
pub mod output;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::output::OutputSinks;
use crate::stats::{FileSummary, RunResult};

/// Run the classifier over `inputs`, in order.
///
/// Returns a `RunResult` with the final aggregates, a summary for every input
/// that was read, and the errors of inputs that could not be read.
///
/// # Errors
///
/// Returns an error only for failures that abort the run: no inputs, an
/// output file that cannot be opened or written, or (in strict mode) the
/// first unreadable input. Outputs opened so far are flushed and closed in
/// every case.
pub fn run(config: &Config, inputs: &[PathBuf]) -> Result<RunResult> {
    run_with(config, inputs, |_, _| {})
}

/// Like [`run`], but calls `on_skip` for each unreadable input as soon as it
/// is skipped, so the caller sees it even if a later failure aborts the run.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_with<F>(config: &Config, inputs: &[PathBuf], mut on_skip: F) -> Result<RunResult>
where
    F: FnMut(&Path, &EngineError),
{
    if inputs.is_empty() {
        return Err(EngineError::NoInputFiles);
    }

    let mut sinks = OutputSinks::open(config)?;
    let mut result = RunResult::default();

    for path in inputs {
        match processor::process_file(path, &mut sinks, &mut result.stats) {
            Ok(lines) => {
                log::debug!("{}: {lines} lines", path.display());
                result.files.push(FileSummary {
                    path: path.clone(),
                    lines,
                });
            }
            Err(e) if e.is_recoverable() && !config.strict => {
                log::info!("skipping {}: {e}", path.display());
                on_skip(path, &e);
                result.errors.push((path.clone(), e));
            }
            Err(e) => {
                // Keep whatever was already dispatched.
                if let Err(flush_err) = sinks.finish() {
                    log::warn!("{flush_err}");
                }
                return Err(e);
            }
        }
    }

    sinks.finish()?;
    log::info!(
        "classified {} lines from {} files",
        result.stats.total(),
        result.files.len()
    );
    Ok(result)
}
