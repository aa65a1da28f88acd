use crate::classify::classify;
use crate::error::{EngineError, Result};
use crate::output::OutputSinks;
use crate::stats::Aggregates;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Classify every line of one input file into `sinks`, updating `stats`.
///
/// Returns the number of lines dispatched. The file handle is released
/// before returning on every path.
///
/// # Errors
///
/// `InputOpen`/`InputRead` when the input cannot be read (lines already
/// dispatched stay dispatched), `OutputWrite` when a sink write fails.
pub fn process_file(path: &Path, sinks: &mut OutputSinks, stats: &mut Aggregates) -> Result<u64> {
    let file = File::open(path).map_err(|source| EngineError::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    process_lines(&mut reader, path, sinks, stats)
}

/// 行単位のディスパッチ処理
pub fn process_lines<R: BufRead>(
    reader: &mut R,
    path: &Path,
    sinks: &mut OutputSinks,
    stats: &mut Aggregates,
) -> Result<u64> {
    let mut lines = 0;
    let mut line_buf = Vec::new();

    loop {
        line_buf.clear();
        match reader.read_until(b'\n', &mut line_buf) {
            Ok(0) => break,
            Ok(_) => {
                let raw = strip_terminator(&line_buf);
                // Invalid UTF-8 can never be numeric, so lossy decoding only
                // affects string lengths. The raw bytes are what gets written.
                let text = String::from_utf8_lossy(raw);
                let classified = classify(&text);

                sinks.write_line(classified.category(), raw)?;
                stats.record(&classified);
                lines += 1;
            }
            Err(source) => {
                return Err(EngineError::InputRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }

    Ok(lines)
}

/// Drop a trailing `\n` or `\r\n`.
fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
