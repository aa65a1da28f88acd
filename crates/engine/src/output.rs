use crate::classify::Category;
use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::options::WriteMode;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// One buffered output file bound to a category.
#[derive(Debug)]
struct Sink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl Sink {
    fn open(path: PathBuf, mode: WriteMode) -> Result<Self> {
        let mut options = OpenOptions::new();
        match mode {
            WriteMode::Truncate => options.write(true).create(true).truncate(true),
            WriteMode::Append => options.append(true).create(true),
        };

        let file = options
            .open(&path)
            .map_err(|source| EngineError::OutputOpen {
                path: path.clone(),
                source,
            })?;
        log::debug!("opened {} ({mode:?})", path.display());

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.writer
            .write_all(line)
            .and_then(|()| self.writer.write_all(b"\n"))
            .map_err(|source| EngineError::OutputWrite {
                path: self.path.clone(),
                source,
            })
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|source| EngineError::OutputWrite {
                path: self.path.clone(),
                source,
            })
    }
}

/// The three category outputs of a run.
///
/// All three are opened up front; if any fails, the ones already opened are
/// closed on drop. Buffered data is flushed by [`OutputSinks::finish`], or on
/// drop when a run is abandoned.
#[derive(Debug)]
pub struct OutputSinks {
    sinks: [Sink; 3],
}

impl OutputSinks {
    /// Open (and create if absent) `integers.txt`, `floats.txt` and `strings.txt`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutputOpen`] for the first file that cannot be opened.
    pub fn open(config: &Config) -> Result<Self> {
        let open = |category| Sink::open(config.output_path(category), config.write_mode);
        Ok(Self {
            sinks: [
                open(Category::Integer)?,
                open(Category::Float)?,
                open(Category::String)?,
            ],
        })
    }

    /// Append `line` plus a `\n` terminator to the category's file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutputWrite`] if the underlying write fails.
    pub fn write_line(&mut self, category: Category, line: &[u8]) -> Result<()> {
        self.sinks[category.index()].write_line(line)
    }

    /// Flush and close every file. All three are flushed even if one fails;
    /// the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutputWrite`] if a flush fails.
    pub fn finish(mut self) -> Result<()> {
        let mut first_err = None;
        for sink in &mut self.sinks {
            if let Err(e) = sink.flush() {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}
