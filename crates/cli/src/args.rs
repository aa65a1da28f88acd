// crates/cli/src/args.rs
use crate::options::StatsFormat;
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Only arguments with this suffix are read as input files.
pub const INPUT_SUFFIX: &str = ".txt";

/// Command-line arguments.
///
/// Parse with [`Args::interpret`] rather than `Args::parse`: hyphen-prefixed
/// tokens that are not one of the flags below are dropped before clap sees
/// them, so stray options are ignored like any other non-input argument.
#[derive(Parser, Debug)]
#[command(
    name = "file_filter",
    version = crate::VERSION,
    about = "Split the lines of .txt files into integers, floats and strings",
    args_override_self = true
)]
pub struct Args {
    /// Output directory (default: current directory)
    #[arg(short = 'o', value_name = "DIR", allow_hyphen_values = true)]
    pub output_dir: Option<PathBuf>,

    /// Prefix for the output file names
    #[arg(short = 'p', value_name = "PREFIX", allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Append to existing output files instead of overwriting them
    #[arg(short = 'a')]
    pub append: bool,

    /// Print short statistics (counts only)
    #[arg(short = 's')]
    pub short_stats: bool,

    /// Print full statistics (counts, min, max, sum, average)
    #[arg(short = 'f')]
    pub full_stats: bool,

    /// Stop at the first input file that cannot be read
    #[arg(long)]
    pub strict: bool,

    /// Statistics output format
    #[arg(long, value_enum, default_value_t = StatsFormat::Text)]
    pub stats_format: StatsFormat,

    /// Increase log verbosity (repeatable)
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Input files. Arguments not ending in `.txt` are ignored.
    #[arg(value_name = "FILE")]
    pub operands: Vec<PathBuf>,
}

impl Args {
    /// Parse the process arguments, exiting with a usage message on error.
    #[must_use]
    pub fn interpret() -> Self {
        Self::try_interpret(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse an argument vector whose first element is the program name.
    ///
    /// # Errors
    ///
    /// Returns a clap error when `-o`/`-p` has no value, or for `--help`/`--version`.
    pub fn try_interpret<I, T>(raw: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut cmd = Self::command();
        cmd.build();
        let argv = normalize(&cmd, raw.into_iter().map(Into::into))?;
        Self::try_parse_from(argv)
    }

    /// Operands ending in `.txt`, in command-line order.
    #[must_use]
    pub fn input_files(&self) -> Vec<PathBuf> {
        self.operands
            .iter()
            .filter(|p| is_input_file(p))
            .cloned()
            .collect()
    }
}

#[must_use]
pub fn is_input_file(path: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .ends_with(INPUT_SUFFIX.as_bytes())
}

/// Rebuild the argument vector as `[bin, known flags..., "--", operands...]`.
///
/// Unknown hyphen-prefixed tokens are dropped unless they end in `.txt`, in
/// which case they are kept as operands. The token after a value-taking flag
/// is always its value.
fn normalize<I>(cmd: &Command, mut raw: I) -> Result<Vec<OsString>, clap::Error>
where
    I: Iterator<Item = OsString>,
{
    let mut flags = Vec::new();
    let mut operands = Vec::new();
    flags.extend(raw.next());

    while let Some(token) = raw.next() {
        let Some(text) = token.to_str().filter(|t| t.len() > 1 && t.starts_with('-')) else {
            operands.push(token);
            continue;
        };

        match lookup(cmd, text) {
            Some((arg, inline_value)) => {
                let needs_value = arg.get_action().takes_values() && !inline_value;
                flags.push(token);
                if needs_value {
                    let Some(value) = raw.next() else {
                        return Err(missing_value(cmd, arg));
                    };
                    flags.push(value);
                }
            }
            None if text.ends_with(INPUT_SUFFIX) => operands.push(token),
            None => {}
        }
    }

    if !operands.is_empty() {
        flags.push(OsString::from("--"));
        flags.append(&mut operands);
    }
    Ok(flags)
}

/// Find the flag `token` names exactly. The bool is true for `--long=value`.
fn lookup<'a>(cmd: &'a Command, token: &str) -> Option<(&'a Arg, bool)> {
    if let Some(long) = token.strip_prefix("--") {
        let (name, inline) = long.split_once('=').map_or((long, false), |(n, _)| (n, true));
        return cmd
            .get_arguments()
            .find(|arg| arg.get_long() == Some(name))
            .map(|arg| (arg, inline));
    }

    let mut chars = token.strip_prefix('-')?.chars();
    match (chars.next(), chars.next()) {
        (Some(short), None) => cmd
            .get_arguments()
            .find(|arg| arg.get_short() == Some(short))
            .map(|arg| (arg, false)),
        _ => None,
    }
}

fn missing_value(cmd: &Command, arg: &Arg) -> clap::Error {
    let name = arg
        .get_short()
        .map(|c| format!("-{c}"))
        .or_else(|| arg.get_long().map(|l| format!("--{l}")))
        .unwrap_or_default();
    let mut cmd = cmd.clone();
    cmd.error(
        ErrorKind::InvalidValue,
        format!("a value is required for '{name}' but none was supplied"),
    )
}
