// crates/cli/src/logging.rs
use tracing_subscriber::EnvFilter;

/// Level directive for a `--verbose` count. Warnings only by default.
#[must_use]
pub const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber that also receives `log` records from the engine.
///
/// The level comes from `--verbose` alone; `RUST_LOG` is not consulted.
pub fn init(verbose: u8) {
    let filter = EnvFilter::new(level_for(verbose));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("logging disabled: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }
}
