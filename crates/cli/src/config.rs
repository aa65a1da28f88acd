// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use file_filter_engine::config::{Config, ConfigBuilder};
use file_filter_engine::error::EngineError;
use file_filter_engine::options::{StatsLevel, WriteMode};

impl TryFrom<&Args> for Config {
    type Error = AppError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let write_mode = if args.append {
            WriteMode::Append
        } else {
            WriteMode::Truncate
        };

        let mut builder = ConfigBuilder::default();
        builder
            .write_mode(write_mode)
            .stats(StatsLevel::from_flags(args.short_stats, args.full_stats))
            .strict(args.strict);
        if let Some(dir) = &args.output_dir {
            builder.output_dir(dir.clone());
        }
        if let Some(prefix) = &args.prefix {
            builder.prefix(prefix.clone());
        }

        builder
            .build()
            .map_err(|e| AppError::from(EngineError::from(e)))
    }
}
