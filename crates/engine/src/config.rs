use crate::classify::Category;
use crate::error::EngineError;
use crate::options::{StatsLevel, WriteMode};
use derive_builder::Builder;
use std::path::PathBuf;

/// Run configuration. Built once from the command line and never mutated.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "PathBuf::from(\".\")")]
    pub output_dir: PathBuf,
    /// Prepended to every output file name.
    #[builder(default)]
    pub prefix: String,
    #[builder(default)]
    pub write_mode: WriteMode,
    #[builder(default)]
    pub stats: StatsLevel,
    /// Abort on the first unreadable input instead of skipping it.
    #[builder(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            prefix: String::new(),
            write_mode: WriteMode::default(),
            stats: StatsLevel::default(),
            strict: false,
        }
    }
}

impl Config {
    /// `output_dir/prefix + category file name`
    #[must_use]
    pub fn output_path(&self, category: Category) -> PathBuf {
        self.output_dir
            .join(format!("{}{}", self.prefix, category.file_name()))
    }
}

impl From<ConfigBuilderError> for EngineError {
    fn from(err: ConfigBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn builder_defaults_match_default() {
        let built = ConfigBuilder::default().build().unwrap();
        let default = Config::default();

        assert_eq!(built.output_dir, default.output_dir);
        assert_eq!(built.prefix, default.prefix);
        assert_eq!(built.write_mode, WriteMode::Truncate);
        assert_eq!(built.stats, StatsLevel::None);
        assert!(!built.strict);
    }

    #[test]
    fn output_path_applies_prefix() {
        let config = ConfigBuilder::default()
            .output_dir("out")
            .prefix("run1_")
            .build()
            .unwrap();

        assert_eq!(
            config.output_path(Category::Integer),
            Path::new("out").join("run1_integers.txt")
        );
        assert_eq!(
            config.output_path(Category::String),
            Path::new("out").join("run1_strings.txt")
        );
    }
}
