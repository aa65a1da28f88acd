use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the statistics report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum StatsFormat {
    /// Plain `Statistics:` listing
    #[default]
    Text,
    /// One pretty-printed JSON object
    Json,
}
