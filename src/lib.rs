pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::LocalStorage;
pub use config::{toml_config::TomlConfig, CliConfig, OutputFormat, Source};
pub use crate::core::{
    engine::MatchEngine, orchestrator::match_all, JobPosting, PersonProfile,
    RecommendationResult, RunSummary, NO_SUITABLE_JOB,
};
pub use utils::error::{MatchError, Result};
