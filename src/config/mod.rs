pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_JOBS_URL: &str = "https://bn-hiring-challenge.fly.dev/jobs.json";
pub const DEFAULT_MEMBERS_URL: &str = "https://bn-hiring-challenge.fly.dev/members.json";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Where a record collection is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote(Url),
    File(PathBuf),
}

impl Source {
    /// Anything with a `scheme://` prefix is a URL; everything else is a path.
    pub fn parse(field_name: &str, value: &str) -> Result<Self> {
        if value.contains("://") {
            validate_url(field_name, value)?;
            let url = Url::parse(value).map_err(|e| MatchError::InvalidConfigValue {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: e.to_string(),
            })?;
            Ok(Source::Remote(url))
        } else {
            validate_path(field_name, value)?;
            Ok(Source::File(PathBuf::from(value)))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote(url) => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
    Csv,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "job-match")]
#[command(about = "Recommend job postings to members based on their bios")]
pub struct CliConfig {
    /// Jobs JSON: an http(s) URL or a local file path
    #[arg(long, default_value = DEFAULT_JOBS_URL)]
    pub jobs: String,

    /// Members JSON: an http(s) URL or a local file path
    #[arg(long, default_value = DEFAULT_MEMBERS_URL)]
    pub members: String,

    /// Write results to this file instead of stdout ({timestamp} is expanded)
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Reject records with blank titles, locations or names
    #[arg(long)]
    pub strict: bool,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// Load settings from a TOML file; command-line output flags still win
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn jobs_source(&self) -> Result<Source> {
        Source::parse("jobs", &self.jobs)
    }

    fn members_source(&self) -> Result<Source> {
        Source::parse("members", &self.members)
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    fn strict_validation(&self) -> bool {
        self.strict
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.jobs_source()?;
        self.members_source()?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        if let Some(path) = &self.output {
            validate_path("output", path)?;
        }
        Ok(())
    }
}
