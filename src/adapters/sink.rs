use crate::config::OutputFormat;
use crate::core::{RecommendationResult, ResultSink, Storage};
use crate::utils::error::{MatchError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::Write as _;
use tokio::io::AsyncWriteExt;

pub fn render(results: &[RecommendationResult], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Text => Ok(render_text(results)),
        OutputFormat::Csv => render_csv(results),
    }
}

fn render_text(results: &[RecommendationResult]) -> String {
    let mut out = String::new();
    for result in results {
        let _ = writeln!(out, "{}", result.name);
        for job in &result.recommended_jobs {
            let _ = writeln!(out, "  - {}", job);
        }
    }
    out
}

/// One row per recommendation, sentinel rows included.
fn render_csv(results: &[RecommendationResult]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["name", "recommended_job"])?;
    for result in results {
        for job in &result.recommended_jobs {
            writer.write_record([result.name.as_str(), job.as_str()])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| MatchError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| MatchError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

pub struct StdoutSink {
    format: OutputFormat,
}

impl StdoutSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

#[async_trait]
impl ResultSink for StdoutSink {
    async fn emit(&self, results: &[RecommendationResult]) -> Result<String> {
        let mut rendered = render(results, self.format)?;
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }

        let mut stdout = tokio::io::stdout();
        stdout.write_all(rendered.as_bytes()).await?;
        stdout.flush().await?;
        Ok("stdout".to_string())
    }
}

/// Writes rendered results through storage. `{timestamp}` in the path is
/// replaced with the UTC time of the write.
pub struct FileSink<S: Storage> {
    storage: S,
    path_template: String,
    format: OutputFormat,
}

impl<S: Storage> FileSink<S> {
    pub fn new(storage: S, path_template: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            storage,
            path_template: path_template.into(),
            format,
        }
    }

    pub fn resolve_path(&self, now: DateTime<Utc>) -> String {
        self.path_template
            .replace("{timestamp}", &now.format("%Y%m%d_%H%M%S").to_string())
    }
}

#[async_trait]
impl<S: Storage> ResultSink for FileSink<S> {
    async fn emit(&self, results: &[RecommendationResult]) -> Result<String> {
        let rendered = render(results, self.format)?;
        let path = self.resolve_path(Utc::now());

        tracing::debug!("Writing {} results ({:?}) to {}", results.len(), self.format, path);
        self.storage.write_file(&path, rendered.as_bytes()).await?;
        Ok(path)
    }
}

/// Sink chosen at runtime from configuration.
pub enum ConfiguredSink<S: Storage> {
    Stdout(StdoutSink),
    File(FileSink<S>),
}

impl<S: Storage> ConfiguredSink<S> {
    pub fn new(storage: S, output_path: Option<&str>, format: OutputFormat) -> Self {
        match output_path {
            Some(path) => ConfiguredSink::File(FileSink::new(storage, path, format)),
            None => ConfiguredSink::Stdout(StdoutSink::new(format)),
        }
    }
}

#[async_trait]
impl<S: Storage> ResultSink for ConfiguredSink<S> {
    async fn emit(&self, results: &[RecommendationResult]) -> Result<String> {
        match self {
            ConfiguredSink::Stdout(sink) => sink.emit(results).await,
            ConfiguredSink::File(sink) => sink.emit(results).await,
        }
    }
}
