use crate::adapters::provider::{JobSource, JsonRecordLoader, MemberSource};
use crate::adapters::sink::ConfiguredSink;
use crate::adapters::storage::LocalStorage;
use crate::core::engine::MatchEngine;
use crate::core::{ConfigProvider, RunSummary};
use crate::utils::error::Result;
use std::time::Duration;

pub type ConfiguredEngine = MatchEngine<
    JobSource<LocalStorage>,
    MemberSource<LocalStorage>,
    ConfiguredSink<LocalStorage>,
>;

/// Wires providers, sink and engine from a configuration.
pub fn build_engine<C: ConfigProvider>(config: &C, storage: LocalStorage) -> Result<ConfiguredEngine> {
    let loader = JsonRecordLoader::new(
        storage.clone(),
        Duration::from_secs(config.timeout_seconds()),
    )?;

    let jobs_source = config.jobs_source()?;
    let members_source = config.members_source()?;
    tracing::info!("📥 Jobs from: {}", jobs_source);
    tracing::info!("📥 Members from: {}", members_source);

    let sink = ConfiguredSink::new(storage, config.output_path(), config.output_format());

    Ok(MatchEngine::new(
        JobSource::new(loader.clone(), jobs_source),
        MemberSource::new(loader, members_source),
        sink,
    )
    .with_strict_validation(config.strict_validation()))
}

pub async fn run<C: ConfigProvider>(config: &C) -> Result<RunSummary> {
    build_engine(config, LocalStorage::current_dir())?.run().await
}
