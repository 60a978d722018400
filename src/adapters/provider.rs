use crate::config::Source;
use crate::core::{JobPosting, JobProvider, MemberProvider, PersonProfile, Storage};
use crate::utils::error::{MatchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Loads a JSON array of records from a URL or through storage.
#[derive(Debug, Clone)]
pub struct JsonRecordLoader<S: Storage> {
    client: Client,
    storage: S,
}

impl<S: Storage> JsonRecordLoader<S> {
    pub fn new(storage: S, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, storage })
    }

    pub async fn load<T>(&self, name: &str, source: &Source) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let body = match source {
            Source::Remote(url) => {
                tracing::debug!("Making API request for {} to: {}", name, url);
                let response = self.client.get(url.clone()).send().await?;
                let status = response.status();
                tracing::debug!("API response status: {}", status);

                if !status.is_success() {
                    return Err(MatchError::Provider {
                        source_name: name.to_string(),
                        status: status.as_u16(),
                    });
                }
                response.bytes().await?.to_vec()
            }
            Source::File(path) => self.storage.read_file(&path.to_string_lossy()).await?,
        };

        let records: Vec<T> = serde_json::from_slice(&body)?;
        tracing::debug!("Loaded {} {} records from {}", records.len(), name, source);
        Ok(records)
    }
}

pub struct JobSource<S: Storage> {
    loader: JsonRecordLoader<S>,
    source: Source,
}

impl<S: Storage> JobSource<S> {
    pub fn new(loader: JsonRecordLoader<S>, source: Source) -> Self {
        Self { loader, source }
    }
}

#[async_trait]
impl<S: Storage> JobProvider for JobSource<S> {
    async fn fetch_jobs(&self) -> Result<Vec<JobPosting>> {
        self.loader.load("jobs", &self.source).await
    }
}

pub struct MemberSource<S: Storage> {
    loader: JsonRecordLoader<S>,
    source: Source,
}

impl<S: Storage> MemberSource<S> {
    pub fn new(loader: JsonRecordLoader<S>, source: Source) -> Self {
        Self { loader, source }
    }
}

#[async_trait]
impl<S: Storage> MemberProvider for MemberSource<S> {
    async fn fetch_members(&self) -> Result<Vec<PersonProfile>> {
        self.loader.load("members", &self.source).await
    }
}
