use crate::config::{OutputFormat, Source};
use crate::domain::model::{JobPosting, PersonProfile, RecommendationResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn jobs_source(&self) -> Result<Source>;
    fn members_source(&self) -> Result<Source>;
    fn output_path(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
    fn strict_validation(&self) -> bool;
    fn timeout_seconds(&self) -> u64;
}

#[async_trait]
pub trait JobProvider: Send + Sync {
    async fn fetch_jobs(&self) -> Result<Vec<JobPosting>>;
}

#[async_trait]
pub trait MemberProvider: Send + Sync {
    async fn fetch_members(&self) -> Result<Vec<PersonProfile>>;
}

#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Emits the results and returns a description of where they went.
    async fn emit(&self, results: &[RecommendationResult]) -> Result<String>;
}
