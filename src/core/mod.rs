pub mod city_index;
pub mod engine;
pub mod matcher;
pub mod orchestrator;
pub mod tokenizer;

pub use crate::domain::model::{
    JobPosting, PersonProfile, RecommendationResult, RunSummary, NO_SUITABLE_JOB,
};
pub use crate::domain::ports::{ConfigProvider, JobProvider, MemberProvider, ResultSink, Storage};
pub use crate::utils::error::Result;
