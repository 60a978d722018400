use crate::core::city_index::build_city_index;
use crate::core::matcher::match_one;
use crate::domain::model::{JobPosting, PersonProfile, RecommendationResult};

/// Matches every member against the full job collection, in member order.
pub fn match_all(members: &[PersonProfile], jobs: &[JobPosting]) -> Vec<RecommendationResult> {
    let city_index = build_city_index(jobs);
    tracing::debug!(
        "Matching {} members against {} jobs in {} cities",
        members.len(),
        jobs.len(),
        city_index.len()
    );

    members
        .iter()
        .map(|member| match_one(member, jobs, &city_index))
        .collect()
}
