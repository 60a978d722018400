use crate::domain::model::JobPosting;
use std::collections::HashSet;

/// Distinct lowercase job locations across a job collection.
pub type CityIndex = HashSet<String>;

pub fn build_city_index(jobs: &[JobPosting]) -> CityIndex {
    jobs.iter().map(|job| job.location.to_lowercase()).collect()
}
