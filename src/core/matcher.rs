//! Per-member recommendation policy.
//!
//! A job is recommended when both hold:
//! - **location**: the bio names none of the known job cities, or it names
//!   the job's own location (case-insensitive);
//! - **title**: some title keyword and some bio keyword contain one another.
//!
//! Substring containment is deliberately loose: "engineer" matches
//! "engineering", and also "art" matches "cart".

use crate::core::city_index::CityIndex;
use crate::core::tokenizer::{keywords_overlap, tokenize, KeywordSet};
use crate::domain::model::{JobPosting, PersonProfile, RecommendationResult, NO_SUITABLE_JOB};

pub fn match_one(
    person: &PersonProfile,
    jobs: &[JobPosting],
    city_index: &CityIndex,
) -> RecommendationResult {
    let bio_keywords = tokenize(&person.bio);
    let bio_cities: KeywordSet = bio_keywords
        .iter()
        .filter(|word| city_index.contains(word.as_str()))
        .cloned()
        .collect();

    let mut recommended_jobs: Vec<String> = jobs
        .iter()
        .filter(|job| location_matches(job, &bio_cities) && title_matches(job, &bio_keywords))
        .map(JobPosting::display_label)
        .collect();

    tracing::trace!(
        member = %person.name,
        keywords = bio_keywords.len(),
        cities = ?bio_cities,
        matches = recommended_jobs.len(),
        "matched member"
    );

    if recommended_jobs.is_empty() {
        recommended_jobs.push(NO_SUITABLE_JOB.to_string());
    }

    RecommendationResult {
        name: person.name.clone(),
        recommended_jobs,
    }
}

fn location_matches(job: &JobPosting, bio_cities: &KeywordSet) -> bool {
    bio_cities.is_empty() || bio_cities.contains(&job.location.to_lowercase())
}

fn title_matches(job: &JobPosting, bio_keywords: &KeywordSet) -> bool {
    tokenize(&job.title).iter().any(|title_word| {
        bio_keywords
            .iter()
            .any(|bio_word| keywords_overlap(title_word, bio_word))
    })
}
