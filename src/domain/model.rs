use serde::{Deserialize, Serialize};

/// Placeholder recommendation used when no job qualifies for a member.
pub const NO_SUITABLE_JOB: &str = "No suitable job found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub location: String,
}

impl JobPosting {
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
        }
    }

    /// `"<title>, <location>"`, the form used in recommendation lists.
    pub fn display_label(&self) -> String {
        format!("{}, {}", self.title, self.location)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonProfile {
    pub name: String,
    pub bio: String,
}

impl PersonProfile {
    pub fn new(name: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bio: bio.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub name: String,
    pub recommended_jobs: Vec<String>,
}

impl RecommendationResult {
    /// True when at least one real job was recommended.
    pub fn has_matches(&self) -> bool {
        !(self.recommended_jobs.len() == 1 && self.recommended_jobs[0] == NO_SUITABLE_JOB)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub jobs: usize,
    pub members: usize,
    pub members_with_matches: usize,
    pub output: String,
}
