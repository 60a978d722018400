use crate::domain::model::{JobPosting, PersonProfile};
use crate::utils::error::{MatchError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MatchError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MatchError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(MatchError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MatchError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MatchError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(MatchError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

fn require_text(collection: &str, index: usize, field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MatchError::InvalidRecord {
            collection: collection.to_string(),
            index,
            reason: format!("{} is empty", field),
        });
    }
    Ok(())
}

/// Every job needs a non-blank title and location.
pub fn validate_jobs(jobs: &[JobPosting]) -> Result<()> {
    for (index, job) in jobs.iter().enumerate() {
        require_text("jobs", index, "title", &job.title)?;
        require_text("jobs", index, "location", &job.location)?;
    }
    Ok(())
}

/// Every member needs a non-blank name; an empty bio is allowed.
pub fn validate_members(members: &[PersonProfile]) -> Result<()> {
    for (index, member) in members.iter().enumerate() {
        require_text("members", index, "name", &member.name)?;
    }
    Ok(())
}
