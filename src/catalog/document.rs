use serde_json::Value;
use thiserror::Error;

use crate::corrections::{correct_cost, parse_experience_level};
use crate::{ExperienceLevel, JobPosting, LearningResource, UserProfile};

/// Structural validation failure for a raw store document. Raised only at
/// the boundary; scoring never sees a document that failed here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

fn require_str<'a>(doc: &'a Value, field: &'static str) -> Result<&'a str, InvalidInputError> {
    match doc.get(field) {
        None | Some(Value::Null) => Err(InvalidInputError::MissingField(field)),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(InvalidInputError::InvalidValue {
            field,
            value: other.to_string(),
        }),
    }
}

fn require_string_array(
    doc: &Value,
    field: &'static str,
) -> Result<Vec<String>, InvalidInputError> {
    let items = match doc.get(field) {
        None | Some(Value::Null) => return Err(InvalidInputError::MissingField(field)),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(InvalidInputError::InvalidValue {
                field,
                value: other.to_string(),
            })
        }
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(InvalidInputError::InvalidValue {
                field,
                value: other.to_string(),
            }),
        })
        .collect()
}

fn require_experience(
    doc: &Value,
    field: &'static str,
) -> Result<ExperienceLevel, InvalidInputError> {
    let raw = require_str(doc, field)?;
    parse_experience_level(raw).ok_or_else(|| InvalidInputError::InvalidValue {
        field,
        value: raw.to_string(),
    })
}

/// Strict adapter: user-record document to `UserProfile`. An empty skill
/// list is structurally valid; a missing `skills` field is not.
pub fn parse_user_profile(doc: &Value) -> Result<UserProfile, InvalidInputError> {
    Ok(UserProfile {
        skills: require_string_array(doc, "skills")?,
        experience_level: require_experience(doc, "experienceLevel")?,
        preferred_track: require_str(doc, "preferredTrack")?.to_string(),
    })
}

/// Strict adapter: job document to `JobPosting`. The document id arrives
/// separately from the body, mirroring the external document store.
pub fn parse_job_document(id: &str, doc: &Value) -> Result<JobPosting, InvalidInputError> {
    Ok(JobPosting {
        id: id.to_string(),
        skills_required: require_string_array(doc, "skillsRequired")?,
        experience_required: require_experience(doc, "experienceRequired")?,
        track: require_str(doc, "track")?.to_string(),
    })
}

/// Strict adapter: learning-resource document to `LearningResource`.
pub fn parse_resource_document(
    id: &str,
    doc: &Value,
) -> Result<LearningResource, InvalidInputError> {
    let raw_cost = require_str(doc, "cost")?;
    let cost = correct_cost(raw_cost).ok_or_else(|| InvalidInputError::InvalidValue {
        field: "cost",
        value: raw_cost.to_string(),
    })?;

    Ok(LearningResource {
        id: id.to_string(),
        title: require_str(doc, "title")?.to_string(),
        platform: require_str(doc, "platform")?.to_string(),
        cost,
        related_skills: require_string_array(doc, "relatedSkills")?,
        url: require_str(doc, "url")?.to_string(),
    })
}
