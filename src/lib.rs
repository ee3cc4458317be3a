pub mod catalog;
pub mod corrections;
pub mod learning;
pub mod logging;
pub mod matching;
pub mod skill_normalizer;

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

// Commonly used data models for the matching and learning functions.

/// Self-assessed (profile) or required (posting) experience level,
/// ordered lowest to highest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// Numeric rank used for delta computation (beginner=0, advanced=2).
    pub fn rank(self) -> i32 {
        match self {
            ExperienceLevel::Beginner => 0,
            ExperienceLevel::Intermediate => 1,
            ExperienceLevel::Advanced => 2,
        }
    }
}

/// Pricing of a learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
pub enum Cost {
    Free,
    Paid,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub preferred_track: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    /// Stable identity assigned by the external job store.
    pub id: String,
    pub skills_required: Vec<String>,
    pub experience_required: ExperienceLevel,
    pub track: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    pub id: String,
    pub title: String,
    pub platform: String,
    pub cost: Cost,
    pub related_skills: Vec<String>,
    pub url: String,
}
