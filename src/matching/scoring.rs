use serde::{Deserialize, Serialize};

use super::weights::{Weights, DEFAULT_WEIGHTS};
use crate::skill_normalizer::{normalize_skill, normalize_skill_set, normalize_skills_ordered};
use crate::{JobPosting, UserProfile};

#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub weights: Weights,
    /// How many ranked matches feed the aggregated skill gap.
    pub top_matches: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            top_matches: 10,
        }
    }
}

impl MatchingConfig {
    /// Read `CAREERMATCH_*` overrides, falling back to the policy defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            weights: Weights {
                skills: env_f64("CAREERMATCH_SKILL_WEIGHT", defaults.weights.skills),
                experience: env_f64(
                    "CAREERMATCH_EXPERIENCE_WEIGHT",
                    defaults.weights.experience,
                ),
                track: env_f64("CAREERMATCH_TRACK_WEIGHT", defaults.weights.track),
            },
            top_matches: env_usize("CAREERMATCH_TOP_MATCHES", defaults.top_matches),
        }
    }
}

fn env_f64(name: &str, default: f64) -> f64 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Compatibility of one (profile, job) pair. Derived on every call and
/// never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub job_id: String,
    /// Composite score on the 0..=100 scale.
    pub score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Profile rank minus required rank; negative means under-experienced.
    pub experience_delta: i32,
    pub track_match: bool,
}

/// Score one job against a profile.
///
/// `matched_skills` and `missing_skills` partition the job's normalized
/// requirement list in its original order. An empty profile skill set is a
/// valid input: the skill component is zero and every requirement is
/// missing.
pub fn score_job(profile: &UserProfile, job: &JobPosting, weights: &Weights) -> MatchResult {
    let profile_skills = normalize_skill_set(&profile.skills);
    let required = normalize_skills_ordered(&job.skills_required);

    let matched: Vec<String> = required
        .iter()
        .filter(|s| profile_skills.contains(s.as_str()))
        .cloned()
        .collect();
    let missing: Vec<String> = required
        .iter()
        .filter(|s| !profile_skills.contains(s.as_str()))
        .cloned()
        .collect();

    let skill_score = matched.len() as f64 / required.len().max(1) as f64;

    let experience_delta = profile.experience_level.rank() - job.experience_required.rank();
    let experience_score = experience_component(experience_delta);

    let track_match = normalize_skill(&profile.preferred_track) == normalize_skill(&job.track);
    let track_score = if track_match { 1.0 } else { 0.0 };

    let composite = 100.0
        * (weights.skills * skill_score
            + weights.experience * experience_score
            + weights.track * track_score);
    let score = composite.round().clamp(0.0, 100.0) as u32;

    MatchResult {
        job_id: job.id.clone(),
        score,
        matched_skills: matched,
        missing_skills: missing,
        experience_delta,
        track_match,
    }
}

/// Full credit at or above the requirement, half credit one level below,
/// nothing further down. Under-experience never disqualifies a job.
fn experience_component(delta: i32) -> f64 {
    if delta >= 0 {
        1.0
    } else if delta == -1 {
        0.5
    } else {
        0.0
    }
}
