use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::scoring::{score_job, MatchResult, MatchingConfig};
use crate::learning::{flatten_suggestions, match_resources, RecommendedResource};
use crate::{JobPosting, LearningResource, UserProfile};

/// Ranked matches plus the aggregated skill gap they imply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedMatches {
    pub matches: Vec<MatchResult>,
    pub skill_gap: Vec<String>,
}

/// Full recommendation output: ranked matches, the gap they imply, and the
/// deduplicated resources addressing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningRecommendation {
    pub matches: Vec<MatchResult>,
    pub skill_gap: Vec<String>,
    pub resources: Vec<RecommendedResource>,
}

pub struct MatchEngine {
    config: MatchingConfig,
}

impl MatchEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(MatchingConfig::from_env())
    }

    /// Score every job, rank descending, keep the configured top slice and
    /// aggregate its missing skills. Ties keep catalog order; an empty
    /// catalog yields an empty result.
    #[instrument(skip_all, fields(jobs = jobs.len(), top = self.config.top_matches))]
    pub fn rank_jobs(&self, profile: &UserProfile, jobs: &[JobPosting]) -> RankedMatches {
        let mut matches: Vec<MatchResult> = jobs
            .iter()
            .map(|job| score_job(profile, job, &self.config.weights))
            .collect();

        // Stable sort: equal scores keep their catalog order.
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(self.config.top_matches);

        let skill_gap = aggregate_skill_gap(&matches);
        debug!(
            selected = matches.len(),
            gap = skill_gap.len(),
            "ranked job catalog"
        );

        RankedMatches { matches, skill_gap }
    }

    /// Rank the catalog, derive the skill gap, and map it onto the
    /// resource catalog; the end-to-end recommendation flow.
    #[instrument(skip_all, fields(jobs = jobs.len(), resources = resources.len()))]
    pub fn recommend_learning(
        &self,
        profile: &UserProfile,
        jobs: &[JobPosting],
        resources: &[LearningResource],
    ) -> LearningRecommendation {
        let RankedMatches { matches, skill_gap } = self.rank_jobs(profile, jobs);
        let suggestions = match_resources(&skill_gap, resources);
        let resources = flatten_suggestions(&suggestions);

        LearningRecommendation {
            matches,
            skill_gap,
            resources,
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(MatchingConfig::default())
    }
}

/// Union of missing skills across the ranked matches; the first job that
/// misses a skill fixes its position in the gap.
fn aggregate_skill_gap(matches: &[MatchResult]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut gap = Vec::new();
    for result in matches {
        for skill in &result.missing_skills {
            if seen.insert(skill.clone()) {
                gap.push(skill.clone());
            }
        }
    }
    gap
}
