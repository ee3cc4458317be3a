pub mod pipeline;
pub mod scoring;
pub mod weights;

pub use pipeline::{LearningRecommendation, MatchEngine, RankedMatches};
pub use scoring::{score_job, MatchResult, MatchingConfig};
pub use weights::{Weights, DEFAULT_WEIGHTS};
