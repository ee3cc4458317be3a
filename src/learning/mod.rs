pub mod dedup;
pub mod suggestions;

pub use dedup::{flatten_suggestions, RecommendedResource};
pub use suggestions::{match_resources, SkillGapSuggestion};
