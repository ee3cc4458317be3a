use once_cell::sync::Lazy;
use regex::Regex;

use crate::ExperienceLevel;

static RE_SENIOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(senior|lead|principal|architect)\b").unwrap());

static RE_JUNIOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(junior|entry|graduates?|freshers?|interns?)\b").unwrap());

/// Strict parse: canonical level names only, case-insensitive.
pub fn parse_experience_level(input: &str) -> Option<ExperienceLevel> {
    match input.trim().to_lowercase().as_str() {
        "beginner" => Some(ExperienceLevel::Beginner),
        "intermediate" => Some(ExperienceLevel::Intermediate),
        "advanced" => Some(ExperienceLevel::Advanced),
        _ => None,
    }
}

/// Tolerant cleanup for loose store labels ("Entry Level", "Mid Level",
/// "Senior", ...). Canonical names pass through; unrecognized input is None.
pub fn correct_experience_level(input: &str) -> Option<ExperienceLevel> {
    if let Some(level) = parse_experience_level(input) {
        return Some(level);
    }

    let lower = input.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }

    if ["entry", "junior", "graduate", "fresher", "intern"]
        .iter()
        .any(|label| lower.contains(*label))
    {
        return Some(ExperienceLevel::Beginner);
    }
    if lower.contains("senior") || lower.contains("lead") || lower.contains("principal") {
        return Some(ExperienceLevel::Advanced);
    }
    if lower.contains("mid") {
        return Some(ExperienceLevel::Intermediate);
    }

    None
}

/// Infer a level from free text (title plus description). Intermediate is
/// the fallback when nothing signals otherwise.
pub fn infer_experience_from_text(text: &str) -> ExperienceLevel {
    let lower = text.to_lowercase();
    if RE_SENIOR.is_match(&lower) {
        ExperienceLevel::Advanced
    } else if RE_JUNIOR.is_match(&lower) {
        ExperienceLevel::Beginner
    } else {
        ExperienceLevel::Intermediate
    }
}
