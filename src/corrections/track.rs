use once_cell::sync::Lazy;
use regex::Regex;

static RE_DATA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(data|machine learning|ml|ai|analytics)\b").unwrap());

static RE_DESIGN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(design|ui|ux|figma)\b").unwrap());

static RE_DEVOPS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(devops|infrastructure|cloud|kubernetes|sre)\b").unwrap());

static RE_PRODUCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(product|manager)\b").unwrap());

static RE_MOBILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(mobile|android|ios|flutter)\b").unwrap());

/// Map free job text (title plus description) onto the track vocabulary
/// used by postings. Checked most-specific first; "software development"
/// is the fallback.
pub fn infer_track_from_text(text: &str) -> &'static str {
    let lower = text.to_lowercase();

    if RE_DATA.is_match(&lower) {
        "data science"
    } else if RE_DESIGN.is_match(&lower) {
        "design"
    } else if RE_DEVOPS.is_match(&lower) {
        "devops"
    } else if RE_PRODUCT.is_match(&lower) {
        "product management"
    } else if RE_MOBILE.is_match(&lower) {
        "mobile"
    } else {
        "software development"
    }
}
