use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

/// Canonicalize a single skill or track token.
///
/// NFKC-folds the input, lower-cases it, trims, and collapses internal
/// whitespace. Idempotent: normalizing an already-normalized token is a
/// no-op. An empty input stays empty; callers drop empties before any set
/// operation.
pub fn normalize_skill(input: &str) -> String {
    input
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize a profile-side skill list into a lookup set, dropping empties.
pub fn normalize_skill_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .map(|s| normalize_skill(s))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Normalize a requirement-side skill list into a deduplicated Vec with
/// encounter order preserved, so matched/missing splits reproduce the
/// posting's own skill order.
pub fn normalize_skills_ordered(skills: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for skill in skills {
        let normalized = normalize_skill(skill);
        if normalized.is_empty() {
            continue;
        }
        if seen.insert(normalized.clone()) {
            result.push(normalized);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize_skill("  React  "), "react");
        assert_eq!(normalize_skill("Node.js"), "node.js");
    }

    #[test]
    fn collapses_internal_whitespace() {
        assert_eq!(normalize_skill("machine   learning"), "machine learning");
        assert_eq!(normalize_skill("rest\t api"), "rest api");
    }

    #[test]
    fn normalizes_fullwidth_input() {
        assert_eq!(normalize_skill("ＡＷＳ"), "aws");
        assert_eq!(normalize_skill("Ｒｅａｃｔ"), "react");
    }

    #[test]
    fn is_idempotent() {
        for raw in ["  Machine   Learning ", "ＤＯＣＫＥＲ", "node.js", ""] {
            let once = normalize_skill(raw);
            assert_eq!(normalize_skill(&once), once);
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_skill(""), "");
        assert_eq!(normalize_skill("   "), "");
    }

    #[test]
    fn set_drops_empties_and_merges_variants() {
        let set = normalize_skill_set(&[
            "React".to_string(),
            "react".to_string(),
            "  ".to_string(),
            "Node.js".to_string(),
        ]);

        assert_eq!(set.len(), 2);
        assert!(set.contains("react"));
        assert!(set.contains("node.js"));
    }

    #[test]
    fn ordered_normalization_keeps_first_occurrence() {
        let ordered = normalize_skills_ordered(&[
            "MongoDB".to_string(),
            "Docker".to_string(),
            "mongodb".to_string(),
            "".to_string(),
            "AWS".to_string(),
        ]);

        assert_eq!(ordered, vec!["mongodb", "docker", "aws"]);
    }
}
