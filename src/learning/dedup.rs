use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::suggestions::SkillGapSuggestion;
use crate::LearningResource;

/// A resource annotated with the skill it was first recommended for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedResource {
    #[serde(flatten)]
    pub resource: LearningResource,
    pub for_skill: String,
}

/// Flatten suggestion groups into a single list, deduplicated by resource
/// id. Iterates in encounter order and skips ids already seen, so the
/// earliest gap skill wins the attribution and first-appearance order is
/// preserved.
pub fn flatten_suggestions(suggestions: &[SkillGapSuggestion]) -> Vec<RecommendedResource> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut flattened = Vec::new();

    for suggestion in suggestions {
        for resource in &suggestion.resources {
            if seen.insert(resource.id.as_str()) {
                flattened.push(RecommendedResource {
                    resource: resource.clone(),
                    for_skill: suggestion.skill.clone(),
                });
            }
        }
    }

    flattened
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cost;

    fn resource(id: &str) -> LearningResource {
        LearningResource {
            id: id.into(),
            title: format!("course {id}"),
            platform: "youtube".into(),
            cost: Cost::Free,
            related_skills: vec![],
            url: format!("https://example.com/{id}"),
        }
    }

    fn suggestion(skill: &str, ids: &[&str]) -> SkillGapSuggestion {
        SkillGapSuggestion {
            skill: skill.into(),
            resources: ids.iter().map(|id| resource(id)).collect(),
        }
    }

    #[test]
    fn first_skill_wins_the_attribution() {
        let suggestions = vec![
            suggestion("docker", &["r1"]),
            suggestion("aws", &["r1", "r2"]),
        ];

        let flattened = flatten_suggestions(&suggestions);

        assert_eq!(flattened.len(), 2);
        assert_eq!(flattened[0].resource.id, "r1");
        assert_eq!(flattened[0].for_skill, "docker");
        assert_eq!(flattened[1].resource.id, "r2");
        assert_eq!(flattened[1].for_skill, "aws");
    }

    #[test]
    fn output_ids_are_unique() {
        let suggestions = vec![
            suggestion("a", &["r1", "r2"]),
            suggestion("b", &["r2", "r3", "r1"]),
            suggestion("c", &["r3"]),
        ];

        let flattened = flatten_suggestions(&suggestions);

        let mut ids: Vec<&str> = flattened.iter().map(|r| r.resource.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2", "r3"]);
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn empty_groups_contribute_nothing() {
        let suggestions = vec![suggestion("cobol", &[]), suggestion("aws", &["r1"])];

        let flattened = flatten_suggestions(&suggestions);
        assert_eq!(flattened.len(), 1);
        assert_eq!(flattened[0].for_skill, "aws");
    }

    #[test]
    fn serializes_with_flattened_resource_fields() {
        let flattened = flatten_suggestions(&[suggestion("aws", &["r1"])]);
        let json = serde_json::to_value(&flattened[0]).unwrap();

        assert_eq!(json["id"], "r1");
        assert_eq!(json["forSkill"], "aws");
        assert_eq!(json["cost"], "Free");
    }
}
