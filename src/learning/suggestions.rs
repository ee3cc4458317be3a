use serde::{Deserialize, Serialize};

use crate::skill_normalizer::normalize_skill;
use crate::LearningResource;

/// Resources addressing one missing skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapSuggestion {
    pub skill: String,
    pub resources: Vec<LearningResource>,
}

/// One suggestion group per gap skill, in gap order, holding every catalog
/// resource whose related skills cover it. A skill nothing covers still
/// gets its (empty) group so callers can render or filter it. Resource
/// order within a group is catalog order.
pub fn match_resources(gap: &[String], catalog: &[LearningResource]) -> Vec<SkillGapSuggestion> {
    gap.iter()
        .map(|skill| {
            let needle = normalize_skill(skill);
            let resources = catalog
                .iter()
                .filter(|resource| {
                    resource
                        .related_skills
                        .iter()
                        .any(|related| normalize_skill(related) == needle)
                })
                .cloned()
                .collect();

            SkillGapSuggestion {
                skill: skill.clone(),
                resources,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cost;

    fn resource(id: &str, skills: &[&str]) -> LearningResource {
        LearningResource {
            id: id.into(),
            title: format!("course {id}"),
            platform: "coursera".into(),
            cost: Cost::Paid,
            related_skills: skills.iter().map(|s| (*s).to_string()).collect(),
            url: format!("https://example.com/{id}"),
        }
    }

    #[test]
    fn groups_resources_per_gap_skill_in_gap_order() {
        let gap = vec!["docker".to_string(), "aws".to_string()];
        let catalog = vec![
            resource("r1", &["aws", "terraform"]),
            resource("r2", &["docker"]),
            resource("r3", &["docker", "aws"]),
        ];

        let suggestions = match_resources(&gap, &catalog);

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].skill, "docker");
        let docker_ids: Vec<&str> = suggestions[0]
            .resources
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(docker_ids, vec!["r2", "r3"]);

        assert_eq!(suggestions[1].skill, "aws");
        let aws_ids: Vec<&str> = suggestions[1]
            .resources
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(aws_ids, vec!["r1", "r3"]);
    }

    #[test]
    fn uncovered_skill_keeps_an_empty_group() {
        let gap = vec!["cobol".to_string()];
        let catalog = vec![resource("r1", &["aws"])];

        let suggestions = match_resources(&gap, &catalog);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].skill, "cobol");
        assert!(suggestions[0].resources.is_empty());
    }

    #[test]
    fn related_skill_comparison_is_normalized() {
        let gap = vec!["machine learning".to_string()];
        let catalog = vec![resource("r1", &["Machine   Learning"])];

        let suggestions = match_resources(&gap, &catalog);
        assert_eq!(suggestions[0].resources.len(), 1);
    }

    #[test]
    fn empty_gap_produces_no_suggestions() {
        let catalog = vec![resource("r1", &["aws"])];
        assert!(match_resources(&[], &catalog).is_empty());
    }
}
