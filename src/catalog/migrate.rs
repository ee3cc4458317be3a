use std::collections::HashMap;
use std::sync::LazyLock;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use super::document::{parse_job_document, InvalidInputError};
use crate::corrections::{
    correct_experience_level, infer_experience_from_text, infer_track_from_text,
};
use crate::skill_normalizer::normalize_skill;
use crate::{ExperienceLevel, JobPosting};

struct JobTemplate {
    skills: &'static [&'static str],
    level: ExperienceLevel,
    track: &'static str,
}

/// Backfill templates for well-known legacy titles. In the legacy store
/// format the document id is the job title.
static TITLE_TEMPLATES: LazyLock<HashMap<&'static str, JobTemplate>> = LazyLock::new(|| {
    HashMap::from([
        (
            "junior software developer",
            JobTemplate {
                skills: &["javascript", "html", "css", "react", "git"],
                level: ExperienceLevel::Beginner,
                track: "software development",
            },
        ),
        (
            "senior software developer",
            JobTemplate {
                skills: &["javascript", "typescript", "react", "node.js", "system design"],
                level: ExperienceLevel::Advanced,
                track: "software development",
            },
        ),
        (
            "ui ux designer",
            JobTemplate {
                skills: &["figma", "adobe xd", "user research", "prototyping"],
                level: ExperienceLevel::Intermediate,
                track: "design",
            },
        ),
        (
            "full stack developer",
            JobTemplate {
                skills: &["javascript", "react", "node.js", "mongodb", "rest api", "git"],
                level: ExperienceLevel::Intermediate,
                track: "software development",
            },
        ),
        (
            "frontend developer",
            JobTemplate {
                skills: &["javascript", "react", "css", "html", "typescript"],
                level: ExperienceLevel::Intermediate,
                track: "software development",
            },
        ),
        (
            "backend developer",
            JobTemplate {
                skills: &["node.js", "python", "sql", "rest api", "mongodb"],
                level: ExperienceLevel::Intermediate,
                track: "software development",
            },
        ),
        (
            "data scientist",
            JobTemplate {
                skills: &["python", "machine learning", "statistics", "sql", "tensorflow"],
                level: ExperienceLevel::Intermediate,
                track: "data science",
            },
        ),
        (
            "machine learning engineer",
            JobTemplate {
                skills: &["python", "tensorflow", "pytorch", "machine learning", "deep learning"],
                level: ExperienceLevel::Advanced,
                track: "data science",
            },
        ),
        (
            "devops engineer",
            JobTemplate {
                skills: &["docker", "kubernetes", "aws", "ci/cd", "linux", "terraform"],
                level: ExperienceLevel::Intermediate,
                track: "devops",
            },
        ),
        (
            "product manager",
            JobTemplate {
                skills: &["product strategy", "agile", "user research", "data analysis"],
                level: ExperienceLevel::Intermediate,
                track: "product management",
            },
        ),
    ])
});

/// Word-boundary patterns for skills commonly named in legacy free text.
/// Boundaries keep "java" out of "javascript" and "sql" out of "mysql".
static SKILL_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    let patterns: &[(&str, &str)] = &[
        ("javascript", r"\bjavascript\b"),
        ("typescript", r"\btypescript\b"),
        ("python", r"\bpython\b"),
        ("java", r"\bjava\b"),
        ("c++", r"\bc\+\+"),
        ("react", r"\breact\b"),
        ("angular", r"\bangular\b"),
        ("vue", r"\bvue\b"),
        ("node.js", r"\bnode\.js\b"),
        ("django", r"\bdjango\b"),
        ("flask", r"\bflask\b"),
        ("sql", r"\bsql\b"),
        ("mongodb", r"\bmongodb\b"),
        ("postgresql", r"\bpostgresql\b"),
        ("aws", r"\baws\b"),
        ("azure", r"\bazure\b"),
        ("docker", r"\bdocker\b"),
        ("kubernetes", r"\bkubernetes\b"),
        ("git", r"\bgit\b"),
        ("html", r"\bhtml\b"),
        ("css", r"\bcss\b"),
        ("machine learning", r"\bmachine learning\b"),
        ("data analysis", r"\bdata analysis\b"),
        ("agile", r"\bagile\b"),
        ("rest api", r"\brest apis?\b"),
        ("graphql", r"\bgraphql\b"),
        ("figma", r"\bfigma\b"),
        ("linux", r"\blinux\b"),
        ("terraform", r"\bterraform\b"),
        ("tensorflow", r"\btensorflow\b"),
    ];

    patterns
        .iter()
        .map(|(skill, pattern)| (*skill, Regex::new(pattern).unwrap()))
        .collect()
});

/// Skills named in free text, in pattern-table order. Falls back to a
/// generic set when nothing concrete is found, so a migrated posting is
/// never left without requirements.
pub fn extract_skills_from_text(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let found: Vec<String> = SKILL_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(&lower))
        .map(|(skill, _)| (*skill).to_string())
        .collect();

    if found.is_empty() {
        vec![
            "programming".to_string(),
            "problem solving".to_string(),
            "teamwork".to_string(),
        ]
    } else {
        found
    }
}

fn has_field(doc: &Value, field: &str) -> bool {
    matches!(doc.get(field), Some(value) if !value.is_null())
}

/// Whether a job document predates the matching fields.
pub fn needs_migration(doc: &Value) -> bool {
    !(has_field(doc, "skillsRequired")
        && has_field(doc, "experienceRequired")
        && has_field(doc, "track"))
}

/// Build a strict posting from a legacy job document. Well-known titles
/// take their template; anything else derives skills, level, and track
/// from the title and the free-text body ("Job Details", or "JobDetails"
/// in even older documents). Migration backfills, it does not reject.
pub fn migrate_legacy_job(id: &str, doc: &Value) -> JobPosting {
    let title = id;

    if let Some(template) = TITLE_TEMPLATES.get(normalize_skill(title).as_str()) {
        debug!(job = id, "migrated legacy job from title template");
        return JobPosting {
            id: id.to_string(),
            skills_required: template.skills.iter().map(|s| (*s).to_string()).collect(),
            experience_required: template.level,
            track: template.track.to_string(),
        };
    }

    let description = doc
        .get("Job Details")
        .and_then(Value::as_str)
        .or_else(|| doc.get("JobDetails").and_then(Value::as_str))
        .unwrap_or("");
    let text = format!("{title} {description}");

    // Honor a loose label when the legacy document carries one.
    let experience_required = doc
        .get("experienceRequired")
        .and_then(Value::as_str)
        .and_then(correct_experience_level)
        .unwrap_or_else(|| infer_experience_from_text(&text));

    let track = doc
        .get("track")
        .and_then(Value::as_str)
        .map(normalize_skill)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| infer_track_from_text(&text).to_string());

    debug!(
        job = id,
        level = experience_required.as_ref(),
        track = %track,
        "migrated legacy job from text heuristics"
    );
    JobPosting {
        id: id.to_string(),
        skills_required: extract_skills_from_text(&text),
        experience_required,
        track,
    }
}

/// Single entry point for job documents of unknown vintage: migrated
/// documents parse strictly, legacy ones are backfilled.
pub fn load_job_document(id: &str, doc: &Value) -> Result<JobPosting, InvalidInputError> {
    if needs_migration(doc) {
        Ok(migrate_legacy_job(id, doc))
    } else {
        parse_job_document(id, doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detects_documents_needing_migration() {
        let migrated = json!({
            "skillsRequired": ["react"],
            "experienceRequired": "beginner",
            "track": "frontend"
        });
        let legacy = json!({ "Job Details": "We build web apps", "Company Name": "Acme" });

        assert!(!needs_migration(&migrated));
        assert!(needs_migration(&legacy));
    }

    #[test]
    fn well_known_titles_use_their_template() {
        let doc = json!({ "Job Details": "irrelevant" });
        let job = migrate_legacy_job("Senior Software Developer", &doc);

        assert_eq!(job.experience_required, ExperienceLevel::Advanced);
        assert_eq!(job.track, "software development");
        assert!(job.skills_required.contains(&"typescript".to_string()));
    }

    #[test]
    fn unknown_titles_derive_from_text() {
        let doc = json!({
            "Job Details": "Manage Kubernetes clusters on AWS with Docker and Terraform."
        });
        let job = migrate_legacy_job("Platform Engineer", &doc);

        assert_eq!(job.track, "devops");
        assert_eq!(job.experience_required, ExperienceLevel::Intermediate);
        for skill in ["kubernetes", "aws", "docker", "terraform"] {
            assert!(job.skills_required.contains(&skill.to_string()));
        }
    }

    #[test]
    fn loose_experience_labels_are_honored() {
        let doc = json!({
            "Job Details": "Ship features with React.",
            "experienceRequired": "Entry Level"
        });
        let job = migrate_legacy_job("Web Developer", &doc);

        assert_eq!(job.experience_required, ExperienceLevel::Beginner);
    }

    #[test]
    fn skill_extraction_respects_word_boundaries() {
        let skills = extract_skills_from_text("Deep JavaScript and SQL experience");

        assert!(skills.contains(&"javascript".to_string()));
        assert!(skills.contains(&"sql".to_string()));
        // "javascript" must not also read as "java"; "mysql" would not be "sql".
        assert!(!skills.contains(&"java".to_string()));
    }

    #[test]
    fn empty_extraction_falls_back_to_generic_skills() {
        let skills = extract_skills_from_text("Exciting opportunity at a fast-growing startup");
        assert_eq!(skills, vec!["programming", "problem solving", "teamwork"]);
    }

    #[test]
    fn load_routes_by_document_vintage() {
        let migrated = json!({
            "skillsRequired": ["react"],
            "experienceRequired": "beginner",
            "track": "frontend"
        });
        let legacy = json!({ "Job Details": "Build dashboards with React and CSS" });

        let strict = load_job_document("job-1", &migrated).unwrap();
        assert_eq!(strict.skills_required, vec!["react"]);

        let backfilled = load_job_document("Dashboard Developer", &legacy).unwrap();
        assert!(backfilled.skills_required.contains(&"react".to_string()));
        assert!(backfilled.skills_required.contains(&"css".to_string()));
    }

    #[test]
    fn migrated_but_malformed_documents_still_fail_strict_parse() {
        let doc = json!({
            "skillsRequired": ["react"],
            "experienceRequired": "Mid Level",
            "track": "frontend"
        });

        assert!(load_job_document("job-1", &doc).is_err());
    }
}
