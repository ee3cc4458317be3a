pub mod document;
pub mod migrate;

pub use document::{
    parse_job_document, parse_resource_document, parse_user_profile, InvalidInputError,
};
pub use migrate::{
    extract_skills_from_text, load_job_document, migrate_legacy_job, needs_migration,
};
