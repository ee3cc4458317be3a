pub mod cost;
pub mod experience_level;
pub mod track;

pub use cost::correct_cost;
pub use experience_level::{
    correct_experience_level, infer_experience_from_text, parse_experience_level,
};
pub use track::infer_track_from_text;
