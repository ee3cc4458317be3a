/// Default composite weighting: skill coverage dominates, experience and
/// track preference refine. Override via `MatchingConfig`.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    skills: 0.60,
    experience: 0.25,
    track: 0.15,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub skills: f64,
    pub experience: f64,
    pub track: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.track
    }
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}
