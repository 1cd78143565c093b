//! Value objects - Immutable objects defined by their attributes

mod ability;
mod hit_die;
mod level;

pub use ability::{Ability, AbilityScores, DEFAULT_SCORE, MAX_SCORE, MIN_SCORE};
pub use hit_die::HitDie;
pub use level::{Level, MAX_LEVEL, MIN_LEVEL};
