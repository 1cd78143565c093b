//! Character level, always within 1-20.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::loose_i64;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 20;

/// A character level clamped to [1, 20].
///
/// Construction never fails: out-of-range values are clamped and anything
/// unreadable becomes level 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Value", into = "u8")]
pub struct Level(u8);

impl Level {
    pub fn clamped(level: i64) -> Self {
        Self(level.clamp(i64::from(MIN_LEVEL), i64::from(MAX_LEVEL)) as u8)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Self(MIN_LEVEL)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Value> for Level {
    fn from(value: Value) -> Self {
        loose_i64(&value).map(Self::clamped).unwrap_or_default()
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}
