//! Hit die face size.

use std::fmt;
use std::sync::OnceLock;

use serde_json::Value;

static HIT_DIE_REGEX: OnceLock<Option<regex_lite::Regex>> = OnceLock::new();

fn hit_die_regex() -> Option<&'static regex_lite::Regex> {
    HIT_DIE_REGEX
        .get_or_init(|| regex_lite::Regex::new(r"(?i)^\s*(?:(?:\d+\s*)?d\s*)?(\d+)\s*$").ok())
        .as_ref()
}

/// One of the standard hit die faces: d4, d6, d8, d10 or d12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HitDie(u8);

impl HitDie {
    pub const FACES: [u8; 5] = [4, 6, 8, 10, 12];

    pub const D8: HitDie = HitDie(8);

    /// Accepts only the standard faces.
    pub fn from_faces(faces: i64) -> Option<Self> {
        Self::FACES
            .iter()
            .copied()
            .find(|f| i64::from(*f) == faces)
            .map(Self)
    }

    /// Reads `10`, `"10"`, `"d10"` or `"1d10"`.
    pub fn parse(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && f.abs() <= 100.0)
                        .map(|f| f as i64)
                })
                .and_then(Self::from_faces),
            Value::String(s) => {
                let caps = hit_die_regex()?.captures(s)?;
                let faces = caps.get(1)?.as_str().parse::<i64>().ok()?;
                Self::from_faces(faces)
            }
            _ => None,
        }
    }

    pub fn faces(&self) -> u8 {
        self.0
    }

    /// Average roll, `(faces + 1) / 2`.
    pub fn average(&self) -> f64 {
        (f64::from(self.0) + 1.0) / 2.0
    }
}

impl Default for HitDie {
    fn default() -> Self {
        Self::D8
    }
}

impl fmt::Display for HitDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.0)
    }
}
