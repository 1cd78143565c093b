//! Hit point tracking: reconciliation with persisted values and the
//! damage / heal / temp operations.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Whether the HP editor panel is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HpEditorState {
    #[default]
    Closed,
    OpenForEdit,
}

impl HpEditorState {
    /// Closed -> OpenForEdit. Opening an open editor is a no-op.
    pub fn open(self) -> Self {
        Self::OpenForEdit
    }

    /// OpenForEdit -> Closed. Closing a closed editor is a no-op.
    pub fn close(self) -> Self {
        Self::Closed
    }

    pub fn is_open(self) -> bool {
        self == Self::OpenForEdit
    }
}

/// Current, temporary and maximum hit points for one character.
///
/// Operations keep `current` within `[0, max]` and `temp` non-negative.
/// A reconciled value above a since-reduced maximum is shown as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitPoints {
    current: i32,
    temp: i32,
    max: i32,
}

impl HitPoints {
    /// Full health, no temporary hit points.
    pub fn full(max: i32) -> Self {
        let max = max.max(1);
        Self {
            current: max,
            temp: 0,
            max,
        }
    }

    /// Combines the computed maximum with whatever was persisted.
    ///
    /// Missing current HP starts at the maximum. Stored values are never
    /// re-clamped to a changed maximum; only negatives are floored at 0.
    pub fn reconcile(max: i32, stored_current: Option<i64>, stored_temp: Option<i64>) -> Self {
        let full = Self::full(max);
        Self {
            current: stored_current.map(non_negative).unwrap_or(full.max),
            temp: stored_temp.map(non_negative).unwrap_or(0),
            max: full.max,
        }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn temp(&self) -> i32 {
        self.temp
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Temp HP absorbs first, the remainder comes off current HP (floored at 0).
    pub fn damage(&mut self, amount: i64) -> Result<(), DomainError> {
        let amount = positive(amount, "damage")?;
        let absorbed = amount.min(self.temp);
        self.temp -= absorbed;
        self.current = (self.current - (amount - absorbed)).max(0);
        Ok(())
    }

    /// Adds to current HP, capped at the maximum. Temp HP is untouched.
    pub fn heal(&mut self, amount: i64) -> Result<(), DomainError> {
        let amount = positive(amount, "heal")?;
        let healed = self.current.saturating_add(amount).min(self.max);
        // never lowers a stored value that sits above a reduced maximum
        self.current = self.current.max(healed);
        Ok(())
    }

    /// Replaces temp HP.
    pub fn set_temp(&mut self, amount: i64) -> Result<(), DomainError> {
        if amount < 0 {
            return Err(DomainError::validation(format!(
                "temporary hit points cannot be negative (got {})",
                amount
            )));
        }
        self.temp = saturate(amount);
        Ok(())
    }

    /// `"18 / 20"`, or `"18 / 20 (+3 temp)"` when temp HP is up.
    pub fn summary(&self) -> String {
        if self.temp > 0 {
            format!("{} / {} (+{} temp)", self.current, self.max, self.temp)
        } else {
            format!("{} / {}", self.current, self.max)
        }
    }
}

/// Parses user-typed HP input. Anything that is not a whole number is
/// rejected.
pub fn parse_amount(input: &str) -> Result<i64, DomainError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| DomainError::parse(format!("not a whole number: {:?}", trimmed)))
}

fn positive(amount: i64, operation: &str) -> Result<i32, DomainError> {
    if amount <= 0 {
        return Err(DomainError::validation(format!(
            "{} amount must be positive (got {})",
            operation, amount
        )));
    }
    Ok(saturate(amount))
}

fn non_negative(value: i64) -> i32 {
    saturate(value.max(0))
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_absorbs_damage_first() {
        let mut hp = HitPoints::reconcile(20, Some(20), Some(3));
        hp.damage(5).unwrap();
        assert_eq!(hp.temp(), 0);
        assert_eq!(hp.current(), 18);
    }

    #[test]
    fn damage_partially_absorbed_leaves_temp() {
        let mut hp = HitPoints::reconcile(20, Some(10), Some(8));
        hp.damage(5).unwrap();
        assert_eq!(hp.temp(), 3);
        assert_eq!(hp.current(), 10);
    }

    #[test]
    fn damage_floors_at_zero() {
        let mut hp = HitPoints::reconcile(20, Some(4), None);
        hp.damage(50).unwrap();
        assert_eq!(hp.current(), 0);
    }

    #[test]
    fn heal_caps_at_max_and_leaves_temp() {
        let mut hp = HitPoints::reconcile(20, Some(5), Some(2));
        hp.heal(100).unwrap();
        assert_eq!(hp.current(), 20);
        assert_eq!(hp.temp(), 2);
    }

    #[test]
    fn heal_does_not_lower_value_above_reduced_max() {
        let mut hp = HitPoints::reconcile(10, Some(14), None);
        assert_eq!(hp.current(), 14);
        hp.heal(3).unwrap();
        assert_eq!(hp.current(), 14);
    }

    #[test]
    fn invalid_amounts_change_nothing() {
        let mut hp = HitPoints::reconcile(20, Some(12), Some(1));
        let before = hp;
        assert!(hp.damage(0).is_err());
        assert!(hp.damage(-4).is_err());
        assert!(hp.heal(0).is_err());
        assert!(hp.set_temp(-1).is_err());
        assert_eq!(hp, before);
    }

    #[test]
    fn set_temp_replaces() {
        let mut hp = HitPoints::full(12);
        hp.set_temp(5).unwrap();
        hp.set_temp(2).unwrap();
        assert_eq!(hp.temp(), 2);
        hp.set_temp(0).unwrap();
        assert_eq!(hp.temp(), 0);
    }

    #[test]
    fn reconcile_defaults_and_floors() {
        let fresh = HitPoints::reconcile(17, None, None);
        assert_eq!((fresh.current(), fresh.temp(), fresh.max()), (17, 0, 17));

        let negative = HitPoints::reconcile(17, Some(-3), Some(-1));
        assert_eq!((negative.current(), negative.temp()), (0, 0));

        let kept = HitPoints::reconcile(30, Some(9), Some(4));
        assert_eq!((kept.current(), kept.temp(), kept.max()), (9, 4, 30));
    }

    #[test]
    fn parse_amount_rejects_non_numbers() {
        assert_eq!(parse_amount(" 7 ").unwrap(), 7);
        assert_eq!(parse_amount("-2").unwrap(), -2);
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("3.5").is_err());
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn summary_mentions_temp_only_when_present() {
        let mut hp = HitPoints::reconcile(20, Some(18), None);
        assert_eq!(hp.summary(), "18 / 20");
        hp.set_temp(3).unwrap();
        assert_eq!(hp.summary(), "18 / 20 (+3 temp)");
    }

    #[test]
    fn editor_transitions() {
        let editor = HpEditorState::default();
        assert!(!editor.is_open());
        let editor = editor.open();
        assert!(editor.is_open());
        assert_eq!(editor.open(), HpEditorState::OpenForEdit);
        let editor = editor.close();
        assert_eq!(editor.close(), HpEditorState::Closed);
    }
}
