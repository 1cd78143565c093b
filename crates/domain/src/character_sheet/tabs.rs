//! Sheet sections and which of them get a tab.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A sheet section, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetSection {
    Actions,
    Spells,
    Inventory,
    Features,
    Background,
    Proficiencies,
    Pets,
    Notes,
}

impl SheetSection {
    pub const ALL: [SheetSection; 8] = [
        SheetSection::Actions,
        SheetSection::Spells,
        SheetSection::Inventory,
        SheetSection::Features,
        SheetSection::Background,
        SheetSection::Proficiencies,
        SheetSection::Pets,
        SheetSection::Notes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actions => "actions",
            Self::Spells => "spells",
            Self::Inventory => "inventory",
            Self::Features => "features",
            Self::Background => "background",
            Self::Proficiencies => "proficiencies",
            Self::Pets => "pets",
            Self::Notes => "notes",
        }
    }
}

impl fmt::Display for SheetSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SheetSection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::parse(format!("unknown sheet section: {}", wanted)))
    }
}

/// Which sections have something to show. Actions always do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionPresence {
    pub spells: bool,
    pub inventory: bool,
    pub features: bool,
    pub background: bool,
    pub proficiencies: bool,
    pub pets: bool,
    pub notes: bool,
}

impl SectionPresence {
    pub fn has_content(&self, section: SheetSection) -> bool {
        match section {
            SheetSection::Actions => true,
            SheetSection::Spells => self.spells,
            SheetSection::Inventory => self.inventory,
            SheetSection::Features => self.features,
            SheetSection::Background => self.background,
            SheetSection::Proficiencies => self.proficiencies,
            SheetSection::Pets => self.pets,
            SheetSection::Notes => self.notes,
        }
    }
}

/// One navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub section: SheetSection,
    pub visible: bool,
    pub active: bool,
}

/// Tab visibility plus the single active tab.
///
/// The active tab is always visible: whenever presence changes and hides it,
/// the first visible tab takes over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGate {
    presence: SectionPresence,
    active: SheetSection,
}

impl TabGate {
    /// Builds the gate, honoring `preferred` only if that section is visible.
    pub fn new(presence: SectionPresence, preferred: Option<SheetSection>) -> Self {
        let mut gate = Self {
            presence,
            active: SheetSection::Actions,
        };
        gate.active = preferred
            .filter(|section| gate.is_visible(*section))
            .unwrap_or_else(|| gate.first_visible());
        gate
    }

    /// Re-evaluates visibility after the sheet changed.
    pub fn refresh(&mut self, presence: SectionPresence) {
        self.presence = presence;
        if !self.is_visible(self.active) {
            self.active = self.first_visible();
        }
    }

    /// Activates a visible tab. Hidden tabs are rejected and nothing changes.
    pub fn select(&mut self, section: SheetSection) -> Result<(), DomainError> {
        if !self.is_visible(section) {
            return Err(DomainError::invalid_state_transition(format!(
                "cannot select hidden tab '{}'",
                section
            )));
        }
        self.active = section;
        Ok(())
    }

    pub fn active(&self) -> SheetSection {
        self.active
    }

    pub fn is_visible(&self, section: SheetSection) -> bool {
        self.presence.has_content(section)
    }

    pub fn visible_sections(&self) -> Vec<SheetSection> {
        SheetSection::ALL
            .into_iter()
            .filter(|section| self.is_visible(*section))
            .collect()
    }

    pub fn tabs(&self) -> Vec<Tab> {
        SheetSection::ALL
            .into_iter()
            .map(|section| Tab {
                section,
                visible: self.is_visible(section),
                active: section == self.active,
            })
            .collect()
    }

    fn first_visible(&self) -> SheetSection {
        SheetSection::ALL
            .into_iter()
            .find(|section| self.is_visible(*section))
            .unwrap_or(SheetSection::Actions)
    }
}
