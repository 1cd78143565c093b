//! An open character sheet and the mutations a user can make on it.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Map, Value};

use brewsheet_domain::{
    parse_amount, CharacterId, DerivedSheet, DomainError, HitPoints, HpEditorState, SheetSection,
    Tab, TabGate,
};

use crate::infrastructure::ports::{NotificationPort, Severity};

use super::local_state::{
    LocalStateStore, ACTIVE_TAB_KEY, CURRENT_HP_KEY, RESERVED_KEYS, TEMP_HP_KEY,
};

/// Everything the sheet shows at one moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetView {
    pub sheet: DerivedSheet,
    pub hit_points: HitPoints,
    pub hp_summary: String,
    pub hp_editor: HpEditorState,
    pub tabs: Vec<Tab>,
    pub active_tab: SheetSection,
    pub toggles: BTreeMap<String, bool>,
}

/// A loaded sheet. Owns the HP tracker, the tab gate and a handle to local
/// state; every successful mutation is persisted before it returns. HP
/// changes are confirmed through the notification sink.
pub struct SheetSession {
    sheet: DerivedSheet,
    hit_points: HitPoints,
    hp_editor: HpEditorState,
    tabs: TabGate,
    toggles: BTreeMap<String, bool>,
    local_state: LocalStateStore,
    notifier: Arc<dyn NotificationPort>,
}

impl SheetSession {
    /// Reconciles stored state with a freshly derived sheet.
    ///
    /// Current HP is written back only when nothing was stored yet.
    pub(crate) fn open(
        sheet: DerivedSheet,
        local_state: LocalStateStore,
        notifier: Arc<dyn NotificationPort>,
    ) -> Self {
        let character_id = sheet.character_id;
        let stored = local_state.read(character_id);

        let hit_points =
            HitPoints::reconcile(sheet.combat.max_hp, stored.current_hp(), stored.temp_hp());
        if stored.current_hp().is_none() {
            local_state.write(character_id, hp_patch(&hit_points));
        }

        let tabs = TabGate::new(sheet.presence(), stored.active_tab());

        Self {
            toggles: stored.toggles(),
            sheet,
            hit_points,
            hp_editor: HpEditorState::default(),
            tabs,
            local_state,
            notifier,
        }
    }

    pub fn character_id(&self) -> CharacterId {
        self.sheet.character_id
    }

    pub fn sheet(&self) -> &DerivedSheet {
        &self.sheet
    }

    pub fn hit_points(&self) -> HitPoints {
        self.hit_points
    }

    pub fn hp_editor(&self) -> HpEditorState {
        self.hp_editor
    }

    pub fn tabs(&self) -> &TabGate {
        &self.tabs
    }

    pub fn toggle(&self, key: &str) -> bool {
        self.toggles.get(key).copied().unwrap_or(false)
    }

    pub fn view(&self) -> SheetView {
        SheetView {
            sheet: self.sheet.clone(),
            hit_points: self.hit_points,
            hp_summary: self.hit_points.summary(),
            hp_editor: self.hp_editor,
            tabs: self.tabs.tabs(),
            active_tab: self.tabs.active(),
            toggles: self.toggles.clone(),
        }
    }

    // =========================================================================
    // Hit points
    // =========================================================================

    /// Applies typed damage. Invalid input is ignored.
    pub fn damage(&mut self, input: &str) -> HitPoints {
        self.apply_hp("damage", input, HitPoints::damage)
    }

    /// Applies typed healing. Invalid input is ignored.
    pub fn heal(&mut self, input: &str) -> HitPoints {
        self.apply_hp("heal", input, HitPoints::heal)
    }

    /// Replaces temp HP with the typed value. Invalid input is ignored.
    pub fn set_temp_hp(&mut self, input: &str) -> HitPoints {
        self.apply_hp("set_temp_hp", input, HitPoints::set_temp)
    }

    pub fn open_hp_editor(&mut self) {
        self.hp_editor = self.hp_editor.open();
    }

    pub fn close_hp_editor(&mut self) {
        self.hp_editor = self.hp_editor.close();
    }

    fn apply_hp(
        &mut self,
        operation: &'static str,
        input: &str,
        apply: fn(&mut HitPoints, i64) -> Result<(), DomainError>,
    ) -> HitPoints {
        let mut updated = self.hit_points;
        let result = parse_amount(input).and_then(|amount| apply(&mut updated, amount));
        match result {
            Ok(()) => {
                self.hit_points = updated;
                self.persist(hp_patch(&updated));
                self.notifier.notify(
                    &format!("Hit points: {}", updated.summary()),
                    Severity::Info,
                );
            }
            Err(e) => {
                tracing::debug!(
                    character_id = %self.character_id(),
                    operation,
                    input,
                    error = %e,
                    "Ignoring HP input"
                );
            }
        }
        self.hit_points
    }

    // =========================================================================
    // Toggles and tabs
    // =========================================================================

    /// Stores a boolean toggle. Reserved state keys are refused.
    pub fn set_toggle(&mut self, key: &str, value: bool) -> Result<(), DomainError> {
        let key = key.trim();
        if key.is_empty() || RESERVED_KEYS.contains(&key) {
            return Err(DomainError::validation(format!(
                "'{}' cannot be used as a toggle",
                key
            )));
        }
        self.toggles.insert(key.to_string(), value);
        let mut patch = Map::new();
        patch.insert(key.to_string(), Value::Bool(value));
        self.persist(patch);
        Ok(())
    }

    /// Activates a tab by name. Unknown or hidden tabs leave state unchanged.
    pub fn select_tab(&mut self, name: &str) -> Result<SheetSection, DomainError> {
        let outcome = name
            .parse::<SheetSection>()
            .and_then(|section| self.tabs.select(section).map(|()| section));
        match outcome {
            Ok(section) => {
                let mut patch = Map::new();
                patch.insert(ACTIVE_TAB_KEY.to_string(), json!(section.as_str()));
                self.persist(patch);
                Ok(section)
            }
            Err(e) => {
                tracing::debug!(
                    character_id = %self.character_id(),
                    tab = name,
                    error = %e,
                    "Tab selection rejected"
                );
                Err(e)
            }
        }
    }

    fn persist(&mut self, patch: Map<String, Value>) {
        self.local_state.write(self.character_id(), patch);
        self.tabs.refresh(self.sheet.presence());
    }
}

fn hp_patch(hit_points: &HitPoints) -> Map<String, Value> {
    let mut patch = Map::new();
    patch.insert(CURRENT_HP_KEY.to_string(), json!(hit_points.current()));
    patch.insert(TEMP_HP_KEY.to_string(), json!(hit_points.temp()));
    patch
}
