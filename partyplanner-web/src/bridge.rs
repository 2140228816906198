//! `PlannerHandle`: a JavaScript-facing wrapper over [`PartyPlanner`] for
//! pages that render their own UI.

use partyplanner_core::constants::{PARTY_SIZE, TRAITS_PER_MEMBER};
use partyplanner_core::{Notice, PartyPlanner, SlotPosition};
use wasm_bindgen::prelude::*;

use crate::data::create_web_engine;
use crate::dom;
use crate::snapshot::PlannerSnapshot;

#[wasm_bindgen]
pub struct PlannerHandle {
    planner: PartyPlanner,
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn position(member: usize, trait_slot: usize) -> Result<SlotPosition, JsValue> {
    if member < PARTY_SIZE && trait_slot < TRAITS_PER_MEMBER {
        Ok(SlotPosition::new(member, trait_slot))
    } else {
        Err(JsValue::from_str(&format!(
            "slot ({member}, {trait_slot}) is out of range"
        )))
    }
}

#[wasm_bindgen]
impl PlannerHandle {
    /// Decode `query` (usually `location.search`) into a new planner.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            planner: create_web_engine().planner_from_query(query),
        }
    }

    /// Planner for the page's current address.
    #[wasm_bindgen(js_name = fromLocation)]
    #[must_use]
    pub fn from_location() -> Self {
        Self::new(&dom::location_search())
    }

    #[wasm_bindgen(js_name = buildCode, getter)]
    #[must_use]
    pub fn build_code(&self) -> String {
        self.planner.build_code().to_string()
    }

    #[wasm_bindgen(js_name = shareUrl)]
    #[must_use]
    pub fn share_url(&self) -> String {
        self.planner.share_url(&crate::paths::current_share_base())
    }

    #[wasm_bindgen(js_name = isInParty)]
    #[must_use]
    pub fn is_in_party(&self, uid: &str) -> bool {
        self.planner.is_in_party(uid)
    }

    /// # Errors
    /// Returns an error when the state cannot be serialized.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&PlannerSnapshot::capture(&self.planner))
    }

    /// # Errors
    /// Returns an error for a slot outside the 6x3 grid.
    #[wasm_bindgen(js_name = openSelectionForSlot)]
    pub fn open_selection_for_slot(&mut self, member: usize, trait_slot: usize) -> Result<(), JsValue> {
        let pos = position(member, trait_slot)?;
        let current = self.planner.slot(pos).monster.clone();
        self.planner.open_selection(pos, current);
        Ok(())
    }

    #[wasm_bindgen(js_name = closeSelection)]
    pub fn close_selection(&mut self) {
        self.planner.close_selection();
    }

    /// Place the monster with `uid` into the selected slot.
    ///
    /// Returns `false` when the UID is unknown or no slot is selected.
    #[wasm_bindgen(js_name = placeMonster)]
    pub fn place_monster(&mut self, uid: &str) -> bool {
        let Some(monster) = self.planner.index().monster(uid).cloned() else {
            return false;
        };
        if self.planner.selection().is_none() {
            return false;
        }
        self.planner.place_monster(monster);
        self.sync_url();
        true
    }

    /// # Errors
    /// Returns an error for a slot outside the 6x3 grid.
    #[wasm_bindgen(js_name = clearSlot)]
    pub fn clear_slot(&mut self, member: usize, trait_slot: usize) -> Result<(), JsValue> {
        let pos = position(member, trait_slot)?;
        self.planner.clear_slot(pos);
        self.sync_url();
        Ok(())
    }

    /// Returns `false` for an unknown anointment UID.
    #[wasm_bindgen(js_name = toggleAnointment)]
    pub fn toggle_anointment(&mut self, uid: &str) -> bool {
        let Some(perk) = self.planner.index().anointment(uid).cloned() else {
            return false;
        };
        self.planner.toggle_anointment(&perk);
        self.sync_url();
        true
    }

    /// Pass `undefined` to clear. Returns `false` for an unknown name.
    #[wasm_bindgen(js_name = setSpecialization)]
    pub fn set_specialization(&mut self, name: Option<String>) -> bool {
        let spec = match name {
            Some(name) => match self.planner.index().specialization(&name) {
                Some(spec) => Some(spec.clone()),
                None => return false,
            },
            None => None,
        };
        self.planner.set_specialization(spec);
        self.sync_url();
        true
    }

    /// # Errors
    /// Returns an error when the notice cannot be serialized.
    #[wasm_bindgen(js_name = importFromExternalString)]
    pub fn import_from_external_string(&mut self, text: &str) -> Result<JsValue, JsValue> {
        let notice: Notice = self.planner.import_party_string(text);
        self.sync_url();
        to_js(&notice)
    }

    #[wasm_bindgen(js_name = exportPartyString)]
    #[must_use]
    pub fn export_party_string(&self) -> String {
        self.planner.export_party_string()
    }

    fn sync_url(&self) {
        if let Err(err) = dom::push_build(self.planner.build_code()) {
            dom::console_error(&format!("Failed to update URL: {}", dom::js_error_message(&err)));
        }
    }
}
