//! Plain serializable view of a [`PartyPlanner`] for the JavaScript side.

use partyplanner_core::{Monster, Notice, PartyPlanner, Perk, SlotPosition};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotView {
    pub member: usize,
    pub trait_slot: usize,
    pub monster: Option<Monster>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionView {
    pub member: usize,
    pub trait_slot: usize,
    pub current: Option<Monster>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerSnapshot {
    pub slots: Vec<SlotView>,
    pub specialization: Option<String>,
    pub anointments: Vec<Perk>,
    pub anointment_limit: usize,
    pub members: Vec<String>,
    pub build_code: String,
    pub selection: Option<SelectionView>,
    pub notice: Notice,
}

impl PlannerSnapshot {
    #[must_use]
    pub fn capture(planner: &PartyPlanner) -> Self {
        let slots = planner
            .party()
            .slots()
            .map(|(SlotPosition { member, trait_slot }, slot)| SlotView {
                member,
                trait_slot,
                monster: slot.monster.clone(),
                error: slot.error.clone(),
            })
            .collect();
        Self {
            slots,
            specialization: planner.specialization().map(|s| s.name.clone()),
            anointments: planner.anointments().to_vec(),
            anointment_limit: planner.anointment_limit(),
            members: planner.members().iter().cloned().collect(),
            build_code: planner.build_code().to_string(),
            selection: planner.selection().map(|sel| SelectionView {
                member: sel.position.member,
                trait_slot: sel.position.trait_slot,
                current: sel.current.clone(),
            }),
            notice: planner.notice().clone(),
        }
    }
}
