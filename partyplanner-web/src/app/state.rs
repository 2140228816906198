use std::rc::Rc;

use partyplanner_core::{BuildParams, Party, PartyPlanner, SlotPosition};
use yew::prelude::*;

/// Edits the UI can request. Anything naming a UID that the index does not
/// know is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerAction {
    OpenSelection(SlotPosition),
    CloseSelection,
    PlaceMonster(String),
    ClearSlot(SlotPosition),
    ToggleAnointment(String),
    SetSpecialization(Option<String>),
    Import(String),
    LoadQuery(String),
}

#[derive(Debug, Clone)]
pub struct PlannerStore {
    pub planner: PartyPlanner,
}

impl PartialEq for PlannerStore {
    fn eq(&self, other: &Self) -> bool {
        self.planner.build_code() == other.planner.build_code()
            && self.planner.selection() == other.planner.selection()
            && self.planner.notice() == other.planner.notice()
            && self.planner.party() == other.planner.party()
    }
}

impl PlannerStore {
    #[must_use]
    pub const fn new(planner: PartyPlanner) -> Self {
        Self { planner }
    }

    /// Apply one action in place.
    pub fn apply(&mut self, action: PlannerAction) {
        let planner = &mut self.planner;
        match action {
            PlannerAction::OpenSelection(position) => {
                let current = planner.slot(position).monster.clone();
                planner.open_selection(position, current);
            }
            PlannerAction::CloseSelection => planner.close_selection(),
            PlannerAction::PlaceMonster(uid) => {
                if let Some(monster) = planner.index().monster(&uid).cloned() {
                    planner.place_monster(monster);
                } else {
                    log::warn!("Ignoring unknown monster {uid}");
                }
            }
            PlannerAction::ClearSlot(position) => planner.clear_slot(position),
            PlannerAction::ToggleAnointment(uid) => {
                if let Some(perk) = planner.index().anointment(&uid).cloned() {
                    planner.toggle_anointment(&perk);
                } else {
                    log::warn!("Ignoring unknown anointment {uid}");
                }
            }
            PlannerAction::SetSpecialization(name) => {
                let spec = name.and_then(|n| planner.index().specialization(&n).cloned());
                planner.set_specialization(spec);
            }
            PlannerAction::Import(text) => {
                planner.import_party_string(&text);
            }
            PlannerAction::LoadQuery(query) => {
                if BuildParams::parse(&query).is_empty() {
                    planner.replace_all_slots(Party::new());
                    planner.set_specialization(None);
                    planner.set_anointments(std::iter::empty());
                } else {
                    planner.load_query(&query);
                }
            }
        }
    }
}

impl Reducible for PlannerStore {
    type Action = PlannerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::create_web_engine;
    use partyplanner_core::Status;

    fn store() -> Rc<PlannerStore> {
        Rc::new(PlannerStore::new(create_web_engine().new_planner()))
    }

    fn first_monster_uid(store: &PlannerStore) -> String {
        store.planner.index().monsters().next().unwrap().uid.clone()
    }

    #[test]
    fn picking_a_monster_fills_the_selected_slot() {
        let store = store();
        let uid = first_monster_uid(&store);
        let pos = SlotPosition::new(2, 1);
        let store = store.reduce(PlannerAction::OpenSelection(pos));
        assert_eq!(store.planner.selection().map(|s| s.position), Some(pos));

        let store = store.reduce(PlannerAction::PlaceMonster(uid.clone()));
        assert_eq!(store.planner.slot(pos).uid(), Some(uid.as_str()));
        assert!(store.planner.selection().is_none());
        assert!(store.planner.is_in_party(&uid));
    }

    #[test]
    fn unknown_uids_leave_state_untouched() {
        let before = store();
        let after = Rc::clone(&before)
            .reduce(PlannerAction::OpenSelection(SlotPosition::new(0, 0)))
            .reduce(PlannerAction::PlaceMonster("Zz99".to_string()))
            .reduce(PlannerAction::ToggleAnointment("zzz".to_string()));
        assert_eq!(after.planner.build_code(), before.planner.build_code());
    }

    #[test]
    fn specialization_and_anointments_flow_into_build_code() {
        let store = store()
            .reduce(PlannerAction::SetSpecialization(Some("Royal".to_string())))
            .reduce(PlannerAction::ToggleAnointment("y02".to_string()));
        assert!(store.planner.build_code().ends_with("&s=RY&a=y02"));

        let store = store.reduce(PlannerAction::SetSpecialization(None));
        assert!(store.planner.specialization().is_none());
        assert!(store.planner.build_code().ends_with("&a=y02"));
    }

    #[test]
    fn import_reports_through_notice() {
        let store = store().reduce(PlannerAction::Import(
            "Specialization: Nobody\nCreature 1: - / - / -".to_string(),
        ));
        assert_eq!(store.planner.notice().status, Status::Error);
    }

    #[test]
    fn load_query_replaces_build() {
        let store = store();
        let uid = first_monster_uid(&store);
        let query = format!("?b={uid}{}", "_".repeat(17));
        let store = store.reduce(PlannerAction::LoadQuery(query));
        assert!(store.planner.is_in_party(&uid));
        assert_eq!(store.planner.notice().status, Status::Success);
    }

    #[test]
    fn load_query_restores_an_earlier_build() {
        let first = store();
        let uid = first_monster_uid(&first);
        let earlier = format!("?b={uid}{}&s=RY", "_".repeat(17));
        let store = first
            .reduce(PlannerAction::LoadQuery(earlier.clone()))
            .reduce(PlannerAction::SetSpecialization(None))
            .reduce(PlannerAction::ClearSlot(SlotPosition::new(0, 0)));
        assert!(!store.planner.is_in_party(&uid));

        let store = store.reduce(PlannerAction::LoadQuery(earlier));
        assert!(store.planner.is_in_party(&uid));
        assert!(store.planner.build_code().ends_with("&s=RY"));
    }

    #[test]
    fn load_query_without_build_clears_the_planner() {
        let first = store();
        let uid = first_monster_uid(&first);
        let store = first
            .reduce(PlannerAction::LoadQuery(format!("?b={uid}{}&s=RY", "_".repeat(17))))
            .reduce(PlannerAction::LoadQuery(String::new()));
        assert!(!store.planner.is_in_party(&uid));
        assert!(store.planner.specialization().is_none());
        assert_eq!(store.planner.build_code(), "_".repeat(18));
    }
}
