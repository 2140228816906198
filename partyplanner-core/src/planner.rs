//! Party state manager.
//!
//! [`PartyPlanner`] owns the build being edited. Every mutation goes through
//! one of its methods, and each of them finishes by re-deriving the member
//! set and the build string, so neither can be observed out of date.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::codec::{self, AnointmentList, BuildParams, DecodedBuild};
use crate::constants::anointment_limit_for;
use crate::data::{Monster, Perk, Specialization};
use crate::import;
use crate::index::ReferenceIndex;
use crate::party::{Party, PartySlot, SlotPosition, members_of};
use crate::report::{Notice, Report};

/// Slot the monster picker is currently targeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub position: SlotPosition,
    /// Monster occupying the slot when the picker opened.
    pub current: Option<Monster>,
}

#[derive(Debug, Clone)]
pub struct PartyPlanner {
    index: Arc<ReferenceIndex>,
    party: Party,
    specialization: Option<Specialization>,
    anointments: AnointmentList,
    members: BTreeSet<String>,
    build_code: String,
    selection: Option<Selection>,
    notice: Notice,
}

impl PartyPlanner {
    /// An empty build.
    #[must_use]
    pub fn new(index: Arc<ReferenceIndex>) -> Self {
        let mut planner = Self {
            index,
            party: Party::new(),
            specialization: None,
            anointments: AnointmentList::new(),
            members: BTreeSet::new(),
            build_code: String::new(),
            selection: None,
            notice: Notice::none(),
        };
        planner.refresh();
        planner
    }

    /// Start from the page's query string (`?b=...&s=..&a=...`).
    #[must_use]
    pub fn from_query(index: Arc<ReferenceIndex>, query: &str) -> Self {
        let mut planner = Self::new(index);
        planner.load_query(query);
        planner
    }

    #[must_use]
    pub fn index(&self) -> &ReferenceIndex {
        &self.index
    }

    #[must_use]
    pub const fn party(&self) -> &Party {
        &self.party
    }

    #[must_use]
    pub fn slot(&self, position: SlotPosition) -> &PartySlot {
        self.party.slot(position)
    }

    #[must_use]
    pub const fn specialization(&self) -> Option<&Specialization> {
        self.specialization.as_ref()
    }

    #[must_use]
    pub fn anointments(&self) -> &[Perk] {
        &self.anointments
    }

    /// UIDs of the monsters currently placed.
    #[must_use]
    pub const fn members(&self) -> &BTreeSet<String> {
        &self.members
    }

    #[must_use]
    pub fn is_in_party(&self, uid: &str) -> bool {
        self.members.contains(uid)
    }

    /// The shareable build string for the current state.
    #[must_use]
    pub fn build_code(&self) -> &str {
        &self.build_code
    }

    #[must_use]
    pub fn share_url(&self, base: &str) -> String {
        codec::share_url(base, &self.build_code)
    }

    #[must_use]
    pub fn anointment_limit(&self) -> usize {
        anointment_limit_for(self.specialization.as_ref().map(|s| s.name.as_str()))
    }

    #[must_use]
    pub fn filled_slot_count(&self) -> usize {
        self.party.filled_count()
    }

    /// Slots carrying a lookup-failure annotation.
    pub fn slot_errors(&self) -> impl Iterator<Item = (SlotPosition, &str)> {
        self.party
            .slots()
            .filter_map(|(pos, slot)| slot.error.as_deref().map(|err| (pos, err)))
    }

    #[must_use]
    pub const fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Message of the most recent decode or import.
    #[must_use]
    pub const fn notice(&self) -> &Notice {
        &self.notice
    }

    /// Point the monster picker at a slot.
    pub fn open_selection(&mut self, position: SlotPosition, current: Option<Monster>) {
        self.selection = Some(Selection { position, current });
    }

    pub fn close_selection(&mut self) {
        self.selection = None;
    }

    /// Place a monster into the slot the picker targets, then close the picker.
    ///
    /// Without an open selection nothing changes.
    pub fn place_monster(&mut self, monster: Monster) {
        let Some(selection) = self.selection.take() else {
            log::warn!("place_monster('{}') without an open selection", monster.uid);
            return;
        };
        self.place_monster_at(selection.position, monster);
    }

    /// # Panics
    /// Panics when `position` lies outside the 6x3 grid.
    pub fn place_monster_at(&mut self, position: SlotPosition, monster: Monster) {
        *self.party.slot_mut(position) = PartySlot::filled(monster);
        self.refresh();
    }

    /// # Panics
    /// Panics when `position` lies outside the 6x3 grid.
    pub fn clear_slot(&mut self, position: SlotPosition) {
        *self.party.slot_mut(position) = PartySlot::empty();
        self.refresh();
    }

    pub fn replace_all_slots(&mut self, party: Party) {
        self.party = party;
        self.refresh();
    }

    /// Select or deselect an anointment.
    ///
    /// Unflagged perks are ignored, as is a new pick once the limit is reached.
    pub fn toggle_anointment(&mut self, perk: &Perk) {
        if !perk.anointment {
            return;
        }
        if let Some(pos) = self.anointments.iter().position(|p| p.name == perk.name) {
            self.anointments.remove(pos);
        } else if self.anointments.len() < self.anointment_limit() {
            self.anointments.push(perk.clone());
        } else {
            return;
        }
        self.refresh();
    }

    /// Replace the whole selection.
    ///
    /// Entries beyond the current limit and repeated names are dropped.
    pub fn set_anointments(&mut self, anointments: impl IntoIterator<Item = Perk>) {
        let mut list = AnointmentList::new();
        for perk in anointments {
            if !list.iter().any(|p| p.name == perk.name) {
                list.push(perk);
            }
        }
        list.truncate(self.anointment_limit());
        self.anointments = list;
        self.refresh();
    }

    /// Change specialization, truncating the selection to the new limit.
    pub fn set_specialization(&mut self, specialization: Option<Specialization>) {
        self.specialization = specialization;
        let limit = self.anointment_limit();
        self.anointments.truncate(limit);
        self.refresh();
    }

    /// Decode `query` into the current state and return its notice.
    ///
    /// Nothing changes when the query holds no build parameters.
    pub fn load_query(&mut self, query: &str) -> Notice {
        let params = BuildParams::parse(query);
        if params.is_empty() {
            self.notice = Notice::none();
            return self.notice.clone();
        }
        let report = codec::decode(&params, &self.index, self.specialization.as_ref());
        self.apply_report(report)
    }

    /// Import a party string exported by the community party tool.
    pub fn import_party_string(&mut self, text: &str) -> Notice {
        let report = import::import_party(text, &self.index);
        self.apply_report(report)
    }

    /// The current build in the party string format.
    #[must_use]
    pub fn export_party_string(&self) -> String {
        import::export_party(
            &self.party,
            self.specialization.as_ref(),
            &self.anointments,
        )
    }

    fn apply_report(&mut self, report: Report<DecodedBuild>) -> Notice {
        let (build, notice) = report.into_parts();
        if let Some(build) = build {
            self.party = build.party;
            self.specialization = build.specialization;
            self.anointments = build.anointments;
            self.selection = None;
            self.refresh();
        }
        log::debug!("build load finished: {:?} {}", notice.status, notice.message);
        self.notice = notice.clone();
        notice
    }

    fn refresh(&mut self) {
        self.members = members_of(&self.party);
        self.build_code = codec::encode(
            &self.party,
            self.specialization.as_ref(),
            &self.anointments,
        );
    }
}
