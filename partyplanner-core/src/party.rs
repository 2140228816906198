//! The fixed 6x3 party grid.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::constants::{PARTY_SIZE, TRAITS_PER_MEMBER};
use crate::data::Monster;

/// Address of one slot: party member (0..6) and trait slot (0..3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotPosition {
    pub member: usize,
    pub trait_slot: usize,
}

impl SlotPosition {
    #[must_use]
    pub const fn new(member: usize, trait_slot: usize) -> Self {
        Self { member, trait_slot }
    }

    /// Row-major position of the `n`th slot.
    #[must_use]
    pub const fn from_ordinal(n: usize) -> Self {
        Self::new(n / TRAITS_PER_MEMBER, n % TRAITS_PER_MEMBER)
    }

    #[must_use]
    pub const fn ordinal(self) -> usize {
        self.member * TRAITS_PER_MEMBER + self.trait_slot
    }
}

/// One cell of the grid.
///
/// `error` is only set by decoding/importing when the referenced trait
/// could not be resolved; such a slot never carries a monster.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartySlot {
    pub monster: Option<Monster>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PartySlot {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            monster: None,
            error: None,
        }
    }

    #[must_use]
    pub const fn filled(monster: Monster) -> Self {
        Self {
            monster: Some(monster),
            error: None,
        }
    }

    /// An empty slot annotated with a lookup failure.
    #[must_use]
    pub fn missing(message: impl Into<String>) -> Self {
        Self {
            monster: None,
            error: Some(message.into()),
        }
    }

    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.monster.as_ref().map(|m| m.uid.as_str())
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.monster.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Party {
    members: [[PartySlot; TRAITS_PER_MEMBER]; PARTY_SIZE],
}

impl Party {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a party from slots given in row-major order.
    ///
    /// Missing trailing slots stay empty; extra slots are ignored.
    #[must_use]
    pub fn from_slots(slots: impl IntoIterator<Item = PartySlot>) -> Self {
        let mut party = Self::new();
        for (n, slot) in slots.into_iter().enumerate().take(crate::constants::SLOT_COUNT) {
            *party.slot_mut(SlotPosition::from_ordinal(n)) = slot;
        }
        party
    }

    /// # Panics
    /// Panics when `pos` lies outside the 6x3 grid.
    #[must_use]
    pub fn slot(&self, pos: SlotPosition) -> &PartySlot {
        &self.members[pos.member][pos.trait_slot]
    }

    /// # Panics
    /// Panics when `pos` lies outside the 6x3 grid.
    pub fn slot_mut(&mut self, pos: SlotPosition) -> &mut PartySlot {
        &mut self.members[pos.member][pos.trait_slot]
    }

    /// The three slots of one party member.
    #[must_use]
    pub fn member(&self, member: usize) -> &[PartySlot; TRAITS_PER_MEMBER] {
        &self.members[member]
    }

    /// All slots in row-major order (member outer, trait slot inner).
    pub fn slots(&self) -> impl Iterator<Item = (SlotPosition, &PartySlot)> {
        self.members.iter().enumerate().flat_map(|(member, row)| {
            row.iter()
                .enumerate()
                .map(move |(trait_slot, slot)| (SlotPosition::new(member, trait_slot), slot))
        })
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.slots().filter(|(_, slot)| !slot.is_empty()).count()
    }
}

/// UIDs of every monster currently in the party.
///
/// Always derived from the grid; never patched incrementally.
#[must_use]
pub fn members_of(party: &Party) -> BTreeSet<String> {
    party
        .slots()
        .filter_map(|(_, slot)| slot.uid().map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SLOT_COUNT;
    use crate::test_support::{fixture_index, monster};

    #[test]
    fn ordinals_are_row_major() {
        assert_eq!(SlotPosition::from_ordinal(0), SlotPosition::new(0, 0));
        assert_eq!(SlotPosition::from_ordinal(4), SlotPosition::new(1, 1));
        assert_eq!(SlotPosition::from_ordinal(17), SlotPosition::new(5, 2));
        assert_eq!(SlotPosition::new(3, 2).ordinal(), 11);
    }

    #[test]
    fn new_party_has_eighteen_empty_slots() {
        let party = Party::new();
        assert_eq!(party.slots().count(), SLOT_COUNT);
        assert!(party.slots().all(|(_, slot)| slot.is_empty()));
        assert_eq!(party.filled_count(), 0);
    }

    #[test]
    fn members_are_derived_from_filled_slots() {
        let index = fixture_index();
        let mut party = Party::new();
        *party.slot_mut(SlotPosition::new(0, 0)) = PartySlot::filled(monster(&index, 1));
        *party.slot_mut(SlotPosition::new(5, 2)) = PartySlot::filled(monster(&index, 7));
        *party.slot_mut(SlotPosition::new(2, 1)) = PartySlot::missing("gone");

        let members = members_of(&party);
        assert_eq!(
            members.into_iter().collect::<Vec<_>>(),
            vec!["M001".to_string(), "M007".to_string()]
        );
        assert_eq!(party.filled_count(), 2);
    }

    #[test]
    fn from_slots_fills_in_row_major_order() {
        let index = fixture_index();
        let party = Party::from_slots(vec![
            PartySlot::empty(),
            PartySlot::filled(monster(&index, 2)),
        ]);
        assert_eq!(party.slot(SlotPosition::new(0, 1)).uid(), Some("M002"));
        assert_eq!(party.member(0)[1].uid(), Some("M002"));
        assert!(party.slot(SlotPosition::new(0, 0)).is_empty());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn out_of_range_positions_panic() {
        let party = Party::new();
        let _ = party.slot(SlotPosition::new(6, 0));
    }
}
