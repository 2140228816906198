//! Lookup tables built once from the reference dataset.
//!
//! Construct a [`ReferenceIndex`] at startup and share it (`Arc`) with the
//! codec, the import parser and the planner. Duplicate keys resolve
//! last-write-wins; use [`crate::validate`] to catch them in the data.

use std::collections::HashMap;

use crate::data::{Monster, Perk, ReferenceData, Specialization};

#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    monsters: Vec<Monster>,
    specializations: Vec<Specialization>,
    by_uid: HashMap<String, usize>,
    uid_by_trait: HashMap<String, String>,
    anointments_by_uid: HashMap<String, Perk>,
    anointments_by_name: HashMap<String, Perk>,
    specializations_by_name: HashMap<String, usize>,
    specializations_by_abbreviation: HashMap<String, usize>,
}

impl ReferenceIndex {
    #[must_use]
    pub fn build(data: &ReferenceData) -> Self {
        let mut index = Self {
            monsters: data.monsters.clone(),
            specializations: data.specializations.clone(),
            ..Self::default()
        };

        for (pos, monster) in index.monsters.iter().enumerate() {
            if index.by_uid.insert(monster.uid.clone(), pos).is_some() {
                log::warn!("duplicate monster uid '{}' in reference data", monster.uid);
            }
            index
                .uid_by_trait
                .insert(trait_key(&monster.trait_name), monster.uid.clone());
        }

        for (pos, spec) in index.specializations.iter().enumerate() {
            index
                .specializations_by_name
                .insert(spec.name.clone(), pos);
            index
                .specializations_by_abbreviation
                .insert(spec.abbreviation.clone(), pos);
            for perk in spec.anointments() {
                index
                    .anointments_by_uid
                    .insert(perk.uid.clone(), perk.clone());
                index
                    .anointments_by_name
                    .insert(perk.name.clone(), perk.clone());
            }
        }

        log::debug!(
            "indexed {} monsters, {} specializations, {} anointments",
            index.by_uid.len(),
            index.specializations_by_name.len(),
            index.anointments_by_uid.len()
        );
        index
    }

    #[must_use]
    pub fn monster(&self, uid: &str) -> Option<&Monster> {
        self.by_uid.get(uid).map(|&pos| &self.monsters[pos])
    }

    /// UID of the monster carrying the named trait, matched case-insensitively.
    #[must_use]
    pub fn uid_for_trait(&self, trait_name: &str) -> Option<&str> {
        self.uid_by_trait
            .get(&trait_key(trait_name))
            .map(String::as_str)
    }

    #[must_use]
    pub fn anointment(&self, uid: &str) -> Option<&Perk> {
        self.anointments_by_uid.get(uid)
    }

    #[must_use]
    pub fn anointment_by_name(&self, name: &str) -> Option<&Perk> {
        self.anointments_by_name.get(name)
    }

    #[must_use]
    pub fn specialization(&self, name: &str) -> Option<&Specialization> {
        self.specializations_by_name
            .get(name)
            .map(|&pos| &self.specializations[pos])
    }

    #[must_use]
    pub fn specialization_by_abbreviation(&self, abbreviation: &str) -> Option<&Specialization> {
        self.specializations_by_abbreviation
            .get(abbreviation)
            .map(|&pos| &self.specializations[pos])
    }

    /// Specialization a perk belongs to.
    #[must_use]
    pub fn specialization_of(&self, perk: &Perk) -> Option<&Specialization> {
        self.specializations
            .iter()
            .find(|spec| spec.perks.iter().any(|p| p.uid == perk.uid))
    }

    pub fn monsters(&self) -> impl Iterator<Item = &Monster> {
        self.monsters.iter()
    }

    pub fn specializations(&self) -> impl Iterator<Item = &Specialization> {
        self.specializations.iter()
    }

    /// Every anointment-flagged perk, in dataset order.
    pub fn anointments(&self) -> impl Iterator<Item = &Perk> {
        self.specializations
            .iter()
            .flat_map(Specialization::anointments)
    }
}

fn trait_key(name: &str) -> String {
    name.trim().to_lowercase()
}
