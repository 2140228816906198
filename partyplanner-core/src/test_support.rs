//! Small in-memory dataset shared by the unit tests.

use crate::data::{Monster, Perk, ReferenceData, Specialization};
use crate::index::ReferenceIndex;

const TRAITS: [(&str, &str); 20] = [
    ("Abomination", "Blood Frenzy"),
    ("Bloodbat", "Night Hunter"),
    ("Cabalist", "Dark Pact"),
    ("Dryad", "Overgrowth"),
    ("Ember Golem", "Molten Core"),
    ("Fairy", "Glimmer"),
    ("Gargoyle", "Stone Skin"),
    ("Hellhound", "Scorched Earth"),
    ("Imp", "Mischief"),
    ("Jotun", "Frost Giant"),
    ("Kraken", "Deep Pressure"),
    ("Leviathan", "Tidal Wave"),
    ("Minotaur", "Labyrinth"),
    ("Naga", "Venom Coil"),
    ("Oracle", "Foresight"),
    ("Phoenix", "Rebirth"),
    ("Quillback", "Spiked Hide"),
    ("Revenant", "Undying"),
    ("Sphinx", "Riddle"),
    ("Treant", "Deep Roots"),
];

fn perk(uid: &str, name: &str, anointment: bool) -> Perk {
    Perk {
        uid: uid.to_string(),
        name: name.to_string(),
        description: String::new(),
        anointment,
        max_ranks: 1,
    }
}

fn specialization(name: &str, abbreviation: &str, prefix: char, count: usize) -> Specialization {
    let mut perks = vec![perk(&format!("{prefix}00"), &format!("{name} Kit"), false)];
    perks.extend((1..=count).map(|n| {
        perk(
            &format!("{prefix}{n:02}"),
            &format!("{name} Perk {n}"),
            true,
        )
    }));
    Specialization {
        name: name.to_string(),
        abbreviation: abbreviation.to_string(),
        description: String::new(),
        perks,
    }
}

pub fn fixture_data() -> ReferenceData {
    let monsters = TRAITS
        .iter()
        .enumerate()
        .map(|(i, (creature, trait_name))| Monster {
            uid: format!("M{:03}", i + 1),
            creature: (*creature).to_string(),
            family: String::new(),
            trait_name: (*trait_name).to_string(),
            trait_description: String::new(),
        })
        .collect();
    ReferenceData {
        monsters,
        specializations: vec![
            specialization("Royal", "RY", 'r', 10),
            specialization("Necromancer", "NC", 'n', 8),
        ],
    }
}

pub fn fixture_index() -> ReferenceIndex {
    ReferenceIndex::build(&fixture_data())
}

/// The `n`th fixture monster (1-based, matching its uid).
pub fn monster(index: &ReferenceIndex, n: usize) -> Monster {
    index
        .monster(&format!("M{n:03}"))
        .cloned()
        .expect("fixture monster")
}

pub fn anointment(index: &ReferenceIndex, uid: &str) -> Perk {
    index.anointment(uid).cloned().expect("fixture anointment")
}

pub fn specialization_named(index: &ReferenceIndex, name: &str) -> Specialization {
    index
        .specialization(name)
        .cloned()
        .expect("fixture specialization")
}
