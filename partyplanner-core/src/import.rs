//! Party strings exported by the community party tool.
//!
//! The format names everything by display name rather than UID:
//!
//! ```text
//! Specialization: Royal
//! Anointments: Noble Blood, Court Favor
//! Creature 1: Blood Frenzy / Night Hunter / -
//! Creature 2: Overgrowth / / Glimmer
//! ```
//!
//! Keys are case-insensitive, unknown lines are skipped, and a trait cell
//! of `-` (or nothing) is an empty slot. Creatures that are not listed stay
//! empty.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write as _;
use thiserror::Error;

use crate::codec::{AnointmentList, DecodedBuild, SlotToken, clamp_anointments, resolve_slots};
use crate::constants::{MSG_PARTY_IMPORTED, MSG_TRAITS_CHANGED, PARTY_SIZE, TRAITS_PER_MEMBER};
use crate::data::{Perk, Specialization};
use crate::index::ReferenceIndex;
use crate::party::{Party, SlotPosition};
use crate::report::{Escalation, Report};

static CREATURE_LINE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?i)^creature\s*(\d+)\s*:(.*)$").ok());

const EMPTY_CELL: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("Specialization \"{0}\" was not found.")]
    SpecializationNotFound(String),
}

/// Syntactic content of a party string, before any lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartyString {
    /// Trait names in row-major order; `None` is an explicit empty slot.
    pub traits: Vec<Option<String>>,
    pub specialization: Option<String>,
    pub anointments: Vec<String>,
}

impl PartyString {
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut parsed = Self {
            traits: vec![None; PARTY_SIZE * TRAITS_PER_MEMBER],
            ..Self::default()
        };

        let creature_line = CREATURE_LINE.as_ref();
        if creature_line.is_none() {
            log::error!("creature line pattern failed to compile; no creatures will be read");
        }
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some(caps) = creature_line.and_then(|re| re.captures(line)) {
                parsed.read_creature(&caps[1], &caps[2]);
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                log::debug!("skipping party string line '{line}'");
                continue;
            };
            let value = value.trim();
            match key.trim().to_ascii_lowercase().as_str() {
                "specialization" => {
                    parsed.specialization = (!value.is_empty()).then(|| value.to_string());
                }
                "anointments" => {
                    parsed.anointments = value
                        .split(',')
                        .map(str::trim)
                        .filter(|name| !name.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                other => log::debug!("skipping party string key '{other}'"),
            }
        }
        parsed
    }

    fn read_creature(&mut self, number: &str, cells: &str) {
        let member = match number.parse::<usize>() {
            Ok(n) if (1..=PARTY_SIZE).contains(&n) => n - 1,
            _ => {
                log::debug!("ignoring creature {number}: outside the party");
                return;
            }
        };
        let cells: Vec<&str> = cells.split('/').map(str::trim).collect();
        if cells.len() > TRAITS_PER_MEMBER {
            log::debug!("creature {number} lists {} traits; extra ignored", cells.len());
        }
        for (trait_slot, cell) in cells.into_iter().take(TRAITS_PER_MEMBER).enumerate() {
            let name = (!cell.is_empty() && cell != EMPTY_CELL).then(|| cell.to_string());
            self.traits[SlotPosition::new(member, trait_slot).ordinal()] = name;
        }
    }

    /// Translate trait names to slot tokens; unknown names become [`SlotToken::Missing`].
    #[must_use]
    pub fn slot_tokens(&self, index: &ReferenceIndex) -> Vec<SlotToken> {
        self.traits
            .iter()
            .map(|name| match name {
                None => SlotToken::Empty,
                Some(name) => index
                    .uid_for_trait(name)
                    .map_or_else(|| SlotToken::Missing(name.clone()), |uid| SlotToken::Uid(uid.to_string())),
            })
            .collect()
    }
}

/// Import a party string.
///
/// An unknown specialization fails the whole import (`Error { value: None }`).
/// Unknown traits clear their slot and unknown anointment names are dropped;
/// both produce a warning. All missing anointment names are reported in one
/// message.
#[must_use]
pub fn import_party(text: &str, index: &ReferenceIndex) -> Report<DecodedBuild> {
    let parsed = PartyString::parse(text);

    let specialization = match parsed.specialization.as_deref() {
        Some(name) => match index.specialization(name) {
            Some(spec) => Some(spec.clone()),
            None => {
                let err = ImportError::SpecializationNotFound(name.to_string());
                log::debug!("party string rejected: {err}");
                return Report::Error {
                    value: None,
                    message: err.to_string(),
                };
            }
        },
        None => None,
    };

    let mut escalation = Escalation::default();

    let resolved = resolve_slots(&parsed.slot_tokens(index), index);
    if !resolved.missing.is_empty() {
        escalation.warn(MSG_TRAITS_CHANGED);
    }

    let mut anointments = AnointmentList::new();
    let mut missing = Vec::new();
    for name in &parsed.anointments {
        match index.anointment_by_name(name) {
            Some(perk) if anointments.iter().any(|p| p.name == perk.name) => {}
            Some(perk) => anointments.push(perk.clone()),
            None => missing.push(name.as_str()),
        }
    }
    if !missing.is_empty() {
        escalation.warn(missing_anointments_message(&missing));
    }
    clamp_anointments(&mut anointments, specialization.as_ref());

    escalation.finish(
        DecodedBuild {
            party: resolved.party,
            specialization,
            anointments,
        },
        MSG_PARTY_IMPORTED,
    )
}

fn missing_anointments_message(names: &[&str]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| format!("\"{name}\"")).collect();
    match quoted.as_slice() {
        [single] => format!("Anointment {single} was not found."),
        many => format!("Anointments {} were not found.", many.join(", ")),
    }
}

/// Write a build in the party string format.
#[must_use]
pub fn export_party(
    party: &Party,
    specialization: Option<&Specialization>,
    anointments: &[Perk],
) -> String {
    let mut out = String::new();
    if let Some(spec) = specialization {
        let _ = writeln!(out, "Specialization: {}", spec.name);
    }
    if !anointments.is_empty() {
        let names: Vec<&str> = anointments.iter().map(|p| p.name.as_str()).collect();
        let _ = writeln!(out, "Anointments: {}", names.join(", "));
    }
    for member in 0..PARTY_SIZE {
        let cells: Vec<&str> = party
            .member(member)
            .iter()
            .map(|slot| {
                slot.monster
                    .as_ref()
                    .map_or(EMPTY_CELL, |m| m.trait_name.as_str())
            })
            .collect();
        let _ = writeln!(out, "Creature {}: {}", member + 1, cells.join(" / "));
    }
    out
}
