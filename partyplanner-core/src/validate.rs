//! Consistency checks for the reference dataset.
//!
//! Index building never fails (duplicates are last-write-wins), so these
//! checks are the place to catch data that would make build strings ambiguous.

use std::collections::HashSet;
use std::fmt;

use crate::constants::{
    ABBREVIATION_LEN, ANOINTMENT_UID_LEN, ROYAL_SPECIALIZATION, TRAIT_UID_LEN, is_uid_char,
};
use crate::data::ReferenceData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateKey { kind: &'static str, key: String },
    MalformedKey { kind: &'static str, key: String },
    MissingRoyal,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey { kind, key } => write!(f, "duplicate {kind} '{key}'"),
            Self::MalformedKey { kind, key } => write!(f, "malformed {kind} '{key}'"),
            Self::MissingRoyal => {
                write!(f, "no '{ROYAL_SPECIALIZATION}' specialization in dataset")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Report every problem in `data`; an empty list means the dataset is sound.
#[must_use]
pub fn validate_reference_data(data: &ReferenceData) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    track_keys(
        "monster uid",
        data.monsters.iter().map(|m| m.uid.clone()),
        &mut errors,
    );
    track_keys(
        "trait name",
        data.monsters.iter().map(|m| m.trait_name.trim().to_lowercase()),
        &mut errors,
    );
    for monster in &data.monsters {
        check_uid("monster uid", &monster.uid, TRAIT_UID_LEN, &mut errors);
    }

    track_keys(
        "specialization",
        data.specializations.iter().map(|s| s.name.clone()),
        &mut errors,
    );
    track_keys(
        "abbreviation",
        data.specializations.iter().map(|s| s.abbreviation.clone()),
        &mut errors,
    );
    for spec in &data.specializations {
        let abbreviation = &spec.abbreviation;
        if abbreviation.len() != ABBREVIATION_LEN
            || !abbreviation.chars().all(|c| c.is_ascii_alphabetic())
        {
            errors.push(ValidationError::MalformedKey {
                kind: "abbreviation",
                key: abbreviation.clone(),
            });
        }
    }
    if !data
        .specializations
        .iter()
        .any(|s| s.name == ROYAL_SPECIALIZATION)
    {
        errors.push(ValidationError::MissingRoyal);
    }

    track_keys(
        "anointment uid",
        data.anointments().map(|p| p.uid.clone()),
        &mut errors,
    );
    track_keys(
        "anointment name",
        data.anointments().map(|p| p.name.clone()),
        &mut errors,
    );
    for perk in data.anointments() {
        check_uid("anointment uid", &perk.uid, ANOINTMENT_UID_LEN, &mut errors);
    }

    errors
}

fn track_keys(
    kind: &'static str,
    keys: impl Iterator<Item = String>,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key.clone()) {
            errors.push(ValidationError::DuplicateKey { kind, key });
        }
    }
}

fn check_uid(kind: &'static str, uid: &str, len: usize, errors: &mut Vec<ValidationError>) {
    if uid.chars().count() != len || !uid.chars().all(is_uid_char) {
        errors.push(ValidationError::MalformedKey {
            kind,
            key: uid.to_string(),
        });
    }
}
