//! Fixed dimensions and wire constants of the party build format.
//!
//! These values are part of every shared link ever produced; changing any of
//! them invalidates existing build strings.

/// Number of party members in a build.
pub const PARTY_SIZE: usize = 6;
/// Trait slots carried by each party member.
pub const TRAITS_PER_MEMBER: usize = 3;
/// Total number of slots in the party grid.
pub const SLOT_COUNT: usize = PARTY_SIZE * TRAITS_PER_MEMBER;

/// Length of a monster/trait UID.
pub const TRAIT_UID_LEN: usize = 4;
/// Length of an anointment perk UID.
pub const ANOINTMENT_UID_LEN: usize = 3;
/// Length of a specialization abbreviation.
pub const ABBREVIATION_LEN: usize = 2;
/// Marks an empty slot in the build string.
pub const EMPTY_SLOT: char = '_';

/// Anointment limit for every specialization except [`ROYAL_SPECIALIZATION`].
pub const DEFAULT_ANOINTMENT_LIMIT: usize = 5;
/// Anointment limit while [`ROYAL_SPECIALIZATION`] is active.
pub const ROYAL_ANOINTMENT_LIMIT: usize = 15;
pub const ROYAL_SPECIALIZATION: &str = "Royal";

// Query parameter keys -----------------------------------------------------
pub const PARAM_BUILD: &str = "b";
pub const PARAM_SPECIALIZATION: &str = "s";
pub const PARAM_ANOINTMENTS: &str = "a";

// User-facing messages -----------------------------------------------------
pub const MSG_BUILD_LOADED: &str = "Build loaded successfully.";
pub const MSG_PARTY_IMPORTED: &str = "Party imported successfully.";
pub const MSG_TRAITS_CHANGED: &str = "One or more traits in this build do not exist or have changed. \
     The affected slots have been cleared.";
pub const MSG_SLOT_TRAIT_MISSING: &str = "This trait does not exist or has changed.";

/// Characters permitted inside trait and anointment UIDs.
#[must_use]
pub const fn is_uid_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Anointment limit implied by the named specialization.
#[must_use]
pub fn anointment_limit_for(specialization: Option<&str>) -> usize {
    match specialization {
        Some(ROYAL_SPECIALIZATION) => ROYAL_ANOINTMENT_LIMIT,
        _ => DEFAULT_ANOINTMENT_LIMIT,
    }
}
