//! Build string codec.
//!
//! Format: 18 slot tokens (a 4-character trait UID or `_` for an empty slot),
//! then optionally `&s=<abbreviation>` and `&a=<3-character anointment UIDs>`.
//! The page URL carries it as `?b=<build string>`, so `s` and `a` travel as
//! sibling query parameters, e.g. `?b=M001______..._&s=RY&a=r01n03`.

use smallvec::SmallVec;
use std::collections::HashSet;
use thiserror::Error;

use crate::constants::{
    ANOINTMENT_UID_LEN, DEFAULT_ANOINTMENT_LIMIT, EMPTY_SLOT, MSG_BUILD_LOADED,
    MSG_SLOT_TRAIT_MISSING, MSG_TRAITS_CHANGED, PARAM_ANOINTMENTS, PARAM_BUILD,
    PARAM_SPECIALIZATION, SLOT_COUNT, TRAIT_UID_LEN, anointment_limit_for, is_uid_char,
};
use crate::data::{Perk, Specialization};
use crate::index::ReferenceIndex;
use crate::party::{Party, PartySlot, SlotPosition};
use crate::report::{Escalation, Report};

/// Selected anointments in selection order.
pub type AnointmentList = SmallVec<[Perk; DEFAULT_ANOINTMENT_LIMIT]>;

/// Structural problems that stop a build segment from being read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Malformed trait id \"{0}\" in build.")]
    MalformedUid(String),
    #[error("Not enough traits in build (expected 18, found {0}).")]
    NotEnoughTraits(usize),
    #[error("Too many traits in build (expected 18, found {0}).")]
    TooManyTraits(usize),
    #[error("Specialization \"{0}\" was not found.")]
    UnknownSpecialization(String),
    #[error("Invalid anointment id \"{0}\".")]
    InvalidAnointmentId(String),
    #[error("Anointment id \"{0}\" was not found.")]
    AnointmentNotFound(String),
    #[error("Anointment \"{0}\" appears twice.")]
    DuplicateAnointment(String),
}

/// One slot reference before it is resolved against the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotToken {
    Empty,
    Uid(String),
    /// Named reference that could not be translated to a UID (external import).
    Missing(String),
}

/// Raw query parameters relevant to a build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildParams {
    pub build: Option<String>,
    pub specialization: Option<String>,
    pub anointments: Option<String>,
}

impl BuildParams {
    /// Extract build parameters from a URL, a query string or a bare build string.
    ///
    /// A leading piece without `=` is taken as the `b` value. Unknown keys
    /// and empty values are ignored.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let query = input.split_once('?').map_or(input, |(_, query)| query);
        let query = query.split('#').next().unwrap_or_default();

        let mut params = Self::default();
        for (n, piece) in query.split('&').enumerate() {
            let (key, value) = match piece.split_once('=') {
                Some(pair) => pair,
                None if n == 0 => (PARAM_BUILD, piece),
                None => continue,
            };
            if value.is_empty() {
                continue;
            }
            let target = match key {
                PARAM_BUILD => &mut params.build,
                PARAM_SPECIALIZATION => &mut params.specialization,
                PARAM_ANOINTMENTS => &mut params.anointments,
                _ => continue,
            };
            *target = Some(value.to_string());
        }
        params
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.build.is_none() && self.specialization.is_none() && self.anointments.is_none()
    }
}

/// Everything a build string describes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedBuild {
    pub party: Party,
    pub specialization: Option<Specialization>,
    pub anointments: AnointmentList,
}

/// Encode a build. Always emits exactly 18 slot tokens.
#[must_use]
pub fn encode(
    party: &Party,
    specialization: Option<&Specialization>,
    anointments: &[Perk],
) -> String {
    let mut out = String::with_capacity(
        SLOT_COUNT * TRAIT_UID_LEN + 8 + anointments.len() * ANOINTMENT_UID_LEN,
    );
    for (_, slot) in party.slots() {
        match slot.uid() {
            Some(uid) => out.push_str(uid),
            None => out.push(EMPTY_SLOT),
        }
    }
    if let Some(spec) = specialization {
        out.push('&');
        out.push_str(PARAM_SPECIALIZATION);
        out.push('=');
        out.push_str(&spec.abbreviation);
    }
    if !anointments.is_empty() {
        out.push('&');
        out.push_str(PARAM_ANOINTMENTS);
        out.push('=');
        for perk in anointments {
            out.push_str(&perk.uid);
        }
    }
    out
}

/// Full shareable URL for a build string.
#[must_use]
pub fn share_url(base: &str, build: &str) -> String {
    let base = base.trim_end_matches(['?', '&']);
    format!("{base}?{PARAM_BUILD}={build}")
}

/// Split the slot segment into exactly 18 tokens.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedUid`] for a truncated UID or a character
/// outside the UID alphabet, and a count error when the segment does not
/// hold exactly 18 tokens.
pub fn tokenize_slots(segment: &str) -> Result<Vec<SlotToken>, DecodeError> {
    let mut tokens = Vec::with_capacity(SLOT_COUNT);
    let mut pending = String::with_capacity(TRAIT_UID_LEN);

    for c in segment.chars() {
        if c == EMPTY_SLOT {
            if !pending.is_empty() {
                return Err(DecodeError::MalformedUid(pending));
            }
            tokens.push(SlotToken::Empty);
        } else if is_uid_char(c) {
            pending.push(c);
            if pending.len() == TRAIT_UID_LEN {
                tokens.push(SlotToken::Uid(std::mem::take(&mut pending)));
            }
        } else {
            pending.push(c);
            return Err(DecodeError::MalformedUid(pending));
        }
    }
    if !pending.is_empty() {
        return Err(DecodeError::MalformedUid(pending));
    }

    match tokens.len() {
        n if n < SLOT_COUNT => Err(DecodeError::NotEnoughTraits(n)),
        n if n > SLOT_COUNT => Err(DecodeError::TooManyTraits(n)),
        _ => Ok(tokens),
    }
}

/// Party grid built from slot tokens, plus the slots that failed to resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSlots {
    pub party: Party,
    pub missing: Vec<SlotPosition>,
}

/// Resolve slot tokens against the index.
///
/// Unknown references clear their own slot and annotate it; the remaining
/// slots are resolved regardless.
#[must_use]
pub fn resolve_slots(tokens: &[SlotToken], index: &ReferenceIndex) -> ResolvedSlots {
    let mut resolved = ResolvedSlots::default();
    for (n, token) in tokens.iter().enumerate().take(SLOT_COUNT) {
        let pos = SlotPosition::from_ordinal(n);
        let slot = match token {
            SlotToken::Empty => PartySlot::empty(),
            SlotToken::Uid(uid) => match index.monster(uid) {
                Some(monster) => PartySlot::filled(monster.clone()),
                None => {
                    log::debug!("trait uid '{uid}' not found for slot {pos:?}");
                    resolved.missing.push(pos);
                    PartySlot::missing(MSG_SLOT_TRAIT_MISSING)
                }
            },
            SlotToken::Missing(name) => {
                log::debug!("trait '{name}' not found for slot {pos:?}");
                resolved.missing.push(pos);
                PartySlot::missing(MSG_SLOT_TRAIT_MISSING)
            }
        };
        *resolved.party.slot_mut(pos) = slot;
    }
    resolved
}

/// Resolve a two-letter specialization code.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownSpecialization`] when no abbreviation matches exactly.
pub fn resolve_specialization(
    code: &str,
    index: &ReferenceIndex,
) -> Result<Specialization, DecodeError> {
    index
        .specialization_by_abbreviation(code)
        .cloned()
        .ok_or_else(|| DecodeError::UnknownSpecialization(code.to_string()))
}

/// Resolve the concatenated 3-character anointment UIDs, keeping their order.
///
/// # Errors
///
/// Returns an error for a partial or malformed chunk, an unknown UID, or a
/// UID repeated within the segment.
pub fn resolve_anointments(
    segment: &str,
    index: &ReferenceIndex,
) -> Result<AnointmentList, DecodeError> {
    let chars: Vec<char> = segment.chars().collect();
    let trailing = chars.len() % ANOINTMENT_UID_LEN;
    if trailing != 0 {
        let partial: String = chars[chars.len() - trailing..].iter().collect();
        return Err(DecodeError::InvalidAnointmentId(partial));
    }

    let mut seen = HashSet::new();
    let mut list = AnointmentList::new();
    for chunk in chars.chunks(ANOINTMENT_UID_LEN) {
        let uid: String = chunk.iter().collect();
        if !chunk.iter().copied().all(is_uid_char) {
            return Err(DecodeError::InvalidAnointmentId(uid));
        }
        let perk = index
            .anointment(&uid)
            .ok_or_else(|| DecodeError::AnointmentNotFound(uid.clone()))?;
        if !seen.insert(uid) {
            return Err(DecodeError::DuplicateAnointment(perk.name.clone()));
        }
        list.push(perk.clone());
    }
    Ok(list)
}

/// Drop anointments beyond the limit of `specialization`, keeping the earliest.
pub fn clamp_anointments(anointments: &mut AnointmentList, specialization: Option<&Specialization>) {
    let limit = anointment_limit_for(specialization.map(|s| s.name.as_str()));
    anointments.truncate(limit);
}

/// Decode build parameters.
///
/// A structural failure in the slot segment aborts everything
/// (`Error { value: None }`). Failures in the specialization or anointment
/// segment only drop that segment; the rest of the build is still returned.
/// Without an `s` segment (or when it fails) `current` stays in effect.
#[must_use]
pub fn decode(
    params: &BuildParams,
    index: &ReferenceIndex,
    current: Option<&Specialization>,
) -> Report<DecodedBuild> {
    let mut escalation = Escalation::default();

    let party = match params.build.as_deref() {
        Some(segment) => match tokenize_slots(segment) {
            Ok(tokens) => {
                let resolved = resolve_slots(&tokens, index);
                if !resolved.missing.is_empty() {
                    escalation.warn(MSG_TRAITS_CHANGED);
                }
                resolved.party
            }
            Err(err) => {
                log::debug!("rejecting build '{segment}': {err}");
                return Report::Error {
                    value: None,
                    message: err.to_string(),
                };
            }
        },
        None => Party::new(),
    };

    let mut specialization = current.cloned();
    if let Some(code) = params.specialization.as_deref() {
        match resolve_specialization(code, index) {
            Ok(spec) => specialization = Some(spec),
            Err(err) => escalation.fail(err.to_string()),
        }
    }

    let mut anointments = AnointmentList::new();
    if let Some(segment) = params.anointments.as_deref() {
        match resolve_anointments(segment, index) {
            Ok(list) => anointments = list,
            Err(err) => escalation.fail(err.to_string()),
        }
    }
    clamp_anointments(&mut anointments, specialization.as_ref());

    escalation.finish(
        DecodedBuild {
            party,
            specialization,
            anointments,
        },
        MSG_BUILD_LOADED,
    )
}

/// Decode a bare build string (or query/URL) with no prior specialization.
#[must_use]
pub fn decode_str(input: &str, index: &ReferenceIndex) -> Report<DecodedBuild> {
    decode(&BuildParams::parse(input), index, None)
}
