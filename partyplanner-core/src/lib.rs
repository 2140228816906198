//! Party Planner Core
//!
//! Platform-agnostic build logic for the party planner: reference-data
//! indexes, the shareable build-string codec, the community party-string
//! importer and the party state manager. UI layers drive everything through
//! [`PartyPlanner`].
#![forbid(unsafe_code)]

pub mod codec;
pub mod constants;
pub mod data;
pub mod import;
pub mod index;
pub mod party;
pub mod planner;
pub mod report;
#[cfg(test)]
mod test_support;
pub mod validate;

use std::sync::Arc;

// Re-export commonly used types
pub use codec::{
    AnointmentList, BuildParams, DecodeError, DecodedBuild, SlotToken, decode, decode_str,
    encode, share_url,
};
pub use data::{Monster, Perk, ReferenceData, Specialization};
pub use import::{ImportError, PartyString, export_party, import_party};
pub use index::ReferenceIndex;
pub use party::{Party, PartySlot, SlotPosition, members_of};
pub use planner::{PartyPlanner, Selection};
pub use report::{Notice, Report, Status};
pub use validate::{ValidationError, validate_reference_data};

/// Trait for abstracting reference data loading
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the monster and specialization datasets
    ///
    /// # Errors
    ///
    /// Returns an error if either dataset cannot be read or parsed.
    fn load_reference_data(&self) -> Result<ReferenceData, Self::Error>;
}

/// Loads the reference data once and hands out planners sharing its index.
pub struct PlannerEngine {
    index: Arc<ReferenceIndex>,
}

impl PlannerEngine {
    /// Build the indexes from the loader's dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference data cannot be loaded.
    pub fn load<L: DataLoader>(loader: &L) -> Result<Self, L::Error> {
        let data = loader.load_reference_data()?;
        Ok(Self::from_data(&data))
    }

    #[must_use]
    pub fn from_data(data: &ReferenceData) -> Self {
        Self {
            index: Arc::new(ReferenceIndex::build(data)),
        }
    }

    #[must_use]
    pub fn index(&self) -> Arc<ReferenceIndex> {
        Arc::clone(&self.index)
    }

    /// A planner holding an empty build.
    #[must_use]
    pub fn new_planner(&self) -> PartyPlanner {
        PartyPlanner::new(self.index())
    }

    /// A planner initialised from the page's query string.
    #[must_use]
    pub fn planner_from_query(&self, query: &str) -> PartyPlanner {
        PartyPlanner::from_query(self.index(), query)
    }
}
