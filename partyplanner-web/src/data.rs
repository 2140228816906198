//! Reference data embedded in the web bundle.

use partyplanner_core::{DataLoader, PlannerEngine, ReferenceData};

/// Loads the monster and specialization datasets compiled into the bundle.
pub struct WebDataLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WebDataLoader {
    /// Raw JSON of one embedded dataset.
    ///
    /// # Errors
    ///
    /// Returns an error when no dataset with that name is embedded.
    pub fn dataset(&self, name: &str) -> Result<&'static str, WebDataError> {
        match name {
            "monsters" => Ok(include_str!("../static/assets/data/monsters.json")),
            "specializations" => Ok(include_str!("../static/assets/data/specializations.json")),
            _ => Err(WebDataError::UnknownDataset(name.to_string())),
        }
    }
}

impl DataLoader for WebDataLoader {
    type Error = WebDataError;

    fn load_reference_data(&self) -> Result<ReferenceData, Self::Error> {
        let data = ReferenceData::from_json_parts(
            self.dataset("monsters")?,
            self.dataset("specializations")?,
        )?;
        Ok(data)
    }
}

/// Planner engine over the embedded data.
///
/// Falls back to an empty dataset (every decode then warns) if the embedded
/// JSON is unreadable.
#[must_use]
pub fn create_web_engine() -> PlannerEngine {
    PlannerEngine::load(&WebDataLoader).unwrap_or_else(|err| {
        log::error!("Failed to load reference data: {err}");
        PlannerEngine::from_data(&ReferenceData::empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_datasets_load() {
        let data = WebDataLoader.load_reference_data().expect("embedded data");
        assert!(!data.monsters.is_empty());
        assert!(data.specializations.iter().any(|s| s.name == "Royal"));
    }

    #[test]
    fn unknown_dataset_is_an_error() {
        let err = WebDataLoader.dataset("items").unwrap_err();
        assert_eq!(err.to_string(), "Unknown dataset: items");
    }

    #[test]
    fn engine_uses_embedded_index() {
        let engine = create_web_engine();
        assert!(engine.index().specialization("Royal").is_some());
    }
}
