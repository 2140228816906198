//! Reference data read from a directory of JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use partyplanner_core::{DataLoader, ReferenceData};

pub const MONSTERS_FILE: &str = "monsters.json";
pub const SPECIALIZATIONS_FILE: &str = "specializations.json";

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Data bundled with the web front-end.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("partyplanner-web")
        .join("static")
        .join("assets")
        .join("data")
}

pub struct FileDataLoader {
    dir: PathBuf,
}

impl FileDataLoader {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read(&self, name: &str) -> Result<(PathBuf, String), DataError> {
        let path = self.dir.join(name);
        match fs::read_to_string(&path) {
            Ok(text) => Ok((path, text)),
            Err(source) => Err(DataError::Io { path, source }),
        }
    }
}

impl DataLoader for FileDataLoader {
    type Error = DataError;

    fn load_reference_data(&self) -> Result<ReferenceData, Self::Error> {
        let (path, text) = self.read(MONSTERS_FILE)?;
        let monsters = ReferenceData::parse_monsters(&text)
            .map_err(|source| DataError::Json { path, source })?;
        let (path, text) = self.read(SPECIALIZATIONS_FILE)?;
        let specializations = ReferenceData::parse_specializations(&text)
            .map_err(|source| DataError::Json { path, source })?;
        log::debug!(
            "loaded {} monsters and {} specializations from {}",
            monsters.len(),
            specializations.len(),
            self.dir.display()
        );
        Ok(ReferenceData {
            monsters,
            specializations,
        })
    }
}
