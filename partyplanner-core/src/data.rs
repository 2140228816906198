use serde::{Deserialize, Serialize};

/// A creature and the trait it contributes to a party slot.
///
/// Identity is the `uid`; everything else is display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub uid: String,
    pub creature: String,
    #[serde(default)]
    pub family: String,
    pub trait_name: String,
    #[serde(default)]
    pub trait_description: String,
}

/// A perk belonging to a specialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perk {
    pub uid: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Only flagged perks can be picked as anointments.
    #[serde(default)]
    pub anointment: bool,
    #[serde(default = "default_max_ranks")]
    pub max_ranks: u8,
}

fn default_max_ranks() -> u8 {
    1
}

/// A play-style category with its own perk kit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialization {
    pub name: String,
    pub abbreviation: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub perks: Vec<Perk>,
}

impl Specialization {
    /// Perks of this specialization that may be selected as anointments.
    pub fn anointments(&self) -> impl Iterator<Item = &Perk> {
        self.perks.iter().filter(|perk| perk.anointment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
struct MonsterFile {
    monsters: Vec<Monster>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
struct SpecializationFile {
    specializations: Vec<Specialization>,
}

/// The static reference dataset every lookup is answered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReferenceData {
    pub monsters: Vec<Monster>,
    pub specializations: Vec<Specialization>,
}

impl ReferenceData {
    /// Create an empty dataset (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the two dataset documents (`monsters.json`, `specializations.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if either document is not valid JSON of the expected shape.
    pub fn from_json_parts(monsters: &str, specializations: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            monsters: Self::parse_monsters(monsters)?,
            specializations: Self::parse_specializations(specializations)?,
        })
    }

    /// Parse a `{"monsters": [...]}` document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not have that shape.
    pub fn parse_monsters(json: &str) -> Result<Vec<Monster>, serde_json::Error> {
        let MonsterFile { monsters } = serde_json::from_str(json)?;
        Ok(monsters)
    }

    /// Parse a `{"specializations": [...]}` document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not have that shape.
    pub fn parse_specializations(json: &str) -> Result<Vec<Specialization>, serde_json::Error> {
        let SpecializationFile { specializations } = serde_json::from_str(json)?;
        Ok(specializations)
    }

    /// Every anointment-flagged perk across all specializations, in dataset order.
    pub fn anointments(&self) -> impl Iterator<Item = &Perk> {
        self.specializations
            .iter()
            .flat_map(Specialization::anointments)
    }
}
