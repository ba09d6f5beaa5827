//! Species and item data registry.
//!
//! The dex is loaded from a JSON document of the form:
//!
//! ```json
//! {
//!   "species": {
//!     "gengar": {
//!       "name": "Gengar",
//!       "types": ["Ghost", "Poison"],
//!       "tier": "OU",
//!       "abilities": ["Cursed Body"],
//!       "randomBattleMoves": ["shadowball", "sludgewave", "focusblast"],
//!       "items": ["Gengarite", "Life Orb"]
//!     }
//!   },
//!   "items": {
//!     "lifeorb": { "name": "Life Orb" },
//!     "gengarite": { "name": "Gengarite", "megaStone": "Gengar-Mega" }
//!   }
//! }
//! ```
//!
//! Keys are normalized with [`to_id`] on load. Both tables are ordered maps so
//! iteration order, and therefore generation under a fixed seed, is stable.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::EngineError;
use crate::id::to_id;

/// One species entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesData {
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    /// Competitive tier, used for level scaling.
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub abilities: Vec<String>,
    /// Move ids a random set may draw from. Species with an empty pool are
    /// never generated.
    #[serde(default)]
    pub random_battle_moves: Vec<String>,
    /// Item names specific to this species. Falls back to the general item
    /// table when empty.
    #[serde(default)]
    pub items: Vec<String>,
    /// Fixed level overriding tier scaling.
    #[serde(default)]
    pub level: Option<u8>,
}

/// One item entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemData {
    pub name: String,
    /// The forme this item mega-evolves into, if it is a mega stone.
    #[serde(default)]
    pub mega_stone: Option<String>,
}

impl ItemData {
    #[must_use]
    pub fn is_mega_stone(&self) -> bool {
        self.mega_stone.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct RawDex {
    #[serde(default)]
    species: BTreeMap<String, SpeciesData>,
    #[serde(default)]
    items: BTreeMap<String, ItemData>,
}

/// The loaded data registry.
#[derive(Debug, Clone, Default)]
pub struct Dex {
    species: BTreeMap<String, SpeciesData>,
    items: BTreeMap<String, ItemData>,
}

impl Dex {
    /// Load a dex from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ReadDex`] if the file cannot be read and
    /// [`EngineError::ParseDex`] if it is not valid dex JSON.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let text = std::fs::read_to_string(path).map_err(|source| EngineError::ReadDex {
            path: path.to_path_buf(),
            source,
        })?;
        let dex = Self::from_json_str(&text).map_err(|source| EngineError::ParseDex {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            species = dex.species.len(),
            items = dex.items.len(),
            "dex loaded"
        );
        Ok(dex)
    }

    /// Parse a dex from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed input.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let raw: RawDex = serde_json::from_str(text)?;
        Ok(Self {
            species: raw
                .species
                .into_iter()
                .map(|(key, data)| (to_id(&key), data))
                .collect(),
            items: raw
                .items
                .into_iter()
                .map(|(key, data)| (to_id(&key), data))
                .collect(),
        })
    }

    /// Look up a species by any spelling of its name.
    #[must_use]
    pub fn species(&self, name: &str) -> Option<&SpeciesData> {
        self.species.get(&to_id(name))
    }

    /// Look up an item by any spelling of its name.
    #[must_use]
    pub fn item(&self, name: &str) -> Option<&ItemData> {
        self.items.get(&to_id(name))
    }

    /// Returns `true` if `name` is a known mega stone.
    #[must_use]
    pub fn is_mega_stone(&self, name: &str) -> bool {
        self.item(name).is_some_and(ItemData::is_mega_stone)
    }

    /// Species that can appear in a random team, in id order.
    #[must_use]
    pub fn eligible_species(&self) -> Vec<&SpeciesData> {
        self.species
            .values()
            .filter(|s| !s.random_battle_moves.is_empty())
            .collect()
    }

    /// Items usable by any species, in id order. Mega stones are excluded.
    #[must_use]
    pub fn general_items(&self) -> Vec<&ItemData> {
        self.items.values().filter(|i| !i.is_mega_stone()).collect()
    }

    #[must_use]
    pub fn species_count(&self) -> usize {
        self.species.len()
    }
}
