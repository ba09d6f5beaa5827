//! Generated team types.

use serde::{Deserialize, Serialize};

/// One generated set: a species with its moves, ability, item and level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSet {
    /// Nickname. Random sets use the species name.
    pub name: String,
    pub species: String,
    /// Move ids.
    pub moves: Vec<String>,
    pub ability: String,
    pub item: String,
    pub level: u8,
    pub shiny: bool,
}

/// A generated team.
pub type Team = Vec<PokemonSet>;
