//! Engine scripts.
//!
//! Scripts are registered by [`crate::BattleEngine::init`]; before that the
//! registry is empty.

use std::sync::Arc;

use crate::dex::{Dex, SpeciesData};
use crate::error::EngineError;
use crate::prng::Prng;
use crate::team::{PokemonSet, Team};
use crate::tools::{RandomTeamFn, Tools};

/// Moves per set.
pub const MAX_MOVES: usize = 4;

/// One in this many sets is shiny.
pub const SHINY_ODDS: u32 = 1024;

/// Ability given to species without any listed abilities.
pub const NO_ABILITY: &str = "No Ability";

/// The script registry.
#[derive(Debug, Clone, Default)]
pub struct Scripts {
    random_team: Option<RandomTeamFn>,
}

impl Scripts {
    /// The registry with every built-in script.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            random_team: Some(random_team),
        }
    }

    #[must_use]
    pub fn random_team(&self) -> Option<RandomTeamFn> {
        self.random_team
    }
}

/// Build a random team from the handle's dex.
///
/// Picks `team_size` distinct eligible species, then gives each up to
/// [`MAX_MOVES`] distinct moves from its pool, a random ability, an item and
/// a tier-scaled level. A team holds at most one mega stone.
///
/// # Errors
///
/// Returns [`EngineError::EmptyTeam`] for a zero team size and
/// [`EngineError::NotEnoughSpecies`] when the dex cannot fill the team.
pub fn random_team(tools: &mut Tools) -> Result<Team, EngineError> {
    let size = tools.settings().team_size;
    if size == 0 {
        return Err(EngineError::EmptyTeam);
    }

    let dex = Arc::clone(tools.dex());
    let mut pool = dex.eligible_species();
    if pool.len() < size {
        return Err(EngineError::NotEnoughSpecies {
            needed: size,
            available: pool.len(),
        });
    }
    tools.prng_mut().shuffle(&mut pool);

    let mut has_mega = false;
    let mut team = Vec::with_capacity(size);
    for species in pool.into_iter().take(size) {
        let set = random_set(tools, &dex, species, &mut has_mega);
        tools.debug(&format!(
            "{} @ {} / {} / {}",
            set.species,
            set.item,
            set.ability,
            set.moves.join(", ")
        ));
        team.push(set);
    }
    Ok(team)
}

fn random_set(
    tools: &mut Tools,
    dex: &Dex,
    species: &SpeciesData,
    has_mega: &mut bool,
) -> PokemonSet {
    let level = species
        .level
        .unwrap_or_else(|| tools.settings().levels.for_tier(species.tier.as_deref()));
    let prng = tools.prng_mut();

    let mut moves = species.random_battle_moves.clone();
    moves.sort_unstable();
    moves.dedup();
    prng.shuffle(&mut moves);
    moves.truncate(MAX_MOVES);

    let ability = prng
        .sample(&species.abilities)
        .cloned()
        .unwrap_or_else(|| NO_ABILITY.to_string());
    let item = random_item(prng, dex, species, has_mega);
    let shiny = prng.chance(1, SHINY_ODDS);

    PokemonSet {
        name: species.name.clone(),
        species: species.name.clone(),
        moves,
        ability,
        item,
        level,
        shiny,
    }
}

fn random_item(prng: &mut Prng, dex: &Dex, species: &SpeciesData, has_mega: &mut bool) -> String {
    let general = dex.general_items();
    let candidate = if species.items.is_empty() {
        prng.sample(&general).map(|item| item.name.clone())
    } else {
        prng.sample(&species.items).cloned()
    };

    match candidate {
        Some(item) if dex.is_mega_stone(&item) => {
            if *has_mega {
                general
                    .first()
                    .map(|fallback| fallback.name.clone())
                    .unwrap_or_default()
            } else {
                *has_mega = true;
                item
            }
        }
        Some(item) => item,
        None => String::new(),
    }
}
