//! # teamgen_engine
//!
//! The rules/data engine behind `teamgen`.
//!
//! This crate provides:
//!
//! - [`id`]: identifier normalization (`to_id`) shared by every stage.
//! - [`prng`]: the seeded frame-stepped pseudo-random number generator.
//! - [`dex`]: the species and item data registry loaded from JSON.
//! - [`team`]: the generated set and team types.
//! - [`scripts`]: the registry of engine scripts, including `random_team`.
//! - [`engine`]: the [`BattleEngine`] lifecycle (load, init, install).
//! - [`tools`]: the [`Tools`] capability handle the generation loop drives.
//! - [`settings`]: engine settings deserialized from configuration.
//! - [`error`]: engine error types.

pub mod dex;
pub mod engine;
pub mod error;
pub mod id;
pub mod prng;
pub mod scripts;
pub mod settings;
pub mod team;
pub mod tools;

pub use dex::{Dex, ItemData, SpeciesData};
pub use engine::BattleEngine;
pub use error::EngineError;
pub use id::{Identified, to_id, to_id_value};
pub use prng::{Prng, Seed};
pub use settings::{EngineSettings, LevelSettings};
pub use team::{PokemonSet, Team};
pub use tools::{TeamGenerator, Tools};
