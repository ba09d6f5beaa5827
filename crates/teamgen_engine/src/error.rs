//! Engine error types.

use std::path::PathBuf;

/// Errors raised while loading, wiring, or running the engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The dex file could not be read.
    #[error("failed to read dex file {path}: {source}")]
    ReadDex {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dex file is not valid dex JSON.
    #[error("failed to parse dex file {path}: {source}")]
    ParseDex {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `init` was called on an engine that is already initialized.
    #[error("engine is already initialized")]
    AlreadyInitialized,

    /// A capability was requested before `init` ran.
    #[error("engine is not initialized")]
    NotInitialized,

    /// Teams were requested before the engine installed itself on the handle.
    #[error("engine is not installed on the capability handle")]
    NotInstalled,

    /// The dex cannot fill a team of the configured size.
    #[error("not enough eligible species for a team: need {needed}, have {available}")]
    NotEnoughSpecies { needed: usize, available: usize },

    /// The configured team size is zero.
    #[error("team size must be at least 1")]
    EmptyTeam,
}
