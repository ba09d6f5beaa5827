//! The engine module.
//!
//! A [`BattleEngine`] goes through three one-shot steps:
//!
//! 1. [`BattleEngine::load`] reads the dex named in its settings.
//! 2. [`BattleEngine::init`] seeds the random source and registers the
//!    engine scripts.
//! 3. [`BattleEngine::install`] attaches the engine to a [`Tools`] handle
//!    that was republished from it.

use std::rc::Rc;
use std::sync::Arc;

use tracing::debug;

use crate::dex::Dex;
use crate::error::EngineError;
use crate::prng::Prng;
use crate::scripts::Scripts;
use crate::settings::EngineSettings;
use crate::tools::{DebugHook, Installation, Tools};

/// Name the engine installs itself under.
pub const ENGINE_NAME: &str = "teamgen-randbats";

/// The rules/data engine.
pub struct BattleEngine {
    settings: EngineSettings,
    dex: Arc<Dex>,
    prng: Option<Prng>,
    scripts: Scripts,
    debug: DebugHook,
}

impl BattleEngine {
    /// Load the engine, reading the dex from `settings.data_path`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ReadDex`] or [`EngineError::ParseDex`] if the
    /// dex cannot be loaded.
    pub fn load(settings: EngineSettings) -> Result<Self, EngineError> {
        let dex = Dex::load(&settings.data_path)?;
        Ok(Self::with_dex(settings, dex))
    }

    /// Build an engine around an already loaded dex.
    #[must_use]
    pub fn with_dex(settings: EngineSettings, dex: Dex) -> Self {
        Self {
            settings,
            dex: Arc::new(dex),
            prng: None,
            scripts: Scripts::default(),
            debug: Rc::new(|message: &str| debug!(target: "teamgen_engine::debug", "{message}")),
        }
    }

    /// Seed the random source and register the engine scripts.
    ///
    /// The seed comes from the settings when set, otherwise from entropy.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AlreadyInitialized`] on a second call.
    pub fn init(&mut self) -> Result<(), EngineError> {
        if self.prng.is_some() {
            return Err(EngineError::AlreadyInitialized);
        }
        let prng = self.settings.seed.map_or_else(Prng::from_entropy, Prng::new);
        debug!(seed = %prng.initial_seed(), "engine initialized");
        self.prng = Some(prng);
        self.scripts = Scripts::standard();
        Ok(())
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.prng.is_some()
    }

    /// The seeded random source, once initialized.
    #[must_use]
    pub fn prng(&self) -> Option<&Prng> {
        self.prng.as_ref()
    }

    #[must_use]
    pub fn scripts(&self) -> &Scripts {
        &self.scripts
    }

    #[must_use]
    pub fn dex(&self) -> &Arc<Dex> {
        &self.dex
    }

    #[must_use]
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// The engine's debug hook. Logs at `debug` under the
    /// `teamgen_engine::debug` target unless overridden.
    #[must_use]
    pub fn debug_hook(&self) -> DebugHook {
        Rc::clone(&self.debug)
    }

    /// Attach this engine to a handle republished from it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotInitialized`] if `init` never ran.
    pub fn install(self, tools: &mut Tools) -> Result<(), EngineError> {
        let prng = self.prng.as_ref().ok_or(EngineError::NotInitialized)?;
        let installation = Installation {
            engine: ENGINE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            species: self.dex.species_count(),
            seed: prng.initial_seed(),
        };
        debug!(
            engine = installation.engine,
            species = installation.species,
            seed = %installation.seed,
            "engine installed"
        );
        tools.install(installation);
        Ok(())
    }
}

impl std::fmt::Debug for BattleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleEngine")
            .field("settings", &self.settings)
            .field("species", &self.dex.species_count())
            .field("prng", &self.prng)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::prng::Seed;
    use crate::scripts::tests::{SAMPLE_DEX, sample_dex};

    #[test]
    fn test_load_reads_data_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_DEX.as_bytes()).unwrap();
        let settings = EngineSettings {
            data_path: file.path().to_path_buf(),
            ..EngineSettings::default()
        };
        let engine = BattleEngine::load(settings).unwrap();
        assert_eq!(engine.dex().species_count(), sample_dex().species_count());
        assert!(!engine.is_initialized());
    }

    #[test]
    fn test_load_missing_dex_fails() {
        let settings = EngineSettings {
            data_path: "/nonexistent/randbats.json".into(),
            ..EngineSettings::default()
        };
        assert!(matches!(
            BattleEngine::load(settings),
            Err(EngineError::ReadDex { .. })
        ));
    }

    #[test]
    fn test_scripts_only_after_init() {
        let mut engine = BattleEngine::with_dex(EngineSettings::default(), sample_dex());
        assert!(engine.scripts().random_team().is_none());
        assert!(engine.prng().is_none());

        engine.init().unwrap();
        assert!(engine.scripts().random_team().is_some());
        assert!(engine.prng().is_some());
    }

    #[test]
    fn test_init_is_one_shot() {
        let mut engine = BattleEngine::with_dex(EngineSettings::default(), sample_dex());
        engine.init().unwrap();
        assert!(matches!(engine.init(), Err(EngineError::AlreadyInitialized)));
    }

    #[test]
    fn test_init_uses_configured_seed() {
        let settings = EngineSettings {
            seed: Some(Seed([4, 3, 2, 1])),
            ..EngineSettings::default()
        };
        let mut engine = BattleEngine::with_dex(settings, sample_dex());
        engine.init().unwrap();
        assert_eq!(engine.prng().unwrap().initial_seed(), Seed([4, 3, 2, 1]));
    }

    #[test]
    fn test_install_records_identity() {
        let settings = EngineSettings {
            seed: Some(Seed([1, 1, 1, 1])),
            ..EngineSettings::default()
        };
        let mut engine = BattleEngine::with_dex(settings, sample_dex());
        engine.init().unwrap();
        let species = engine.dex().species_count();
        let mut tools = Tools::republish(&engine).unwrap();
        engine.install(&mut tools).unwrap();

        let installation = tools.installation().unwrap();
        assert_eq!(installation.engine, ENGINE_NAME);
        assert_eq!(installation.species, species);
        assert_eq!(installation.seed, Seed([1, 1, 1, 1]));
    }
}
