//! The capability handle.
//!
//! [`Tools`] is the single value the generation loop talks to. It is built
//! from an initialized [`BattleEngine`] by [`Tools::republish`], which copies
//! the engine's capabilities onto it: the seeded random source (with its
//! frame step), the dex, and the `random_team` script. The engine then
//! attaches its identity through [`BattleEngine::install`]; until that
//! happens the handle refuses to generate.

use std::rc::Rc;
use std::sync::Arc;

use serde::Serialize;

use crate::dex::Dex;
use crate::engine::BattleEngine;
use crate::error::EngineError;
use crate::prng::{Prng, Seed};
use crate::settings::EngineSettings;
use crate::team::Team;

/// Signature of the team-generation script.
pub type RandomTeamFn = fn(&mut Tools) -> Result<Team, EngineError>;

/// Diagnostic output hook.
pub type DebugHook = Rc<dyn Fn(&str)>;

/// Identity an engine attaches to the handle on install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    pub engine: &'static str,
    pub version: &'static str,
    /// Number of species in the engine's dex.
    pub species: usize,
    /// The seed the engine was initialized with.
    pub seed: Seed,
}

/// A source of serializable teams.
///
/// The generation loop is written against this trait so it can drive the
/// engine handle or any other generator.
pub trait TeamGenerator {
    type Team: Serialize;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Produce the next team.
    ///
    /// # Errors
    ///
    /// Returns the generator's error when a team cannot be produced.
    fn generate(&mut self) -> Result<Self::Team, Self::Error>;
}

/// The capability handle.
pub struct Tools {
    prng: Prng,
    dex: Arc<Dex>,
    settings: EngineSettings,
    random_team: RandomTeamFn,
    debug: DebugHook,
    installation: Option<Installation>,
}

impl Tools {
    /// Copy the capabilities of an initialized engine onto a new handle.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotInitialized`] if `engine.init()` has not run,
    /// since the random source and the `random_team` script only exist after
    /// initialization.
    pub fn republish(engine: &BattleEngine) -> Result<Self, EngineError> {
        let prng = engine.prng().ok_or(EngineError::NotInitialized)?.clone();
        let random_team = engine
            .scripts()
            .random_team()
            .ok_or(EngineError::NotInitialized)?;
        Ok(Self {
            prng,
            dex: Arc::clone(engine.dex()),
            settings: engine.settings().clone(),
            random_team,
            debug: engine.debug_hook(),
            installation: None,
        })
    }

    /// Replace the debug hook.
    pub fn set_debug(&mut self, hook: DebugHook) {
        self.debug = hook;
    }

    /// Silence the debug hook.
    pub fn suppress_debug(&mut self) {
        self.debug = Rc::new(|_: &str| {});
    }

    /// Emit a diagnostic line through the current hook.
    pub fn debug(&self, message: &str) {
        (self.debug)(message);
    }

    /// Record the engine that installed itself on this handle.
    pub fn install(&mut self, installation: Installation) {
        self.installation = Some(installation);
    }

    #[must_use]
    pub fn installation(&self) -> Option<&Installation> {
        self.installation.as_ref()
    }

    /// A float in `[0, 1)` from the republished random source.
    pub fn random(&mut self) -> f64 {
        self.prng.random()
    }

    /// Advance the random source by one frame.
    pub fn next_frame(&mut self) {
        self.prng.next_frame();
    }

    /// Mutable access to the random source.
    pub fn prng_mut(&mut self) -> &mut Prng {
        &mut self.prng
    }

    #[must_use]
    pub fn dex(&self) -> &Arc<Dex> {
        &self.dex
    }

    #[must_use]
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Run the republished `random_team` script.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotInstalled`] before the engine has installed
    /// itself, otherwise whatever the script returns.
    pub fn random_team(&mut self) -> Result<Team, EngineError> {
        if self.installation.is_none() {
            return Err(EngineError::NotInstalled);
        }
        (self.random_team)(self)
    }
}

impl std::fmt::Debug for Tools {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tools")
            .field("prng", &self.prng)
            .field("species", &self.dex.species_count())
            .field("settings", &self.settings)
            .field("installation", &self.installation)
            .finish_non_exhaustive()
    }
}

impl TeamGenerator for Tools {
    type Team = Team;
    type Error = EngineError;

    fn generate(&mut self) -> Result<Team, EngineError> {
        self.random_team()
    }
}
