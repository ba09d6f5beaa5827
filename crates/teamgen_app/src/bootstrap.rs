//! One-shot startup.
//!
//! Startup runs in a fixed order, encoded as a typestate so that no step can
//! be skipped or repeated:
//!
//! 1. `Uninitialized` → [`Bootstrap::load_config`] → `ConfigReady`
//!    (provisions `config/config.toml` from the template if missing).
//! 2. `ConfigReady` → [`Bootstrap::load_engine`] → `EngineReady`
//!    (reads the dex, runs the engine initializer).
//! 3. `EngineReady` → [`Bootstrap::finish`] → [`Context`]
//!    (republishes capabilities onto [`Tools`], silences the engine debug
//!    hook, lets the engine install itself).
//!
//! Identifier normalization needs no setup: `teamgen_engine::to_id` is a
//! plain function and is usable before any of these steps.

use anyhow::{Context as _, Result};
use tracing::{debug, info};

use teamgen_config::{ConfigLoader, Provisioned, TeamgenConfig};
use teamgen_engine::{BattleEngine, Tools};

/// Nothing loaded yet.
#[derive(Debug)]
pub struct Uninitialized {
    loader: ConfigLoader,
}

/// Configuration loaded.
#[derive(Debug)]
pub struct ConfigReady {
    config: TeamgenConfig,
}

/// Engine loaded and initialized.
#[derive(Debug)]
pub struct EngineReady {
    config: TeamgenConfig,
    engine: BattleEngine,
}

/// Startup in progress, in state `S`.
#[derive(Debug)]
pub struct Bootstrap<S> {
    state: S,
}

/// Everything the generation loop needs, built once.
#[derive(Debug)]
pub struct Context {
    config: TeamgenConfig,
    tools: Tools,
}

impl Context {
    #[must_use]
    pub fn config(&self) -> &TeamgenConfig {
        &self.config
    }

    #[cfg(test)]
    #[must_use]
    pub fn tools(&self) -> &Tools {
        &self.tools
    }

    /// The capability handle, mutable so the generator can advance its
    /// random source.
    pub fn tools_mut(&mut self) -> &mut Tools {
        &mut self.tools
    }
}

impl Bootstrap<Uninitialized> {
    #[must_use]
    pub fn new(loader: ConfigLoader) -> Self {
        Self {
            state: Uninitialized { loader },
        }
    }

    /// Provision and load the configuration.
    ///
    /// # Errors
    ///
    /// Fails on any configuration error other than a missing config file
    /// with a template present.
    pub fn load_config(self) -> Result<Bootstrap<ConfigReady>> {
        let loader = self.state.loader;
        let loaded = loader.load().with_context(|| {
            format!("failed to load config under {}", loader.root().display())
        })?;
        if loaded.provisioned == Provisioned::Created {
            debug!(path = %loaded.path.display(), "provisioned default config");
        }
        Ok(Bootstrap {
            state: ConfigReady {
                config: loaded.config,
            },
        })
    }
}

impl Bootstrap<ConfigReady> {
    /// Load the engine module and run its initializer.
    ///
    /// # Errors
    ///
    /// Fails if the dex cannot be loaded or the engine cannot initialize.
    pub fn load_engine(self) -> Result<Bootstrap<EngineReady>> {
        let config = self.state.config;
        let mut engine = BattleEngine::load(config.engine.clone()).with_context(|| {
            format!(
                "failed to load engine data from {}",
                config.engine.data_path.display()
            )
        })?;
        engine.init().context("failed to initialize engine")?;
        debug!(species = engine.dex().species_count(), "engine ready");
        Ok(Bootstrap {
            state: EngineReady { config, engine },
        })
    }
}

impl Bootstrap<EngineReady> {
    /// Republish the engine capabilities, silence debug output and install
    /// the engine on the handle.
    ///
    /// # Errors
    ///
    /// Fails if the engine refuses to republish or install.
    pub fn finish(self) -> Result<Context> {
        let EngineReady { config, engine } = self.state;
        let mut tools =
            Tools::republish(&engine).context("failed to republish engine capabilities")?;
        tools.suppress_debug();
        engine
            .install(&mut tools)
            .context("failed to install engine")?;
        if let Some(installation) = tools.installation() {
            info!(
                engine = installation.engine,
                version = installation.version,
                species = installation.species,
                seed = %installation.seed,
                "engine installed"
            );
        }
        Ok(Context { config, tools })
    }
}

/// Run every startup step in order.
///
/// # Errors
///
/// Returns the first failing step's error.
pub fn bootstrap(loader: ConfigLoader) -> Result<Context> {
    Bootstrap::new(loader).load_config()?.load_engine()?.finish()
}
