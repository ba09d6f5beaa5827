//! Layered configuration loading.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use teamgen_engine::EngineSettings;

use crate::error::ConfigError;
use crate::provision::{self, ConfigPaths, Provisioned};

/// Prefix of environment overrides, e.g. `TEAMGEN_ENGINE__TEAM_SIZE=3`.
pub const ENV_PREFIX: &str = "TEAMGEN";

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeamgenConfig {
    pub engine: EngineSettings,
}

/// A loaded configuration and how it came to exist.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub config: TeamgenConfig,
    pub provisioned: Provisioned,
    pub path: PathBuf,
}

/// Loads `<root>/config/config.toml`, provisioning it if needed.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    root: PathBuf,
    env: Option<config::Map<String, String>>,
}

impl ConfigLoader {
    /// A loader reading overrides from the process environment.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            env: None,
        }
    }

    /// Read overrides from `vars` instead of the process environment.
    #[must_use]
    pub fn with_env(mut self, vars: config::Map<String, String>) -> Self {
        self.env = Some(vars);
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn paths(&self) -> ConfigPaths {
        ConfigPaths::under(&self.root)
    }

    /// Provision and load the configuration.
    ///
    /// Relative paths in the result are resolved against the root.
    ///
    /// # Errors
    ///
    /// Returns any provisioning error from
    /// [`provision::read_or_provision`], or [`ConfigError::Invalid`] if the
    /// file or an override does not deserialize.
    pub fn load(&self) -> Result<Loaded, ConfigError> {
        let paths = self.paths();
        let (text, provisioned) = provision::read_or_provision(&paths)?;

        let raw: TeamgenConfig = config::Config::builder()
            .add_source(config::File::from_str(&text, config::FileFormat::Toml))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(self.env.clone()),
            )
            .build()?
            .try_deserialize()?;

        let config = TeamgenConfig {
            engine: raw.engine.with_root(&self.root),
        };
        debug!(
            path = %paths.config.display(),
            ?provisioned,
            data_path = %config.engine.data_path.display(),
            team_size = config.engine.team_size,
            "config loaded"
        );

        Ok(Loaded {
            config,
            provisioned,
            path: paths.config,
        })
    }
}
