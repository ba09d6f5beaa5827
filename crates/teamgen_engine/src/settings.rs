//! Engine settings.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::id::to_id;
use crate::prng::Seed;

/// Default location of the bundled dex, relative to the root directory.
pub const DEFAULT_DATA_PATH: &str = "data/randbats.json";

/// Default number of sets per team.
pub const DEFAULT_TEAM_SIZE: usize = 6;

/// Default level for species whose tier has no entry in the level table.
pub const DEFAULT_LEVEL: u8 = 80;

/// Settings consumed by [`crate::BattleEngine`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Path of the dex JSON file.
    pub data_path: PathBuf,
    /// Number of sets in each generated team.
    pub team_size: usize,
    /// Fixed PRNG seed. A fresh seed is drawn per run when unset.
    pub seed: Option<Seed>,
    /// Level scaling.
    pub levels: LevelSettings,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            team_size: DEFAULT_TEAM_SIZE,
            seed: None,
            levels: LevelSettings::default(),
        }
    }
}

impl EngineSettings {
    /// Resolve a relative `data_path` against `root`.
    #[must_use]
    pub fn with_root(mut self, root: &Path) -> Self {
        if self.data_path.is_relative() {
            self.data_path = root.join(&self.data_path);
        }
        self
    }
}

/// Level scaling by tier.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LevelSettings {
    /// Level used when a species has no fixed level and no tier entry.
    pub default: u8,
    /// Level per tier name (e.g. `"OU" = 74`).
    pub by_tier: BTreeMap<String, u8>,
}

impl Default for LevelSettings {
    fn default() -> Self {
        Self {
            default: DEFAULT_LEVEL,
            by_tier: BTreeMap::new(),
        }
    }
}

impl LevelSettings {
    /// The level for a species in `tier`. Tier names match by id, so
    /// `"LC Uber"` and `lcuber` are the same entry.
    #[must_use]
    pub fn for_tier(&self, tier: Option<&str>) -> u8 {
        let Some(tier) = tier.map(to_id) else {
            return self.default;
        };
        self.by_tier
            .iter()
            .find(|(name, _)| to_id(name) == tier)
            .map_or(self.default, |(_, level)| *level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.team_size, 6);
        assert_eq!(settings.data_path, PathBuf::from("data/randbats.json"));
        assert!(settings.seed.is_none());
        assert_eq!(settings.levels.default, 80);
    }

    #[test]
    fn test_with_root_only_rewrites_relative_paths() {
        let root = Path::new("/srv/teamgen");
        let relative = EngineSettings::default().with_root(root);
        assert_eq!(relative.data_path, root.join("data/randbats.json"));

        let absolute = EngineSettings {
            data_path: PathBuf::from("/opt/dex.json"),
            ..EngineSettings::default()
        }
        .with_root(root);
        assert_eq!(absolute.data_path, PathBuf::from("/opt/dex.json"));
    }

    #[test]
    fn test_level_for_tier() {
        let mut levels = LevelSettings::default();
        levels.by_tier.insert("OU".to_string(), 74);
        levels.by_tier.insert("LC Uber".to_string(), 86);
        assert_eq!(levels.for_tier(Some("OU")), 74);
        assert_eq!(levels.for_tier(Some("ou")), 74);
        assert_eq!(levels.for_tier(Some("LC Uber")), 86);
        assert_eq!(levels.for_tier(Some("PU")), 80);
        assert_eq!(levels.for_tier(None), 80);
    }
}
