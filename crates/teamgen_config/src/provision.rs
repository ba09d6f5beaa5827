//! Copy-on-missing provisioning of the configuration file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ConfigError;

/// Directory under the root that holds configuration.
pub const CONFIG_DIR: &str = "config";

/// The live configuration file name.
pub const CONFIG_FILE: &str = "config.toml";

/// The template the live file is cloned from.
pub const TEMPLATE_FILE: &str = "config-example.toml";

/// Locations of the live configuration and its template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub config: PathBuf,
    pub template: PathBuf,
}

impl ConfigPaths {
    /// The standard layout under `root`.
    #[must_use]
    pub fn under(root: &Path) -> Self {
        let dir = root.join(CONFIG_DIR);
        Self {
            config: dir.join(CONFIG_FILE),
            template: dir.join(TEMPLATE_FILE),
        }
    }
}

/// Whether the configuration file was already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    Existing,
    /// Cloned from the template during this call.
    Created,
}

/// Read the configuration file, cloning it from the template first if it
/// does not exist.
///
/// Only a "not found" error on the configuration file triggers the copy;
/// every other read failure is returned as is. An existing file is never
/// touched.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if the file exists but cannot be read,
/// [`ConfigError::TemplateMissing`] if both files are absent, and
/// [`ConfigError::Copy`] if the template cannot be cloned.
pub fn read_or_provision(paths: &ConfigPaths) -> Result<(String, Provisioned), ConfigError> {
    match std::fs::read_to_string(&paths.config) {
        Ok(text) => Ok((text, Provisioned::Existing)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            copy_template(paths)?;
            let text = std::fs::read_to_string(&paths.config).map_err(|source| {
                ConfigError::Read {
                    path: paths.config.clone(),
                    source,
                }
            })?;
            Ok((text, Provisioned::Created))
        }
        Err(source) => Err(ConfigError::Read {
            path: paths.config.clone(),
            source,
        }),
    }
}

fn copy_template(paths: &ConfigPaths) -> Result<(), ConfigError> {
    let copy_error = |source: std::io::Error| ConfigError::Copy {
        from: paths.template.clone(),
        to: paths.config.clone(),
        source,
    };
    let bytes = std::fs::read(&paths.template).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ConfigError::TemplateMissing {
                path: paths.template.clone(),
            }
        } else {
            copy_error(e)
        }
    })?;
    std::fs::write(&paths.config, &bytes).map_err(copy_error)?;
    info!(
        from = %paths.template.display(),
        to = %paths.config.display(),
        "config created from template"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "# template\n[engine]\nteam_size = 6\n";

    fn layout() -> (tempfile::TempDir, ConfigPaths) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(CONFIG_DIR)).unwrap();
        let paths = ConfigPaths::under(dir.path());
        (dir, paths)
    }

    #[test]
    fn test_paths_layout() {
        let paths = ConfigPaths::under(Path::new("/srv/teamgen"));
        assert_eq!(paths.config, PathBuf::from("/srv/teamgen/config/config.toml"));
        assert_eq!(
            paths.template,
            PathBuf::from("/srv/teamgen/config/config-example.toml")
        );
    }

    #[test]
    fn test_missing_config_is_cloned_from_template() {
        let (_dir, paths) = layout();
        std::fs::write(&paths.template, TEMPLATE).unwrap();

        let (text, provisioned) = read_or_provision(&paths).unwrap();
        assert_eq!(provisioned, Provisioned::Created);
        assert_eq!(text, TEMPLATE);
        assert_eq!(
            std::fs::read(&paths.config).unwrap(),
            std::fs::read(&paths.template).unwrap()
        );
    }

    #[test]
    fn test_existing_config_is_left_alone() {
        let (_dir, paths) = layout();
        std::fs::write(&paths.template, TEMPLATE).unwrap();
        std::fs::write(&paths.config, "[engine]\nteam_size = 3\n").unwrap();

        let (text, provisioned) = read_or_provision(&paths).unwrap();
        assert_eq!(provisioned, Provisioned::Existing);
        assert_eq!(text, "[engine]\nteam_size = 3\n");
        assert_eq!(
            std::fs::read_to_string(&paths.config).unwrap(),
            "[engine]\nteam_size = 3\n"
        );
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let (_dir, paths) = layout();
        std::fs::write(&paths.template, TEMPLATE).unwrap();

        read_or_provision(&paths).unwrap();
        // A template edit after provisioning must not leak into the live file.
        std::fs::write(&paths.template, "[engine]\nteam_size = 1\n").unwrap();
        let (text, provisioned) = read_or_provision(&paths).unwrap();
        assert_eq!(provisioned, Provisioned::Existing);
        assert_eq!(text, TEMPLATE);
    }

    #[test]
    fn test_deleted_config_is_recreated() {
        let (_dir, paths) = layout();
        std::fs::write(&paths.template, TEMPLATE).unwrap();
        read_or_provision(&paths).unwrap();

        std::fs::remove_file(&paths.config).unwrap();
        let (_, provisioned) = read_or_provision(&paths).unwrap();
        assert_eq!(provisioned, Provisioned::Created);
        assert_eq!(std::fs::read_to_string(&paths.config).unwrap(), TEMPLATE);
    }

    #[test]
    fn test_missing_template_is_fatal() {
        let (_dir, paths) = layout();
        let result = read_or_provision(&paths);
        assert!(matches!(result, Err(ConfigError::TemplateMissing { .. })));
        assert!(!paths.config.exists());
    }

    #[test]
    fn test_other_read_errors_are_not_recovered() {
        let (_dir, paths) = layout();
        std::fs::write(&paths.template, TEMPLATE).unwrap();
        // A directory where the file should be: exists, but is unreadable as text.
        std::fs::create_dir(&paths.config).unwrap();

        let result = read_or_provision(&paths);
        assert!(matches!(result, Err(ConfigError::Read { .. })));
        assert!(paths.config.is_dir());
    }
}
