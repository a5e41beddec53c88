//! Configuration loading and layering
//!
//! Priority order (later sources override earlier ones, key by key):
//! 1. Built-in defaults
//! 2. Global config.yaml from `<config_dir>/dotnet-dap/` (if exists)
//! 3. Workspace .dotnet-dap.yaml (if exists)
//! 4. Command-line overrides

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Config, ConfigFile};
use crate::error::{self, Result};

/// Workspace-level configuration file name
pub const WORKSPACE_CONFIG_FILE: &str = ".dotnet-dap.yaml";

/// Global configuration file name inside the global directory
pub const GLOBAL_CONFIG_FILE: &str = "config.yaml";

/// Environment variable overriding the global configuration directory
pub const CONFIG_DIR_ENV: &str = "DOTNET_DAP_CONFIG_DIR";

/// Layered configuration loader
pub struct ConfigLoader {
    /// Directory searched for the workspace configuration file
    workspace_dir: PathBuf,

    /// Directory holding the global configuration file, if any
    global_dir: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader for `workspace_dir` using the default global directory
    pub fn new(workspace_dir: impl Into<PathBuf>) -> Self {
        Self {
            workspace_dir: workspace_dir.into(),
            global_dir: default_global_dir(),
        }
    }

    /// Use `dir` as the global configuration directory instead
    #[must_use]
    pub fn with_global_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.global_dir = dir;
        self
    }

    /// Load all file layers
    pub fn load(&self) -> Result<Config> {
        self.load_with(ConfigFile::default())
    }

    /// Load all file layers, then apply `overrides` on top
    pub fn load_with(&self, overrides: ConfigFile) -> Result<Config> {
        let mut config = Config::default();

        if let Some(global_dir) = &self.global_dir {
            if let Some(layer) = read_layer(&global_dir.join(GLOBAL_CONFIG_FILE))? {
                config = config.merge(layer);
            }
        }

        if let Some(layer) = read_layer(&self.workspace_dir.join(WORKSPACE_CONFIG_FILE))? {
            config = config.merge(layer);
        }

        let config = config.merge(overrides);
        config.validate()?;

        debug!(?config, "configuration loaded");
        Ok(config)
    }
}

/// `$DOTNET_DAP_CONFIG_DIR`, else `<config_dir>/dotnet-dap`
pub fn default_global_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|dir| dir.join("dotnet-dap"))
}

/// Read one layer; a missing file is no layer
fn read_layer(path: &Path) -> Result<Option<ConfigFile>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| error::config_read_failed(path.display().to_string(), e.to_string()))?;

    let layer = ConfigFile::parse_yaml(&content)
        .map_err(|e| error::config_parse_failed(path.display().to_string(), e.to_string()))?;

    debug!(path = %path.display(), "read configuration layer");
    Ok(Some(layer))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::DapError;
    use crate::test_fixtures::{create_temp_dir, write_file};

    #[test]
    fn test_no_files_gives_defaults() {
        let temp = create_temp_dir();

        let config = ConfigLoader::new(temp.path())
            .with_global_dir(None)
            .load()
            .unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_workspace_overrides_global() {
        let temp = create_temp_dir();
        let global = temp.path().join("global");
        let workspace = temp.path().join("workspace");
        write_file(
            &global.join(GLOBAL_CONFIG_FILE),
            "build_configuration: Release\nadapter:\n  command: /usr/local/bin/netcoredbg\n",
        );
        write_file(
            &workspace.join(WORKSPACE_CONFIG_FILE),
            "build_configuration: Staging\n",
        );

        let config = ConfigLoader::new(&workspace)
            .with_global_dir(Some(global))
            .load()
            .unwrap();

        assert_eq!(config.build_configuration, "Staging");
        assert_eq!(config.adapter.command, "/usr/local/bin/netcoredbg");
    }

    #[test]
    fn test_overrides_win_over_files() {
        let temp = create_temp_dir();
        write_file(
            &temp.path().join(WORKSPACE_CONFIG_FILE),
            "build_configuration: Staging\n",
        );

        let overrides = ConfigFile {
            build_configuration: Some("Release".to_string()),
            ..ConfigFile::default()
        };
        let config = ConfigLoader::new(temp.path())
            .with_global_dir(None)
            .load_with(overrides)
            .unwrap();

        assert_eq!(config.build_configuration, "Release");
    }

    #[test]
    fn test_invalid_yaml_reports_path() {
        let temp = create_temp_dir();
        write_file(
            &temp.path().join(WORKSPACE_CONFIG_FILE),
            "build_configuration: [unclosed\n",
        );

        let err = ConfigLoader::new(temp.path())
            .with_global_dir(None)
            .load()
            .unwrap_err();

        assert!(matches!(err, DapError::ConfigParseFailed { .. }));
        assert!(err.to_string().contains(WORKSPACE_CONFIG_FILE));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let temp = create_temp_dir();
        write_file(&temp.path().join(WORKSPACE_CONFIG_FILE), "project_suffix: ' '\n");

        let err = ConfigLoader::new(temp.path())
            .with_global_dir(None)
            .load()
            .unwrap_err();

        assert!(matches!(err, DapError::ConfigInvalid { .. }));
    }
}
