//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::cli::DiscoveryArgs;
use crate::config::{Config, ConfigFile, ConfigLoader};
use crate::error::{self, Result};
use crate::workspace;

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| error::io_error(format!("Failed to get current directory: {e}"))),
    }
}

/// Load configuration for `start_dir`, with command-line overrides applied
pub fn load_config(start_dir: &Path, discovery: &DiscoveryArgs) -> Result<Config> {
    let overrides = ConfigFile {
        build_configuration: discovery.configuration.clone(),
        ..ConfigFile::default()
    };

    ConfigLoader::new(start_dir).load_with(overrides)
}

/// Configuration plus the workspace root discovery starts from
pub struct DiscoveryContext {
    pub config: Config,
    pub root: PathBuf,
}

impl DiscoveryContext {
    pub fn new(workspace: Option<PathBuf>, discovery: &DiscoveryArgs) -> Result<Self> {
        let start_dir = resolve_workspace_path(workspace)?;
        let config = load_config(&start_dir, discovery)?;
        let root = workspace::determine_root(&discovery.lsp_roots, &config.language_servers, &start_dir);

        Ok(Self { config, root })
    }
}
