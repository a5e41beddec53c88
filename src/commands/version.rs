//! Version command implementation
//!
//! Besides the version, shows where configuration is looked up so a user can
//! tell which files shape the launch configuration.

use std::path::PathBuf;

use crate::config::loader::{GLOBAL_CONFIG_FILE, WORKSPACE_CONFIG_FILE, default_global_dir};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("dotnet-dap {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Configuration:");
    println!("  Global: {}", describe_global(global_config_path()));
    println!("  Workspace: {WORKSPACE_CONFIG_FILE}");
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", if cfg!(debug_assertions) { "debug" } else { "release" });

    Ok(())
}

fn global_config_path() -> Option<PathBuf> {
    default_global_dir().map(|dir| dir.join(GLOBAL_CONFIG_FILE))
}

fn describe_global(path: Option<PathBuf>) -> String {
    match path {
        Some(path) if path.is_file() => path.display().to_string(),
        Some(path) => format!("{} (not present)", path.display()),
        None => "no configuration directory".to_string(),
    }
}
