//! Adapter command implementation

use std::path::PathBuf;

use crate::commands::helpers::resolve_workspace_path;
use crate::config::ConfigLoader;
use crate::error::Result;
use crate::launch::AdapterDefinition;

/// Print the adapter definition as JSON
pub fn run(workspace: Option<PathBuf>) -> Result<()> {
    let start_dir = resolve_workspace_path(workspace)?;
    let config = ConfigLoader::new(start_dir).load()?;

    let definition = AdapterDefinition::from(&config.adapter);
    println!("{}", serde_json::to_string_pretty(&definition)?);

    Ok(())
}
