//! Configuration for dotnet-dap
//!
//! Configuration is read from YAML files:
//! - `<config_dir>/dotnet-dap/config.yaml` - global, per user
//! - `.dotnet-dap.yaml` - per workspace
//!
//! Every key is optional. Layers are applied field by field on top of the
//! built-in defaults, later layers winning:
//!
//! ```yaml
//! build_configuration: Release
//! project_suffix: .csproj
//! launch_settings_file: launchSettings.json
//! language_servers: [omnisharp, csharp_ls, roslyn]
//! adapter:
//!   type: coreclr
//!   command: /opt/netcoredbg/netcoredbg
//!   args: ["--interpreter=vscode"]
//! launch:
//!   name: Launch .NET project
//!   request: launch
//! ```

pub mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};

/// Effective configuration after all layers were applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Build configuration whose output tree is searched (`bin/<name>`)
    pub build_configuration: String,

    /// File-name suffix identifying project files
    pub project_suffix: String,

    /// File name of a project's launch settings
    pub launch_settings_file: String,

    /// Language servers whose reported root is trusted as workspace root
    pub language_servers: Vec<String>,

    pub adapter: AdapterConfig,

    pub launch: LaunchConfig,
}

/// Debug adapter executable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdapterConfig {
    /// Adapter type the launch configuration refers to
    #[serde(rename = "type")]
    pub adapter_type: String,
    pub command: String,
    pub args: Vec<String>,
}

/// Fixed fields of the launch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchConfig {
    pub name: String,
    pub request: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            build_configuration: crate::artifacts::DEFAULT_BUILD_CONFIGURATION.to_string(),
            project_suffix: ".csproj".to_string(),
            launch_settings_file: "launchSettings.json".to_string(),
            language_servers: vec![
                "omnisharp".to_string(),
                "csharp_ls".to_string(),
                "roslyn".to_string(),
            ],
            adapter: AdapterConfig::default(),
            launch: LaunchConfig::default(),
        }
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            adapter_type: "coreclr".to_string(),
            command: "netcoredbg".to_string(),
            args: vec!["--interpreter=vscode".to_string()],
        }
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            name: "Launch .NET project".to_string(),
            request: "launch".to_string(),
        }
    }
}

/// One configuration layer as written in a file; every field optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub build_configuration: Option<String>,
    pub project_suffix: Option<String>,
    pub launch_settings_file: Option<String>,
    pub language_servers: Option<Vec<String>>,
    pub adapter: Option<AdapterConfigFile>,
    pub launch: Option<LaunchConfigFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterConfigFile {
    #[serde(rename = "type")]
    pub adapter_type: Option<String>,
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaunchConfigFile {
    pub name: Option<String>,
    pub request: Option<String>,
}

impl ConfigFile {
    /// Parse a configuration layer from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(Self::parse_yaml(yaml)?)
    }

    /// An empty document is an empty layer
    pub(crate) fn parse_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }
}

fn apply<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl Config {
    /// Apply one layer: every value set in `layer` replaces the current one.
    #[must_use]
    pub fn merge(mut self, layer: ConfigFile) -> Self {
        apply(&mut self.build_configuration, layer.build_configuration);
        apply(&mut self.project_suffix, layer.project_suffix);
        apply(&mut self.launch_settings_file, layer.launch_settings_file);
        apply(&mut self.language_servers, layer.language_servers);

        if let Some(adapter) = layer.adapter {
            apply(&mut self.adapter.adapter_type, adapter.adapter_type);
            apply(&mut self.adapter.command, adapter.command);
            apply(&mut self.adapter.args, adapter.args);
        }

        if let Some(launch) = layer.launch {
            apply(&mut self.launch.name, launch.name);
            apply(&mut self.launch.request, launch.request);
        }

        self
    }

    /// Reject values no resolution could work with
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("build_configuration", &self.build_configuration),
            ("project_suffix", &self.project_suffix),
            ("launch_settings_file", &self.launch_settings_file),
            ("adapter.command", &self.adapter.command),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(error::config_invalid(format!("{key} must not be empty")));
            }
        }

        Ok(())
    }
}
