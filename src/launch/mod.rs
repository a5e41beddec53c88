//! Debug launch configurations
//!
//! The host asks for a configuration in two phases: it holds a
//! [`LaunchTemplate`] (type, name, request) and right before starting a
//! session calls [`LaunchTemplate::resolve`] with the resolution outcome.
//! A failed resolution still yields a configuration, with `program` set to
//! [`ABORT_SENTINEL`] so the host cancels instead of launching garbage.

use std::path::PathBuf;

use serde::{Serialize, Serializer};

use crate::config::{AdapterConfig, Config};
use crate::domain::{Environment, ResolvedTarget};

/// Value of `program` telling the host to cancel the launch
pub const ABORT_SENTINEL: &str = "<abort>";

/// The fixed part of a launch configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTemplate {
    pub adapter_type: String,
    pub name: String,
    pub request: String,
}

impl From<&Config> for LaunchTemplate {
    fn from(config: &Config) -> Self {
        Self {
            adapter_type: config.adapter.adapter_type.clone(),
            name: config.launch.name.clone(),
            request: config.launch.request.clone(),
        }
    }
}

/// What the debugger should run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Program {
    Path(PathBuf),
    Abort,
}

impl Serialize for Program {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Program::Path(path) => serializer.serialize_str(&path.to_string_lossy()),
            Program::Abort => serializer.serialize_str(ABORT_SENTINEL),
        }
    }
}

/// A concrete launch configuration as handed to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchConfiguration {
    #[serde(rename = "type")]
    pub adapter_type: String,
    pub name: String,
    pub request: String,
    pub program: Program,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
    #[serde(skip_serializing_if = "Environment::is_empty")]
    pub env: Environment,
}

impl LaunchConfiguration {
    pub fn is_abort(&self) -> bool {
        self.program == Program::Abort
    }
}

impl LaunchTemplate {
    /// Fill in program, working directory and environment, or mark the
    /// configuration as aborted when there is no target.
    pub fn resolve(&self, target: Option<ResolvedTarget>) -> LaunchConfiguration {
        let (program, cwd, env) = match target {
            Some(target) => (
                Program::Path(target.artifact_path),
                Some(target.project_root),
                target.environment,
            ),
            None => (Program::Abort, None, Environment::new()),
        };

        LaunchConfiguration {
            adapter_type: self.adapter_type.clone(),
            name: self.name.clone(),
            request: self.request.clone(),
            program,
            cwd,
            env,
        }
    }
}

/// Adapter registration for hosts that launch the adapter as a process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdapterDefinition {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub command: String,
    pub args: Vec<String>,
}

impl From<&AdapterConfig> for AdapterDefinition {
    fn from(adapter: &AdapterConfig) -> Self {
        Self {
            kind: "executable",
            command: adapter.command.clone(),
            args: adapter.args.clone(),
        }
    }
}
