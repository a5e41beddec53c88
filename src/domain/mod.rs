//! Domain types shared by the resolution pipeline
//!
//! Every value here is created fresh for one resolution and dropped once the
//! [`ResolvedTarget`] (or nothing) has been handed back to the caller.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Environment variables passed to the debuggee
pub type Environment = BTreeMap<String, String>;

/// A project-definition file found in the workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptor {
    /// Project name: the file name without the project-file suffix
    pub name: String,

    /// Directory containing the project file
    pub root_path: PathBuf,

    /// Full path of the project file itself
    pub project_file_path: PathBuf,
}

impl ProjectDescriptor {
    /// Build a descriptor from a project file path, stripping `suffix` from the
    /// file name. Returns `None` when the file name does not end with `suffix`
    /// or the path has no parent directory.
    pub fn from_project_file(path: &Path, suffix: &str) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        let name = file_name.strip_suffix(suffix)?;
        let root_path = path.parent()?.to_path_buf();

        Some(Self {
            name: name.to_string(),
            root_path,
            project_file_path: path.to_path_buf(),
        })
    }
}

/// Build outputs found for one project
///
/// When `is_built` is false, `artifact_paths` is always empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifactSet {
    pub project: ProjectDescriptor,
    pub is_built: bool,
    pub artifact_paths: Vec<PathBuf>,
}

impl BuildArtifactSet {
    /// An artifact set for a project with no completed build
    pub fn unbuilt(project: ProjectDescriptor) -> Self {
        Self {
            project,
            is_built: false,
            artifact_paths: Vec::new(),
        }
    }
}

/// The first `"Project"` entry of a launch-settings document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchProfile {
    /// Profile key in the `profiles` object
    pub name: String,

    /// Value of `commandName`; always `"Project"` for parsed profiles
    pub command_kind: String,

    /// Derived environment, see `launch_profile::derive_environment`
    pub environment: Environment,
}

/// A built project, optionally backed by a launch profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupProject {
    pub artifacts: BuildArtifactSet,
    pub profile: Option<LaunchProfile>,
}

impl StartupProject {
    pub fn name(&self) -> &str {
        &self.artifacts.project.name
    }

    pub fn root(&self) -> &Path {
        &self.artifacts.project.root_path
    }

    pub fn has_profile(&self) -> bool {
        self.profile.is_some()
    }
}

/// What to run and how: the terminal output of a resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTarget {
    pub project_root: PathBuf,
    pub artifact_path: PathBuf,
    pub environment: Environment,
}
