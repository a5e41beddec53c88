//! Resolution of "a workspace directory" into "one runnable target"
//!
//! The pipeline for one launch request:
//!
//! 1. find project files under the workspace root
//! 2. keep the built ones (startup projects)
//! 3. attach the `"Project"` launch profile of each, where one exists
//! 4. pick a project: among profile-backed projects if there are any,
//!    otherwise among all startup projects
//! 5. pick one of the chosen project's framework builds
//!
//! Any step that comes up empty, and any cancelled prompt, ends the
//! resolution with `Ok(None)` after telling the user why. Nothing is cached:
//! every call re-reads the file system.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::artifacts;
use crate::config::Config;
use crate::discovery;
use crate::domain::{ResolvedTarget, StartupProject};
use crate::error::{DapError, Result};
use crate::launch_profile;
use crate::selection::{CandidateSelector, Notifier, Prompter};

/// File-layout settings the resolver works with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    pub build_configuration: String,
    pub project_suffix: String,
    pub launch_settings_file: String,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ResolverSettings {
    fn from(config: &Config) -> Self {
        Self {
            build_configuration: config.build_configuration.clone(),
            project_suffix: config.project_suffix.clone(),
            launch_settings_file: config.launch_settings_file.clone(),
        }
    }
}

/// Builder for [`Resolver`]; both collaborators are required
#[derive(Default)]
pub struct ResolverBuilder<'a> {
    settings: ResolverSettings,
    prompter: Option<&'a dyn Prompter>,
    notifier: Option<&'a dyn Notifier>,
}

impl<'a> ResolverBuilder<'a> {
    #[must_use]
    pub fn settings(mut self, settings: ResolverSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn prompter(mut self, prompter: &'a dyn Prompter) -> Self {
        self.prompter = Some(prompter);
        self
    }

    #[must_use]
    pub fn notifier(mut self, notifier: &'a dyn Notifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Fails with [`DapError::MissingCollaborator`] if a collaborator is unset.
    pub fn build(self) -> Result<Resolver<'a>> {
        let prompter = self.prompter.ok_or_else(|| missing("prompter"))?;
        let notifier = self.notifier.ok_or_else(|| missing("notifier"))?;

        Ok(Resolver {
            settings: self.settings,
            prompter,
            notifier,
        })
    }
}

fn missing(name: &str) -> DapError {
    DapError::MissingCollaborator {
        name: name.to_string(),
    }
}

/// Turns a workspace root into a [`ResolvedTarget`]
pub struct Resolver<'a> {
    settings: ResolverSettings,
    prompter: &'a dyn Prompter,
    notifier: &'a dyn Notifier,
}

impl<'a> Resolver<'a> {
    pub fn builder() -> ResolverBuilder<'a> {
        ResolverBuilder::default()
    }

    fn selector(&self) -> CandidateSelector<'_> {
        CandidateSelector::new(self.prompter, self.notifier)
    }

    /// Built projects under `root`, each with its launch profile if one parses.
    pub fn startup_projects(&self, root: &Path) -> Vec<StartupProject> {
        discovery::find_projects(root, &self.settings.project_suffix)
            .iter()
            .map(|project| artifacts::match_artifacts(project, &self.settings.build_configuration))
            .filter(|set| set.is_built)
            .map(|artifacts| {
                let profile = discovery::find_launch_settings(
                    &artifacts.project.root_path,
                    &self.settings.launch_settings_file,
                )
                .and_then(|path| launch_profile::parse(&path));

                StartupProject { artifacts, profile }
            })
            .collect()
    }

    /// Resolve what to run in the workspace at `root`.
    ///
    /// `Ok(None)` means "abort the launch": nothing runnable was found or the
    /// user cancelled. Errors are reserved for prompt failures.
    pub fn resolve(&self, root: &Path) -> Result<Option<ResolvedTarget>> {
        let startup = self.startup_projects(root);
        debug!(root = %root.display(), count = startup.len(), "startup projects");

        if startup.is_empty() {
            self.notifier.notify(&format!(
                "No startup projects found in {}. Build a project first (bin/{}).",
                root.display(),
                self.settings.build_configuration
            ));
            return Ok(None);
        }

        let Some(project) = self.select_project(startup)? else {
            debug!("no project selected");
            return Ok(None);
        };

        let Some(artifact) = self.select_artifact(&project)? else {
            debug!(project = %project.name(), "no artifact selected");
            return Ok(None);
        };

        let StartupProject { artifacts, profile } = project;
        let target = ResolvedTarget {
            project_root: artifacts.project.root_path,
            artifact_path: artifact,
            environment: profile.map(|p| p.environment).unwrap_or_default(),
        };

        info!(
            program = %target.artifact_path.display(),
            cwd = %target.project_root.display(),
            "resolved launch target"
        );
        Ok(Some(target))
    }

    /// Profile-backed projects take precedence; projects without a profile
    /// are only offered when no project has one.
    fn select_project(&self, startup: Vec<StartupProject>) -> Result<Option<StartupProject>> {
        let (with_profile, without_profile): (Vec<_>, Vec<_>) =
            startup.into_iter().partition(StartupProject::has_profile);

        let candidates = if with_profile.is_empty() {
            without_profile
        } else {
            debug!(
                skipped = without_profile.len(),
                "choosing among profile-backed projects"
            );
            with_profile
        };

        self.selector().select_one(
            candidates,
            |project| project.name().to_string(),
            "Select project to debug",
            "No startup projects found.",
        )
    }

    fn select_artifact(&self, project: &StartupProject) -> Result<Option<PathBuf>> {
        // The build tree may have changed since discovery.
        let present: Vec<PathBuf> = project
            .artifacts
            .artifact_paths
            .iter()
            .filter(|path| path.is_file())
            .cloned()
            .collect();

        self.selector().select_one(
            present,
            |path| artifacts::artifact_label(path),
            &format!("Select target framework for {}", project.name()),
            &format!(
                "No built {}.dll found for {}. Rebuild the project and try again.",
                project.name(),
                project.name()
            ),
        )
    }
}
