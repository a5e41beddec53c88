//! Build artifact matching
//!
//! A project counts as built when `<name>.runtimeconfig.json` exists anywhere
//! under `bin/<configuration>`. Each `<name>.dll` under the same tree is one
//! candidate artifact, normally one per target framework:
//!
//! ```text
//! Api/bin/Debug/net6.0/Api.dll
//! Api/bin/Debug/net8.0/Api.dll
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::discovery;
use crate::domain::{BuildArtifactSet, ProjectDescriptor};

/// Build configuration used when none is configured
pub const DEFAULT_BUILD_CONFIGURATION: &str = "Debug";

/// Root of a project's build output for one configuration
pub fn bin_root(project: &ProjectDescriptor, build_config: &str) -> PathBuf {
    project.root_path.join("bin").join(build_config)
}

/// Classify a project and collect its built DLLs.
pub fn match_artifacts(project: &ProjectDescriptor, build_config: &str) -> BuildArtifactSet {
    let bin_root = bin_root(project, build_config);
    let marker = format!("{}.runtimeconfig.json", project.name);

    if !bin_root.is_dir() || !discovery::contains_file(&bin_root, &marker) {
        debug!(project = %project.name, bin_root = %bin_root.display(), "project is not built");
        return BuildArtifactSet::unbuilt(project.clone());
    }

    let dll_name = format!("{}.dll", project.name);
    let artifact_paths = discovery::find_files(&bin_root, |name| name == dll_name);

    debug!(
        project = %project.name,
        artifacts = artifact_paths.len(),
        "project is built"
    );

    BuildArtifactSet {
        project: project.clone(),
        is_built: true,
        artifact_paths,
    }
}

/// The target-framework segment directly above `path`, if it looks like
/// `net<major>.<minor>` (platform suffixes such as `-windows` are kept).
pub fn target_framework(path: &Path) -> Option<&str> {
    let segment = path.parent()?.file_name()?.to_str()?;
    is_framework_segment(segment).then_some(segment)
}

fn is_framework_segment(segment: &str) -> bool {
    let Some(version) = segment.strip_prefix("net") else {
        return false;
    };
    let Some((major, rest)) = version.split_once('.') else {
        return false;
    };
    let minor_len = rest.chars().take_while(char::is_ascii_digit).count();

    !major.is_empty() && major.chars().all(|c| c.is_ascii_digit()) && minor_len > 0
}

/// Display label for an artifact: its framework segment, else the file stem.
pub fn artifact_label(path: &Path) -> String {
    if let Some(framework) = target_framework(path) {
        return framework.to_string();
    }

    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
