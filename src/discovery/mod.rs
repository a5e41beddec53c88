//! Project discovery for workspace directories
//!
//! This module handles:
//! - Finding project-definition files (by file-name suffix) under a root
//! - Locating a project's launch-settings file
//!
//! An unreadable root is not an error: it simply yields no projects.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::domain::ProjectDescriptor;

/// Build-output directories that never hold source-side configuration
const BUILD_OUTPUT_DIRS: &[&str] = &["bin", "obj"];

/// Find every project file under `root` whose name ends with `suffix`.
///
/// The match is case-sensitive and depth is unbounded. Results come back in
/// traversal order (entries sorted by file name within each directory).
pub fn find_projects(root: &Path, suffix: &str) -> Vec<ProjectDescriptor> {
    if !root.is_dir() {
        debug!(root = %root.display(), "workspace root is not a readable directory");
        return Vec::new();
    }

    let projects: Vec<ProjectDescriptor> = find_files(root, |name| name.ends_with(suffix))
        .iter()
        .filter_map(|path| ProjectDescriptor::from_project_file(path, suffix))
        .collect();

    debug!(
        root = %root.display(),
        count = projects.len(),
        "discovered project files"
    );

    projects
}

/// Find all regular files under `root` whose file name satisfies `predicate`.
///
/// Unreadable entries are skipped.
pub fn find_files<F>(root: &Path, predicate: F) -> Vec<PathBuf>
where
    F: Fn(&str) -> bool,
{
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_str().is_some_and(&predicate))
        .map(DirEntry::into_path)
        .collect()
}

/// Whether any regular file named exactly `file_name` exists under `root`.
pub fn contains_file(root: &Path, file_name: &str) -> bool {
    WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .any(|e| e.file_type().is_file() && e.file_name().to_str() == Some(file_name))
}

/// Locate the launch-settings file for a project.
///
/// Build-output trees are skipped and the shallowest match wins, which for a
/// regular SDK project is `Properties/launchSettings.json`.
pub fn find_launch_settings(project_root: &Path, file_name: &str) -> Option<PathBuf> {
    WalkDir::new(project_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_build_output_dir(e))
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file() && e.file_name().to_str() == Some(file_name))
        .min_by_key(DirEntry::depth)
        .map(DirEntry::into_path)
}

fn is_build_output_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| BUILD_OUTPUT_DIRS.contains(&name))
}
