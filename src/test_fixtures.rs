//! Test fixtures for building .NET-shaped workspaces on disk.
//!
//! A "project" here is just the files the resolver looks at: the project
//! file, the build-output tree under `bin/<configuration>/<framework>/` and
//! optionally `Properties/launchSettings.json`.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, create_project, build_project};
//!
//! let temp = create_temp_dir();
//! let api = create_project(temp.path(), "src/Api", "Api");
//! build_project(&api, "Api", "Debug", "net8.0");
//! ```

#![allow(clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, content).expect("Failed to write file");
}

/// Create `<root>/<rel_dir>/<name>.csproj` and return the project directory.
pub fn create_project(root: &Path, rel_dir: &str, name: &str) -> PathBuf {
    let project_dir = root.join(rel_dir);
    write_file(
        &project_dir.join(format!("{name}.csproj")),
        "<Project Sdk=\"Microsoft.NET.Sdk\"></Project>\n",
    );
    project_dir
}

/// Simulate a completed build: writes both the runtime-configuration marker
/// and the DLL under `bin/<configuration>/<framework>/`. Returns the DLL path.
pub fn build_project(project_dir: &Path, name: &str, configuration: &str, framework: &str) -> PathBuf {
    let out_dir = project_dir.join("bin").join(configuration).join(framework);
    write_file(&out_dir.join(format!("{name}.runtimeconfig.json")), "{}");
    write_dll(project_dir, name, configuration, framework)
}

/// Write only the DLL, without the runtime-configuration marker.
pub fn write_dll(project_dir: &Path, name: &str, configuration: &str, framework: &str) -> PathBuf {
    let dll = project_dir
        .join("bin")
        .join(configuration)
        .join(framework)
        .join(format!("{name}.dll"));
    write_file(&dll, "MZ");
    dll
}

/// Write `Properties/launchSettings.json` for a project.
pub fn write_launch_settings(project_dir: &Path, content: &str) -> PathBuf {
    let path = project_dir.join("Properties").join("launchSettings.json");
    write_file(&path, content);
    path
}

/// A launch-settings document with one `"Project"` profile.
pub fn project_profile_json(profile: &str, application_url: &str) -> String {
    format!(
        r#"{{
  "profiles": {{
    "{profile}": {{
      "commandName": "Project",
      "applicationUrl": "{application_url}"
    }}
  }}
}}"#
    )
}
