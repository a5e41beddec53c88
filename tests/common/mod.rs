//! Common test utilities for dotnet-dap integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway workspace with .NET-shaped projects on disk
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("workspace");
        std::fs::create_dir_all(&path).expect("Failed to create workspace directory");
        // The binary canonicalizes the root, so expected paths must match it
        let path = dunce::canonicalize(&path).expect("Failed to canonicalize workspace");
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Create `<dir>/<name>.csproj` and return the project directory
    pub fn create_project(&self, dir: &str, name: &str) -> PathBuf {
        self.write_file(
            &format!("{dir}/{name}.csproj"),
            "<Project Sdk=\"Microsoft.NET.Sdk\"></Project>\n",
        );
        self.path.join(dir)
    }

    /// Simulate a completed build and return the DLL path
    pub fn build_project(&self, dir: &str, name: &str, configuration: &str, framework: &str) -> PathBuf {
        let out = format!("{dir}/bin/{configuration}/{framework}");
        self.write_file(&format!("{out}/{name}.runtimeconfig.json"), "{}");
        self.write_file(&format!("{out}/{name}.dll"), "MZ")
    }

    /// Write `Properties/launchSettings.json` for the project in `dir`
    pub fn write_launch_settings(&self, dir: &str, content: &str) -> PathBuf {
        self.write_file(&format!("{dir}/Properties/launchSettings.json"), content)
    }

    /// Directory used as the global configuration directory
    pub fn global_config_dir(&self) -> PathBuf {
        self.temp.path().join("global-config")
    }

    /// Command running the real binary inside this workspace
    pub fn cmd(&self) -> Command {
        dotnet_dap_cmd_for_workspace(&self.path, &self.global_config_dir())
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The dotnet-dap binary, isolated from user configuration
#[allow(deprecated)]
pub fn dotnet_dap_cmd_for_workspace(workspace: &Path, global_config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dotnet-dap").expect("binary built");
    cmd.current_dir(workspace)
        .env("DOTNET_DAP_CONFIG_DIR", global_config_dir)
        .env_remove("RUST_LOG");
    cmd
}

/// Parse stdout of a finished command as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}
