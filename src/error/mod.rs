//! Error types and handling for dotnet-dap
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only genuine faults live here. "Nothing to run" outcomes (no projects,
//! no artifacts, no profile, a cancelled prompt) are not errors: they surface
//! as `Ok(None)` together with a notice.
//!
//! Constructors are grouped by area:
//! - [`config`]: Configuration file errors
//! - [`fs`]: File system errors
//! - [`prompt`]: Interactive selection errors

pub mod config;
pub mod fs;
pub mod prompt;

pub use config::{
    invalid as config_invalid, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
pub use fs::{io_error, read_failed as file_read_failed};
pub use prompt::failed as prompt_failed;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for dotnet-dap operations
#[derive(Error, Diagnostic, Debug)]
pub enum DapError {
    // Setup errors
    #[error("Missing required collaborator: {name}")]
    #[diagnostic(
        code(dotnet_dap::setup::missing_collaborator),
        help("The resolver must be built with both a prompter and a notifier")
    )]
    MissingCollaborator { name: String },

    #[error("Unknown shell: {name}")]
    #[diagnostic(
        code(dotnet_dap::setup::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { name: String },

    #[error("Invalid language server root '{input}'")]
    #[diagnostic(
        code(dotnet_dap::setup::invalid_lsp_root),
        help("Use the form NAME=PATH, e.g. omnisharp=/home/me/src/app")
    )]
    InvalidLanguageServerRoot { input: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(dotnet_dap::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(dotnet_dap::config::parse_failed),
        help("Configuration files are YAML, see `dotnet-dap --help` for the known keys")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(dotnet_dap::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(dotnet_dap::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(dotnet_dap::fs::io_error))]
    IoError { message: String },

    // Launch settings errors
    #[error("Invalid launch settings: {reason}")]
    #[diagnostic(code(dotnet_dap::launch_profile::invalid))]
    LaunchSettingsInvalid { reason: String },

    // Prompt errors
    #[error("Selection prompt failed: {message}")]
    #[diagnostic(
        code(dotnet_dap::prompt::failed),
        help("Run from an interactive terminal or pipe the choice number on stdin")
    )]
    PromptFailed { message: String },

    #[error("Failed to encode launch configuration: {message}")]
    #[diagnostic(code(dotnet_dap::launch::encode_failed))]
    LaunchEncodeFailed { message: String },
}

impl From<std::io::Error> for DapError {
    fn from(err: std::io::Error) -> Self {
        DapError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DapError {
    fn from(err: serde_yaml::Error) -> Self {
        DapError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DapError {
    fn from(err: serde_json::Error) -> Self {
        DapError::LaunchEncodeFailed {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for DapError {
    fn from(err: inquire::InquireError) -> Self {
        DapError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DapError>;
