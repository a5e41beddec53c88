//! dotnet-dap - .NET project resolution for debug adapters
//!
//! Turns a workspace directory into one runnable target: the built DLL of a
//! startup project, the directory to run it from and the environment taken
//! from its `launchSettings.json`. The user is only asked to choose when
//! there is more than one candidate.
//!
//! ```no_run
//! use dotnet_dap::resolver::Resolver;
//! use dotnet_dap::selection::{ConsoleNotifier, InquirePrompter};
//! use std::path::Path;
//!
//! let resolver = Resolver::builder()
//!     .prompter(&InquirePrompter)
//!     .notifier(&ConsoleNotifier)
//!     .build()?;
//!
//! if let Some(target) = resolver.resolve(Path::new("."))? {
//!     println!("debug {}", target.artifact_path.display());
//! }
//! # Ok::<(), dotnet_dap::error::DapError>(())
//! ```

pub mod artifacts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod domain;
pub mod error;
pub mod launch;
pub mod launch_profile;
pub mod logging;
pub mod resolver;
pub mod selection;
pub mod workspace;

#[cfg(test)]
mod test_fixtures;
