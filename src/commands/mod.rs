//! Command implementations for dotnet-dap CLI

pub mod adapter;
pub mod completions;
pub mod helpers;
pub mod profile;
pub mod projects;
pub mod resolve;
pub mod version;
