//! Workspace root handling
//!
//! The workspace root is where project discovery starts. A host editor that
//! runs a C# language server already knows the solution root, so a root
//! reported by a known server wins over the process working directory.

pub mod detection;

pub use detection::determine_root;

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::DapError;

/// Root directory reported by an active language server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageServerRoot {
    /// Server name, e.g. `omnisharp`
    pub name: String,
    pub root: PathBuf,
}

impl FromStr for LanguageServerRoot {
    type Err = DapError;

    /// Parses `NAME=PATH`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DapError::InvalidLanguageServerRoot {
            input: s.to_string(),
        };

        let (name, root) = s.split_once('=').ok_or_else(invalid)?;
        let (name, root) = (name.trim(), root.trim());
        if name.is_empty() || root.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            name: name.to_string(),
            root: PathBuf::from(root),
        })
    }
}
