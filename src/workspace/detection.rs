//! Workspace root detection
//!
//! The first reported root of a known C# language server is used; without
//! one, the fallback directory (the working directory) is the root.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::LanguageServerRoot;

/// Pick the workspace root.
///
/// Roots are normalized with `dunce` so Windows paths stay free of `\\?\`
/// prefixes; a root that cannot be canonicalized is used as given.
///
/// # Examples
///
/// ```
/// use dotnet_dap::workspace::{LanguageServerRoot, determine_root};
/// use std::path::Path;
///
/// let servers = vec![LanguageServerRoot {
///     name: "lua_ls".to_string(),
///     root: "/home/me/.config/nvim".into(),
/// }];
/// let known = vec!["omnisharp".to_string()];
///
/// let root = determine_root(&servers, &known, Path::new("/nonexistent/work"));
/// assert_eq!(root, Path::new("/nonexistent/work"));
/// ```
pub fn determine_root(
    servers: &[LanguageServerRoot],
    known_servers: &[String],
    fallback: &Path,
) -> PathBuf {
    let reported = servers
        .iter()
        .find(|server| known_servers.iter().any(|known| *known == server.name));

    let root = match reported {
        Some(server) => {
            debug!(server = %server.name, root = %server.root.display(), "using language server root");
            server.root.as_path()
        }
        None => {
            debug!(root = %fallback.display(), "using working directory as root");
            fallback
        }
    };

    dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf())
}
