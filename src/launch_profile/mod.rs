//! Launch profile parsing (`launchSettings.json`)
//!
//! Expected document shape:
//!
//! ```json
//! {
//!   "profiles": {
//!     "Api": {
//!       "commandName": "Project",
//!       "applicationUrl": "https://localhost:5001",
//!       "environmentVariables": { "ASPNETCORE_ENVIRONMENT": "Development" }
//!     }
//!   }
//! }
//! ```
//!
//! Parsing never fails loudly: an unreadable, empty or malformed file, or
//! one without a `"Project"` profile, yields `None` and the resolver falls
//! back to manual project selection.

pub mod jsonc;

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{Environment, LaunchProfile};
use crate::error::{self, DapError, Result};

/// The only `commandName` that launches the project's own executable
pub const PROJECT_COMMAND: &str = "Project";

/// Environment variable name carrying the hosting environment
pub const ENVIRONMENT_VAR: &str = "ASPNETCORE_ENVIRONMENT";

/// Hosting environment used when a profile defines no variables
pub const DEFAULT_ENVIRONMENT: &str = "Development";

/// Environment variable receiving the profile's `applicationUrl`
pub const URLS_VAR: &str = "ASPNETCORE_URLS";

#[derive(Debug, Deserialize)]
struct LaunchSettingsDocument {
    profiles: Option<Map<String, Value>>,
}

/// Parse the launch-settings file at `path`.
pub fn parse(path: &Path) -> Option<LaunchProfile> {
    match try_parse(path) {
        Ok(profile) => profile,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "launch settings unusable");
            None
        }
    }
}

fn try_parse(path: &Path) -> Result<Option<LaunchProfile>> {
    let bytes = fs::read(path)
        .map_err(|e| error::file_read_failed(path.display().to_string(), e.to_string()))?;

    parse_bytes(&bytes)
}

/// Parse raw launch-settings bytes.
///
/// Returns `Ok(None)` for an empty document or one without a `"Project"`
/// profile, and an error when the bytes do not decode.
pub fn parse_bytes(bytes: &[u8]) -> Result<Option<LaunchProfile>> {
    if bytes.is_empty() {
        return Ok(None);
    }

    let text = std::str::from_utf8(jsonc::strip_bom(bytes)).map_err(|e| {
        DapError::LaunchSettingsInvalid {
            reason: format!("not UTF-8: {e}"),
        }
    })?;
    let document: LaunchSettingsDocument = serde_json::from_str(&jsonc::strip_comments(text))
        .map_err(|e| DapError::LaunchSettingsInvalid {
            reason: e.to_string(),
        })?;

    let Some(profiles) = document.profiles else {
        return Ok(None);
    };

    Ok(first_project_profile(profiles))
}

/// The first entry whose `commandName` is `"Project"`, in document order.
///
/// Only `commandName` decides the match. Mistyped `environmentVariables` or
/// `applicationUrl` values of the matched entry are treated as absent.
fn first_project_profile(profiles: Map<String, Value>) -> Option<LaunchProfile> {
    let (name, entry) = profiles.into_iter().find(|(_, value)| {
        value.get("commandName").and_then(Value::as_str) == Some(PROJECT_COMMAND)
    })?;

    debug!(profile = %name, "selected launch profile");
    let variables = entry.get("environmentVariables").and_then(Value::as_object);
    let application_url = entry.get("applicationUrl").and_then(Value::as_str);

    Some(LaunchProfile {
        name,
        command_kind: PROJECT_COMMAND.to_string(),
        environment: derive_environment(variables, application_url),
    })
}

/// Build the debuggee environment for a profile.
///
/// Variables with a non-null value replace the default
/// `ASPNETCORE_ENVIRONMENT=Development` entirely; when none remain the
/// default applies. A non-empty `applicationUrl` is always injected as
/// `ASPNETCORE_URLS`.
pub fn derive_environment(
    variables: Option<&Map<String, Value>>,
    application_url: Option<&str>,
) -> Environment {
    let mut environment: Environment = variables
        .into_iter()
        .flatten()
        .filter_map(|(key, value)| Some((key.clone(), env_value(value)?)))
        .collect();

    if environment.is_empty() {
        environment.insert(ENVIRONMENT_VAR.to_string(), DEFAULT_ENVIRONMENT.to_string());
    }

    if let Some(url) = application_url.filter(|url| !url.is_empty()) {
        environment.insert(URLS_VAR.to_string(), url.to_string());
    }

    environment
}

fn env_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests;
