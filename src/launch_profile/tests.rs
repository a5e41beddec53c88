#![allow(clippy::expect_used, clippy::unwrap_used)]

use super::*;
use crate::test_fixtures::{create_temp_dir, write_file};

fn env(pairs: &[(&str, &str)]) -> Environment {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

const WEB_PROFILE: &str = r#"{
  "$schema": "http://json.schemastore.org/launchsettings.json",
  "iisSettings": {
    "windowsAuthentication": false,
    "iisExpress": { "applicationUrl": "http://localhost:40000", "sslPort": 44300 }
  },
  "profiles": {
    "IIS Express": {
      "commandName": "IISExpress",
      "environmentVariables": { "ASPNETCORE_ENVIRONMENT": "Development" }
    },
    "Api": {
      "commandName": "Project",
      "dotnetRunMessages": true,
      "launchBrowser": true,
      "applicationUrl": "https://localhost:7001;http://localhost:5001",
      "environmentVariables": { "ASPNETCORE_ENVIRONMENT": "Staging", "FEATURE_X": "on" }
    }
  }
}"#;

#[test]
fn test_selects_first_project_profile() {
    let profile = parse_bytes(WEB_PROFILE.as_bytes()).unwrap().unwrap();

    assert_eq!(profile.name, "Api");
    assert_eq!(profile.command_kind, "Project");
    assert_eq!(
        profile.environment,
        env(&[
            ("ASPNETCORE_ENVIRONMENT", "Staging"),
            ("ASPNETCORE_URLS", "https://localhost:7001;http://localhost:5001"),
            ("FEATURE_X", "on"),
        ])
    );
}

#[test]
fn test_document_order_decides_between_project_profiles() {
    let json = r#"{
      "profiles": {
        "Zeta": { "commandName": "Project", "environmentVariables": { "WHICH": "zeta" } },
        "Alpha": { "commandName": "Project", "environmentVariables": { "WHICH": "alpha" } }
      }
    }"#;

    let profile = parse_bytes(json.as_bytes()).unwrap().unwrap();

    assert_eq!(profile.name, "Zeta");
    assert_eq!(profile.environment, env(&[("WHICH", "zeta")]));
}

#[test]
fn test_first_project_profile_wins_despite_mistyped_fields() {
    let json = r#"{
      "profiles": {
        "First": {
          "commandName": "Project",
          "applicationUrl": ["https://localhost:5001"],
          "environmentVariables": "FOO=bar"
        },
        "Second": { "commandName": "Project", "environmentVariables": { "WHICH": "second" } }
      }
    }"#;

    let profile = parse_bytes(json.as_bytes()).unwrap().unwrap();

    assert_eq!(profile.name, "First");
    assert_eq!(
        profile.environment,
        env(&[("ASPNETCORE_ENVIRONMENT", "Development")])
    );
}

#[test]
fn test_non_string_command_name_does_not_match() {
    let json = r#"{ "profiles": {
        "Odd": { "commandName": 1 },
        "Web": { "commandName": "Project" }
    } }"#;

    let profile = parse_bytes(json.as_bytes()).unwrap().unwrap();

    assert_eq!(profile.name, "Web");
}

#[test]
fn test_default_environment_with_application_url() {
    let json = r#"{ "profiles": { "Web": {
        "commandName": "Project",
        "applicationUrl": "https://localhost:5001"
    } } }"#;

    let profile = parse_bytes(json.as_bytes()).unwrap().unwrap();

    assert_eq!(
        profile.environment,
        env(&[
            ("ASPNETCORE_ENVIRONMENT", "Development"),
            ("ASPNETCORE_URLS", "https://localhost:5001"),
        ])
    );
}

#[test]
fn test_environment_variables_replace_default() {
    let json = r#"{ "profiles": { "Cli": {
        "commandName": "Project",
        "environmentVariables": { "FOO": "bar" }
    } } }"#;

    let profile = parse_bytes(json.as_bytes()).unwrap().unwrap();

    assert_eq!(profile.environment, env(&[("FOO", "bar")]));
}

#[test]
fn test_empty_environment_variables_fall_back_to_default() {
    let json = r#"{ "profiles": { "Cli": {
        "commandName": "Project",
        "environmentVariables": {}
    } } }"#;

    let profile = parse_bytes(json.as_bytes()).unwrap().unwrap();

    assert_eq!(
        profile.environment,
        env(&[("ASPNETCORE_ENVIRONMENT", "Development")])
    );
}

#[test]
fn test_only_null_environment_variables_fall_back_to_default() {
    let json = r#"{ "profiles": { "Cli": {
        "commandName": "Project",
        "environmentVariables": { "X": null }
    } } }"#;

    let profile = parse_bytes(json.as_bytes()).unwrap().unwrap();

    assert_eq!(
        profile.environment,
        env(&[("ASPNETCORE_ENVIRONMENT", "Development")])
    );
}

#[test]
fn test_application_url_overwrites_existing_urls_variable() {
    let json = r#"{ "profiles": { "Web": {
        "commandName": "Project",
        "applicationUrl": "http://localhost:8080",
        "environmentVariables": { "ASPNETCORE_URLS": "http://old:1" }
    } } }"#;

    let profile = parse_bytes(json.as_bytes()).unwrap().unwrap();

    assert_eq!(
        profile.environment,
        env(&[("ASPNETCORE_URLS", "http://localhost:8080")])
    );
}

#[test]
fn test_empty_application_url_is_not_injected() {
    let json = r#"{ "profiles": { "Web": {
        "commandName": "Project",
        "applicationUrl": ""
    } } }"#;

    let profile = parse_bytes(json.as_bytes()).unwrap().unwrap();

    assert!(!profile.environment.contains_key("ASPNETCORE_URLS"));
}

#[test]
fn test_scalar_environment_values_are_stringified() {
    let json = r#"{ "profiles": { "Web": {
        "commandName": "Project",
        "environmentVariables": { "PORT": 8080, "VERBOSE": true, "UNSET": null }
    } } }"#;

    let profile = parse_bytes(json.as_bytes()).unwrap().unwrap();

    assert_eq!(
        profile.environment,
        env(&[("PORT", "8080"), ("VERBOSE", "true")])
    );
}

#[test]
fn test_no_project_profile_is_absent() {
    let json = r#"{ "profiles": {
        "IIS Express": { "commandName": "IISExpress" },
        "Docker": { "commandName": "Docker" }
    } }"#;

    assert_eq!(parse_bytes(json.as_bytes()).unwrap(), None);
}

#[test]
fn test_missing_profiles_is_absent() {
    assert_eq!(parse_bytes(br#"{ "iisSettings": {} }"#).unwrap(), None);
}

#[test]
fn test_empty_bytes_are_absent() {
    assert_eq!(parse_bytes(b"").unwrap(), None);
}

#[test]
fn test_malformed_document_is_error() {
    let err = parse_bytes(b"{ \"profiles\": { ").unwrap_err();
    assert!(matches!(err, DapError::LaunchSettingsInvalid { .. }));
}

#[test]
fn test_bom_prefixed_document_decodes_identically() {
    let mut with_bom = jsonc::UTF8_BOM.to_vec();
    with_bom.extend_from_slice(WEB_PROFILE.as_bytes());

    assert_eq!(
        parse_bytes(&with_bom).unwrap(),
        parse_bytes(WEB_PROFILE.as_bytes()).unwrap()
    );
    assert!(parse_bytes(&with_bom).unwrap().is_some());
}

#[test]
fn test_comments_are_tolerated() {
    let json = r#"{
      // generated by the web template
      "profiles": {
        /* the only runnable profile */
        "Web": { "commandName": "Project", "applicationUrl": "http://localhost:5000" }
      }
    }"#;

    let profile = parse_bytes(json.as_bytes()).unwrap().unwrap();

    assert_eq!(profile.name, "Web");
}

#[test]
fn test_non_object_profile_entries_are_skipped() {
    let json = r#"{ "profiles": {
        "broken": "not an object",
        "Web": { "commandName": "Project" }
    } }"#;

    let profile = parse_bytes(json.as_bytes()).unwrap().unwrap();

    assert_eq!(profile.name, "Web");
}

#[test]
fn test_parse_file_never_raises() {
    let temp = create_temp_dir();
    let missing = temp.path().join("launchSettings.json");
    assert_eq!(parse(&missing), None);

    let broken = temp.path().join("broken/launchSettings.json");
    write_file(&broken, "not json at all");
    assert_eq!(parse(&broken), None);

    let empty = temp.path().join("empty/launchSettings.json");
    write_file(&empty, "");
    assert_eq!(parse(&empty), None);
}

#[test]
fn test_parse_file_with_bom() {
    let temp = create_temp_dir();
    let path = temp.path().join("launchSettings.json");
    let mut bytes = jsonc::UTF8_BOM.to_vec();
    bytes.extend_from_slice(WEB_PROFILE.as_bytes());
    std::fs::write(&path, bytes).expect("write settings");

    let profile = parse(&path).expect("profile");

    assert_eq!(profile.name, "Api");
}
