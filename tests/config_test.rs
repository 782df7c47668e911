use startoff::config::{find_config_file, load_config, parse_config, Config};
use startoff::constants::DEFAULT_FETCH_TIMEOUT_SECS;
use startoff::error::Error;
use startoff::profile::ProjectType;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_defaults_without_config_file() {
    let dir = TempDir::new().unwrap();

    let config = load_config(None, dir.path()).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.fetch_timeout(), Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS));
    assert!(config.install.enabled);
    assert_eq!(config.install.program, "npm");
    assert_eq!(config.install.args, vec!["install".to_string()]);
}

#[test]
fn test_yaml_config() {
    let content = r#"
templates:
  h5:
    host: https://gitlab.com
    repository: team/h5-template
fetch_timeout_secs: 30
install:
  program: pnpm
copy_without_render:
  - "**/*.vue"
"#;
    let config = parse_config(content).unwrap();

    assert_eq!(config.fetch_timeout_secs, 30);
    assert_eq!(config.install.program, "pnpm");
    assert_eq!(config.install.args, vec!["install".to_string()]);
    assert_eq!(config.copy_without_render, vec!["**/*.vue".to_string()]);

    let registry = config.registry().unwrap();
    assert_eq!(
        registry.get(ProjectType::H5).unwrap().url(),
        "https://gitlab.com/team/h5-template"
    );
    assert_eq!(
        registry.get(ProjectType::Pc).unwrap().url(),
        "https://github.com/ziwen-wang/vant-vue3-template-pc"
    );
}

#[test]
fn test_json_config() {
    let config = parse_config(r#"{"install": {"enabled": false}, "ignore": ["*.log"]}"#).unwrap();

    assert!(!config.install.enabled);
    assert_eq!(config.ignore, vec!["*.log".to_string()]);
}

#[test]
fn test_empty_yaml_uses_defaults() {
    assert_eq!(parse_config("").unwrap(), Config::default());
}

#[test]
fn test_schema_violations() {
    for content in [
        r#"{"unknown": true}"#,
        r#"{"fetch_timeout_secs": 0}"#,
        r#"{"templates": {"desktop": {"host": "https://github.com", "repository": "a/b"}}}"#,
        r#"{"templates": {"pc": {"host": "https://github.com"}}}"#,
    ] {
        assert!(
            matches!(parse_config(content), Err(Error::ConfigError(_))),
            "accepted {content}"
        );
    }
}

#[test]
fn test_malformed_repository_path() {
    let content = r#"{"templates": {"pc": {"host": "https://github.com", "repository": "no-owner"}}}"#;
    assert!(matches!(parse_config(content), Err(Error::ConfigError(_))));
}

#[test]
fn test_config_file_lookup() {
    let dir = TempDir::new().unwrap();
    assert_eq!(find_config_file(dir.path()), None);

    fs::write(dir.path().join("startoff.yml"), "fetch_timeout_secs: 12\n").unwrap();
    assert_eq!(find_config_file(dir.path()), Some(dir.path().join("startoff.yml")));

    let config = load_config(None, dir.path()).unwrap();
    assert_eq!(config.fetch_timeout_secs, 12);
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.yaml");

    assert!(matches!(
        load_config(Some(missing.as_path()), dir.path()),
        Err(Error::ConfigError(_))
    ));
}
