//! Integration tests for the envcheck binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".envcheck.yml"), config).unwrap();
    temp
}

/// A command running in `dir` with an empty environment.
fn envcheck(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("envcheck"));
    cmd.current_dir(dir.path()).env_clear();
    cmd
}

const RULES: &str = r#"
require: [APP_KEY, DB_HOST]
match:
  APP_DEBUG: false
environments:
  - for: [production, qa]
    require: [SENTRY_DSN]
  - for: [local]
    match:
      MAIL_DRIVER: log
"#;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envcheck"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Verify required environment variables"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("schema"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envcheck"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_runs_check() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(RULES);
    envcheck(&temp)
        .env("APP_KEY", "base64:abc")
        .env("DB_HOST", "db")
        .env("APP_DEBUG", "false")
        .env("SENTRY_DSN", "https://sentry")
        .assert()
        .success()
        .stdout("✓ Every required environment variable has been set\n");
    Ok(())
}

#[test]
fn cli_missing_vars_exit_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(RULES);
    envcheck(&temp)
        .args(["check", "--env", "staging"])
        .env("APP_KEY", "k")
        .env("APP_DEBUG", "false")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "✗ Not every required environment variable has been set!",
        ))
        .stdout(predicate::str::contains(
            "Missing environment variables: DB_HOST",
        ));
    Ok(())
}

#[test]
fn cli_environment_rules_name_the_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(RULES);
    envcheck(&temp)
        .arg("check")
        .env("APP_ENV", "qa")
        .env("APP_KEY", "k")
        .env("DB_HOST", "db")
        .env("APP_DEBUG", "false")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Missing environment variables in 'qa' environment: SENTRY_DSN",
        ));
    Ok(())
}

#[test]
fn cli_value_mismatch_is_reported_before_presence() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(RULES);
    envcheck(&temp)
        .args(["check", "--env", "local"])
        .env("APP_DEBUG", "true")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Some variables do not match their expected value in 'local' environment: \
             APP_DEBUG is set to 'true' instead of 'false'; \
             MAIL_DRIVER is set to 'null' instead of 'log'",
        ))
        .stdout(predicate::str::contains("Missing environment").not());
    Ok(())
}

#[test]
fn cli_defaults_to_production() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(RULES);
    envcheck(&temp)
        .args(["check", "--json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(r#""environment": "production""#))
        .stdout(predicate::str::contains(r#""environment_source": "default""#));
    Ok(())
}

#[test]
fn cli_json_output_is_parseable() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(RULES);
    let output = envcheck(&temp)
        .args(["check", "--env", "qa", "--json"])
        .env("APP_DEBUG", "false")
        .env("DB_HOST", "db")
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["ok"], false);
    assert_eq!(json["meta"], serde_json::json!(["APP_KEY", "SENTRY_DSN"]));
    assert_eq!(
        json["summary"],
        "Not every required environment variable has been set!"
    );
    assert_eq!(
        json["message"],
        "Missing environment variables in 'qa' environment: APP_KEY, SENTRY_DSN"
    );
    Ok(())
}

#[test]
fn cli_quiet_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(RULES);
    envcheck(&temp)
        .args(["check", "--quiet"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_verbose_shows_environment_source() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("require: []\n");
    envcheck(&temp)
        .args(["check", "--verbose"])
        .env("DEPLOY_ENV", "qa")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Environment: qa (detected via DEPLOY_ENV)",
        ));
    Ok(())
}

#[test]
fn cli_missing_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    envcheck(&temp)
        .arg("check")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn cli_invalid_config_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("requires: [APP_KEY]\n");
    envcheck(&temp)
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_config_flag_and_env_var() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let rules = temp.path().join("rules.yml");
    fs::write(&rules, "require: [CUSTOM_VAR]\n")?;

    envcheck(&temp)
        .args(["check", "--config"])
        .arg(&rules)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("CUSTOM_VAR"));

    envcheck(&temp)
        .arg("check")
        .env("ENVCHECK_CONFIG", &rules)
        .env("CUSTOM_VAR", "set")
        .assert()
        .success();
    Ok(())
}

#[test]
fn cli_project_flag() -> Result<(), Box<dyn std::error::Error>> {
    let project = setup_project("require: [FROM_PROJECT]\n");
    let elsewhere = TempDir::new()?;
    envcheck(&elsewhere)
        .arg("--project")
        .arg(project.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FROM_PROJECT"));
    Ok(())
}

#[test]
fn cli_schema_prints_json_schema() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = envcheck(&temp).arg("schema").output()?;
    assert!(output.status.success());

    let schema: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(schema["title"], "ChecksConfig");
    assert!(schema["properties"]["match"].is_object());
    Ok(())
}

#[test]
fn cli_completions() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envcheck"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("envcheck"));
    Ok(())
}

#[test]
fn cli_debug_logs_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("require: []\n");
    envcheck(&temp)
        .args(["check", "--json", "--debug"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Loading config"))
        .stdout(predicate::str::starts_with("{"));
    Ok(())
}
