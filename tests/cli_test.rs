//! Integration tests for the command-line interface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const MANIFEST_VARS: &[&str] = &[
    "AWS_REGION",
    "AWS_DEFAULT_REGION",
    "BREF_VERSION",
    "BREF_EXTRA_VERSION",
    "BREF_AWS_ACCOUNT",
    "BREF_MANIFEST_HOST",
    "RUST_LOG",
];

/// A command with no provider settings inherited from the environment.
fn bref_layers() -> Command {
    let mut cmd = Command::new(cargo_bin("bref-layers"));
    for var in MANIFEST_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn serve_bref_manifest(server: &MockServer, body: &str) {
    server.mock(|when, then| {
        when.method(GET).path("/brefphp/bref/2.0.5/layers.json");
        then.status(200).body(body);
    });
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    bref_layers()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bref PHP Lambda layer"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    bref_layers()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_layer_prints_arn() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    serve_bref_manifest(&server, r#"{"console": {"us-east-1": "47"}}"#);

    bref_layers()
        .args(["layer", "console", "--manifest-host", &server.base_url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("version: 47"))
        .stdout(predicate::str::contains(
            "arn:aws:lambda:us-east-1:534081306603:layer:console:47",
        ));
    Ok(())
}

#[test]
fn cli_extra_layer_json() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/brefphp/extra-php-extensions/1.1.1/layers.json");
        then.status(200)
            .body(r#"{"yaml-php-82": {"eu-west-1": 12}}"#);
    });

    let output = bref_layers()
        .args([
            "extra-layer",
            "yaml-php-82",
            "--region",
            "eu-west-1",
            "--json",
            "--manifest-host",
            &server.base_url(),
        ])
        .output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["version"], 12);
    assert_eq!(
        value["arn"],
        "arn:aws:lambda:eu-west-1:403367587399:layer:yaml-php-82:12"
    );
    Ok(())
}

#[test]
fn cli_reads_region_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    serve_bref_manifest(&server, r#"{"console": {"eu-west-1": "46"}}"#);

    bref_layers()
        .env("AWS_DEFAULT_REGION", "eu-west-1")
        .env("BREF_MANIFEST_HOST", server.base_url())
        .args(["layer", "console"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "arn:aws:lambda:eu-west-1:534081306603:layer:console:46",
        ));
    Ok(())
}

#[test]
fn cli_reads_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/brefphp/bref/2.1.0/layers.json");
        then.status(200).body(r#"{"php-83": {"us-west-2": 9}}"#);
    });

    let temp = TempDir::new()?;
    let config_path = temp.path().join("bref.yml");
    fs::write(
        &config_path,
        format!(
            "region: us-west-2\nbref_version: \"2.1.0\"\nbref_aws_account: \"111122223333\"\nmanifest_host: {}\n",
            server.base_url()
        ),
    )?;

    bref_layers()
        .args(["layer", "php-83", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "arn:aws:lambda:us-west-2:111122223333:layer:php-83:9",
        ));
    Ok(())
}

#[test]
fn cli_missing_region_fails() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    serve_bref_manifest(&server, r#"{"console": {"us-east-1": "47"}}"#);

    bref_layers()
        .args([
            "layer",
            "console",
            "--region",
            "ap-south-1",
            "--manifest-host",
            &server.base_url(),
        ])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Unable to locate a Bref v2.0.5 lambda layer version for console in ap-south-1 region",
        ));
    Ok(())
}

#[test]
fn cli_config_shows_defaults() -> Result<(), Box<dyn std::error::Error>> {
    bref_layers()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("region: us-east-1"))
        .stdout(predicate::str::contains("bref_version:"))
        .stdout(predicate::str::contains("2.0.5"));
    Ok(())
}

#[test]
fn cli_rejects_empty_region() -> Result<(), Box<dyn std::error::Error>> {
    bref_layers()
        .args(["config", "--region", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("region"));
    Ok(())
}

#[test]
fn cli_generates_completions() -> Result<(), Box<dyn std::error::Error>> {
    bref_layers()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bref-layers"));
    Ok(())
}

#[test]
fn cli_invalid_command_fails() -> Result<(), Box<dyn std::error::Error>> {
    bref_layers().arg("nonexistent").assert().failure();
    Ok(())
}
