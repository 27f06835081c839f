//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("dagvraag").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("openapi"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("dagvraag").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("0.0.0.0:1234"));
}

#[test]
fn test_serve_without_database_url_fails() {
    let dir = std::env::temp_dir();
    let mut cmd = Command::cargo_bin("dagvraag").unwrap();
    // Run outside the workspace so no .env is picked up
    cmd.current_dir(dir).env_remove("DATABASE_URL").arg("serve");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_openapi_prints_all_paths() {
    let mut cmd = Command::cargo_bin("dagvraag").unwrap();
    let output = cmd.arg("openapi").output().unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["info"]["title"], "De vraag van de dag API");
    for path in ["/vraagvanvandaag", "/resultaten", "/gemiddelde", "/antwoorden"] {
        assert!(doc["paths"][path].is_object(), "missing {}", path);
    }
}
