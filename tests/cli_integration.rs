//! Binary-level tests for the `chatdesk` command
//!
//! The binary runs in a child process, so backend tests start the mock server
//! on a multi-threaded runtime and run the command on a blocking thread.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use chatdesk::chat::FALLBACK_REPLY;

mod common;

/// Command with a config path that does not exist and no env overrides
fn chatdesk(base_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("chatdesk").unwrap();
    cmd.env_remove("CHATDESK_BASE_URL")
        .env_remove("CHATDESK_TIMEOUT_SECONDS")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg("does-not-exist.yaml")
        .arg("--base-url")
        .arg(base_url);
    cmd
}

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("chatdesk").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("health"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("chatdesk").unwrap();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand_fails() {
    let mut cmd = Command::cargo_bin("chatdesk").unwrap();
    cmd.assert().failure();
}

#[test]
fn test_invalid_base_url_scheme_fails_validation() {
    chatdesk("ftp://localhost:8000")
        .arg("health")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_zero_timeout_in_config_file_fails_validation() {
    let (_temp_dir, config_path) =
        common::temp_config_file("backend:\n  base_url: http://localhost:8000\n  timeout_seconds: 0\n");

    let mut cmd = Command::cargo_bin("chatdesk").unwrap();
    cmd.env_remove("CHATDESK_BASE_URL")
        .env_remove("CHATDESK_TIMEOUT_SECONDS")
        .arg("--config")
        .arg(config_path)
        .arg("health");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("timeout_seconds"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_send_prints_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_partial_json(json!({
            "message": "Reset my password",
            "session_id": "cli-session"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"reply": "Use the self-service portal."})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        chatdesk(&uri)
            .args(["send", "Reset my password", "--session-id", "cli-session"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Use the self-service portal."));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_send_failure_prints_fallback_and_exits_nonzero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        chatdesk(&uri)
            .args(["send", "Hi"])
            .assert()
            .failure()
            .stdout(predicate::str::contains(FALLBACK_REPLY));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_base_url_from_environment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "running"})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let mut cmd = Command::cargo_bin("chatdesk").unwrap();
        cmd.env("CHATDESK_BASE_URL", &uri)
            .env_remove("CHATDESK_TIMEOUT_SECONDS")
            .arg("--config")
            .arg("does-not-exist.yaml")
            .arg("health");
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("running"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_health_failure_exits_nonzero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        chatdesk(&uri).arg("health").assert().failure();
    })
    .await
    .unwrap();
}
