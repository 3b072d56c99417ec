//! CLI integration tests.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A command isolated from local config files and environment overrides.
fn betsmoke(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("betsmoke");
    cmd.current_dir(home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("BETSMOKE_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn home() -> TempDir {
    tempfile::tempdir().expect("tempdir")
}

#[test]
fn test_help() {
    betsmoke(&home())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("COUNT"))
        .stdout(predicate::str::contains("--base-url"));
}

#[test]
fn test_version() {
    betsmoke(&home())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("betsmoke"));
}

#[test]
fn missing_count_is_a_startup_error() {
    betsmoke(&home())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("COUNT"));
}

#[test]
fn non_numeric_count_is_a_startup_error() {
    betsmoke(&home())
        .arg("lots")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn bad_config_exits_nonzero() {
    let home = home();
    let config = home.path().join("broken.toml");
    std::fs::write(&config, "[logging]\nformat = \"xml\"\n").expect("write config");

    betsmoke(&home)
        .args(["--config"])
        .arg(&config)
        .arg("0")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid value for format"));
}

#[test]
fn unreachable_service_exits_nonzero() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };

    betsmoke(&home())
        .args(["--base-url", &format!("http://127.0.0.1:{port}/bets"), "1"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("TEST: CREATING BET"))
        .stderr(predicate::str::contains("HTTP error"));
}

#[tokio::test(flavor = "multi_thread")]
async fn full_run_prints_every_phase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bets"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"bets":[{"betId":"x1","customerId":1,"preTaxAmount":1,"postTaxAmount":1,"version":"v1"}]}"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/bets/x1"))
        .respond_with(ResponseTemplate::new(409).set_body_string("version conflict"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bets/x1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"betId":"x1"}"#))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/bets/x1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"betId":"x1"}"#))
        .mount(&server)
        .await;

    let base_url = format!("{}/bets", server.uri());
    let assert = tokio::task::spawn_blocking(move || {
        betsmoke(&home())
            .args(["--base-url", &base_url, "--seed", "1", "0"])
            .assert()
    })
    .await
    .expect("join");

    assert
        .success()
        .stdout(predicate::str::contains("TEST: GETTING ALL BETS"))
        .stdout(predicate::str::contains("TEST: GETTING SPECIFIC BETS"))
        .stdout(predicate::str::contains("TEST: UPDATING SPECIFIC BETS"))
        .stdout(predicate::str::contains("TEST: DELETING SPECIFIC BETS"))
        .stdout(predicate::str::contains("version conflict 409"))
        .stdout(predicate::str::contains("update_bet failed."))
        .stdout(predicate::str::contains("SUMMARY"));
}

#[tokio::test(flavor = "multi_thread")]
async fn unparseable_listing_says_nothing_to_do() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bets"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let base_url = format!("{}/bets", server.uri());
    let assert = tokio::task::spawn_blocking(move || {
        betsmoke(&home())
            .args(["--base-url", &base_url, "0"])
            .assert()
    })
    .await
    .expect("join");

    assert
        .success()
        .stdout(predicate::str::contains("list_bets failed."))
        .stdout(predicate::str::contains("Nothing!"));
}

#[tokio::test(flavor = "multi_thread")]
async fn json_mode_emits_one_object_per_line() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bets"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"bets": []}"#))
        .mount(&server)
        .await;

    let base_url = format!("{}/bets", server.uri());
    let output = tokio::task::spawn_blocking(move || {
        betsmoke(&home())
            .args(["--json", "--base-url", &base_url, "0"])
            .output()
            .expect("run betsmoke")
    })
    .await
    .expect("join");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let kinds: Vec<String> = stdout
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).expect("json line");
            value["type"].as_str().unwrap_or_default().to_owned()
        })
        .collect();

    assert_eq!(kinds.first().map(String::as_str), Some("header"));
    assert_eq!(kinds.iter().filter(|k| *k == "step").count(), 2);
    assert_eq!(kinds.last().map(String::as_str), Some("summary"));
}

#[tokio::test(flavor = "multi_thread")]
async fn quiet_run_still_reports_rejected_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bets"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"bets":[{"betId":"x1","version":1},{"betId":7,"version":1}]}"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bets/x1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"betId":"x1"}"#))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/bets/x1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"betId":"x1"}"#))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/bets/x1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"betId":"x1"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = format!("{}/bets", server.uri());
    let assert = tokio::task::spawn_blocking(move || {
        betsmoke(&home())
            .args(["--quiet", "--base-url", &base_url, "0"])
            .assert()
    })
    .await
    .expect("join");

    assert
        .success()
        .stdout(predicate::str::contains("Skipping listed entry #1"))
        .stdout(predicate::str::contains("TEST:").not())
        .stdout(predicate::str::contains("SUMMARY"));
}

#[test]
fn verbose_run_names_the_local_config_file() {
    let home = home();
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    std::fs::write(
        home.path().join("betsmoke.toml"),
        format!("[target]\nbase_url = \"http://127.0.0.1:{port}/bets\"\n"),
    )
    .expect("write config");

    betsmoke(&home)
        .args(["-v", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Using config file"))
        .stderr(predicate::str::contains("betsmoke.toml"));
}
