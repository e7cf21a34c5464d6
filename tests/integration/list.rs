//! Tests for `postview list`

use super::common::TestContext;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_list_static_prints_canned_titles() {
    let ctx = TestContext::new();

    ctx.postview()
        .args(["list", "--source", "static"])
        .assert()
        .success()
        .stdout("One\nTwo\n");
}

#[test]
fn test_list_fixture_preserves_order() {
    let ctx = TestContext::new();
    let fixture = ctx.write_fixture(
        "posts.json",
        r#"[
            {"userId": 1, "id": 3, "title": "gamma", "body": ""},
            {"userId": 1, "id": 1, "title": "alpha", "body": ""},
            {"userId": 2, "id": 2, "title": "beta", "body": ""}
        ]"#,
    );

    ctx.postview()
        .arg("list")
        .arg("--fixture")
        .arg(&fixture)
        .assert()
        .success()
        .stdout("gamma\nalpha\nbeta\n");
}

#[test]
fn test_list_viewport() {
    let ctx = TestContext::new();
    let posts: Vec<String> = (1..=5)
        .map(|i| format!(r#"{{"userId": 1, "id": {i}, "title": "post {i}", "body": ""}}"#))
        .collect();
    let fixture = ctx.write_fixture("posts.json", &format!("[{}]", posts.join(",")));

    ctx.postview()
        .arg("list")
        .arg("--fixture")
        .arg(&fixture)
        .args(["--offset", "1", "--limit", "2"])
        .assert()
        .success()
        .stdout("post 2\npost 3\n");
}

#[test]
fn test_list_bad_fixture_fails() {
    let ctx = TestContext::new();
    let fixture = ctx.write_fixture("posts.json", "{ nope");

    ctx.postview()
        .arg("list")
        .arg("--fixture")
        .arg(&fixture)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON decoding error"));
}

#[test]
fn test_list_rejects_invalid_url() {
    let ctx = TestContext::new();

    ctx.postview()
        .args(["list", "--url", "not-a-url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid URL"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_live_from_mock_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"userId": 1, "id": 1, "title": "live one", "body": "a"},
            {"userId": 1, "id": 2, "title": "live two", "body": "b"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = TestContext::new();
    ctx.postview()
        .args(["list", "--url", &format!("{}/posts", mock_server.uri())])
        .assert()
        .success()
        .stdout("live one\nlive two\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_live_failure_is_silent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let ctx = TestContext::new();
    ctx.postview()
        .args(["list", "--url", &format!("{}/posts", mock_server.uri())])
        .assert()
        .success()
        .stdout("");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_uses_configured_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/configured"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"userId": 9, "id": 1, "title": "from config", "body": ""}
        ])))
        .mount(&mock_server)
        .await;

    let ctx = TestContext::new();
    ctx.postview()
        .args(["config", "set-url", &format!("{}/configured", mock_server.uri())])
        .assert()
        .success();

    ctx.postview()
        .arg("list")
        .assert()
        .success()
        .stdout("from config\n");
}
