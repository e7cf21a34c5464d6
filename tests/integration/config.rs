//! Tests for `postview config`

use super::common::TestContext;
use predicates::prelude::*;

#[test]
fn test_get_url_default() {
    let ctx = TestContext::new();

    ctx.postview()
        .args(["config", "get-url"])
        .assert()
        .success()
        .stdout("https://jsonplaceholder.typicode.com/posts\n");
}

#[test]
fn test_set_url_then_get_url() {
    let ctx = TestContext::new();

    ctx.postview()
        .args(["config", "set-url", "http://localhost:4000/api/posts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Posts URL set to"));

    ctx.postview()
        .args(["config", "get-url"])
        .assert()
        .success()
        .stdout("http://localhost:4000/api/posts\n");
}

#[test]
fn test_set_url_rejects_non_http() {
    let ctx = TestContext::new();

    ctx.postview()
        .args(["config", "set-url", "file:///etc/passwd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported URL scheme"));
}

#[test]
fn test_set_timeout_and_show() {
    let ctx = TestContext::new();

    ctx.postview()
        .args(["config", "set-timeout", "7"])
        .assert()
        .success();

    ctx.postview()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("request_timeout_secs: 7"))
        .stdout(predicate::str::contains("config.yaml"));
}

#[test]
fn test_set_timeout_zero_fails() {
    let ctx = TestContext::new();

    ctx.postview()
        .args(["config", "set-timeout", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1 second"));
}
