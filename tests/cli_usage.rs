#![cfg(unix)]

mod common;

use common::FakeDocker;

#[test]
fn test_no_args_prints_usage_and_runs_nothing() {
    let fake = FakeDocker::new();
    let out = fake.launcher().output().expect("run mcp-cli");
    assert_eq!(out.status.code(), Some(0));
    let so = common::stdout(&out);
    assert!(
        so.starts_with("Usage: mcp-cli [--dev] <command> [args...]"),
        "unexpected usage text:\n{so}"
    );
    assert!(so.contains("openint/openint-mcp:latest"));
    assert!(so.contains("openint-mcp-dev"));
    assert!(fake.calls().is_empty(), "docker was invoked: {:?}", fake.calls());
}

#[test]
fn test_dev_flag_alone_prints_usage() {
    let fake = FakeDocker::new();
    let out = fake.launcher().arg("--dev").output().expect("run mcp-cli");
    assert_eq!(out.status.code(), Some(0));
    assert!(common::stdout(&out).starts_with("Usage: mcp-cli"));
    assert!(fake.calls().is_empty());
}

#[test]
fn test_missing_docker_exits_one_without_pull() {
    let fake = FakeDocker::new();
    let missing = fake.dir.path().join("no-docker-here");
    let out = fake
        .launcher()
        .env("MCP_CLI_DOCKER", &missing)
        .args(["echo", "hi"])
        .output()
        .expect("run mcp-cli");
    assert_eq!(out.status.code(), Some(1));
    let se = common::stderr(&out);
    assert!(se.contains("no-docker-here"), "stderr:\n{se}");
    assert!(!se.contains("Attempting to pull"), "stderr:\n{se}");
}

#[test]
fn test_non_executable_docker_override_is_reported_up_front() {
    use std::os::unix::fs::PermissionsExt;

    let fake = FakeDocker::new();
    let mut perms = std::fs::metadata(&fake.script).expect("metadata").permissions();
    perms.set_mode(0o644);
    std::fs::set_permissions(&fake.script, perms).expect("chmod");

    let out = fake
        .launcher()
        .args(["grep", "not found", "app.log"])
        .output()
        .expect("run mcp-cli");
    assert_eq!(out.status.code(), Some(1));
    let se = common::stderr(&out);
    assert!(se.contains("not an executable file"), "stderr:\n{se}");
    assert!(!se.contains("Attempting to pull"), "stderr:\n{se}");
    assert!(fake.calls().is_empty());
}
