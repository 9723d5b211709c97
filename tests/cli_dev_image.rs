#![cfg(unix)]

mod common;

use common::FakeDocker;

fn build_line(fake: &FakeDocker) -> String {
    let root = fake.project_root().display().to_string();
    format!("build -t openint-mcp-dev -f {root}/docker/dev/Dockerfile {root}")
}

#[test]
fn test_absent_dev_image_is_built_once_before_run() {
    let fake = FakeDocker::new();
    let out = fake
        .launcher()
        .args(["--dev", "npx", "cowsay", "Hello Dev"])
        .output()
        .expect("run mcp-cli");
    assert_eq!(out.status.code(), Some(0), "stderr:\n{}", common::stderr(&out));
    assert_eq!(
        fake.calls(),
        vec![
            "images -q openint-mcp-dev".to_string(),
            build_line(&fake),
            "run -i --rm openint-mcp-dev npx cowsay Hello Dev".to_string(),
        ]
    );
    let se = common::stderr(&out);
    assert!(se.contains("Development image openint-mcp-dev not found."), "stderr:\n{se}");
    assert!(se.contains("built successfully"), "stderr:\n{se}");
}

#[test]
fn test_present_dev_image_is_not_rebuilt() {
    let fake = FakeDocker::new();
    let out = fake
        .launcher()
        .env("FAKE_DOCKER_IMAGE_ID", "0123456789ab")
        .args(["echo", "--dev", "hi"])
        .output()
        .expect("run mcp-cli");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        fake.calls(),
        vec![
            "images -q openint-mcp-dev".to_string(),
            "run -i --rm openint-mcp-dev echo hi".to_string(),
        ]
    );
    assert!(common::stderr(&out).contains("Using existing development image: openint-mcp-dev"));
}

#[test]
fn test_force_docker_build_rebuilds_present_image() {
    let fake = FakeDocker::new();
    let out = fake
        .launcher()
        .env("FAKE_DOCKER_IMAGE_ID", "0123456789ab")
        .env("FORCE_DOCKER_BUILD", "true")
        .args(["--dev", "echo"])
        .output()
        .expect("run mcp-cli");
    assert_eq!(out.status.code(), Some(0));
    let calls = fake.calls();
    assert_eq!(calls.len(), 3, "calls: {calls:?}");
    assert_eq!(calls[1], build_line(&fake));
    assert!(common::stderr(&out).contains("FORCE_DOCKER_BUILD is true."));
}

#[test]
fn test_failed_build_is_fatal_and_skips_run() {
    let fake = FakeDocker::new();
    let out = fake
        .launcher()
        .env("FAKE_DOCKER_BUILD_EXIT", "3")
        .args(["--dev", "echo"])
        .output()
        .expect("run mcp-cli");
    assert_eq!(out.status.code(), Some(1));
    let calls = fake.calls();
    assert_eq!(calls.len(), 2, "calls: {calls:?}");
    assert!(calls.iter().all(|c| !c.starts_with("run ")));
    let se = common::stderr(&out);
    assert!(
        se.contains("Failed to ensure development image openint-mcp-dev is available. Exiting."),
        "stderr:\n{se}"
    );
}

#[test]
fn test_second_dev_flag_is_forwarded() {
    let fake = FakeDocker::new();
    let out = fake
        .launcher()
        .env("FAKE_DOCKER_IMAGE_ID", "0123456789ab")
        .args(["--dev", "echo", "--dev"])
        .output()
        .expect("run mcp-cli");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        fake.calls().last().map(String::as_str),
        Some("run -i --rm openint-mcp-dev echo --dev")
    );
}
