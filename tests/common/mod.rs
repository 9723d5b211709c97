#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Fake docker: logs each invocation's arguments as one line, then answers
/// from FAKE_DOCKER_* variables (image id for `images`, exit codes otherwise).
const FAKE_DOCKER: &str = r#"#!/bin/sh
echo "$*" >> "$FAKE_DOCKER_LOG"
case "$1" in
  images)
    if [ -n "$FAKE_DOCKER_IMAGE_ID" ]; then echo "$FAKE_DOCKER_IMAGE_ID"; fi
    exit 0
    ;;
  build) exit "${FAKE_DOCKER_BUILD_EXIT:-0}" ;;
  pull) exit "${FAKE_DOCKER_PULL_EXIT:-0}" ;;
  run) exit "${FAKE_DOCKER_RUN_EXIT:-0}" ;;
esac
exit 0
"#;

pub struct FakeDocker {
    pub dir: tempfile::TempDir,
    pub script: PathBuf,
    pub log: PathBuf,
}

impl FakeDocker {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tmpdir");
        let script = dir.path().join("docker");
        fs::write(&script, FAKE_DOCKER).expect("write fake docker");
        let mut perms = fs::metadata(&script).expect("metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script, perms).expect("chmod fake docker");
        let log = dir.path().join("docker.log");
        FakeDocker { dir, script, log }
    }

    pub fn project_root(&self) -> &Path {
        self.dir.path()
    }

    /// Recorded docker invocations, one per line (empty when docker never ran).
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// `mcp-cli` wired to this fake docker with a clean launcher environment.
    pub fn launcher(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_mcp-cli"));
        cmd.env("MCP_CLI_DOCKER", &self.script)
            .env("MCP_CLI_PROJECT_ROOT", self.project_root())
            .env("FAKE_DOCKER_LOG", &self.log)
            .env("NO_COLOR", "1")
            .env_remove("FORCE_DOCKER_BUILD")
            .env_remove("FAKE_DOCKER_IMAGE_ID")
            .env_remove("RUST_LOG");
        cmd
    }
}

pub fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

pub fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}
