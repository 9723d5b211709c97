#![allow(clippy::module_name_repetitions)]
//! Docker runtime discovery.

use std::env;
use std::io;
use std::path::PathBuf;

use which::which;

/// Environment override naming the docker executable to use.
pub const DOCKER_OVERRIDE_ENV: &str = "MCP_CLI_DOCKER";

pub fn container_runtime_path() -> io::Result<PathBuf> {
    if let Ok(p) = env::var(DOCKER_OVERRIDE_ENV) {
        let p = p.trim();
        if !p.is_empty() {
            // Paths are checked for the executable bit; bare names are looked up on PATH.
            if let Ok(found) = which(p) {
                return Ok(found);
            }
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{DOCKER_OVERRIDE_ENV} points to '{p}', which is not an executable file."),
            ));
        }
    }

    if let Ok(p) = which("docker") {
        return Ok(p);
    }
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        "Docker is required but was not found in PATH.",
    ))
}
