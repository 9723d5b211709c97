#![allow(clippy::module_name_repetitions)]
//! Docker image helpers: local presence query, build and pull.

use std::path::Path;

use anyhow::{bail, Result};
use tracing::instrument;

use crate::util::exec::{ExecRequest, ExecService, Termination};

/// Arguments for `docker build -t <image> -f <dockerfile> <context>`.
pub fn build_args(image: &str, dockerfile: &Path, context: &Path) -> Vec<String> {
    vec![
        "build".to_string(),
        "-t".to_string(),
        image.to_string(),
        "-f".to_string(),
        dockerfile.display().to_string(),
        context.display().to_string(),
    ]
}

/// Arguments for `docker pull <image>`.
pub fn pull_args(image: &str) -> Vec<String> {
    vec!["pull".to_string(), image.to_string()]
}

/// Return the local image id for `image` (empty when the image is absent).
#[instrument(level = "debug", skip(exec, runtime))]
pub fn local_image_id(exec: &ExecService, runtime: &Path, image: &str) -> Result<String> {
    let out = exec.run(
        ExecRequest::new(runtime)
            .args(["images", "-q", image])
            .capture_output(true),
    )?;
    if !out.status.success() {
        bail!(
            "docker images -q {} finished with {}: {}",
            image,
            out.status,
            out.stderr.trim()
        );
    }
    let id = out.stdout.trim().to_string();
    tracing::debug!(image, id = %id, "local image query");
    Ok(id)
}

/// Build `image` with output streamed to the terminal.
#[instrument(level = "debug", skip(exec, runtime))]
pub fn build_image(
    exec: &ExecService,
    runtime: &Path,
    image: &str,
    dockerfile: &Path,
    context: &Path,
) -> Result<Termination> {
    let out = exec.run(ExecRequest::new(runtime).args(build_args(image, dockerfile, context)))?;
    tracing::debug!(status = %out.status, elapsed = ?out.duration, "docker build finished");
    Ok(out.status)
}

/// Pull `image` with output streamed to the terminal.
#[instrument(level = "debug", skip(exec, runtime))]
pub fn pull_image(exec: &ExecService, runtime: &Path, image: &str) -> Result<Termination> {
    let out = exec.run(ExecRequest::new(runtime).args(pull_args(image)))?;
    tracing::debug!(status = %out.status, elapsed = ?out.duration, "docker pull finished");
    Ok(out.status)
}
