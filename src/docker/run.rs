//! `docker run` invocation for the launcher.

use std::path::Path;

use anyhow::Result;
use tracing::instrument;

use crate::util::exec::{ExecRequest, ExecService, Termination};

/// Arguments for `docker run -i --rm <image> <args...>`.
pub fn run_args(image: &str, passthrough: &[String]) -> Vec<String> {
    let mut args = vec![
        "run".to_string(),
        "-i".to_string(),
        "--rm".to_string(),
        image.to_string(),
    ];
    args.extend(passthrough.iter().cloned());
    args
}

/// Run `passthrough` inside a fresh container with stdio inherited, waiting for it to exit.
#[instrument(level = "debug", skip(exec, runtime, passthrough), fields(argc = passthrough.len()))]
pub fn run_container(
    exec: &ExecService,
    runtime: &Path,
    image: &str,
    passthrough: &[String],
) -> Result<Termination> {
    let out = exec.run(ExecRequest::new(runtime).args(run_args(image, passthrough)))?;
    tracing::debug!(status = %out.status, elapsed = ?out.duration, "container exited");
    Ok(out.status)
}
