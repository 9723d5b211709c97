//! Host launcher: make the selected image available and run a command in it.
//!
//! Image policy:
//! - dev: query `docker images -q`, build when absent or FORCE_DOCKER_BUILD=true;
//!   any query/build failure aborts before the run.
//! - prod: no pre-check. Only a spawn failure that names a missing image
//!   triggers one `docker pull`; the run is then NOT retried, the user is
//!   asked to re-invoke.

use std::env;
use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::cli::{ImageKind, Invocation};
use crate::color::{log_error_stderr, log_info_stderr, log_warn_stderr};
use crate::docker::{run_args, DockerCli};
use crate::errors::{is_missing_image_error, LaunchError};
use crate::util::exec::Termination;
use crate::util::shell_join;

pub const DEV_IMAGE: &str = "openint-mcp-dev";
pub const PROD_IMAGE: &str = "openint/openint-mcp:latest";

pub const FORCE_BUILD_ENV: &str = "FORCE_DOCKER_BUILD";
pub const PROJECT_ROOT_ENV: &str = "MCP_CLI_PROJECT_ROOT";

/// Dockerfile of the development image, relative to the project root.
pub const DEV_DOCKERFILE: &str = "docker/dev/Dockerfile";

/// Launcher settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Rebuild the development image even when it is present.
    pub force_build: bool,
    /// Build context of the development image.
    pub project_root: PathBuf,
}

impl LauncherConfig {
    pub fn from_env() -> Self {
        let force_build = env::var(FORCE_BUILD_ENV).ok().as_deref() == Some("true");
        let project_root = env::var(PROJECT_ROOT_ENV)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")));
        Self {
            force_build,
            project_root,
        }
    }

    pub fn dockerfile(&self) -> PathBuf {
        self.project_root.join(DEV_DOCKERFILE)
    }

    pub fn build_context(&self) -> &Path {
        &self.project_root
    }
}

/// What `ensure_dev_image` had to do.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DevImageState {
    AlreadyPresent,
    Built,
}

/// Make sure the development image exists locally, building it when needed.
#[instrument(level = "debug", skip(docker, use_err))]
pub fn ensure_dev_image<D: DockerCli + ?Sized>(
    docker: &D,
    cfg: &LauncherConfig,
    use_err: bool,
) -> Result<DevImageState, LaunchError> {
    let dockerfile = cfg.dockerfile();
    let dockerfile_display = dockerfile.display().to_string();

    log_info_stderr(
        use_err,
        &format!("Checking for local development image: {DEV_IMAGE}"),
    );
    let image_id = docker
        .local_image_id(DEV_IMAGE)
        .map_err(|e| LaunchError::ImageQuery {
            image: DEV_IMAGE.to_string(),
            detail: format!("{e:#}"),
        })?;

    if !image_id.is_empty() && !cfg.force_build {
        log_info_stderr(
            use_err,
            &format!("Using existing development image: {DEV_IMAGE}"),
        );
        return Ok(DevImageState::AlreadyPresent);
    }

    if image_id.is_empty() {
        log_info_stderr(
            use_err,
            &format!("Development image {DEV_IMAGE} not found."),
        );
    } else {
        log_info_stderr(use_err, &format!("{FORCE_BUILD_ENV} is true."));
    }
    log_info_stderr(
        use_err,
        &format!("Building development image from {dockerfile_display}..."),
    );

    let status = docker
        .build(DEV_IMAGE, &dockerfile, cfg.build_context())
        .map_err(|e| LaunchError::Build {
            image: DEV_IMAGE.to_string(),
            dockerfile: dockerfile_display.clone(),
            detail: format!("{e:#}"),
        })?;
    if !status.success() {
        return Err(LaunchError::build_failed(
            DEV_IMAGE,
            &dockerfile_display,
            status,
        ));
    }

    log_info_stderr(
        use_err,
        &format!("Development image {DEV_IMAGE} built successfully."),
    );
    Ok(DevImageState::Built)
}

/// Pull the production image once, streaming docker's own progress output.
#[instrument(level = "debug", skip(docker, use_err))]
pub fn attempt_pull_prod_image<D: DockerCli + ?Sized>(
    docker: &D,
    use_err: bool,
) -> Result<(), LaunchError> {
    log_info_stderr(
        use_err,
        &format!("Attempting to pull production image: {PROD_IMAGE}..."),
    );
    let status = docker.pull(PROD_IMAGE).map_err(|e| LaunchError::Pull {
        image: PROD_IMAGE.to_string(),
        detail: format!("{e:#}"),
    })?;
    if !status.success() {
        return Err(LaunchError::pull_failed(PROD_IMAGE, status));
    }
    log_info_stderr(
        use_err,
        &format!("Successfully pulled {PROD_IMAGE}. Please re-run your command."),
    );
    Ok(())
}

/// Run `inv` in its container and return the exit code the launcher should exit with.
#[instrument(level = "debug", skip(docker, inv, cfg, use_err), fields(kind = ?inv.kind))]
pub fn run_invocation<D: DockerCli + ?Sized>(
    docker: &D,
    inv: &Invocation,
    cfg: &LauncherConfig,
    use_err: bool,
) -> u8 {
    let image = inv.kind.image();

    if inv.kind == ImageKind::Dev {
        if let Err(e) = ensure_dev_image(docker, cfg, use_err) {
            log_error_stderr(use_err, &e.to_string());
            log_error_stderr(
                use_err,
                &format!("Failed to ensure development image {image} is available. Exiting."),
            );
            return e.exit_code();
        }
    }

    let mut preview = vec!["docker".to_string()];
    preview.extend(run_args(image, &inv.args));
    log_info_stderr(use_err, &format!("Using image: {image}"));
    log_info_stderr(
        use_err,
        &format!("Running in container: {}", shell_join(&preview)),
    );

    match docker.run(image, &inv.args) {
        Ok(status) => {
            match status {
                Termination::Exited(0) => {}
                Termination::Exited(code) => {
                    log_warn_stderr(use_err, &format!("Container exited with code {code}"));
                }
                Termination::Signaled(_) => {
                    log_warn_stderr(use_err, &format!("Container terminated by {status}"));
                }
            }
            status.exit_code()
        }
        Err(e) => {
            let detail = format!("{e:#}");
            tracing::debug!(error = %detail, "docker run could not be started");
            // Context lines carry the forwarded argv; only the cause names the image state.
            let cause = e.root_cause().to_string();
            if inv.kind == ImageKind::Prod && is_missing_image_error(&cause) {
                log_error_stderr(
                    use_err,
                    &format!("Production image {image} not found locally."),
                );
                return match attempt_pull_prod_image(docker, use_err) {
                    Ok(()) => 0,
                    Err(pull_err) => {
                        log_error_stderr(use_err, &pull_err.to_string());
                        log_error_stderr(
                            use_err,
                            "Please ensure Docker is running and you have internet access, or pull the image manually.",
                        );
                        pull_err.exit_code()
                    }
                };
            }

            let err = LaunchError::Spawn {
                image: image.to_string(),
                detail,
            };
            log_error_stderr(use_err, &err.to_string());
            match inv.kind {
                ImageKind::Dev => log_error_stderr(
                    use_err,
                    "Attempted to build the dev image but failed or it's still unavailable.",
                ),
                ImageKind::Prod => log_error_stderr(
                    use_err,
                    &format!("Please ensure the image \"{image}\" is available."),
                ),
            }
            err.exit_code()
        }
    }
}
