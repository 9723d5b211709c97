#![allow(clippy::module_name_repetitions)]
//! Docker CLI access for the launcher.
//!
//! `DockerCli` is the seam between launcher policy and the external docker
//! executable; `DockerCommand` is the real implementation.

mod images;
mod run;
mod runtime;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::util::exec::{ExecService, Termination};

pub use images::{build_args, pull_args};
pub use run::run_args;
pub use runtime::{container_runtime_path, DOCKER_OVERRIDE_ENV};

/// The four docker operations the launcher relies on.
///
/// `build`, `pull` and `run` stream their output to the user's terminal and
/// return an error only when the docker process could not be started or
/// waited on.
pub trait DockerCli {
    /// Id of the local image, or an empty string when it is not present.
    fn local_image_id(&self, image: &str) -> Result<String>;
    fn build(&self, image: &str, dockerfile: &Path, context: &Path) -> Result<Termination>;
    fn pull(&self, image: &str) -> Result<Termination>;
    fn run(&self, image: &str, args: &[String]) -> Result<Termination>;
}

/// Docker operations backed by the docker executable.
#[derive(Debug, Clone)]
pub struct DockerCommand {
    runtime: PathBuf,
    exec: ExecService,
}

impl DockerCommand {
    /// Locate the docker executable (`MCP_CLI_DOCKER` or `PATH`).
    pub fn discover() -> io::Result<Self> {
        Ok(Self::with_runtime(container_runtime_path()?))
    }

    pub fn with_runtime(runtime: PathBuf) -> Self {
        Self {
            runtime,
            exec: ExecService::new(),
        }
    }

    pub fn runtime(&self) -> &Path {
        &self.runtime
    }
}

impl DockerCli for DockerCommand {
    fn local_image_id(&self, image: &str) -> Result<String> {
        images::local_image_id(&self.exec, &self.runtime, image)
    }

    fn build(&self, image: &str, dockerfile: &Path, context: &Path) -> Result<Termination> {
        images::build_image(&self.exec, &self.runtime, image, dockerfile, context)
    }

    fn pull(&self, image: &str) -> Result<Termination> {
        images::pull_image(&self.exec, &self.runtime, image)
    }

    fn run(&self, image: &str, args: &[String]) -> Result<Termination> {
        run::run_container(&self.exec, &self.runtime, image, args)
    }
}
