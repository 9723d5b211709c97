//! Error taxonomy for both entry points.
//!
//! Exit code mapping:
//! - Every internal failure exits 1 (including a missing docker executable).
//! - A child command's own failure is not an error here; its code is relayed as-is.
use std::fmt;
use std::io;

use crate::util::exec::Termination;

/// Text fragments that mark a spawn error as "image is not present locally".
const MISSING_IMAGE_MARKERS: &[&str] = &["No such image", "not found"];

/// True when an error message says the requested image is absent.
pub fn is_missing_image_error(message: &str) -> bool {
    MISSING_IMAGE_MARKERS.iter().any(|m| message.contains(m))
}

/// Failures of the host launcher that abort the run.
#[derive(Debug)]
pub enum LaunchError {
    /// The docker executable could not be located.
    RuntimeMissing(io::Error),
    /// `docker images -q` could not be executed or failed.
    ImageQuery { image: String, detail: String },
    /// `docker build` could not be started or returned non-zero.
    Build {
        image: String,
        dockerfile: String,
        detail: String,
    },
    /// `docker pull` could not be started or returned non-zero.
    Pull { image: String, detail: String },
    /// `docker run` itself could not be started.
    Spawn { image: String, detail: String },
}

impl LaunchError {
    pub fn exit_code(&self) -> u8 {
        1
    }

    pub(crate) fn build_failed(image: &str, dockerfile: &str, status: Termination) -> Self {
        LaunchError::Build {
            image: image.to_string(),
            dockerfile: dockerfile.to_string(),
            detail: format!("docker build finished with {status}"),
        }
    }

    pub(crate) fn pull_failed(image: &str, status: Termination) -> Self {
        LaunchError::Pull {
            image: image.to_string(),
            detail: format!("docker pull finished with {status}"),
        }
    }
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::RuntimeMissing(e) => write!(f, "{e}"),
            LaunchError::ImageQuery { image, detail } => {
                write!(f, "Error checking for development image {image}: {detail}")
            }
            LaunchError::Build {
                dockerfile, detail, ..
            } => write!(
                f,
                "Error building development Docker image from {dockerfile}: {detail}"
            ),
            LaunchError::Pull { image, detail } => {
                write!(f, "Failed to pull image {image}: {detail}")
            }
            LaunchError::Spawn { image, detail } => {
                write!(f, "Failed to start container for image {image}: {detail}")
            }
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaunchError::RuntimeMissing(e) => Some(e),
            _ => None,
        }
    }
}

/// Failures of the in-container runner.
#[derive(Debug)]
pub enum ProxyError {
    /// No command was given on the command line.
    Usage,
    /// The working directory could not be determined.
    WorkDir(io::Error),
    /// The command could not be started.
    Spawn(String),
    /// The command ran and ended unsuccessfully.
    Failed {
        command_line: String,
        status: Termination,
    },
}

impl ProxyError {
    /// Exit status for this failure. A failed child maps exactly as [`Termination::exit_code`].
    pub fn exit_code(&self) -> u8 {
        match self {
            ProxyError::Failed { status, .. } => status.exit_code(),
            _ => 1,
        }
    }
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyError::Usage => write!(f, "No command provided."),
            ProxyError::WorkDir(e) => write!(f, "could not resolve working directory: {e}"),
            ProxyError::Spawn(detail) => write!(f, "{detail}"),
            ProxyError::Failed {
                command_line,
                status: Termination::Exited(code),
            } => write!(f, "Command failed with exit code {code}: {command_line}"),
            ProxyError::Failed {
                command_line,
                status,
            } => write!(f, "Command was killed with {status}: {command_line}"),
        }
    }
}

impl std::error::Error for ProxyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProxyError::WorkDir(e) => Some(e),
            _ => None,
        }
    }
}
