//! In-container runner: execute a command from the application root.
//!
//! Context detection: the `/.dockerenv` sentinel or `NODE_ENV=production`
//! means "inside a container" (work dir `/app`); otherwise the runner is a
//! local build and works from the project root two levels above the
//! directory holding its executable (`<root>/target/<profile>/mcp-proxy`).

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::color::{log_error_stderr, log_info_stderr};
use crate::errors::ProxyError;
use crate::util::exec::{ExecRequest, ExecService};

pub const SENTINEL_FILE: &str = "/.dockerenv";
pub const CONTAINER_APP_DIR: &str = "/app";
pub const RUNTIME_ENV_VAR: &str = "NODE_ENV";
pub const PRODUCTION_RUNTIME: &str = "production";

/// Where the runner believes it is executing.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ExecContext {
    InContainer,
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub sentinel: PathBuf,
    pub runtime_env: Option<String>,
}

impl ProxyConfig {
    pub fn from_env() -> Self {
        Self {
            sentinel: PathBuf::from(SENTINEL_FILE),
            runtime_env: env::var(RUNTIME_ENV_VAR).ok(),
        }
    }

    pub fn context(&self) -> ExecContext {
        detect_context(&self.sentinel, self.runtime_env.as_deref())
    }
}

pub fn detect_context(sentinel: &Path, runtime_env: Option<&str>) -> ExecContext {
    if sentinel.exists() || runtime_env == Some(PRODUCTION_RUNTIME) {
        ExecContext::InContainer
    } else {
        ExecContext::Local
    }
}

/// Project root for a runner living at `<root>/<a>/<b>/<exe>`.
pub fn local_project_root(exe: &Path) -> io::Result<PathBuf> {
    exe.ancestors()
        .nth(3)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no project root above {}", exe.display()),
            )
        })
}

pub fn resolve_work_dir(ctx: ExecContext) -> Result<PathBuf, ProxyError> {
    match ctx {
        ExecContext::InContainer => Ok(PathBuf::from(CONTAINER_APP_DIR)),
        ExecContext::Local => {
            let exe = env::current_exe().map_err(ProxyError::WorkDir)?;
            local_project_root(&exe).map_err(ProxyError::WorkDir)
        }
    }
}

/// Run `command` in `work_dir` with the parent's environment and stdio.
#[instrument(level = "debug", skip(args), fields(argc = args.len()))]
pub fn execute(command: &str, args: &[String], work_dir: &Path) -> Result<(), ProxyError> {
    let out = ExecService::new()
        .run(
            ExecRequest::new(command)
                .args(args)
                .cwd(work_dir)
                .inherit_env(true),
        )
        .map_err(|e| ProxyError::Spawn(format!("{e:#}")))?;
    tracing::debug!(status = %out.status, elapsed = ?out.duration, "command finished");
    if out.status.success() {
        return Ok(());
    }
    let mut words = vec![command.to_string()];
    words.extend(args.iter().cloned());
    Err(ProxyError::Failed {
        command_line: words.join(" "),
        status: out.status,
    })
}

pub fn usage_lines() -> [&'static str; 3] {
    [
        "Error: No command provided.",
        "Usage: mcp-proxy <command> [args...]",
        "Example: mcp-proxy npx cowsay \"Hello from container\"",
    ]
}

/// Full runner flow for `argv` (without argv0); returns the exit code.
pub fn run_proxy(cfg: &ProxyConfig, argv: &[String], use_err: bool) -> u8 {
    let Some((command, args)) = argv.split_first() else {
        for line in usage_lines() {
            log_error_stderr(use_err, line);
        }
        return ProxyError::Usage.exit_code();
    };

    log_info_stderr(
        use_err,
        &format!("Executing: {} {}", command, args.join(" ")),
    );

    let ctx = cfg.context();
    let work_dir = match resolve_work_dir(ctx) {
        Ok(d) => d,
        Err(e) => {
            log_error_stderr(use_err, &format!("mcp-proxy: {e}"));
            return e.exit_code();
        }
    };
    tracing::debug!(context = ?ctx, "execution context");
    log_info_stderr(
        use_err,
        &format!("Working Directory: {}", work_dir.display()),
    );

    match execute(command, args, &work_dir) {
        Ok(()) => 0,
        Err(e) => {
            log_error_stderr(use_err, &format!("Error executing command: {e}"));
            e.exit_code()
        }
    }
}
