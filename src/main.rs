use std::env;
use std::process::ExitCode;

use mcp_cli::{DockerCommand, LauncherConfig};

fn main() -> ExitCode {
    mcp_cli::logging::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(invocation) = mcp_cli::parse_invocation(args) else {
        print!("{}", mcp_cli::usage_text());
        return ExitCode::from(0);
    };

    let use_err = mcp_cli::color_enabled_stderr();
    let docker = match DockerCommand::discover() {
        Ok(d) => d,
        Err(e) => {
            let err = mcp_cli::LaunchError::RuntimeMissing(e);
            mcp_cli::log_error_stderr(use_err, &format!("mcp-cli: {err}"));
            return ExitCode::from(err.exit_code());
        }
    };

    let cfg = LauncherConfig::from_env();
    tracing::debug!(
        runtime = %docker.runtime().display(),
        image = invocation.kind.image(),
        force_build = cfg.force_build,
        "launcher starting"
    );

    ExitCode::from(mcp_cli::run_invocation(&docker, &invocation, &cfg, use_err))
}
