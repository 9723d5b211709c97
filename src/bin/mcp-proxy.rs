use std::env;
use std::process::ExitCode;

use mcp_cli::ProxyConfig;

fn main() -> ExitCode {
    mcp_cli::logging::init();

    let argv: Vec<String> = env::args().skip(1).collect();
    let cfg = ProxyConfig::from_env();
    let use_err = mcp_cli::color_enabled_stderr();

    ExitCode::from(mcp_cli::run_proxy(&cfg, &argv, use_err))
}
