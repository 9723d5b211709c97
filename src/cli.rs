//! Launcher command line: `mcp-cli [--dev] <command> [args...]`.
//!
//! Everything except the first `--dev` token belongs to the containerized
//! command and is forwarded verbatim, so this is a plain argv scan rather
//! than a flag parser.

use crate::launcher::{DEV_IMAGE, PROD_IMAGE};

pub const DEV_FLAG: &str = "--dev";

/// Which image the command runs in.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ImageKind {
    /// Locally built development image.
    Dev,
    /// Published production image.
    Prod,
}

impl ImageKind {
    pub fn image(self) -> &'static str {
        match self {
            ImageKind::Dev => DEV_IMAGE,
            ImageKind::Prod => PROD_IMAGE,
        }
    }
}

/// A command to run in a container.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Invocation {
    pub kind: ImageKind,
    pub args: Vec<String>,
}

/// Remove the first `--dev` token, reporting whether one was present.
/// Later `--dev` tokens stay in place for the containerized command.
pub fn split_dev_flag(mut args: Vec<String>) -> (bool, Vec<String>) {
    match args.iter().position(|a| a == DEV_FLAG) {
        Some(idx) => {
            args.remove(idx);
            (true, args)
        }
        None => (false, args),
    }
}

/// Turn the launcher's arguments (without argv0) into an invocation.
/// `None` means there is no command to run and usage should be shown.
pub fn parse_invocation(args: Vec<String>) -> Option<Invocation> {
    let (dev, args) = split_dev_flag(args);
    if args.is_empty() {
        return None;
    }
    let kind = if dev { ImageKind::Dev } else { ImageKind::Prod };
    Some(Invocation { kind, args })
}

pub fn usage_text() -> String {
    let mut s = String::new();
    s.push_str("Usage: mcp-cli [--dev] <command> [args...]\n");
    s.push_str("Runs the specified command inside a Docker container.\n");
    s.push_str(&format!(
        "  --dev : Use the local development image ({DEV_IMAGE}), building it if necessary.\n"
    ));
    s.push_str(&format!(
        "          (Default: use official production image {PROD_IMAGE}, pulling if necessary)\n"
    ));
    s.push_str("\nExamples:\n");
    s.push_str("  mcp-cli npx cowsay \"Hello Prod\"  (Uses production image)\n");
    s.push_str("  mcp-cli --dev npx cowsay \"Hello Dev\" (Uses development image)\n");
    s.push_str("\nImage Handling:\n");
    s.push_str(&format!(
        "  - Production image ({PROD_IMAGE}) will be pulled automatically if not found locally (default).\n"
    ));
    s.push_str(&format!(
        "  - Development image ({DEV_IMAGE}) will be built automatically if not found locally (when using --dev).\n"
    ));
    s.push_str("    Set FORCE_DOCKER_BUILD=true to rebuild it even when present.\n");
    s.push_str(&format!(
        "\nmcp-cli v{} ({}, {}, built {} with {})\n",
        env!("CARGO_PKG_VERSION"),
        env!("MCP_CLI_BUILD_TARGET"),
        env!("MCP_CLI_BUILD_PROFILE"),
        env!("MCP_CLI_BUILD_DATE"),
        env!("MCP_CLI_BUILD_RUSTC"),
    ));
    s
}
