/*!
mcp-cli library: shared pieces of the `mcp-cli` host launcher and the
`mcp-proxy` in-container runner.

Modules
- cli: launcher argv handling (`--dev` extraction, usage text)
- launcher: dev image build / prod image pull policy and the container run
- docker: `DockerCli` seam over the docker executable
- proxy: in-container runner (context detection, work dir, command execution)
- errors: error taxonomy and exit-code mapping
- color / logging: stderr diagnostics and `tracing` setup
- util: shell quoting and child-process execution
*/

pub mod cli;
mod color;
pub mod docker;
pub mod errors;
pub mod launcher;
pub mod logging;
pub mod proxy;
pub mod util;

pub use cli::{parse_invocation, split_dev_flag, usage_text, ImageKind, Invocation};
pub use color::{color_enabled_stderr, log_error_stderr, log_info_stderr};
pub use docker::{container_runtime_path, DockerCli, DockerCommand};
pub use errors::{is_missing_image_error, LaunchError, ProxyError};
pub use launcher::{
    attempt_pull_prod_image, ensure_dev_image, run_invocation, DevImageState, LauncherConfig,
    DEV_IMAGE, PROD_IMAGE,
};
pub use proxy::{run_proxy, ExecContext, ProxyConfig};
pub use util::exec::Termination;
pub use util::{shell_escape, shell_join};
