//! Stamps build metadata into both binaries for the usage footer and the
//! startup log line.
use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

/// Trimmed stdout of a successful command, `None` when it cannot run or fails.
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let out = Command::new(program).args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&out.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env=MCP_CLI_BUILD_{key}={value}");
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    // Reproducible builds pin the date through SOURCE_DATE_EPOCH.
    let date = match env::var("SOURCE_DATE_EPOCH") {
        Ok(epoch) => {
            let at = format!("@{epoch}");
            command_stdout("date", &["-u", "-d", &at, "+%Y-%m-%dT%H:%M:%SZ"])
                .unwrap_or_else(|| format!("unix:{epoch}"))
        }
        Err(_) => command_stdout("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).unwrap_or_else(|| {
            let secs = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            format!("unix:{secs}")
        }),
    };
    emit("DATE", &date);

    emit("TARGET", &env::var("TARGET").unwrap_or_else(|_| "unknown".into()));
    emit("PROFILE", &env::var("PROFILE").unwrap_or_else(|_| "unknown".into()));

    // Cargo hands the exact compiler in RUSTC; fall back to whatever is on PATH.
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".into());
    let rustc_version =
        command_stdout(&rustc, &["--version"]).unwrap_or_else(|| "rustc unknown".into());
    emit("RUSTC", &rustc_version);
}
