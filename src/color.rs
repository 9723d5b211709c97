#![allow(clippy::module_name_repetitions)]
//! Color mode configuration and ANSI painting helpers.
//!
//! Logging helpers policy (stderr one-liners):
//! - Every progress, warning and error line of both binaries goes through
//!   log_info_stderr / log_warn_stderr / log_error_stderr.
//! - Precompute once per scope and reuse:
//!     let use_err = mcp_cli::color_enabled_stderr();
//! - stdout is reserved for the launcher usage text and for the child process.

use clap::ValueEnum;
use once_cell::sync::OnceCell;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, ValueEnum)]
pub(crate) enum ColorMode {
    Auto,
    Always,
    Never,
}

static ENV_COLOR_MODE: OnceCell<Option<ColorMode>> = OnceCell::new();

pub(crate) fn parse_color_mode(s: &str) -> Option<ColorMode> {
    let t = s.trim();
    if let Ok(mode) = ColorMode::from_str(t, true) {
        return Some(mode);
    }
    match t.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Some(ColorMode::Always),
        "off" | "false" | "no" => Some(ColorMode::Never),
        _ => None,
    }
}

fn env_color_mode_pref() -> Option<ColorMode> {
    *ENV_COLOR_MODE.get_or_init(|| {
        std::env::var("MCP_CLI_COLOR")
            .ok()
            .and_then(|v| parse_color_mode(&v))
    })
}

fn no_color_env() -> bool {
    // Per https://no-color.org/
    std::env::var("NO_COLOR").is_ok()
}

fn resolve_color(no_color: bool, pref: Option<ColorMode>, is_tty: bool) -> bool {
    if no_color {
        return false;
    }
    match pref {
        Some(ColorMode::Always) => true,
        Some(ColorMode::Never) => false,
        Some(ColorMode::Auto) | None => is_tty,
    }
}

pub fn color_enabled_stderr() -> bool {
    resolve_color(
        no_color_env(),
        env_color_mode_pref(),
        atty::is(atty::Stream::Stderr),
    )
}

/// Wrap string with ANSI color code when enabled; otherwise return unchanged.
pub(crate) fn paint(enabled: bool, code: &str, s: &str) -> String {
    if enabled {
        format!("{code}{s}\x1b[0m")
    } else {
        s.to_string()
    }
}

pub fn log_info_stderr(use_color: bool, msg: &str) {
    eprintln!("{}", paint(use_color, "\x1b[36;1m", msg));
}

pub(crate) fn log_warn_stderr(use_color: bool, msg: &str) {
    eprintln!("{}", paint(use_color, "\x1b[33m", msg));
}

pub fn log_error_stderr(use_color: bool, msg: &str) {
    eprintln!("{}", paint(use_color, "\x1b[31;1m", msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_mode_values_and_aliases() {
        assert_eq!(parse_color_mode("auto"), Some(ColorMode::Auto));
        assert_eq!(parse_color_mode(" ALWAYS "), Some(ColorMode::Always));
        assert_eq!(parse_color_mode("never"), Some(ColorMode::Never));
        assert_eq!(parse_color_mode("yes"), Some(ColorMode::Always));
        assert_eq!(parse_color_mode("off"), Some(ColorMode::Never));
        assert_eq!(parse_color_mode("rainbow"), None);
    }

    #[test]
    fn test_resolve_color_precedence() {
        // NO_COLOR wins over everything
        assert!(!resolve_color(true, Some(ColorMode::Always), true));
        assert!(resolve_color(false, Some(ColorMode::Always), false));
        assert!(!resolve_color(false, Some(ColorMode::Never), true));
        assert!(resolve_color(false, Some(ColorMode::Auto), true));
        assert!(!resolve_color(false, None, false));
    }

    #[test]
    fn test_paint_only_when_enabled() {
        assert_eq!(paint(false, "\x1b[31;1m", "boom"), "boom");
        assert_eq!(paint(true, "\x1b[31;1m", "boom"), "\x1b[31;1mboom\x1b[0m");
    }
}
