//! Small utilities: shell quoting for command previews.

pub mod exec;

/// Join arguments into a single shell-safe line (used for log previews only).
pub fn shell_join(args: &[String]) -> String {
    args.iter()
        .map(|a| shell_escape(a))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn shell_escape(s: &str) -> String {
    if s.is_empty() {
        "''".to_string()
    } else if s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_=./:@".contains(c))
    {
        s.to_string()
    } else {
        let escaped = s.replace('\'', "'\"'\"'");
        format!("'{}'", escaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_escape_plain_and_quoted() {
        assert_eq!(shell_escape("cowsay"), "cowsay");
        assert_eq!(shell_escape("openint/openint-mcp:latest"), "openint/openint-mcp:latest");
        assert_eq!(shell_escape(""), "''");
        assert_eq!(shell_escape("Hello Prod"), "'Hello Prod'");
        assert_eq!(shell_escape("it's"), "'it'\"'\"'s'");
    }

    #[test]
    fn test_shell_join_mixed() {
        let args = vec![
            "npx".to_string(),
            "cowsay".to_string(),
            "Hello Dev".to_string(),
        ];
        assert_eq!(shell_join(&args), "npx cowsay 'Hello Dev'");
    }
}
