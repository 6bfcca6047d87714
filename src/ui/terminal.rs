use is_terminal::IsTerminal;

use ccsync::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    /// Apply an explicit `--color` choice on top of detection
    pub fn with_color_choice(mut self, color: Option<ColorWhen>) -> Self {
        match color {
            Some(ColorWhen::Always) => self.supports_color = true,
            Some(ColorWhen::Never) => self.supports_color = false,
            Some(ColorWhen::Auto) | None => {}
        }
        self
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

pub fn detect_stderr_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), std::io::stderr().is_terminal())
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term_is_dumb = get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
    let no_color = get_env("NO_COLOR").is_some();

    TerminalCapabilities {
        supports_color: is_tty && !term_is_dumb && !no_color,
        is_ci: is_ci_env(&get_env),
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "JENKINS_HOME",
        "BUILDKITE",
        "GITLAB_CI",
        "TRAVIS",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}
