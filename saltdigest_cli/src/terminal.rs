//! Terminal detection for color output

use is_terminal::IsTerminal;
use std::env;
use std::io::stdout;

/// Check if stdout is connected to an interactive terminal
pub fn is_interactive() -> bool {
    if !stdout().is_terminal() {
        return false;
    }

    // CI runners sometimes allocate a TTY that nobody reads interactively
    if is_ci_environment() {
        return false;
    }

    true
}

/// Check if the terminal supports ANSI escape codes for colors
pub fn supports_ansi() -> bool {
    if !is_interactive() {
        return false;
    }

    let term = env::var("TERM").unwrap_or_default();
    #[cfg(windows)]
    {
        let _ = term;
        true
    }
    #[cfg(not(windows))]
    {
        term != "dumb" && !term.is_empty()
    }
}

/// Decide whether to color output
///
/// `NO_COLOR` always wins; otherwise the config flag and terminal support must agree.
pub fn should_use_color(color_enabled: bool) -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    color_enabled && supports_ansi()
}

fn is_ci_environment() -> bool {
    let ci_vars = [
        "CI",
        "CONTINUOUS_INTEGRATION",
        "JENKINS_URL",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "BUILDKITE",
        "TF_BUILD",
    ];

    ci_vars.iter().any(|var| env::var(var).is_ok())
}
