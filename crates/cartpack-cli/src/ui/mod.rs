//! Terminal status messages.
//!
//! Everything here writes to stderr; stdout is reserved for descriptor JSON.
//!
//! # Examples
//!
//! ```no_run
//! use cartpack_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Checking cartridges...");
//! ui::success("3 bundle descriptors generated");
//! ```

mod messages;

pub use messages::{error, info, success, warning};

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}

/// Check if color output should be enabled.
///
/// Respects `NO_COLOR` and `FORCE_COLOR`, falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr() && !is_ci()
}

/// Initialize color support for status messages.
///
/// Must run before the first message is printed.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    console::set_colors_enabled_stderr(enabled);
    owo_colors::set_override(enabled);
}
