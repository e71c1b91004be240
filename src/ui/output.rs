//! ui::output
//!
//! Terminal output for one run.
//!
//! | Function    | Stream | Prefix     | Shown          |
//! |-------------|--------|------------|----------------|
//! | [`print`]   | stdout |            | unless quiet   |
//! | [`success`] | stdout |            | unless quiet   |
//! | [`debug`]   | stderr | `[debug]`  | with `--debug` |
//! | [`warn`]    | stderr | `warning:` | always         |
//! | [`error`]   | stderr | `error:`   | always         |
//! | [`hint`]    | stderr | `hint:`    | always         |
//!
//! Warnings are not progress: an identity mismatch or a remote left behind
//! after a failed local step must reach the user even with `--quiet`.

use std::fmt::Display;

/// How much progress output to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Only warnings and errors
    Quiet,
    /// Progress, warnings and errors
    Normal,
    /// Everything, including `[debug]` lines
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags. Quiet wins over debug.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        match (quiet, debug) {
            (true, _) => Verbosity::Quiet,
            (false, true) => Verbosity::Debug,
            (false, false) => Verbosity::Normal,
        }
    }

    /// Whether progress messages are shown.
    pub fn shows_progress(self) -> bool {
        self != Verbosity::Quiet
    }

    /// Whether `[debug]` lines are shown.
    pub fn shows_debug(self) -> bool {
        self == Verbosity::Debug
    }
}

/// Join a prefix and a message into one output line.
fn line(prefix: &str, message: impl Display) -> String {
    if prefix.is_empty() {
        message.to_string()
    } else {
        format!("{} {}", prefix, message)
    }
}

/// Progress message on stdout.
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity.shows_progress() {
        println!("{}", message);
    }
}

/// Completed step on stdout.
pub fn success(message: impl Display, verbosity: Verbosity) {
    print(message, verbosity);
}

/// Diagnostic line on stderr, only with `--debug`.
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity.shows_debug() {
        eprintln!("{}", line("[debug]", message));
    }
}

/// Non-fatal problem on stderr. Shown at every verbosity.
pub fn warn(message: impl Display) {
    eprintln!("{}", line("warning:", message));
}

/// Fatal error on stderr.
pub fn error(message: impl Display) {
    eprintln!("{}", line("error:", message));
}

/// Suggested fix on stderr, printed after an error.
pub fn hint(message: impl Display) {
    eprintln!("{}", line("hint:", message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn visibility_per_level() {
        assert!(!Verbosity::Quiet.shows_progress());
        assert!(!Verbosity::Quiet.shows_debug());
        assert!(Verbosity::Normal.shows_progress());
        assert!(!Verbosity::Normal.shows_debug());
        assert!(Verbosity::Debug.shows_progress());
        assert!(Verbosity::Debug.shows_debug());
    }

    #[test]
    fn prefixes() {
        assert_eq!(line("warning:", "token mismatch"), "warning: token mismatch");
        assert_eq!(line("", "Done"), "Done");
    }
}
