//! Terminal detection
//!
//! Renderers stay pure: the binary asks a [`Terminal`] whether the standard
//! streams are interactive and passes plain booleans down.

/// Answers questions about the attached standard streams
pub trait Terminal {
    /// Is stdout attached to an interactive terminal?
    fn stdout_is_terminal(&self) -> bool;

    /// Is stdin attached to an interactive terminal?
    fn stdin_is_terminal(&self) -> bool;
}

/// The real process terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct StdTerminal;

impl Terminal for StdTerminal {
    fn stdout_is_terminal(&self) -> bool {
        #[cfg(unix)]
        unsafe {
            libc::isatty(libc::STDOUT_FILENO) != 0
        }

        #[cfg(not(unix))]
        true
    }

    fn stdin_is_terminal(&self) -> bool {
        #[cfg(unix)]
        unsafe {
            libc::isatty(libc::STDIN_FILENO) != 0
        }

        #[cfg(not(unix))]
        false
    }
}
