//! Unified messaging system for session operations

use crate::environment::Environment;

// ANSI Color Codes for session messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_RESET: &str = "\x1b[0m";

/// Session-specific message types
#[derive(Debug, Clone)]
pub enum SessionMessage {
    /// Normal session start/shutdown messages
    Info(String),
    /// Success messages for completed operations
    Success(String),
}

impl SessionMessage {
    /// Create an info message
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Create a success message
    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    /// Render the message with its color prefix
    pub fn render(&self) -> String {
        match self {
            Self::Info(msg) => format!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg),
            Self::Success(msg) => format!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg),
        }
    }

    /// Print the message with appropriate formatting
    pub fn print(&self) {
        println!("{}", self.render());
    }
}

/// Print session startup message
pub fn print_session_starting(mode: &str, environment: &Environment) {
    SessionMessage::info(format!(
        "Starting {} mode polling {} ({})",
        mode,
        environment.base_url(),
        environment
    ))
    .print();
}

/// Print session shutdown message
pub fn print_session_shutdown() {
    SessionMessage::info("Shutting down...").print();
}

/// Print session exit message
pub fn print_session_exit_success() {
    SessionMessage::success("SIMOC dashboard exited successfully").print();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prefixes() {
        assert_eq!(
            SessionMessage::info("hello").render(),
            "\x1b[1;36m[INFO]\x1b[0m hello"
        );
        assert!(SessionMessage::success("done").render().contains("[SUCCESS]"));
    }
}
