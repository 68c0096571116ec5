//! Command failures
//!
//! Every handler reports failure through [`CommandError`]. The dispatcher
//! lifts it into `anyhow::Error`, so `main` prints the message on stderr and
//! exits with a non-zero status.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotImplemented,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The command is registered but has no behavior yet.
    #[error("not implemented")]
    NotImplemented { command: &'static str },
}

impl CommandError {
    pub fn not_implemented(command: &'static str) -> Self {
        CommandError::NotImplemented { command }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::NotImplemented { .. } => ErrorKind::NotImplemented,
        }
    }

    /// Name of the command that produced the failure.
    pub fn command(&self) -> &'static str {
        match self {
            CommandError::NotImplemented { command } => command,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn not_implemented_displays_fixed_message() {
        let error = CommandError::not_implemented("commit");

        assert_eq!(error.to_string(), "not implemented");
        assert_eq!(error.kind(), ErrorKind::NotImplemented);
        assert_eq!(error.command(), "commit");
    }

    #[test]
    fn message_survives_conversion_into_anyhow() {
        let error: anyhow::Error = CommandError::not_implemented("log").into();

        assert_eq!(format!("{error}"), "not implemented");
        assert!(format!("{error:?}").contains("not implemented"));
    }
}
