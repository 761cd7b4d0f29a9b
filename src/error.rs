//! Domain errors for parsing, command execution, and storage

use thiserror::Error;

/// Every way a command can fail. All of these are recoverable at the
/// session loop: they are rendered to the user and the loop continues.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("The description of a {0} cannot be empty.")]
    EmptyDescription(&'static str),

    #[error("{0}")]
    DateFormat(String),

    #[error("Please enter a valid task number.")]
    InvalidNumber,

    #[error("{0}")]
    Usage(String),

    #[error("Event end time cannot be before start time.")]
    EndBeforeStart,

    #[error("There are no tasks in your list yet.")]
    EmptyList,

    #[error("Invalid task number. Please enter a number between 1 and {size}.")]
    IndexOutOfRange { size: usize },

    #[error("Only deadlines and events can be snoozed.")]
    CannotSnooze,

    #[error("I'm sorry, but I don't know what that means. Type 'help' to see the list of commands.")]
    UnknownCommand,

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OracleError>;
