//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling. Domain validation errors live in
//! [`crate::domain::errors`] and convert into [`CommandError`] at the
//! command layer.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors produced while executing a user command.
///
/// These are one-shot reports: the interactive loop renders them to the
/// user and keeps going, it never terminates the process over one of them.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// A field failed domain validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No contact with this name exists
    #[error("Contact {0} not found")]
    NotFound(String),

    /// A contact with this name already exists
    #[error("Contact {0} already exists. Use 'change' to update")]
    AlreadyExists(String),

    /// A phone index did not address an existing phone
    #[error("Contact {name} has {count} phone(s), no phone at position {index}")]
    PhoneIndexOutOfRange {
        name: String,
        index: usize,
        count: usize,
    },

    /// The contact has no birthday on record
    #[error("No birthday recorded for contact {0}")]
    NoBirthday(String),

    /// The command was recognized but its arguments were wrong
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// The command keyword was not recognized
    #[error("Invalid command: {0}. Try again")]
    UnknownCommand(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
