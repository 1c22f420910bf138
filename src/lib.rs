//! Contact Book - an interactive command-line contact manager.
//!
//! Stores names, phone numbers, and birthdays in memory and answers
//! queries such as "which contacts have birthdays in the next 7 days,
//! grouped by weekday" (with weekend birthdays greeted on Monday).
//!
//! # Architecture
//!
//! - **domain**: validated value objects (names, phone numbers, birthdays)
//! - **models**: the `ContactRecord` aggregate
//! - **store**: the name-keyed, insertion-ordered contact directory
//! - **report**: the upcoming-birthday window computation
//! - **commands**: command parsing and dispatch, decoupled from I/O
//! - **repl**: the interactive loop (the only module doing I/O)
//! - **config**: environment-based configuration
//! - **error**: command and configuration error types

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod report;
pub mod store;

pub use commands::{Command, Dispatcher, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::ContactRecord;
pub use report::{upcoming_birthdays, upcoming_birthdays_within, weekday_name};
pub use store::ContactStore;
