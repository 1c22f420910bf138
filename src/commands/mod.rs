//! Command parsing and dispatch.
//!
//! This layer turns a raw input line into a typed [`Command`] and executes
//! it against a [`ContactStore`], producing either a [`Reply`] for the
//! interactive loop to print or a typed [`CommandError`]. Nothing here
//! reads or writes the terminal, so every command is testable without
//! simulating stdin.

use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult};
use crate::models::ContactRecord;
use crate::report;
use crate::store::ContactStore;
use chrono::{Local, NaiveDate};
use std::fmt::Write as _;
use std::str::FromStr;
use tracing::debug;

/// A fully parsed user command.
///
/// Phone positions are 1-based on the command line (`change John 2 ...`
/// edits John's second phone) and converted to zero-based indices here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add NAME PHONE`
    Add { name: String, phone: String },
    /// `change NAME POSITION PHONE`
    Change {
        name: String,
        index: usize,
        phone: String,
    },
    /// `phone NAME`
    Phone { name: String },
    /// `delete-phone NAME POSITION`
    DeletePhone { name: String, index: usize },
    /// `add-birthday NAME DD.MM.YYYY`
    AddBirthday { name: String, birthday: String },
    /// `show-birthday NAME`
    ShowBirthday { name: String },
    /// `birthdays`
    Birthdays,
    /// `all`
    All,
    /// `delete NAME`
    Delete { name: String },
    /// `exit` or `close`
    Exit,
}

/// What the loop should do after a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this message and keep going.
    Message(String),
    /// Say goodbye and leave the loop.
    Exit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let keyword = parts
            .next()
            .ok_or(CommandError::Usage("enter a command"))?
            .to_lowercase();
        let args: Vec<&str> = parts.collect();

        match keyword.as_str() {
            "hello" => Ok(Command::Hello),
            "exit" | "close" => Ok(Command::Exit),
            "all" => Ok(Command::All),
            "birthdays" => Ok(Command::Birthdays),
            "add" => match args.as_slice() {
                [name, phone] => Ok(Command::Add {
                    name: (*name).to_string(),
                    phone: (*phone).to_string(),
                }),
                _ => Err(CommandError::Usage("add NAME PHONE")),
            },
            "change" => match args.as_slice() {
                [name, position, phone] => Ok(Command::Change {
                    name: (*name).to_string(),
                    index: parse_position(position, "change NAME POSITION PHONE")?,
                    phone: (*phone).to_string(),
                }),
                _ => Err(CommandError::Usage("change NAME POSITION PHONE")),
            },
            "phone" => match args.as_slice() {
                [name] => Ok(Command::Phone {
                    name: (*name).to_string(),
                }),
                _ => Err(CommandError::Usage("phone NAME")),
            },
            "delete-phone" => match args.as_slice() {
                [name, position] => Ok(Command::DeletePhone {
                    name: (*name).to_string(),
                    index: parse_position(position, "delete-phone NAME POSITION")?,
                }),
                _ => Err(CommandError::Usage("delete-phone NAME POSITION")),
            },
            "add-birthday" => match args.as_slice() {
                [name, birthday] => Ok(Command::AddBirthday {
                    name: (*name).to_string(),
                    birthday: (*birthday).to_string(),
                }),
                _ => Err(CommandError::Usage("add-birthday NAME DD.MM.YYYY")),
            },
            "show-birthday" => match args.as_slice() {
                [name] => Ok(Command::ShowBirthday {
                    name: (*name).to_string(),
                }),
                _ => Err(CommandError::Usage("show-birthday NAME")),
            },
            "delete" => match args.as_slice() {
                [name] => Ok(Command::Delete {
                    name: (*name).to_string(),
                }),
                _ => Err(CommandError::Usage("delete NAME")),
            },
            _ => Err(CommandError::UnknownCommand(keyword)),
        }
    }
}

/// Parse a 1-based phone position into a zero-based index.
fn parse_position(token: &str, usage: &'static str) -> CommandResult<usize> {
    match token.parse::<usize>() {
        Ok(position) if position >= 1 => Ok(position - 1),
        _ => Err(CommandError::Usage(usage)),
    }
}

/// Executes commands against a store.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    /// Length of the upcoming-birthday window in days.
    birthday_window_days: i64,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self {
            birthday_window_days: report::DEFAULT_WINDOW_DAYS,
        }
    }
}

impl Dispatcher {
    /// Create a dispatcher with the given birthday window length.
    pub fn new(birthday_window_days: i64) -> Self {
        Self {
            birthday_window_days,
        }
    }

    /// Execute a command against the store, using the local calendar date
    /// for the `birthdays` report.
    pub fn execute(&self, command: Command, store: &mut ContactStore) -> CommandResult<Reply> {
        self.execute_at(command, store, Local::now().date_naive())
    }

    /// Execute a command with an explicit "today", so the birthday report
    /// is deterministic under test.
    pub fn execute_at(
        &self,
        command: Command,
        store: &mut ContactStore,
        today: NaiveDate,
    ) -> CommandResult<Reply> {
        debug!(?command, "dispatching");
        match command {
            Command::Hello => Ok(Reply::Message("How can I help you?".to_string())),
            Command::Exit => Ok(Reply::Exit),
            Command::Add { name, phone } => add_contact(store, &name, &phone),
            Command::Change { name, index, phone } => change_phone(store, &name, index, &phone),
            Command::Phone { name } => show_phones(store, &name),
            Command::DeletePhone { name, index } => delete_phone(store, &name, index),
            Command::AddBirthday { name, birthday } => add_birthday(store, &name, &birthday),
            Command::ShowBirthday { name } => show_birthday(store, &name),
            Command::Birthdays => Ok(Reply::Message(render_birthday_report(
                store,
                today,
                self.birthday_window_days,
            ))),
            Command::All => Ok(Reply::Message(render_all(store))),
            Command::Delete { name } => delete_contact(store, &name),
        }
    }
}

fn add_contact(store: &mut ContactStore, name: &str, phone: &str) -> CommandResult<Reply> {
    if store.contains(name) {
        return Err(CommandError::AlreadyExists(name.to_string()));
    }

    let mut record = ContactRecord::new(ContactName::new(name)?);
    record.add_phone(phone)?;
    store.add_record(record);
    Ok(Reply::Message(format!(
        "Contact {} added successfully.",
        name
    )))
}

fn change_phone(
    store: &mut ContactStore,
    name: &str,
    index: usize,
    phone: &str,
) -> CommandResult<Reply> {
    let record = store
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    let count = record.phones().len();
    match record.edit_phone(index, phone)? {
        Some(_) => Ok(Reply::Message(format!(
            "Phone number of contact {} was changed to {}.",
            name, phone
        ))),
        None => Err(CommandError::PhoneIndexOutOfRange {
            name: name.to_string(),
            index: index + 1,
            count,
        }),
    }
}

fn show_phones(store: &ContactStore, name: &str) -> CommandResult<Reply> {
    let record = store
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    if record.phones().is_empty() {
        return Ok(Reply::Message(format!(
            "Contact {} has no phone numbers.",
            name
        )));
    }

    let mut out = format!("Phone numbers for contact {}:", name);
    for (position, phone) in record.phones().iter().enumerate() {
        let _ = write!(out, "\n  {}. {}", position + 1, phone);
    }
    Ok(Reply::Message(out))
}

fn delete_phone(store: &mut ContactStore, name: &str, index: usize) -> CommandResult<Reply> {
    let record = store
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    let count = record.phones().len();
    match record.remove_phone(index) {
        Some(phone) => Ok(Reply::Message(format!(
            "Phone number {} of contact {} was deleted.",
            phone, name
        ))),
        None => Err(CommandError::PhoneIndexOutOfRange {
            name: name.to_string(),
            index: index + 1,
            count,
        }),
    }
}

fn add_birthday(store: &mut ContactStore, name: &str, birthday: &str) -> CommandResult<Reply> {
    let record = store
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    record.add_birthday(birthday)?;
    Ok(Reply::Message(format!(
        "Birthday for contact {} added successfully.",
        name
    )))
}

fn show_birthday(store: &ContactStore, name: &str) -> CommandResult<Reply> {
    let record = store
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    let birthday = record
        .birthday_at(0)
        .ok_or_else(|| CommandError::NoBirthday(name.to_string()))?;
    Ok(Reply::Message(format!(
        "B-Day for contact {}: {}",
        name, birthday
    )))
}

fn delete_contact(store: &mut ContactStore, name: &str) -> CommandResult<Reply> {
    if store.delete(name) {
        Ok(Reply::Message(format!(
            "Contact {} was found and deleted.",
            name
        )))
    } else {
        Err(CommandError::NotFound(name.to_string()))
    }
}

fn render_all(store: &ContactStore) -> String {
    if store.is_empty() {
        return "The contact book is empty.".to_string();
    }

    store
        .records()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_birthday_report(store: &ContactStore, today: NaiveDate, window_days: i64) -> String {
    let groups = report::upcoming_birthdays_within(store, today, window_days);
    if groups.is_empty() {
        return format!("No birthdays in the next {} days.", window_days);
    }

    groups
        .into_iter()
        .map(|(weekday, names)| format!("{}: {}", report::weekday_name(weekday), names.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}
