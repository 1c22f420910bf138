//! The interactive read-eval-print loop.
//!
//! This is the only module that touches the terminal. It reads one line at
//! a time, hands it to the command dispatcher, and prints the reply or the
//! error message. A bad command never ends the session; only `exit`,
//! `close`, or end-of-input do.

use crate::commands::{Command, Dispatcher, Reply};
use crate::config::Config;
use crate::store::ContactStore;
use std::io::{BufRead, Write};
use tracing::debug;

/// Run the interactive loop until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<()> {
    let mut store = ContactStore::new();
    let dispatcher = Dispatcher::new(config.birthday_window_days);

    writeln!(output, "Welcome to the assistant bot!")?;

    let mut line = String::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // end of input behaves like `exit`
            writeln!(output, "Good bye!")?;
            return Ok(());
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let outcome = trimmed
            .parse::<Command>()
            .and_then(|command| dispatcher.execute(command, &mut store));

        match outcome {
            Ok(Reply::Message(message)) => writeln!(output, "{}", message)?,
            Ok(Reply::Exit) => {
                writeln!(output, "Good bye!")?;
                return Ok(());
            }
            Err(err) => {
                debug!(%err, "command failed");
                writeln!(output, "{}", err)?;
            }
        }
    }
}
