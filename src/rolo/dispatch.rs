//! Input tokenizing and command routing.
//!
//! [`dispatch`] is the single place where handler errors become user-facing
//! text: every handler returns `Result<CmdResult>`, and the `Err` arm is
//! converted here into one error-level message. Handlers never format their
//! own failures, and nothing below this layer prints.

use crate::book::AddressBook;
use crate::commands::{self, CmdResult};
use chrono::NaiveDate;

/// Splits a raw input line into a lowercased command token and its
/// arguments. Arguments keep their case (names are case-sensitive keys).
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}

/// True for the commands that end the session.
pub fn is_exit(command: &str) -> bool {
    matches!(command, "close" | "exit")
}

/// Routes a command token to its handler and funnels every handler error
/// into a single error-level message. Unknown commands are reported the
/// same way; no command ever terminates the session from here.
pub fn dispatch(
    command: &str,
    args: &[String],
    book: &mut AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> CmdResult {
    let outcome = match command {
        "hello" => commands::hello::run(),
        "add" => commands::add::run(book, args),
        "change" => commands::change::run(book, args),
        "phone" => commands::phone::run(book, args),
        "add-birthday" => commands::birthday::add(book, args),
        "show-birthday" => commands::birthday::show(book, args),
        "birthdays" => commands::birthday::upcoming(book, today, window_days),
        "all" => commands::all::run(book),
        "close" | "exit" => commands::goodbye::run(),
        _ => return CmdResult::error("Invalid command."),
    };

    outcome.unwrap_or_else(|err| CmdResult::error(err.to_string()))
}
