//! User input parsing
//!
//! One decision per input line: the first whitespace-delimited token
//! selects the command, the remainder is validated for shape and turned
//! into a [`Command`]. No state is kept across lines.

use tracing::debug;

use crate::command::Command;
use crate::error::{OracleError, Result};
use crate::task::Task;

/// Parse one raw input line into a command.
pub fn parse(input: &str) -> Result<Command> {
    let input = input.trim();
    let keyword = input.split_whitespace().next().unwrap_or("");
    let rest = input[keyword.len()..].trim();
    debug!(keyword, "dispatching command");

    match keyword {
        "list" => no_arguments("list", rest).map(|_| Command::List),
        "bye" => no_arguments("bye", rest).map(|_| Command::Exit),
        "help" => no_arguments("help", rest).map(|_| Command::Help),
        "todo" => parse_todo(rest),
        "deadline" => parse_deadline(rest),
        "event" => parse_event(rest),
        "delete" => Ok(Command::Delete(parse_index(rest)?)),
        "mark" => Ok(Command::Mark(parse_index(rest)?)),
        "unmark" => Ok(Command::Unmark(parse_index(rest)?)),
        "find" => Ok(Command::Find(rest.to_string())),
        "snooze" => parse_snooze(rest),
        _ => Err(OracleError::UnknownCommand),
    }
}

fn no_arguments(keyword: &str, rest: &str) -> Result<()> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(OracleError::Usage(format!(
            "The {keyword} command takes no arguments."
        )))
    }
}

/// Convert a 1-based user index into the 0-based internal one.
fn parse_index(text: &str) -> Result<usize> {
    let n: usize = text.trim().parse().map_err(|_| OracleError::InvalidNumber)?;
    if n == 0 {
        return Err(OracleError::InvalidNumber);
    }
    Ok(n - 1)
}

fn parse_todo(rest: &str) -> Result<Command> {
    if rest.is_empty() {
        return Err(OracleError::EmptyDescription("todo"));
    }
    Ok(Command::Add(Task::todo(rest)?))
}

fn parse_deadline(rest: &str) -> Result<Command> {
    let usage = || {
        OracleError::Usage(
            "The correct format for deadline is: deadline [description] /by [date time]\n    \
             For example: deadline assignment /by 2/12/2023 2359"
                .to_string(),
        )
    };
    let (description, by) = rest.split_once("/by").ok_or_else(usage)?;
    let (description, by) = (description.trim(), by.trim());
    if description.is_empty() {
        return Err(OracleError::EmptyDescription("deadline"));
    }
    if by.is_empty() {
        return Err(usage());
    }
    Ok(Command::Add(Task::deadline(description, by)?))
}

fn parse_event(rest: &str) -> Result<Command> {
    let usage = || {
        OracleError::Usage(
            "The correct format for event is: event [description] /from [date time] /to [date time]\n    \
             For example: event meeting /from 2/12/2023 1400 /to 2/12/2023 1500"
                .to_string(),
        )
    };
    let (description, times) = rest.split_once("/from").ok_or_else(usage)?;
    let (from, to) = times.split_once("/to").ok_or_else(usage)?;
    let (description, from, to) = (description.trim(), from.trim(), to.trim());
    if description.is_empty() {
        return Err(OracleError::EmptyDescription("event"));
    }
    if from.is_empty() || to.is_empty() {
        return Err(usage());
    }
    Ok(Command::Add(Task::event(description, from, to)?))
}

fn parse_snooze(rest: &str) -> Result<Command> {
    // Split only once: the date text itself contains a space.
    let (index_token, when) = rest.split_once(char::is_whitespace).ok_or_else(|| {
        OracleError::Usage(
            "The correct format for snoozing a task is: snooze [task number] [new date time]\n    \
             For example: snooze 2 5/12/2023 1800"
                .to_string(),
        )
    })?;
    Ok(Command::Snooze {
        index: parse_index(index_token)?,
        when: when.trim().to_string(),
    })
}
