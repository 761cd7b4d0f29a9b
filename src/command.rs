//! Executable commands and their outcomes

use crate::error::{OracleError, Result};
use crate::storage::Storage;
use crate::task::model::parse_input_datetime;
use crate::task::{Task, TaskKind, TaskList, INPUT_FORMAT_HINT};

/// One parsed user request. Built by [`crate::parser::parse`], executed
/// once against the live task list, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Task),
    Delete(usize),
    Mark(usize),
    Unmark(usize),
    List,
    Find(String),
    /// Reschedule the task at `index`; the date text is validated for
    /// shape by the parser and parsed here.
    Snooze {
        index: usize,
        when: String,
    },
    Exit,
    Help,
}

impl Command {
    /// True only for the command that ends the session.
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }

    /// Run the command against the task list, persisting after every
    /// mutation, and return the user-facing outcome message.
    pub fn execute(&self, tasks: &mut TaskList, storage: &Storage) -> Result<String> {
        match self {
            Self::Add(task) => {
                tasks.add(task.clone());
                storage.save(tasks)?;
                Ok(format!(
                    "Got it. I've added this task:\n  {}\nNow you have {} tasks in the list.",
                    task.render(),
                    tasks.len()
                ))
            }
            Self::Delete(index) => {
                let removed = tasks.remove(*index)?;
                storage.save(tasks)?;
                Ok(format!(
                    "Noted. I've removed this task:\n  {}\nNow you have {} tasks in the list.",
                    removed.render(),
                    tasks.len()
                ))
            }
            Self::Mark(index) => {
                let task = tasks.get_mut(*index)?;
                task.mark_done();
                let rendered = task.render();
                storage.save(tasks)?;
                Ok(format!("Nice! I've marked this task as done:\n  {rendered}"))
            }
            Self::Unmark(index) => {
                let task = tasks.get_mut(*index)?;
                task.mark_undone();
                let rendered = task.render();
                storage.save(tasks)?;
                Ok(format!(
                    "OK, I've marked this task as not done yet:\n  {rendered}"
                ))
            }
            Self::List => {
                if tasks.is_empty() {
                    return Ok("There are no tasks in your list yet.".to_string());
                }
                let mut out = String::from("Here are the tasks in your list:");
                for (i, task) in tasks.iter().enumerate() {
                    out.push_str(&format!("\n{}. {}", i + 1, task.render()));
                }
                Ok(out)
            }
            Self::Find(keyword) => {
                let matches = tasks.find(keyword);
                if matches.is_empty() {
                    return Ok("No matching tasks found.".to_string());
                }
                let mut out = String::from("Here are the matching tasks in your list:");
                for (i, task) in matches.iter().enumerate() {
                    out.push_str(&format!("\n{}. {}", i + 1, task.render()));
                }
                Ok(out)
            }
            Self::Snooze { index, when } => {
                let task = tasks.get_mut(*index)?;
                if matches!(task.kind(), TaskKind::Todo) {
                    return Err(OracleError::CannotSnooze);
                }
                let new_start = parse_input_datetime(when).ok_or_else(|| {
                    OracleError::DateFormat(format!(
                        "Invalid date format. Use {INPUT_FORMAT_HINT}."
                    ))
                })?;
                task.reschedule(new_start)?;
                let rendered = task.render();
                storage.save(tasks)?;
                Ok(format!("Got it! The task has been postponed:\n  {rendered}"))
            }
            Self::Exit => Ok(
                "Goodbye! Your journey doesn't end here, star seeker.\n\
                 Aim for the stars, and may the cosmos guide your way!"
                    .to_string(),
            ),
            Self::Help => Ok(HELP_TEXT.to_string()),
        }
    }
}

const HELP_TEXT: &str = "\
Oracle Command Guide

1. list: Shows all tasks in your list
2. todo [task description]: Adds a To-Do task
3. deadline [task description] /by [date time]: Adds a Deadline task
4. event [task description] /from [date time] /to [date time]: Adds an Event task
5. delete [task number]: Deletes a task
6. mark [task number]: Marks a task as completed
7. unmark [task number]: Marks a task as not completed
8. find [keyword]: Finds tasks containing a specific keyword
9. snooze [task number] [new date time]: Reschedules a deadline or event
10. help: Shows this guide
11. bye: Exits the application";
