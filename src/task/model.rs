//! Task data model

use chrono::{Duration, NaiveDateTime};

use super::{DISPLAY_FORMAT, INPUT_FORMAT, INPUT_FORMAT_HINT};
use crate::error::{OracleError, Result};

/// Parse a user-typed date-time such as `2/12/2023 2359`.
///
/// Returns `None` on mismatch so each call site can attach its own
/// usage hint to the error.
pub fn parse_input_datetime(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), INPUT_FORMAT).ok()
}

/// Variant-specific data carried by a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Plain todo, no date attached
    Todo,
    /// Task due at a point in time
    Deadline { due: NaiveDateTime },
    /// Time-ranged event; `end` never precedes `start`
    Event {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// A single trackable item: a todo, a deadline, or an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    /// Create a plain todo.
    pub fn todo(description: &str) -> Result<Self> {
        Ok(Self {
            description: validated_description(description, "todo")?,
            done: false,
            kind: TaskKind::Todo,
        })
    }

    /// Create a deadline from user-typed date text.
    pub fn deadline(description: &str, by: &str) -> Result<Self> {
        let due = parse_input_datetime(by).ok_or_else(|| {
            OracleError::DateFormat(format!(
                "Please enter deadline in the format: {INPUT_FORMAT_HINT}\n    \
                 For example: deadline assignment /by 2/12/2023 2359\n    \
                 Note: Time should be in 24-hour format."
            ))
        })?;
        Self::deadline_at(description, due)
    }

    /// Create a deadline from an already-parsed date-time.
    pub fn deadline_at(description: &str, due: NaiveDateTime) -> Result<Self> {
        Ok(Self {
            description: validated_description(description, "deadline")?,
            done: false,
            kind: TaskKind::Deadline { due },
        })
    }

    /// Create an event from user-typed date text.
    pub fn event(description: &str, from: &str, to: &str) -> Result<Self> {
        let usage = || {
            OracleError::DateFormat(format!(
                "Please enter dates in the format: {INPUT_FORMAT_HINT}\n    \
                 For example: event meeting /from 2/12/2023 1400 /to 2/12/2023 1500\n    \
                 Note: Time should be in 24-hour format."
            ))
        };
        let start = parse_input_datetime(from).ok_or_else(usage)?;
        let end = parse_input_datetime(to).ok_or_else(usage)?;
        Self::event_between(description, start, end)
    }

    /// Create an event from already-parsed date-times. `end == start` is
    /// legal, `end < start` is not.
    pub fn event_between(
        description: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self> {
        if end < start {
            return Err(OracleError::EndBeforeStart);
        }
        Ok(Self {
            description: validated_description(description, "event")?,
            done: false,
            kind: TaskKind::Event { start, end },
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Mark the task as completed. Idempotent.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Mark the task as not completed. Idempotent.
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// One-letter tag identifying the variant, shared by display and storage.
    pub fn type_tag(&self) -> char {
        match self.kind {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    /// User-facing form, e.g. `[D][ ] report (by: Dec 2 2023, 06:00PM)`.
    pub fn render(&self) -> String {
        let status = if self.done { 'X' } else { ' ' };
        let mut out = format!("[{}][{}] {}", self.type_tag(), status, self.description);
        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { due } => {
                out.push_str(&format!(" (by: {})", due.format(DISPLAY_FORMAT)));
            }
            TaskKind::Event { start, end } => {
                out.push_str(&format!(
                    " (from: {} to: {})",
                    start.format(DISPLAY_FORMAT),
                    end.format(DISPLAY_FORMAT)
                ));
            }
        }
        out
    }

    /// Date fields in storage format, in record order. Empty for todos.
    pub fn storage_fields(&self) -> Vec<String> {
        match &self.kind {
            TaskKind::Todo => vec![],
            TaskKind::Deadline { due } => vec![due.format(super::STORAGE_FORMAT).to_string()],
            TaskKind::Event { start, end } => vec![
                start.format(super::STORAGE_FORMAT).to_string(),
                end.format(super::STORAGE_FORMAT).to_string(),
            ],
        }
    }

    /// Move the task to a new date-time ("snooze").
    ///
    /// Deadlines simply take the new due time. Events keep their original
    /// duration: the end moves by the same amount as the start. Todos are
    /// not reschedulable.
    pub fn reschedule(&mut self, new_start: NaiveDateTime) -> Result<()> {
        match &mut self.kind {
            TaskKind::Todo => Err(OracleError::CannotSnooze),
            TaskKind::Deadline { due } => {
                *due = new_start;
                Ok(())
            }
            TaskKind::Event { start, end } => {
                let duration = *end - *start;
                // Unreachable for tasks built through the validating
                // constructors, but a corrupted pair must not silently
                // produce an inverted range.
                if duration < Duration::zero() {
                    return Err(OracleError::EndBeforeStart);
                }
                *start = new_start;
                *end = new_start + duration;
                Ok(())
            }
        }
    }
}

fn validated_description(text: &str, kind: &'static str) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(OracleError::EmptyDescription(kind));
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(text: &str) -> NaiveDateTime {
        parse_input_datetime(text).unwrap()
    }

    #[test]
    fn test_todo_render() {
        let task = Task::todo("Read book").unwrap();
        assert_eq!(task.render(), "[T][ ] Read book");
    }

    #[test]
    fn test_blank_description_rejected() {
        assert!(matches!(
            Task::todo("   "),
            Err(OracleError::EmptyDescription("todo"))
        ));
        assert!(matches!(
            Task::deadline("", "2/12/2023 2359"),
            Err(OracleError::EmptyDescription("deadline"))
        ));
        assert!(matches!(
            Task::event(" ", "2/12/2023 1400", "2/12/2023 1500"),
            Err(OracleError::EmptyDescription("event"))
        ));
    }

    #[test]
    fn test_deadline_display_format() {
        let task = Task::deadline("report", "2/12/2023 1800").unwrap();
        assert_eq!(task.render(), "[D][ ] report (by: Dec 2 2023, 06:00PM)");
    }

    #[test]
    fn test_deadline_bad_date() {
        let err = Task::deadline("report", "tomorrow").unwrap_err();
        assert!(matches!(err, OracleError::DateFormat(_)));
        assert!(err.to_string().contains("d/M/yyyy HHmm"));
    }

    #[test]
    fn test_event_end_before_start_rejected() {
        assert!(matches!(
            Task::event("meeting", "2/12/2023 1500", "2/12/2023 1400"),
            Err(OracleError::EndBeforeStart)
        ));
    }

    #[test]
    fn test_event_zero_duration_allowed() {
        let task = Task::event("standup", "2/12/2023 1400", "2/12/2023 1400").unwrap();
        assert_eq!(task.type_tag(), 'E');
    }

    #[test]
    fn test_mark_idempotent() {
        let mut task = Task::todo("Read book").unwrap();
        task.mark_done();
        task.mark_done();
        assert!(task.is_done());
        assert_eq!(task.render(), "[T][X] Read book");

        task.mark_undone();
        task.mark_undone();
        assert!(!task.is_done());
        assert_eq!(task.render(), "[T][ ] Read book");
    }

    #[test]
    fn test_reschedule_deadline() {
        let mut task = Task::deadline("assignment", "2/12/2023 2359").unwrap();
        task.reschedule(dt("5/12/2023 1800")).unwrap();
        assert_eq!(
            task.kind(),
            &TaskKind::Deadline {
                due: dt("5/12/2023 1800")
            }
        );
    }

    #[test]
    fn test_reschedule_event_preserves_duration() {
        let mut task = Task::event("meeting", "2/12/2023 1400", "2/12/2023 1500").unwrap();
        task.reschedule(dt("3/12/2023 0900")).unwrap();
        assert_eq!(
            task.kind(),
            &TaskKind::Event {
                start: dt("3/12/2023 0900"),
                end: dt("3/12/2023 1000"),
            }
        );
    }

    #[test]
    fn test_reschedule_todo_rejected() {
        let mut task = Task::todo("Read book").unwrap();
        assert!(matches!(
            task.reschedule(dt("3/12/2023 0900")),
            Err(OracleError::CannotSnooze)
        ));
    }

    #[test]
    fn test_storage_fields() {
        let task = Task::event("meeting", "2/12/2023 1400", "2/12/2023 1500").unwrap();
        assert_eq!(
            task.storage_fields(),
            vec!["2023-12-02 1400".to_string(), "2023-12-02 1500".to_string()]
        );
        assert!(Task::todo("x").unwrap().storage_fields().is_empty());
    }
}
