//! Flat-file persistence for the task list
//!
//! One `|`-delimited record per line, e.g.
//! `D | 0 | report | 2023-12-02 1800`. Loading is corruption-tolerant:
//! a malformed line is skipped with a diagnostic, never a failure.

use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::Result;
use crate::task::{Task, TaskList, STORAGE_FORMAT};

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data/oracle.txt";

/// Handle to the persistence file. Holds no live task data, only the
/// path; every save rewrites the whole file from the caller's list.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every task that can be recovered from the file.
    ///
    /// Creates the file (and its parent directory) when absent. Lines
    /// with an unknown tag, too few fields for their tag, or fields
    /// that fail to parse are skipped, not fatal. Only real I/O
    /// failures surface as errors.
    pub fn load(&self) -> Result<Vec<Task>> {
        self.ensure_parent_dir()?;
        if !self.path.exists() {
            fs::write(&self.path, "")?;
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut tasks = Vec::new();
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_record(line) {
                Some(task) => tasks.push(task),
                None => warn!(line, "skipping corrupted storage entry"),
            }
        }
        Ok(tasks)
    }

    /// Rewrite the whole file from the in-memory list.
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        self.ensure_parent_dir()?;
        let mut content = String::new();
        for task in tasks.iter() {
            content.push_str(&encode_record(task));
            content.push('\n');
        }
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

fn encode_record(task: &Task) -> String {
    let mut fields = vec![
        task.type_tag().to_string(),
        if task.is_done() { "1" } else { "0" }.to_string(),
        task.description().to_string(),
    ];
    fields.extend(task.storage_fields());
    fields.join(" | ")
}

/// Decode one stored record. `None` means the line is corrupt and
/// should be skipped.
fn parse_record(line: &str) -> Option<Task> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    if fields.len() < 3 {
        return None;
    }

    let done = match fields[1] {
        "1" => true,
        "0" => false,
        _ => return None,
    };
    let description = fields[2];

    let task = match fields[0] {
        "T" => Task::todo(description),
        "D" => {
            if fields.len() < 4 {
                return None;
            }
            Task::deadline_at(description, parse_storage_datetime(fields[3])?)
        }
        "E" => {
            if fields.len() < 5 {
                return None;
            }
            // An inverted range in the file is corruption too; the
            // constructor rejects it and the line gets skipped.
            Task::event_between(
                description,
                parse_storage_datetime(fields[3])?,
                parse_storage_datetime(fields[4])?,
            )
        }
        _ => return None,
    };

    let mut task = task.ok()?;
    if done {
        task.mark_done();
    }
    Some(task)
}

fn parse_storage_datetime(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, STORAGE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_creates_missing_file_and_dir() -> Result<()> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("oracle.txt");
        let storage = Storage::new(&path);

        let tasks = storage.load()?;
        assert!(tasks.is_empty());
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn test_roundtrip_preserves_everything() -> Result<()> {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path().join("oracle.txt"));

        let mut list = TaskList::new();
        list.add(Task::todo("read book").unwrap());
        let mut done = Task::deadline("report", "2/12/2023 1800").unwrap();
        done.mark_done();
        list.add(done);
        list.add(Task::event("meeting", "2/12/2023 1400", "2/12/2023 1500").unwrap());

        storage.save(&list)?;
        let loaded = storage.load()?;

        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].render(), "[T][ ] read book");
        assert_eq!(loaded[1].render(), "[D][X] report (by: Dec 2 2023, 06:00PM)");
        assert_eq!(
            loaded[2].render(),
            "[E][ ] meeting (from: Dec 2 2023, 02:00PM to: Dec 2 2023, 03:00PM)"
        );
        Ok(())
    }

    #[test]
    fn test_file_format_is_pipe_delimited() -> Result<()> {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path().join("oracle.txt"));

        let mut list = TaskList::new();
        list.add(Task::deadline("report", "2/12/2023 2359").unwrap());
        storage.save(&list)?;

        let content = fs::read_to_string(storage.path())?;
        assert_eq!(content, "D | 0 | report | 2023-12-02 2359\n");
        Ok(())
    }

    #[test]
    fn test_corrupt_lines_are_skipped_not_fatal() -> Result<()> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("oracle.txt");
        fs::write(
            &path,
            "D | 1 | Report\n\
             X | 0 | mystery tag\n\
             T | maybe | odd done flag\n\
             E | 0 | short event | 2023-12-02 1400\n\
             E | 0 | inverted | 2023-12-02 1500 | 2023-12-02 1400\n\
             D | 0 | keep me | 2023-12-05 0900\n",
        )?;

        let tasks = Storage::new(&path).load()?;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].render(), "[D][ ] keep me (by: Dec 5 2023, 09:00AM)");
        Ok(())
    }

    #[test]
    fn test_load_tolerates_blank_lines() -> Result<()> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("oracle.txt");
        fs::write(&path, "\nT | 0 | read book\n\n")?;

        let tasks = Storage::new(&path).load()?;
        assert_eq!(tasks.len(), 1);
        Ok(())
    }

    #[test]
    fn test_save_replaces_whole_file() -> Result<()> {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path().join("oracle.txt"));

        let mut list = TaskList::new();
        list.add(Task::todo("first").unwrap());
        list.add(Task::todo("second").unwrap());
        storage.save(&list)?;

        let mut shorter = TaskList::new();
        shorter.add(Task::todo("only").unwrap());
        storage.save(&shorter)?;

        let loaded = storage.load()?;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].description(), "only");
        Ok(())
    }
}
