//! Task model: the three task variants and the ordered task list

pub mod list;
pub mod model;

pub use list::TaskList;
pub use model::{Task, TaskKind};

/// Format of user-typed date-times, e.g. `2/12/2023 2359` (24-hour clock).
pub const INPUT_FORMAT: &str = "%d/%m/%Y %H%M";

/// Human-readable spelling of [`INPUT_FORMAT`], used in error hints.
pub const INPUT_FORMAT_HINT: &str = "d/M/yyyy HHmm";

/// Format used when rendering tasks to the user, e.g. `Dec 2 2023, 11:59PM`.
pub const DISPLAY_FORMAT: &str = "%b %-d %Y, %I:%M%p";

/// Format used in the persistence file, e.g. `2023-12-02 2359`.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H%M";
