//! Todo input shapes and task text validation

use chrono::{DateTime, Utc};

use super::ValidationError;

/// Maximum length for task text, matching the column width
const MAX_TASK_LEN: usize = 200;

/// Validated task text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskText(String);

impl TaskText {
    /// Create new task text.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 200 characters
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "task" });
        }

        // Characters, not bytes: the column width is VARCHAR(200)
        if trimmed.chars().count() > MAX_TASK_LEN {
            return Err(ValidationError::TooLong {
                field: "task",
                max: MAX_TASK_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the task text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for TaskText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated input for creating a todo (also the full-update shape)
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub task: TaskText,
    pub due_date: Option<DateTime<Utc>>,
}

/// Explicit map of the fields a mutation is allowed to touch.
///
/// The outer `Option` on `due_date` records whether the caller supplied
/// the field at all; the inner value may be `None` to clear the column.
/// Fields left as `None` are not written.
#[derive(Debug, Clone, Default)]
pub struct TodoChanges {
    pub task: Option<TaskText>,
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl TodoChanges {
    /// Full-update semantics: every updatable field is written, and a
    /// `due_date` the caller omitted clears the stored value.
    pub fn full(input: NewTodo) -> Self {
        Self {
            task: Some(input.task),
            due_date: Some(input.due_date),
        }
    }

    /// True when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.task.is_none() && self.due_date.is_none()
    }
}
