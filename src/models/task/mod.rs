// Task module
// Day-planner task with optional calendar placement

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::utils::slot::{slot_span, time_to_slot_index, SLOT_COUNT};

/// A task in the day planner.
///
/// A task lives in a list (`list_id`) and may additionally occupy the
/// calendar (`scheduled_at` present). The two are independent: placing a
/// task on the calendar does not by itself change its owning list; that
/// routing is handled by the application layer. A completed task keeps its
/// schedule but is excluded from calendar layout and overlap counting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    /// Owning list, or `None` for an unfiled calendar-only task.
    pub list_id: Option<String>,
    /// Wall-clock timestamp (no timezone); present iff the task occupies a
    /// calendar slot.
    pub scheduled_at: Option<NaiveDateTime>,
    /// Positive; expected to be a multiple of 15 for clean slot alignment,
    /// but not strictly enforced.
    pub duration_minutes: i64,
    pub completed_at: Option<NaiveDateTime>,
    pub created_at: Option<NaiveDateTime>,
}

/// Default duration for a freshly captured task, two grid slots.
pub const DEFAULT_DURATION_MINUTES: i64 = 30;

impl Task {
    /// Create a new task with required fields.
    ///
    /// # Returns
    /// Returns `Result<Task, String>` with validation
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Result<Self, String> {
        let task = Self {
            id: id.into(),
            title: title.into(),
            list_id: None,
            scheduled_at: None,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            completed_at: None,
            created_at: None,
        };
        task.validate()?;
        Ok(task)
    }

    /// Create a builder for constructing tasks with optional fields
    pub fn builder() -> TaskBuilder {
        TaskBuilder::new()
    }

    /// Validate the task
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Task id cannot be empty".to_string());
        }
        if self.title.trim().is_empty() {
            return Err("Task title cannot be empty".to_string());
        }
        if self.duration_minutes <= 0 {
            return Err("Task duration must be positive".to_string());
        }
        Ok(())
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled_at.is_some()
    }

    /// True if the task should appear in calendar layout and count against
    /// slot capacity.
    pub fn occupies_calendar(&self) -> bool {
        self.is_scheduled() && !self.is_completed()
    }

    /// End of the scheduled interval, if any.
    pub fn end_at(&self) -> Option<NaiveDateTime> {
        self.scheduled_at
            .map(|at| at + Duration::minutes(self.duration_minutes))
    }

    /// Half-open slot range `[start, end)` the task covers within its day,
    /// clipped at the bottom of the grid. `None` when unscheduled.
    pub fn slot_range(&self) -> Option<(usize, usize)> {
        let at = self.scheduled_at?;
        let start = time_to_slot_index(at.time());
        let end = (start + slot_span(self.duration_minutes)).min(SLOT_COUNT);
        Some((start, end))
    }
}

/// Builder for creating tasks with optional fields
pub struct TaskBuilder {
    id: Option<String>,
    title: Option<String>,
    list_id: Option<String>,
    scheduled_at: Option<NaiveDateTime>,
    duration_minutes: i64,
    completed_at: Option<NaiveDateTime>,
    created_at: Option<NaiveDateTime>,
}

impl TaskBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            list_id: None,
            scheduled_at: None,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            completed_at: None,
            created_at: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn list_id(mut self, list_id: impl Into<String>) -> Self {
        self.list_id = Some(list_id.into());
        self
    }

    pub fn scheduled_at(mut self, at: NaiveDateTime) -> Self {
        self.scheduled_at = Some(at);
        self
    }

    pub fn duration_minutes(mut self, minutes: i64) -> Self {
        self.duration_minutes = minutes;
        self
    }

    pub fn completed_at(mut self, at: NaiveDateTime) -> Self {
        self.completed_at = Some(at);
        self
    }

    pub fn created_at(mut self, at: NaiveDateTime) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Build the task
    pub fn build(self) -> Result<Task, String> {
        let id = self.id.ok_or("Task id is required")?;
        let title = self.title.ok_or("Task title is required")?;

        let task = Task {
            id,
            title,
            list_id: self.list_id,
            scheduled_at: self.scheduled_at,
            duration_minutes: self.duration_minutes,
            completed_at: self.completed_at,
            created_at: self.created_at,
        };
        task.validate()?;
        Ok(task)
    }
}

impl Default for TaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}
