// Task service module
// Persistence boundary and application of classified drag operations

pub mod ordering;

mod application;

pub use application::{Outcome, ScheduleService};

use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::models::task::Task;

/// Asynchronous persistence boundary for tasks and schedule changes.
///
/// The core never interprets how these are implemented (RPC, direct table
/// writes, an in-memory store in tests), only that each call may fail with
/// a generic persistence error that is propagated unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn fetch_tasks(&self) -> Result<Vec<Task>>;

    /// Tasks scheduled on the given calendar day.
    async fn fetch_scheduled(&self, date: NaiveDate) -> Result<Vec<Task>>;

    /// Persist a full new ordering of one list's task ids.
    async fn persist_reorder(&self, task_ids: &[String]) -> Result<()>;

    /// Assign a wall-clock timestamp to a previously unscheduled task.
    async fn persist_schedule(&self, task_id: &str, at: NaiveDateTime) -> Result<Task>;

    /// Move an already scheduled task to a new timestamp.
    async fn persist_reschedule(&self, task_id: &str, at: NaiveDateTime) -> Result<()>;

    /// Change a task's owning list without touching its schedule.
    async fn persist_list_move(&self, task_id: &str, new_list_id: &str) -> Result<Task>;

    /// Route a task into the holding (purgatory) list, recording where it
    /// came from so the move can be reversed later.
    async fn move_to_holding(
        &self,
        task_id: &str,
        original_list_id: &str,
        original_list_name: &str,
    ) -> Result<Task>;

    /// Return a task from the holding list to a destination list.
    async fn restore_from_holding(&self, task_id: &str, destination_list_id: &str)
        -> Result<Task>;
}
