//! Application of classified drag operations.
//!
//! [`ScheduleService`] sits between the pure classifier and the persistence
//! boundary: it enforces the slot capacity cap before every schedule and
//! reschedule call, handles the purgatory routing convention (a task gaining
//! a schedule is first moved into the holding list, recording its original
//! list so the move can be reversed), and never applies anything for a
//! no-op classification.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};

use super::TaskStore;
use crate::models::drag::{DragEndEvent, DragOperation};
use crate::models::list::{find_by_id, purgatory_list, TaskList};
use crate::models::task::Task;
use crate::services::drag::classify_drag_end;
use crate::services::schedule::can_schedule;

/// What applying an operation did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing was persisted (no-op classification or a defensive bail-out).
    Noop,
    Reordered {
        list_id: String,
        count: usize,
    },
    Scheduled {
        task: Task,
    },
    Rescheduled {
        task_id: String,
        scheduled_at: NaiveDateTime,
    },
    Moved {
        task: Task,
    },
    /// The capacity gate rejected the placement; no store call was made.
    /// `reason` is suitable for direct display at the call site.
    CapacityExceeded {
        reason: String,
    },
}

/// Applies drag operations against a [`TaskStore`].
pub struct ScheduleService {
    store: Arc<dyn TaskStore>,
}

impl ScheduleService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// Classify a raw drag-end gesture and apply the result in one step.
    pub async fn apply_drag_end(
        &self,
        event: &DragEndEvent,
        date: NaiveDate,
        tasks: &[Task],
        lists: &[TaskList],
    ) -> Result<Outcome> {
        let operation = classify_drag_end(event, date, tasks, lists);
        self.apply(operation, tasks, lists).await
    }

    /// Apply one classified operation.
    ///
    /// `tasks` and `lists` are the same read-only snapshot the operation was
    /// classified against; they are consulted for the capacity gate and the
    /// purgatory routing, never mutated.
    pub async fn apply(
        &self,
        operation: DragOperation,
        tasks: &[Task],
        lists: &[TaskList],
    ) -> Result<Outcome> {
        match operation {
            DragOperation::None => Ok(Outcome::Noop),

            DragOperation::Reorder { list_id, task_ids } => {
                self.store
                    .persist_reorder(&task_ids)
                    .await
                    .context("failed to persist reorder")?;
                log::debug!("reordered {} tasks in list {}", task_ids.len(), list_id);
                Ok(Outcome::Reordered {
                    list_id,
                    count: task_ids.len(),
                })
            }

            DragOperation::Schedule {
                task_id,
                scheduled_at,
            } => {
                let Some(task) = tasks.iter().find(|t| t.id == task_id) else {
                    log::warn!("task {:?} not in snapshot, ignoring schedule", task_id);
                    return Ok(Outcome::Noop);
                };
                if let Some(outcome) =
                    self.capacity_gate(tasks, &task_id, scheduled_at, task.duration_minutes)
                {
                    return Ok(outcome);
                }
                self.route_to_holding(task, lists).await?;
                let task = self
                    .store
                    .persist_schedule(&task_id, scheduled_at)
                    .await
                    .context("failed to persist schedule")?;
                log::info!("scheduled task {} at {}", task_id, scheduled_at);
                Ok(Outcome::Scheduled { task })
            }

            DragOperation::Reschedule {
                task_id,
                scheduled_at,
            } => {
                let Some(task) = tasks.iter().find(|t| t.id == task_id) else {
                    log::warn!("task {:?} not in snapshot, ignoring reschedule", task_id);
                    return Ok(Outcome::Noop);
                };
                if let Some(outcome) =
                    self.capacity_gate(tasks, &task_id, scheduled_at, task.duration_minutes)
                {
                    return Ok(outcome);
                }
                self.store
                    .persist_reschedule(&task_id, scheduled_at)
                    .await
                    .context("failed to persist reschedule")?;
                log::info!("rescheduled task {} to {}", task_id, scheduled_at);
                Ok(Outcome::Rescheduled {
                    task_id,
                    scheduled_at,
                })
            }

            DragOperation::Move { task_id, list_id } => {
                if find_by_id(lists, &list_id).is_none() {
                    log::warn!("list {:?} not in snapshot, ignoring move", list_id);
                    return Ok(Outcome::Noop);
                }
                let task = self
                    .store
                    .persist_list_move(&task_id, &list_id)
                    .await
                    .context("failed to persist list move")?;
                log::info!("moved task {} to list {}", task_id, list_id);
                Ok(Outcome::Moved { task })
            }
        }
    }

    /// Take a task off the calendar conceptually: return it from the holding
    /// list to the list it originally came from.
    pub async fn unschedule(&self, task_id: &str, destination_list_id: &str) -> Result<Task> {
        let task = self
            .store
            .restore_from_holding(task_id, destination_list_id)
            .await
            .context("failed to restore task from holding list")?;
        log::info!(
            "restored task {} to list {}",
            task_id,
            destination_list_id
        );
        Ok(task)
    }

    fn capacity_gate(
        &self,
        tasks: &[Task],
        task_id: &str,
        proposed_start: NaiveDateTime,
        duration_minutes: i64,
    ) -> Option<Outcome> {
        let check = can_schedule(tasks, task_id, proposed_start, duration_minutes);
        if check.allowed {
            return None;
        }
        let reason = check
            .reason
            .unwrap_or_else(|| "slot capacity exceeded".to_string());
        log::warn!("rejecting placement of task {}: {}", task_id, reason);
        Some(Outcome::CapacityExceeded { reason })
    }

    /// Purgatory routing: a task gaining a schedule while not already in the
    /// holding list is moved there first, with its original list recorded.
    /// Unfiled tasks and snapshots without a purgatory list skip the move.
    async fn route_to_holding(&self, task: &Task, lists: &[TaskList]) -> Result<()> {
        let Some(holding) = purgatory_list(lists) else {
            return Ok(());
        };
        let Some(origin_id) = task.list_id.as_deref() else {
            return Ok(());
        };
        if origin_id == holding.id {
            return Ok(());
        }
        let origin_name = match find_by_id(lists, origin_id) {
            Some(list) => list.name.as_str(),
            None => {
                log::warn!(
                    "origin list {:?} not in snapshot, recording empty name",
                    origin_id
                );
                ""
            }
        };
        self.store
            .move_to_holding(&task.id, origin_id, origin_name)
            .await
            .context("failed to move task to holding list")?;
        Ok(())
    }
}
