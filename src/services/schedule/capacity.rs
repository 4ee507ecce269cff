//! Slot capacity checking.
//!
//! The grid admits at most two concurrently scheduled tasks per 15-minute
//! slot. The check here is advisory to direct callers (it mutates nothing);
//! the application service invokes it as a hard gate before every schedule
//! and reschedule persistence call.

use chrono::NaiveDateTime;

use crate::models::task::Task;
use crate::utils::date::is_same_day;
use crate::utils::slot::{slot_index_to_time, slot_span, time_to_slot_index, SLOT_COUNT};

/// Hard cap on concurrently scheduled tasks per slot.
pub const MAX_TASKS_PER_SLOT: usize = 2;

/// Non-throwing result of a capacity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityCheck {
    pub allowed: bool,
    /// Human-readable rejection reason, set iff `allowed` is false. Supplied
    /// so the caller does not have to invent UI feedback text.
    pub reason: Option<String>,
}

impl CapacityCheck {
    fn ok() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    fn rejected(reason: String) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
        }
    }
}

/// Check whether `candidate_id` may occupy `[proposed_start, proposed_start
/// + duration_minutes)` without any slot exceeding the cap.
///
/// Counts, per slot in the candidate's range, the non-completed scheduled
/// tasks on the same day (excluding the candidate itself by id, so a
/// reschedule never collides with its own old placement) whose slot range
/// covers that slot. Fails on the first slot already holding
/// [`MAX_TASKS_PER_SLOT`] occupants.
pub fn can_schedule(
    tasks: &[Task],
    candidate_id: &str,
    proposed_start: NaiveDateTime,
    duration_minutes: i64,
) -> CapacityCheck {
    let start_slot = time_to_slot_index(proposed_start.time());
    let end_slot = (start_slot + slot_span(duration_minutes)).min(SLOT_COUNT);

    let occupants: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.id != candidate_id)
        .filter(|task| task.occupies_calendar())
        .filter(|task| {
            task.scheduled_at
                .is_some_and(|at| is_same_day(at, proposed_start))
        })
        .collect();

    for slot in start_slot..end_slot {
        let count = occupants
            .iter()
            .filter(|task| {
                task.slot_range()
                    .is_some_and(|(start, end)| start <= slot && slot < end)
            })
            .count();
        if count >= MAX_TASKS_PER_SLOT {
            let slot_time = slot_index_to_time(slot);
            return CapacityCheck::rejected(format!(
                "time slot {} already has {} tasks",
                slot_time.format("%H:%M"),
                count
            ));
        }
    }

    CapacityCheck::ok()
}
