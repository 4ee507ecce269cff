// Schedule service module
// Slot occupancy: the two-per-slot capacity cap and side-by-side layout

mod capacity;
mod layout;

pub use capacity::{can_schedule, CapacityCheck, MAX_TASKS_PER_SLOT};
pub use layout::{calculate_task_layout, TaskLayout};

use chrono::NaiveDate;

use crate::models::task::Task;
use crate::utils::date::is_same_day;

/// Snapshot of the tasks scheduled on one calendar day.
///
/// Layout and capacity both operate on a single day's tasks; callers filter
/// the full snapshot through this before handing it on.
pub fn tasks_for_date(tasks: &[Task], date: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| {
            task.scheduled_at
                .is_some_and(|at| is_same_day(at, date.and_hms_opt(0, 0, 0).unwrap()))
        })
        .cloned()
        .collect()
}
