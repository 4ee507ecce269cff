//! Side-by-side layout for overlapping tasks.
//!
//! Because overlap is capped at two tasks per slot, layout never needs more
//! than a two-column model: a task renders full width unless it shares a
//! slot with another task, in which case both render at 50% in columns 0
//! and 1. Column assignment is sticky across the slots a task spans so its
//! rendered column never flickers between slots.

use std::collections::HashMap;

use crate::models::task::Task;
use crate::utils::slot::SLOT_COUNT;

/// Rendering geometry for one task in the day column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TaskLayout {
    pub width_percent: u8,
    pub column: u8,
}

impl Default for TaskLayout {
    fn default() -> Self {
        Self {
            width_percent: 100,
            column: 0,
        }
    }
}

/// Compute the display column and width for every task in the snapshot.
///
/// Every input task gets exactly one entry. Only non-completed scheduled
/// tasks participate in occupancy; everything else (and any task that never
/// shares a slot) gets the full-width default. For a slot occupied by
/// exactly two tasks, the earlier by `(scheduled_at, id)` takes column 0 and
/// the other column 1; a task keeps the first column it is assigned. Slots
/// with three or more occupants assign nothing.
pub fn calculate_task_layout(tasks: &[Task]) -> HashMap<String, TaskLayout> {
    let mut occupancy: Vec<Vec<&Task>> = vec![Vec::new(); SLOT_COUNT];
    for task in tasks.iter().filter(|task| task.occupies_calendar()) {
        if let Some((start, end)) = task.slot_range() {
            for slot in occupancy.iter_mut().take(end).skip(start) {
                slot.push(task);
            }
        }
    }

    let mut columns: HashMap<&str, u8> = HashMap::new();
    for slot in &occupancy {
        if slot.len() != 2 {
            continue;
        }
        let (mut first, mut second) = (slot[0], slot[1]);
        if (second.scheduled_at, second.id.as_str()) < (first.scheduled_at, first.id.as_str()) {
            std::mem::swap(&mut first, &mut second);
        }
        match (
            columns.get(first.id.as_str()).copied(),
            columns.get(second.id.as_str()).copied(),
        ) {
            (None, None) => {
                columns.insert(first.id.as_str(), 0);
                columns.insert(second.id.as_str(), 1);
            }
            (Some(taken), None) => {
                columns.insert(second.id.as_str(), 1 - taken.min(1));
            }
            (None, Some(taken)) => {
                columns.insert(first.id.as_str(), 1 - taken.min(1));
            }
            (Some(_), Some(_)) => {}
        }
    }

    tasks
        .iter()
        .map(|task| {
            let layout = match columns.get(task.id.as_str()) {
                Some(&column) => TaskLayout {
                    width_percent: 50,
                    column,
                },
                None => TaskLayout::default(),
            };
            (task.id.clone(), layout)
        })
        .collect()
}
