//! Drag-end classification.
//!
//! Maps a raw drag-end gesture plus a snapshot of tasks and lists onto
//! exactly one [`DragOperation`]. Pure and synchronous: no I/O and no
//! mutation of inputs. The event originates from UI gesture libraries whose
//! invariants are not contractually guaranteed, so malformed droppable ids
//! and unknown lists degrade to [`DragOperation::None`] rather than
//! panicking.

use chrono::NaiveDate;

use crate::models::drag::{DragEndEvent, DragOperation, DropTarget};
use crate::models::list::TaskList;
use crate::models::task::Task;
use crate::services::task::ordering::{list_tasks, splice_ids};
use crate::utils::date::today;

/// Classify one drag-end gesture.
///
/// `date` is the calendar day the grid is showing; schedule and reschedule
/// timestamps combine it with the destination slot's wall-clock time.
///
/// Decision order (first match wins):
/// 1. no destination: the gesture was cancelled or dropped outside any
///    target, so nothing may be applied;
/// 2. same droppable, same index: nothing moved;
/// 3. same droppable, different index: reorder within that list;
/// 4. destination is a calendar slot: reschedule when the source was also a
///    slot, otherwise schedule;
/// 5. destination is a known, different list: move;
/// 6. anything else is a safe no-op.
pub fn classify_drag_end(
    event: &DragEndEvent,
    date: NaiveDate,
    tasks: &[Task],
    lists: &[TaskList],
) -> DragOperation {
    let Some(destination) = event.destination.as_ref() else {
        return DragOperation::None;
    };

    if destination.droppable_id == event.source.droppable_id {
        if destination.index == event.source.index {
            return DragOperation::None;
        }
        return reorder_within(event, destination.index, tasks, lists);
    }

    match DropTarget::resolve(&destination.droppable_id, lists) {
        Some(DropTarget::CalendarSlot { time }) => {
            let scheduled_at = date.and_time(time);
            let task_id = event.draggable_id.clone();
            let source_is_slot = DropTarget::resolve(&event.source.droppable_id, lists)
                .is_some_and(|target| target.is_calendar_slot());
            if source_is_slot {
                DragOperation::Reschedule {
                    task_id,
                    scheduled_at,
                }
            } else {
                DragOperation::Schedule {
                    task_id,
                    scheduled_at,
                }
            }
        }
        Some(DropTarget::List { list_id }) => DragOperation::Move {
            task_id: event.draggable_id.clone(),
            list_id,
        },
        None => {
            log::warn!(
                "drop target {:?} matches no list and no calendar slot, ignoring",
                destination.droppable_id
            );
            DragOperation::None
        }
    }
}

/// Classify against the current local day.
pub fn classify_drag_end_today(
    event: &DragEndEvent,
    tasks: &[Task],
    lists: &[TaskList],
) -> DragOperation {
    classify_drag_end(event, today(), tasks, lists)
}

fn reorder_within(
    event: &DragEndEvent,
    destination_index: usize,
    tasks: &[Task],
    lists: &[TaskList],
) -> DragOperation {
    let Some(DropTarget::List { list_id }) =
        DropTarget::resolve(&event.source.droppable_id, lists)
    else {
        // a same-droppable drop that is not on a known list (e.g. within one
        // calendar slot) has nothing to reorder
        return DragOperation::None;
    };

    let ordered: Vec<&str> = list_tasks(tasks, &list_id)
        .iter()
        .map(|task| task.id.as_str())
        .collect();

    match splice_ids(&ordered, &event.draggable_id, destination_index) {
        Some(task_ids) => DragOperation::Reorder { list_id, task_ids },
        None => {
            log::warn!(
                "dragged task {:?} is not in list {:?}, ignoring reorder",
                event.draggable_id,
                list_id
            );
            DragOperation::None
        }
    }
}
