// Drag module
// Raw drag-end gesture input and the classified operation it produces

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::list::{find_by_id, TaskList};
use crate::utils::slot::{parse_slot_id, SLOT_ID_PREFIX};

/// Where a drag started or ended: a droppable id as reported by the gesture
/// library plus the position index within that droppable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub droppable_id: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(droppable_id: impl Into<String>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }
}

/// A raw drag-end gesture, exactly as the presentation layer captured it.
///
/// `destination` is `None` when the item was dropped outside any valid
/// target or the gesture was cancelled. Field contents are untrusted: the
/// classifier degrades malformed input to [`DragOperation::None`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEndEvent {
    pub draggable_id: String,
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

impl DragEndEvent {
    pub fn new(
        draggable_id: impl Into<String>,
        source: DragLocation,
        destination: Option<DragLocation>,
    ) -> Self {
        Self {
            draggable_id: draggable_id.into(),
            source,
            destination,
        }
    }
}

/// A droppable id resolved into a typed target.
///
/// Droppable ids arrive as strings (`"calendar-slot-0930"` vs. a list's raw
/// id). Resolution happens exactly once, here, so the classifier's internal
/// logic never string-matches.
#[derive(Debug, Clone, PartialEq)]
pub enum DropTarget {
    List { list_id: String },
    CalendarSlot { time: NaiveTime },
}

impl DropTarget {
    /// Resolve a raw droppable id against the known lists.
    ///
    /// An id carrying the calendar-slot prefix must parse as a valid slot;
    /// anything else must match a known list id. Returns `None` otherwise.
    pub fn resolve(droppable_id: &str, lists: &[TaskList]) -> Option<DropTarget> {
        if droppable_id.starts_with(SLOT_ID_PREFIX) {
            return parse_slot_id(droppable_id).map(|time| DropTarget::CalendarSlot { time });
        }
        find_by_id(lists, droppable_id).map(|list| DropTarget::List {
            list_id: list.id.clone(),
        })
    }

    pub fn is_calendar_slot(&self) -> bool {
        matches!(self, DropTarget::CalendarSlot { .. })
    }
}

/// The classified result of one drag gesture.
///
/// Constructed and consumed within a single gesture-handling cycle; never
/// persisted. The variants are mutually exclusive and the classifier always
/// returns exactly one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragOperation {
    /// No-op: cancelled gesture, same-position drop, or malformed input.
    None,
    /// New ordering of task ids within one list.
    Reorder {
        list_id: String,
        task_ids: Vec<String>,
    },
    /// A previously unscheduled task is assigned a calendar slot.
    Schedule {
        task_id: String,
        scheduled_at: NaiveDateTime,
    },
    /// A task already on the calendar moves to a new slot.
    Reschedule {
        task_id: String,
        scheduled_at: NaiveDateTime,
    },
    /// A task changes owning list without a calendar implication.
    Move { task_id: String, list_id: String },
}

impl DragOperation {
    pub fn is_noop(&self) -> bool {
        matches!(self, DragOperation::None)
    }
}
