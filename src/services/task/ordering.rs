//! Canonical ordering of tasks and lists.
//!
//! Single source of truth for how a list's tasks are ordered: by creation
//! time, ties broken by id, completed tasks excluded. Both the classifier's
//! reorder path and presentation callers go through here.

use crate::models::list::TaskList;
use crate::models::task::Task;

/// A list's current non-completed tasks in canonical order.
pub fn list_tasks<'a>(tasks: &'a [Task], list_id: &str) -> Vec<&'a Task> {
    let mut filtered: Vec<&Task> = tasks
        .iter()
        .filter(|task| !task.is_completed() && task.list_id.as_deref() == Some(list_id))
        .collect();
    filtered.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    filtered
}

/// Sibling lists ordered by position index, ties broken by id.
pub fn lists_by_position(lists: &[TaskList]) -> Vec<&TaskList> {
    let mut ordered: Vec<&TaskList> = lists.iter().collect();
    ordered.sort_by(|a, b| {
        a.position_index
            .cmp(&b.position_index)
            .then_with(|| a.id.cmp(&b.id))
    });
    ordered
}

/// Move the id at the dragged task's current position to `to`, shifting the
/// rest (standard list-splice semantics). Returns `None` when the dragged id
/// is not in the sequence.
pub fn splice_ids(ids: &[&str], dragged_id: &str, to: usize) -> Option<Vec<String>> {
    let from = ids.iter().position(|id| *id == dragged_id)?;
    let mut spliced: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    let moved = spliced.remove(from);
    let to = to.min(spliced.len());
    spliced.insert(to, moved);
    Some(spliced)
}
