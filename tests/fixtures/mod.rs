// Test fixtures - reusable test data
// Provides consistent tasks, lists and dates across test files

use chrono::{NaiveDate, NaiveDateTime};

use timeboxer::models::list::{ListKind, TaskList};
use timeboxer::models::task::Task;

/// Route `log` output through the test harness so warn-level degradations
/// show up in failing test output. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The calendar day all fixtures live on.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    monday().and_hms_opt(hour, minute, 0).unwrap()
}

/// A task sitting in a list, created at 08:00 plus `created_offset` minutes
/// so fixture ordering is deterministic.
pub fn listed_task(id: &str, list_id: &str, created_offset: u32) -> Task {
    Task::builder()
        .id(id)
        .title(format!("Task {}", id))
        .list_id(list_id)
        .created_at(at(8, created_offset))
        .build()
        .unwrap()
}

/// A task occupying the calendar at the given time.
pub fn scheduled_task(id: &str, hour: u32, minute: u32, duration: i64) -> Task {
    Task::builder()
        .id(id)
        .title(format!("Task {}", id))
        .scheduled_at(at(hour, minute))
        .duration_minutes(duration)
        .build()
        .unwrap()
}

/// The standard list setup: two user lists plus the three system lists.
pub fn sample_lists() -> Vec<TaskList> {
    vec![
        TaskList::new("list-A", "Errands", 0, ListKind::User).unwrap(),
        TaskList::new("list-B", "Deep work", 1, ListKind::User).unwrap(),
        TaskList::new("date-2025-06-02", "Monday", 0, ListKind::Date).unwrap(),
        TaskList::new("parked", "Parked", 0, ListKind::Parked).unwrap(),
        TaskList::new("purgatory", "Purgatory", 0, ListKind::Purgatory).unwrap(),
    ]
}
