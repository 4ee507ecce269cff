// Integration tests driving a full gesture cycle: raw drag-end event ->
// classifier -> application service -> in-memory store -> layout of the
// refreshed snapshot.

mod fixtures;

use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

use fixtures::{at, init_logging, listed_task, monday, sample_lists, scheduled_task};
use timeboxer::models::drag::{DragEndEvent, DragLocation};
use timeboxer::models::task::Task;
use timeboxer::services::schedule::{calculate_task_layout, tasks_for_date};
use timeboxer::services::task::{Outcome, ScheduleService, TaskStore};

/// Minimal in-memory backend. Good enough to observe the call pattern the
/// application service produces; no ordering or row semantics beyond what
/// the tests assert.
#[derive(Default)]
struct InMemoryStore {
    tasks: Mutex<Vec<Task>>,
    reorders: Mutex<Vec<Vec<String>>>,
    holding_moves: Mutex<Vec<(String, String, String)>>,
}

impl InMemoryStore {
    fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Mutex::new(tasks),
            ..Default::default()
        }
    }

    fn snapshot(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().clone()
    }

    fn update<F>(&self, task_id: &str, apply: F) -> Result<Task>
    where
        F: FnOnce(&mut Task),
    {
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| anyhow!("no such task: {}", task_id))?;
        apply(task);
        Ok(task.clone())
    }
}

#[async_trait]
impl TaskStore for InMemoryStore {
    async fn fetch_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.snapshot())
    }

    async fn fetch_scheduled(&self, date: NaiveDate) -> Result<Vec<Task>> {
        Ok(tasks_for_date(&self.snapshot(), date))
    }

    async fn persist_reorder(&self, task_ids: &[String]) -> Result<()> {
        self.reorders.lock().unwrap().push(task_ids.to_vec());
        Ok(())
    }

    async fn persist_schedule(&self, task_id: &str, when: NaiveDateTime) -> Result<Task> {
        self.update(task_id, |task| task.scheduled_at = Some(when))
    }

    async fn persist_reschedule(&self, task_id: &str, when: NaiveDateTime) -> Result<()> {
        self.update(task_id, |task| task.scheduled_at = Some(when))
            .map(|_| ())
    }

    async fn persist_list_move(&self, task_id: &str, new_list_id: &str) -> Result<Task> {
        self.update(task_id, |task| task.list_id = Some(new_list_id.to_string()))
    }

    async fn move_to_holding(
        &self,
        task_id: &str,
        original_list_id: &str,
        original_list_name: &str,
    ) -> Result<Task> {
        self.holding_moves.lock().unwrap().push((
            task_id.to_string(),
            original_list_id.to_string(),
            original_list_name.to_string(),
        ));
        self.update(task_id, |task| task.list_id = Some("purgatory".to_string()))
    }

    async fn restore_from_holding(
        &self,
        task_id: &str,
        destination_list_id: &str,
    ) -> Result<Task> {
        self.update(task_id, |task| {
            task.list_id = Some(destination_list_id.to_string());
            task.scheduled_at = None;
        })
    }
}

fn drag(
    draggable: &str,
    source: (&str, usize),
    destination: Option<(&str, usize)>,
) -> DragEndEvent {
    DragEndEvent::new(
        draggable,
        DragLocation::new(source.0, source.1),
        destination.map(|(id, index)| DragLocation::new(id, index)),
    )
}

#[tokio::test]
async fn test_schedule_gesture_end_to_end() {
    init_logging();
    let store = std::sync::Arc::new(InMemoryStore::with_tasks(vec![
        listed_task("t1", "list-A", 0),
        listed_task("t2", "list-A", 1),
    ]));
    let service = ScheduleService::new(store.clone());
    let lists = sample_lists();

    let tasks = store.fetch_tasks().await.unwrap();
    let event = drag("t1", ("list-A", 0), Some(("calendar-slot-0930", 0)));
    let outcome = service
        .apply_drag_end(&event, monday(), &tasks, &lists)
        .await
        .unwrap();

    assert!(matches!(outcome, Outcome::Scheduled { .. }));

    // the task went through the holding list with its origin recorded
    assert_eq!(
        store.holding_moves.lock().unwrap().as_slice(),
        &[(
            "t1".to_string(),
            "list-A".to_string(),
            "Errands".to_string()
        )]
    );

    // and the refreshed snapshot reflects the placement
    let scheduled = store.fetch_scheduled(monday()).await.unwrap();
    assert_eq!(scheduled.len(), 1);
    assert_eq!(scheduled[0].id, "t1");
    assert_eq!(scheduled[0].scheduled_at, Some(at(9, 30)));
    assert_eq!(scheduled[0].list_id.as_deref(), Some("purgatory"));
}

#[tokio::test]
async fn test_reschedule_gesture_end_to_end() {
    init_logging();
    let store = std::sync::Arc::new(InMemoryStore::with_tasks(vec![scheduled_task(
        "t1", 9, 30, 30,
    )]));
    let service = ScheduleService::new(store.clone());
    let lists = sample_lists();

    let tasks = store.fetch_tasks().await.unwrap();
    let event = drag(
        "t1",
        ("calendar-slot-0930", 0),
        Some(("calendar-slot-1000", 0)),
    );
    let outcome = service
        .apply_drag_end(&event, monday(), &tasks, &lists)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Rescheduled {
            task_id: "t1".to_string(),
            scheduled_at: at(10, 0),
        }
    );
    assert_eq!(store.snapshot()[0].scheduled_at, Some(at(10, 0)));
    // no holding move for a task already on the calendar
    assert!(store.holding_moves.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_capacity_violation_leaves_store_untouched() {
    init_logging();
    let store = std::sync::Arc::new(InMemoryStore::with_tasks(vec![
        scheduled_task("t1", 10, 0, 60),
        scheduled_task("t2", 10, 0, 60),
        listed_task("t3", "list-A", 0),
    ]));
    let service = ScheduleService::new(store.clone());
    let lists = sample_lists();

    let before = store.snapshot();
    let tasks = before.clone();
    let event = drag("t3", ("list-A", 0), Some(("calendar-slot-1015", 0)));
    let outcome = service
        .apply_drag_end(&event, monday(), &tasks, &lists)
        .await
        .unwrap();

    assert!(matches!(outcome, Outcome::CapacityExceeded { .. }));
    assert_eq!(store.snapshot(), before);
    assert!(store.holding_moves.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_reorder_gesture_end_to_end() {
    init_logging();
    let store = std::sync::Arc::new(InMemoryStore::with_tasks(vec![
        listed_task("t1", "list-A", 0),
        listed_task("t2", "list-A", 1),
        listed_task("t3", "list-A", 2),
    ]));
    let service = ScheduleService::new(store.clone());
    let lists = sample_lists();

    let tasks = store.fetch_tasks().await.unwrap();
    let event = drag("t1", ("list-A", 0), Some(("list-A", 2)));
    let outcome = service
        .apply_drag_end(&event, monday(), &tasks, &lists)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Reordered {
            list_id: "list-A".to_string(),
            count: 3
        }
    );
    assert_eq!(
        store.reorders.lock().unwrap().as_slice(),
        &[vec!["t2".to_string(), "t3".to_string(), "t1".to_string()]]
    );
}

#[tokio::test]
async fn test_cancelled_gesture_applies_nothing() {
    init_logging();
    let store = std::sync::Arc::new(InMemoryStore::with_tasks(vec![listed_task(
        "t1", "list-A", 0,
    )]));
    let service = ScheduleService::new(store.clone());
    let lists = sample_lists();

    let before = store.snapshot();
    let tasks = before.clone();
    let event = drag("t1", ("list-A", 0), None);
    let outcome = service
        .apply_drag_end(&event, monday(), &tasks, &lists)
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Noop);
    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn test_unschedule_reverses_holding_routing() {
    init_logging();
    let store = std::sync::Arc::new(InMemoryStore::with_tasks(vec![listed_task(
        "t1", "list-A", 0,
    )]));
    let service = ScheduleService::new(store.clone());
    let lists = sample_lists();

    let tasks = store.fetch_tasks().await.unwrap();
    let event = drag("t1", ("list-A", 0), Some(("calendar-slot-0930", 0)));
    service
        .apply_drag_end(&event, monday(), &tasks, &lists)
        .await
        .unwrap();

    let (_, origin_id, _) = store.holding_moves.lock().unwrap()[0].clone();
    let restored = service.unschedule("t1", &origin_id).await.unwrap();

    assert_eq!(restored.list_id.as_deref(), Some("list-A"));
    assert!(restored.scheduled_at.is_none());
}

#[tokio::test]
async fn test_layout_reflects_applied_schedule() {
    init_logging();
    let store = std::sync::Arc::new(InMemoryStore::with_tasks(vec![
        scheduled_task("t1", 10, 0, 60),
        listed_task("t2", "list-A", 0),
    ]));
    let service = ScheduleService::new(store.clone());
    let lists = sample_lists();

    let tasks = store.fetch_tasks().await.unwrap();
    let event = drag("t2", ("list-A", 0), Some(("calendar-slot-1000", 0)));
    service
        .apply_drag_end(&event, monday(), &tasks, &lists)
        .await
        .unwrap();

    let day = store.fetch_scheduled(monday()).await.unwrap();
    let layout = calculate_task_layout(&day);

    assert_eq!(layout["t1"].width_percent, 50);
    assert_eq!(layout["t2"].width_percent, 50);
    assert_ne!(layout["t1"].column, layout["t2"].column);
}
