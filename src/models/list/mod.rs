// List module
// Ordered task containers, including the three system lists

use serde::{Deserialize, Serialize};

/// Discriminator for list behavior.
///
/// Besides ordinary user lists there are three system kinds: one `Date` list
/// per calendar day (auto-created), a `Parked` quick-capture inbox, and the
/// `Purgatory` holding area that temporarily owns tasks actively placed on
/// the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    User,
    Date,
    Parked,
    Purgatory,
}

/// An ordered container of tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: String,
    pub name: String,
    /// Ordering among sibling user lists.
    pub position_index: i64,
    pub kind: ListKind,
}

impl TaskList {
    /// Create a new list with required fields.
    ///
    /// # Returns
    /// Returns `Result<TaskList, String>` with validation
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position_index: i64,
        kind: ListKind,
    ) -> Result<Self, String> {
        let list = Self {
            id: id.into(),
            name: name.into(),
            position_index,
            kind,
        };
        list.validate()?;
        Ok(list)
    }

    /// Validate the list
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("List id cannot be empty".to_string());
        }
        if self.name.trim().is_empty() {
            return Err("List name cannot be empty".to_string());
        }
        Ok(())
    }

    pub fn is_system(&self) -> bool {
        self.kind != ListKind::User
    }

    pub fn is_purgatory(&self) -> bool {
        self.kind == ListKind::Purgatory
    }
}

/// Look up a list by id.
pub fn find_by_id<'a>(lists: &'a [TaskList], id: &str) -> Option<&'a TaskList> {
    lists.iter().find(|list| list.id == id)
}

/// The purgatory (holding) list, if present in the snapshot.
pub fn purgatory_list(lists: &[TaskList]) -> Option<&TaskList> {
    lists.iter().find(|list| list.is_purgatory())
}
