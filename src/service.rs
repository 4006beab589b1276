use std::path::Path;

use crate::confirm::Gate;
use crate::error::{Result, TareaError};
use crate::model::{SortOrder, Task, TaskPatch, parse_due_date};
use crate::store::session::Session;
use crate::store::tasks::TaskStore;

/// CRUD front door. Owns the store and the session, reports every
/// user-visible outcome through the gate, and persists write-through after
/// each mutation. Validation failures are soft: the user gets a message,
/// the collection is untouched, and the caller sees `Ok(None)`.
pub struct TaskService<'a> {
    store: TaskStore,
    session: Session,
    gate: &'a mut dyn Gate,
}

impl<'a> TaskService<'a> {
    pub fn open(dir: &Path, gate: &'a mut dyn Gate) -> Result<Self> {
        let store = TaskStore::open(dir)?;
        let session = Session::load(dir);
        Ok(Self {
            store,
            session,
            gate,
        })
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Add a task, or apply the pending edit when one is active. Empty
    /// text, a missing date, and a malformed date are all soft rejections.
    pub fn submit(&mut self, text: &str, date: Option<&str>) -> Result<Option<Task>> {
        let text = text.trim();
        if text.is_empty() {
            self.gate
                .notify("Error", "the task description must not be empty")?;
            return Ok(None);
        }
        let Some(raw) = date else {
            self.gate
                .notify("Error", "a due date is required (--date YYYY-MM-DD)")?;
            return Ok(None);
        };
        let date = match parse_due_date(raw) {
            Ok(date) => date,
            Err(e) => {
                self.gate.notify("Error", &e.to_string())?;
                return Ok(None);
            }
        };

        // A pending edit redirects this submission into an update, then
        // reverts to normal add mode.
        if let Some(id) = self.session.editing.take() {
            self.session.save(self.store.root())?;
            return self.update(
                id,
                TaskPatch {
                    text: Some(text.to_string()),
                    date: Some(date),
                    completed: None,
                },
            );
        }

        let task = self.store.add(text.to_string(), date);
        self.store.persist()?;
        self.gate
            .notify("Done", &format!("task {} added", task.id))?;
        Ok(Some(task))
    }

    /// Merge fields into an existing task. An unknown id is a soft error.
    pub fn update(&mut self, id: u64, patch: TaskPatch) -> Result<Option<Task>> {
        match self.store.update(id, patch) {
            Ok(task) => {
                self.store.persist()?;
                self.gate.notify("Done", &format!("task {id} updated"))?;
                Ok(Some(task))
            }
            Err(TareaError::TaskNotFound(_)) => {
                self.gate.notify("Error", &format!("task {id} not found"))?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Load a task's fields and mark it as the pending edit target.
    /// Starting a new edit while one is pending simply retargets; the last
    /// selection wins.
    pub fn begin_edit(&mut self, id: u64) -> Result<Option<Task>> {
        let Some(task) = self.store.get(id).cloned() else {
            self.gate.notify("Error", &format!("task {id} not found"))?;
            return Ok(None);
        };
        self.session.editing = Some(id);
        self.session.save(self.store.root())?;
        self.gate.notify(
            "Editing",
            &format!(
                "task {id} loaded (\"{}\", due {}); the next add will update it",
                task.text, task.date
            ),
        )?;
        Ok(Some(task))
    }

    /// Flip a task between completed and pending.
    pub fn toggle(&mut self, id: u64) -> Result<Option<Task>> {
        let Some(completed) = self.store.get(id).map(|t| !t.completed) else {
            self.gate.notify("Error", &format!("task {id} not found"))?;
            return Ok(None);
        };
        self.update(
            id,
            TaskPatch {
                completed: Some(completed),
                ..Default::default()
            },
        )
    }

    /// Remove a task behind a confirmation prompt. Declining is a silent
    /// no-op.
    pub fn delete(&mut self, id: u64) -> Result<Option<Task>> {
        if self.store.get(id).is_none() {
            self.gate.notify("Error", &format!("task {id} not found"))?;
            return Ok(None);
        }
        if !self.gate.confirm("Delete", &format!("delete task {id}?"))? {
            return Ok(None);
        }
        let task = self.store.remove(id)?;
        self.store.persist()?;
        self.gate.notify("Done", &format!("task {id} deleted"))?;
        Ok(Some(task))
    }

    /// Clear the whole collection behind a confirmation prompt; also
    /// restarts the id sequence at 1. Declining is a silent no-op.
    pub fn delete_all(&mut self) -> Result<bool> {
        let confirmed = self.gate.confirm(
            "Delete all",
            "delete ALL tasks? This cannot be undone.",
        )?;
        if !confirmed {
            return Ok(false);
        }
        self.store.clear();
        self.store.persist()?;
        self.gate.notify("Done", "all tasks deleted")?;
        Ok(true)
    }

    /// Flip the persisted sort direction and acknowledge the new one.
    pub fn toggle_sort(&mut self) -> Result<SortOrder> {
        self.session.sort = self.session.sort.toggled();
        self.session.save(self.store.root())?;
        let direction = match self.session.sort {
            SortOrder::Asc => "ascending",
            SortOrder::Desc => "descending",
        };
        self.gate
            .notify("Sort", &format!("tasks now sorted by due date, {direction}"))?;
        Ok(self.session.sort)
    }
}
