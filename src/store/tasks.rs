use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use fs2::FileExt;

use crate::error::{Result, TareaError};
use crate::model::{Task, TaskPatch};

pub const BLOB_FILE: &str = "tasks.json";
const LOCK_FILE: &str = "tasks.lock";

/// The whole collection lives in a single JSON blob. The id counter is
/// derived from the blob on open (`max(id) + 1`), never stored.
#[derive(Debug)]
pub struct TaskStore {
    root: PathBuf,
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// Open the store under `root`, creating the directory on first use.
    /// A missing blob means an empty collection; a malformed blob is a
    /// hard error rather than a silent reset.
    pub fn open(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)?;
        let path = root.join(BLOB_FILE);
        let tasks: Vec<Task> = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw).map_err(|e| {
                TareaError::CorruptStore(path.display().to_string(), e.to_string())
            })?
        } else {
            Vec::new()
        };
        let next_id = tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
        Ok(Self {
            root: root.to_path_buf(),
            tasks,
            next_id,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a new pending task under the next id. Input validation is the
    /// caller's job.
    pub fn add(&mut self, text: String, date: NaiveDate) -> Task {
        let task = Task {
            id: self.next_id,
            text,
            date,
            completed: false,
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.tasks.push(task.clone());
        task
    }

    /// Merge `patch` into the task with `id`.
    pub fn update(&mut self, id: u64, patch: TaskPatch) -> Result<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TareaError::TaskNotFound(id))?;
        if let Some(text) = patch.text {
            task.text = text;
        }
        if let Some(date) = patch.date {
            task.date = date;
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        Ok(task.clone())
    }

    pub fn remove(&mut self, id: u64) -> Result<Task> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TareaError::TaskNotFound(id))?;
        Ok(self.tasks.remove(idx))
    }

    /// Drop every task and restart the id sequence at 1.
    pub fn clear(&mut self) {
        self.tasks.clear();
        self.next_id = 1;
    }

    /// Serialize the entire collection as one atomic write (temp file +
    /// rename), holding an exclusive lock so concurrent invocations
    /// serialize instead of interleaving.
    pub fn persist(&self) -> Result<()> {
        let _lock = self.lock_exclusive()?;
        let path = self.root.join(BLOB_FILE);
        let tmp = self.root.join(format!("{BLOB_FILE}.tmp"));
        fs::write(&tmp, serde_json::to_string_pretty(&self.tasks)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    // Released when the returned handle is dropped.
    fn lock_exclusive(&self) -> Result<File> {
        let path = self.root.join(LOCK_FILE);
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;
        FileExt::try_lock_exclusive(&file)
            .map_err(|_| TareaError::Locked(path.display().to_string()))?;
        Ok(file)
    }
}
