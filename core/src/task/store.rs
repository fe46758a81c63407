//! Task collection storage
//!
//! The whole collection is kept as one JSON array under a single key, so
//! every mutation reads the full list, edits it in memory and writes it back.

use std::collections::HashSet;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::model::Task;
use crate::kv::{validate_key, KeyValueStore};
use crate::{Error, Result};

/// Key the collection is stored under unless configured otherwise
pub const DEFAULT_TASKS_KEY: &str = "tasks";

/// Durable task collection backed by a key-value store
pub struct TaskStore<S> {
    kv: S,
    key: String,
    /// Serializes read-modify-write sequences
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Create a store using the default `tasks` key
    pub fn new(kv: S) -> Self {
        Self::open(kv, DEFAULT_TASKS_KEY.to_string())
    }

    /// Create a store that keeps the collection under `key`
    pub fn with_key(kv: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        validate_key(&key)?;
        Ok(Self::open(kv, key))
    }

    fn open(kv: S, key: String) -> Self {
        info!("Opened task store under key {:?}", key);
        Self {
            kv,
            key,
            write_lock: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load every persisted task in storage order
    ///
    /// A missing or undecodable blob yields an empty list. Substrate I/O
    /// failures are still returned.
    pub async fn load_all(&self) -> Result<Vec<Task>> {
        match self.try_load_all().await {
            Ok(tasks) => Ok(tasks),
            Err(Error::Serialization(e)) => {
                warn!("Discarding unreadable task data under {:?}: {}", self.key, e);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Load every persisted task, reporting decode failures
    pub async fn try_load_all(&self) -> Result<Vec<Task>> {
        let Some(bytes) = self.kv.get(&self.key).await? else {
            debug!("No task data under {:?}", self.key);
            return Ok(Vec::new());
        };
        let tasks: Vec<Task> = serde_json::from_slice(&bytes)?;
        debug!("Loaded {} tasks from {:?}", tasks.len(), self.key);
        Ok(tasks)
    }

    /// Get a task by ID
    pub async fn get(&self, id: Uuid) -> Result<Option<Task>> {
        let tasks = self.load_all().await?;
        Ok(tasks.into_iter().find(|t| t.id() == id))
    }

    /// Replace the whole persisted collection
    ///
    /// Fails without touching stored data if two tasks share an ID or the
    /// collection cannot be encoded.
    pub async fn save_all(&self, tasks: &[Task]) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.write(tasks).await
    }

    /// Insert the task, or replace the stored task with the same ID
    pub async fn upsert(&self, task: &Task) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut tasks = self.load_all().await?;

        match tasks.iter_mut().find(|t| t.id() == task.id()) {
            Some(existing) => *existing = task.clone(),
            None => tasks.push(task.clone()),
        }

        self.write(&tasks).await
    }

    /// Remove the task with the same ID; missing tasks are not an error
    pub async fn delete(&self, task: &Task) -> Result<()> {
        self.delete_by_id(task.id()).await.map(|_| ())
    }

    /// Remove a task by ID, returning whether anything was removed
    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut tasks = self.load_all().await?;

        let before = tasks.len();
        tasks.retain(|t| t.id() != id);
        let removed = tasks.len() != before;

        self.write(&tasks).await?;
        Ok(removed)
    }

    /// Drop the persisted collection entirely
    pub async fn clear(&self) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let removed = self.kv.remove(&self.key).await?;
        if removed {
            info!("Cleared task data under {:?}", self.key);
        }
        Ok(removed)
    }

    async fn write(&self, tasks: &[Task]) -> Result<()> {
        let mut seen = HashSet::with_capacity(tasks.len());
        if let Some(dup) = tasks.iter().find(|t| !seen.insert(t.id())) {
            return Err(Error::InvalidInput(format!(
                "Task with ID {} appears more than once",
                dup.id()
            )));
        }

        let bytes = serde_json::to_vec_pretty(tasks)?;
        self.kv.set(&self.key, bytes).await?;
        debug!("Saved {} tasks to {:?}", tasks.len(), self.key);
        Ok(())
    }
}
