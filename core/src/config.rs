//! Store configuration

use std::path::PathBuf;

use serde::Deserialize;
use tracing::info;

use crate::kv::FileKeyValueStore;
use crate::service::TaskList;
use crate::task::{TaskStore, DEFAULT_TASKS_KEY};
use crate::Result;

fn default_data_dir() -> PathBuf {
    PathBuf::from(".tasklist-data")
}

fn default_tasks_key() -> String {
    DEFAULT_TASKS_KEY.to_string()
}

/// Where the task collection is persisted
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Directory holding one file per key
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Key the collection is stored under
    #[serde(default = "default_tasks_key")]
    pub tasks_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            tasks_key: default_tasks_key(),
        }
    }
}

impl StoreConfig {
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_tasks_key(mut self, tasks_key: impl Into<String>) -> Self {
        self.tasks_key = tasks_key.into();
        self
    }

    /// Open a file-backed task list
    pub fn open(&self) -> Result<TaskList<FileKeyValueStore>> {
        info!("Using data directory: {:?}", self.data_dir);
        let kv = FileKeyValueStore::new(&self.data_dir);
        let store = TaskStore::with_key(kv, &self.tasks_key)?;
        Ok(TaskList::new(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.data_dir, PathBuf::from(".tasklist-data"));
        assert_eq!(config.tasks_key, "tasks");
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let config: StoreConfig = serde_json::from_str(r#"{"tasksKey": "home"}"#).unwrap();
        assert_eq!(config.tasks_key, "home");
        assert_eq!(config.data_dir, PathBuf::from(".tasklist-data"));
    }

    #[test]
    fn test_open_rejects_bad_key() {
        let config = StoreConfig::default().with_tasks_key("../tasks");
        assert!(config.open().is_err());
    }

    #[tokio::test]
    async fn test_open_and_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let config = StoreConfig::default()
            .with_data_dir(temp_dir.path())
            .with_tasks_key("home");

        let task = {
            let list = config.open().unwrap();
            let task = list.create_task("Persisted", None, None).unwrap();
            list.save_task(&task).await.unwrap();
            task
        };

        assert!(temp_dir.path().join("home.json").exists());
        let list = config.open().unwrap();
        assert_eq!(list.get_all_tasks_sorted().await.unwrap(), vec![task]);
    }
}
