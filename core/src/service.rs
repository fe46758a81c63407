//! Task list facade
//!
//! The operations a list screen needs: read the sorted list, build and
//! complete tasks, and persist or remove them.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::kv::KeyValueStore;
use crate::task::{sort_for_display, Task, TaskStore};
use crate::Result;

/// Task list backed by a [`TaskStore`]
pub struct TaskList<S> {
    store: TaskStore<S>,
}

impl<S: KeyValueStore> TaskList<S> {
    pub fn new(store: TaskStore<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    /// All persisted tasks in display order
    pub async fn get_all_tasks_sorted(&self) -> Result<Vec<Task>> {
        let mut tasks = self.store.load_all().await?;
        sort_for_display(&mut tasks);
        Ok(tasks)
    }

    /// Whether there is nothing to show
    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.store.load_all().await?.is_empty())
    }

    pub async fn get_task(&self, id: Uuid) -> Result<Option<Task>> {
        self.store.get(id).await
    }

    /// Build a new task; it is not persisted until passed to [`TaskList::save_task`]
    pub fn create_task(
        &self,
        title: impl Into<String>,
        note: Option<String>,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<Task> {
        let mut task = Task::new(title)?;
        task.set_note(note);
        if let Some(due_date) = due_date {
            task.set_due_date(due_date);
        }
        Ok(task)
    }

    /// Return the task with its completion state changed; the caller persists it
    pub fn complete_task(&self, mut task: Task, value: bool) -> Task {
        task.set_complete(value);
        task
    }

    /// Create or update the task, keyed by its ID
    pub async fn save_task(&self, task: &Task) -> Result<()> {
        self.store.upsert(task).await
    }

    pub async fn delete_task(&self, task: &Task) -> Result<()> {
        self.store.delete(task).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKeyValueStore;
    use chrono::Duration;

    fn create_test_list() -> TaskList<MemoryKeyValueStore> {
        TaskList::new(TaskStore::new(MemoryKeyValueStore::new()))
    }

    #[tokio::test]
    async fn test_empty_list() {
        let list = create_test_list();
        assert!(list.get_all_tasks_sorted().await.unwrap().is_empty());
        assert!(list.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_created_task_is_not_persisted() {
        let list = create_test_list();
        let task = list.create_task("Buy milk", None, None).unwrap();

        assert!(!task.is_complete());
        assert!(task.completed_date().is_none());
        assert_eq!(task.due_date(), task.created_date());
        assert!(list.is_empty().await.unwrap());

        list.save_task(&task).await.unwrap();
        assert_eq!(list.get_task(task.id()).await.unwrap(), Some(task));
    }

    #[tokio::test]
    async fn test_create_task_with_note_and_due_date() {
        let list = create_test_list();
        let due = Utc::now() + Duration::days(1);
        let task = list
            .create_task("Dentist", Some("Bring forms".to_string()), Some(due))
            .unwrap();

        assert_eq!(task.note(), Some("Bring forms"));
        assert_eq!(task.due_date(), due);
        assert!(list.create_task("", None, None).is_err());
    }

    #[tokio::test]
    async fn test_complete_and_resort() {
        let list = create_test_list();
        let first = list.create_task("First", None, None).unwrap();
        let second = list.create_task("Second", None, None).unwrap();
        list.save_task(&first).await.unwrap();
        list.save_task(&second).await.unwrap();

        let first = list.complete_task(first, true);
        assert!(first.completed_date().is_some());
        list.save_task(&first).await.unwrap();

        let sorted = list.get_all_tasks_sorted().await.unwrap();
        let titles: Vec<&str> = sorted.iter().map(Task::title).collect();
        assert_eq!(titles, ["Second", "First"]);

        let first = list.complete_task(first, false);
        assert!(first.completed_date().is_none());
        list.save_task(&first).await.unwrap();

        let sorted = list.get_all_tasks_sorted().await.unwrap();
        let titles: Vec<&str> = sorted.iter().map(Task::title).collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[tokio::test]
    async fn test_edit_existing_task() {
        let list = create_test_list();
        let mut task = list.create_task("Draft", None, None).unwrap();
        list.save_task(&task).await.unwrap();

        task.rename("Final").unwrap();
        list.save_task(&task).await.unwrap();

        let all = list.get_all_tasks_sorted().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title(), "Final");
    }

    #[tokio::test]
    async fn test_delete_task() {
        let list = create_test_list();
        let task = list.create_task("Temporary", None, None).unwrap();
        list.save_task(&task).await.unwrap();

        list.delete_task(&task).await.unwrap();
        assert!(list.is_empty().await.unwrap());

        // Deleting again is not an error
        list.delete_task(&task).await.unwrap();
    }
}
