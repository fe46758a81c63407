//! Task module
//!
//! This module contains the task entity, its display ordering and the
//! store that persists the task collection.

mod model;
pub mod ordering;
mod store;

pub use model::*;
pub use ordering::{sort_for_display, sorted_for_display};
pub use store::{TaskStore, DEFAULT_TASKS_KEY};
