//! Core library for a single-user task list
//!
//! This crate contains the task logic shown by a list screen:
//! - The task entity and its completion state
//! - Display ordering
//! - Persistence of the task collection through a key-value store

pub mod config;
pub mod error;
pub mod kv;
pub mod service;
pub mod task;

pub use config::StoreConfig;
pub use error::Error;
pub use service::TaskList;
pub type Result<T> = std::result::Result<T, Error>;
