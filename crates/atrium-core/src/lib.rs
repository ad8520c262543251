//! Core domain models and storage for the Atrium site backend.
//!
//! Provides the persisted entities (contact messages and feedback), the error
//! taxonomy, and the repository-based database access layer shared by the
//! HTTP crates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod storage;

pub use error::{CoreError, Result};
pub use models::{ContactMessage, Feedback, NewContactMessage, NewFeedback};
pub use storage::{connect_with_retry, PoolSettings, Storage};
