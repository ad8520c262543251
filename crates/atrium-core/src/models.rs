//! Persisted entities for the marketing site.
//!
//! Both tables are append-only: rows are created by their submission handler
//! and never updated or deleted by this service. The stored variants derive
//! `FromRow` so operational tooling and tests can read rows back, even though
//! the HTTP surface exposes no list endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact-form submission ready to be inserted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContactMessage {
    /// Sender's name.
    pub name: String,
    /// Sender's email address.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Which service the sender is asking about.
    pub service: Option<String>,
    /// Free-text message body.
    pub message: String,
}

/// A stored contact-form row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactMessage {
    /// Auto-assigned row id.
    pub id: u64,
    /// Sender's name.
    pub name: String,
    /// Sender's email address.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Which service the sender asked about.
    pub service: Option<String>,
    /// Free-text message body.
    pub message: String,
    /// When the row was inserted.
    pub created_at: DateTime<Utc>,
}

/// A feedback submission ready to be inserted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFeedback {
    /// Submitter's name.
    pub name: String,
    /// Submitter's job title.
    pub role: Option<String>,
    /// Submitter's company.
    pub company: Option<String>,
    /// Rating between 1 and 5.
    pub rating: i32,
    /// Free-text feedback body.
    pub message: String,
}

/// A stored feedback row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Feedback {
    /// Auto-assigned row id.
    pub id: u64,
    /// Submitter's name.
    pub name: String,
    /// Submitter's job title.
    pub role: Option<String>,
    /// Submitter's company.
    pub company: Option<String>,
    /// Rating between 1 and 5.
    pub rating: i32,
    /// Free-text feedback body.
    pub message: String,
    /// When the row was inserted.
    pub created_at: DateTime<Utc>,
}
