//! Request handlers for the site's HTTP surface.
//!
//! Each handler performs at most one outbound call (a database insert or a
//! third-party HTTP fetch) and returns a JSON or plain-text response. No
//! handler depends on another.

mod chat;
mod contact;
mod feedback;
mod health;
mod ip;
mod responses;
mod validation;

pub use chat::chat;
pub use contact::submit_contact;
pub use feedback::submit_feedback;
pub use health::health_check;
pub use ip::get_ip;
