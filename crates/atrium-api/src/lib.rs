//! HTTP surface of the Atrium site backend.
//!
//! Configuration, edge-policy middleware, request handlers, and server
//! lifecycle. Handlers receive every collaborator through [`AppState`];
//! nothing is captured from enclosing scope, so tests can substitute fakes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod server;

pub use config::{Config, Environment};
pub use server::{create_router, start_server, AppState};
