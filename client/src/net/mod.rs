//! Networking modules for the remote community API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `page` holds the shared pagination convention,
//! `types` defines the wire schema, and `error` the failure taxonomy.

pub mod api;
pub mod error;
pub mod page;
pub mod types;
