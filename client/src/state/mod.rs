//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by view (`feed`, `notifications`, forms, marketplace) so each
//! page owns a small model held in an `RwSignal`. Mutations are plain methods
//! so they can be exercised without a browser.

pub mod callout;
pub mod event;
pub mod feed;
pub mod marketplace;
pub mod notifications;
pub mod users;
