//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Feed and notification state live in app-wide contexts so
//! the nav badge and feed survive navigation; form pages own their state.

pub mod callout;
pub mod event;
pub mod feed;
pub mod marketplace;
pub mod notifications;
pub mod users;
