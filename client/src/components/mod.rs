//! Reusable UI components shared by pages.
//!
//! ARCHITECTURE
//! ============
//! Components render state owned by pages or contexts and issue the remote
//! calls tied to their own controls (like, comment, post).

pub mod draft_banner;
pub mod nav_bar;
pub mod post_card;
pub mod post_composer;
pub mod track_select;
