//! Core domain model for the Leon's Landscape Supplies site
//!
//! This crate contains:
//! - The site content record and its seeded defaults
//! - Partial updates (`ContentPatch`) and their validation
//! - Route constants shared by the server and the client

pub mod api;
pub mod content;
pub mod error;
pub mod patch;

pub use content::{MAIN_SECTION, Project, Review, SiteContent};
pub use error::ValidationError;
pub use patch::ContentPatch;
