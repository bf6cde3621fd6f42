//! Client-side data hooks for the site content endpoints
//!
//! Keeps a cached copy of the content row, serializes admin edits through
//! the update endpoint, and reports the outcome as a user-facing notice.

pub mod client;
pub mod error;
pub mod notice;

pub use client::SiteContentClient;
pub use error::{ClientError, Result};
pub use notice::{Notice, NoticeVariant};
