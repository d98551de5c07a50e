//! Bistro domain core.
//!
//! Shared types and rules used by the database layer, the HTTP API and the
//! reservation form client. Nothing in here performs I/O except loading the
//! static site content from disk.

pub mod content;
pub mod error;
pub mod reservation;
pub mod types;
