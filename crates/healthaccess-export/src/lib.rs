//! healthaccess-export
//!
//! Plain text and HTML rendering of scored assessments from embedded
//! Tera templates.

pub mod error;
pub mod render;
pub mod templates;
