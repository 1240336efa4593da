//! healthaccess-storage
//!
//! Local file persistence for completed assessments. Thin async wrapper
//! around `tokio::fs` plus the capped results log.

pub mod error;
pub mod objects;
pub mod results;
pub mod state;
