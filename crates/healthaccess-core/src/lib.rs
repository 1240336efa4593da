//! healthaccess-core
//!
//! Pure domain types shared by every HealthAccess crate: answer values,
//! answer sets, the persisted assessment record, and data directory file
//! naming. No I/O lives here.

pub mod error;
pub mod models;
pub mod storage_keys;
