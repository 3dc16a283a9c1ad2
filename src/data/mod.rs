//! Dashboard ingestion and lead query layer.

pub mod client;
pub mod dashboard;
pub mod error;
pub mod leads;
pub mod source;
