//! Lead funnel and cohort analytics for the certification admin console.

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod export;
pub mod logging;
pub mod metrics;
