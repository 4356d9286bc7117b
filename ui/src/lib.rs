//! Shared UI crate for SentiScope. All pipeline, rendering, and export logic lives here.

pub mod core;
pub mod pipelines;
pub mod results;
pub mod views;
