//! Plugin steps attached to bundle descriptors.
//!
//! This module provides:
//! - The named steps the bundling engine runs around a build
//! - A registry keeping them in execution-phase order

pub mod registry;
mod steps;

pub use registry::{PluginPhase, PluginRegistry};
pub use steps::PluginStep;
