//! Glue between the CLI and the library crates.
//!
//! Config resolution, the generate/cost pipeline, and terminal rendering.

pub(crate) mod config_loader;
pub(crate) mod data_pipeline;
pub(crate) mod render;
