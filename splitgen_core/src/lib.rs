#![forbid(unsafe_code)]

//! Core domain model and workout assembly for splitgen.
//!
//! This crate provides:
//! - Domain types (exercises, catalogs, workout options)
//! - Catalog loading and the built-in exercise tables
//! - Area partitioning and random sampling
//! - Upper, lower and core split assembly
//! - Report rendering and delivery

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod partition;
pub mod sampler;
pub mod assembly;
pub mod render;
pub mod sink;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{load_catalog_set, Catalog, CatalogSet};
pub use config::{Config, Destination};
pub use partition::{partition, AreaGroup};
pub use sampler::{sample_all, sample_one};
pub use assembly::{assemble_core, assemble_lower, assemble_upper, maybe_shuffle};
pub use render::{render_core, render_main};
pub use sink::{ClipboardSink, FileSink, ReportSink, StdoutSink};
pub use engine::{generate_workout, run};
