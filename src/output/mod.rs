// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! `paths` computes collision-free target paths as pure functions;
//! `writer` is the only place where file writes occur.

mod paths;
pub mod writer;

pub use paths::{page_base, resolved_path};
