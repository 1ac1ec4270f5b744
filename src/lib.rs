//! studyplan - Local study-task planner library
//!
//! Core of the `studyplan` CLI: a small task tracker persisted to a single
//! local JSON file.
//!
//! # Core Concepts
//!
//! - **Task**: a study item with title, subject, due date, and a completed
//!   flag
//! - **Task Store**: the authoritative in-memory collection; every mutation
//!   validates, applies, and persists the full collection
//! - **Projections**: pure read-only views (sorted/filtered lists, stats,
//!   overdue flags) recomputed from a snapshot on demand
//! - **Storage Adapter**: tolerant JSON load, atomic full-rewrite save
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `studyplan.toml`
//! - `error`: Error types and result aliases
//! - `output`: Human and JSON output envelopes
//! - `projection`: Derived views over task snapshots
//! - `storage`: Persistence of the task collection
//! - `store`: The task store and its validation policy
//! - `task`: Task model and drafts

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod projection;
pub mod storage;
pub mod store;
pub mod task;

pub use error::{Error, Result};
