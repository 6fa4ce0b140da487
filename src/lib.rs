//! `Schoolbook` - the record store behind a school administration app
//!
//! This crate is the single source of truth for teacher, student, and batch
//! records: signup/approval bookkeeping, attendance and classwork tracking,
//! fee/salary aggregation, and whole-store persistence to a single file. The
//! surrounding web layer (routing, sessions, rendering, mail) is an external
//! collaborator that calls into [`store::RecordStore`] keyed by the same
//! usernames it uses for its own identity records.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Configuration management for the backing file path and seed batches
pub mod config;
/// Plain-data entity definitions for batches, subjects, students, and teachers
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// The record store - tables, approval status, aggregates, persistence
pub mod store;

#[cfg(test)]
pub mod test_utils;
