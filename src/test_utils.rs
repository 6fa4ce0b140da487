//! Shared test utilities for `Schoolbook`.
//!
//! This module provides common helper functions for setting up test stores
//! and creating test entities with sensible defaults.

use crate::{
    entities::{Batch, Student, Subject, Teacher},
    errors::Result,
    store::RecordStore,
};
use tempfile::TempDir;

/// Creates an empty store backed by a file inside a fresh temp directory.
/// The directory guard must be kept alive for the duration of the test.
pub fn setup_store() -> Result<(RecordStore, TempDir)> {
    let dir = tempfile::tempdir()?;
    let store = RecordStore::open(dir.path().join("school.json"))?;
    Ok((store, dir))
}

/// Creates a store pre-seeded with `batch1` (see [`sample_batch`]).
/// This is the standard setup for student-table tests.
pub fn seeded_store() -> Result<(RecordStore, TempDir)> {
    let (mut store, dir) = setup_store()?;
    store.add_batch(sample_batch("batch1"))?;
    Ok((store, dir))
}

/// Creates a batch teaching Maths and English.
pub fn sample_batch(name: &str) -> Batch {
    let mut batch = Batch::new(name);
    batch.add_subject(Subject::new("Maths"));
    batch.add_subject(Subject::new("English"));
    batch
}

/// Creates a test student enrolled in the given batch.
///
/// # Defaults
/// * password: "password"
/// * name: John Doe
/// * fee: 1000
/// * roll: 1
/// * contact: "1234567890"
pub fn sample_student(username: &str, batch: &Batch) -> Student {
    Student::new(
        username,
        "password",
        "John",
        "Doe",
        batch,
        1000,
        1,
        "1234567890",
    )
}

/// Creates a test teacher.
///
/// # Defaults
/// * password: "password"
/// * name: Jane Doe
/// * salary: 5000
/// * contact: "12345"
pub fn sample_teacher(username: &str) -> Teacher {
    Teacher::new(username, "password", "Jane", "Doe", "12345", 5000)
}
