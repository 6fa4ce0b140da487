//! The record store - single source of truth for teacher, student, and batch
//! records, with approval-status bookkeeping, aggregate queries, and
//! whole-store persistence against a single backing file.
//!
//! All operations are synchronous and assume single-threaded access; a
//! concurrent collaborator wraps the whole store in one mutual-exclusion
//! scope. There is no finer-grained guarantee to offer.

pub mod batches;
pub mod classwork;
pub mod students;
pub mod teachers;

pub use students::StudentUpdate;
pub use teachers::TeacherUpdate;

use crate::entities::{Batch, Student, Teacher};
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{fs, io};
use tracing::{debug, info, instrument};

/// The role a login attempt claims.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    /// Site administrator. Authentication is delegated to the external auth
    /// collaborator; the store accepts unconditionally.
    Admin,
    /// Teacher, checked against the teacher table.
    Teacher,
    /// Student, checked against the student table.
    Student,
}

/// A student plus its store-level approval flag.
///
/// The flag is metadata about the record, not an attribute of the student:
/// false = pending admin approval, true = approved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// The student entity
    pub student: Student,
    /// Admin approval status
    pub approved: bool,
}

/// A teacher plus its store-level approval flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeacherRecord {
    /// The teacher entity
    pub teacher: Teacher,
    /// Admin approval status
    pub approved: bool,
}

/// On-disk layout: exactly three tables, in this fixed order.
#[derive(Deserialize)]
struct Snapshot {
    students: BTreeMap<String, StudentRecord>,
    teachers: BTreeMap<String, TeacherRecord>,
    batches: BTreeMap<String, Batch>,
}

/// Borrowing twin of [`Snapshot`] so saving does not clone the tables.
#[derive(Serialize)]
struct SnapshotRef<'a> {
    students: &'a BTreeMap<String, StudentRecord>,
    teachers: &'a BTreeMap<String, TeacherRecord>,
    batches: &'a BTreeMap<String, Batch>,
}

/// The record store. See the module docs for the access model.
///
/// Tables are keyed by username (students, teachers) and batch name
/// (batches); iteration is in key order, so listings are deterministic.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    pub(crate) students: BTreeMap<String, StudentRecord>,
    pub(crate) teachers: BTreeMap<String, TeacherRecord>,
    pub(crate) batches: BTreeMap<String, Batch>,
}

impl RecordStore {
    /// Opens the store backed by `path`.
    ///
    /// A missing file means "no prior state" and yields an empty store. Any
    /// other read failure, and any decode failure, is an error the caller
    /// should treat as fatal: silently starting empty would drop the real
    /// data on the next save.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        debug!("Opening record store at {:?}", path);
        match fs::read(&path) {
            Ok(bytes) => {
                let snapshot: Snapshot = serde_json::from_slice(&bytes)?;
                info!(
                    "Loaded record store from {:?}: {} students, {} teachers, {} batches",
                    path,
                    snapshot.students.len(),
                    snapshot.teachers.len(),
                    snapshot.batches.len()
                );
                Ok(Self {
                    path,
                    students: snapshot.students,
                    teachers: snapshot.teachers,
                    batches: snapshot.batches,
                })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No prior state at {:?}; starting with an empty store", path);
                Ok(Self {
                    path,
                    students: BTreeMap::new(),
                    teachers: BTreeMap::new(),
                    batches: BTreeMap::new(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks a login attempt. Never errors: any mismatch, unknown username
    /// included, is simply `false`.
    pub fn login(&self, username: &str, password: &str, role: Role) -> bool {
        match role {
            // Admin identity lives in the external auth collaborator.
            Role::Admin => true,
            Role::Teacher => self
                .teachers
                .get(username)
                .is_some_and(|r| r.teacher.password() == password),
            Role::Student => self
                .students
                .get(username)
                .is_some_and(|r| r.student.password() == password),
        }
    }

    /// Serializes the three tables to the backing file.
    ///
    /// Writes to a sibling temp file and renames it into place, so readers
    /// never observe a partial file. I/O failures propagate; this store is
    /// the source of truth and a lost write must not pass silently.
    #[instrument(skip(self))]
    pub fn save(&self) -> Result<()> {
        let snapshot = SnapshotRef {
            students: &self.students,
            teachers: &self.teachers,
            batches: &self.batches,
        };
        let bytes = serde_json::to_vec_pretty(&snapshot)?;

        let tmp_path = self.swap_path();
        fs::write(&tmp_path, &bytes)?;
        fs::rename(&tmp_path, &self.path)?;
        info!(
            "Saved record store to {:?}: {} students, {} teachers, {} batches",
            self.path,
            self.students.len(),
            self.teachers.len(),
            self.batches.len()
        );
        Ok(())
    }

    /// Deletes the backing file (if present) and clears all three tables.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed backing file {:?}", self.path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        self.students.clear();
        self.teachers.clear();
        self.batches.clear();
        info!("Record store reset to empty");
        Ok(())
    }

    fn swap_path(&self) -> PathBuf {
        let mut os = self.path.clone().into_os_string();
        os.push(".tmp");
        PathBuf::from(os)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::{sample_student, sample_teacher, seeded_store, setup_store};

    #[test]
    fn test_login_truth_table() -> Result<()> {
        let (mut store, _dir) = seeded_store()?;
        let batch = store.get_batch("batch1").unwrap().clone();
        store.add_student(sample_student("student1", &batch), false)?;
        store.add_teacher(sample_teacher("teacher1"), false)?;

        assert!(store.login("student1", "password", Role::Student));
        assert!(store.login("teacher1", "password", Role::Teacher));
        assert!(!store.login("student1", "wrong_password", Role::Student));
        assert!(!store.login("teacher1", "wrong_password", Role::Teacher));
        assert!(!store.login("nonexistent_user", "password", Role::Student));
        // teacher and student namespaces are independent
        assert!(!store.login("teacher1", "password", Role::Student));
        // admin auth is the collaborator's problem; the store accepts
        assert!(store.login("anyone", "anything", Role::Admin));
        Ok(())
    }

    #[test]
    fn test_save_load_round_trip_is_deep_equal() -> Result<()> {
        let (mut store, dir) = seeded_store()?;
        let batch = store.get_batch("batch1").unwrap().clone();
        let mut student = sample_student("student1", &batch);
        student.set_password("secret");
        store.add_student(student, true)?;
        store.add_teacher(sample_teacher("teacher1"), false)?;
        store.record_attendance(
            "student1",
            chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            true,
        )?;
        store.save()?;

        let reloaded = RecordStore::open(store.path())?;
        assert_eq!(reloaded.students, store.students);
        assert_eq!(reloaded.teachers, store.teachers);
        assert_eq!(reloaded.batches, store.batches);

        // status flags and batch linkage survive explicitly
        assert_eq!(reloaded.student_status("student1"), Some(true));
        assert_eq!(reloaded.get_student("student1").unwrap().batch, "batch1");
        assert_eq!(
            reloaded.get_batch("batch1").unwrap().students,
            vec!["student1"]
        );
        drop(dir);
        Ok(())
    }

    #[test]
    fn test_open_missing_file_yields_empty_store() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = RecordStore::open(dir.path().join("never-written.json"))?;
        assert_eq!(store.get_student_count(None), 0);
        assert_eq!(store.get_teacher_count(None), 0);
        Ok(())
    }

    #[test]
    fn test_open_corrupt_file_is_fatal() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("school.json");
        fs::write(&path, b"{ not json")?;
        let result = RecordStore::open(&path);
        assert!(matches!(result, Err(Error::Snapshot(_))));
        Ok(())
    }

    #[test]
    fn test_reset_clears_tables_and_deletes_file() -> Result<()> {
        let (mut store, _dir) = seeded_store()?;
        let batch = store.get_batch("batch1").unwrap().clone();
        store.add_student(sample_student("student1", &batch), false)?;
        store.add_teacher(sample_teacher("teacher1"), false)?;
        store.save()?;
        assert!(store.path().exists());

        store.reset()?;
        assert_eq!(store.get_student_count(None), 0);
        assert_eq!(store.get_teacher_count(None), 0);
        assert!(store.get_batch("batch1").is_none());
        assert!(!store.path().exists());
        Ok(())
    }

    #[test]
    fn test_reset_without_backing_file_is_fine() -> Result<()> {
        let (mut store, _dir) = setup_store()?;
        store.reset()?;
        assert_eq!(store.get_student_count(None), 0);
        Ok(())
    }

    #[test]
    fn test_save_overwrites_previous_contents() -> Result<()> {
        let (mut store, _dir) = seeded_store()?;
        let batch = store.get_batch("batch1").unwrap().clone();
        store.add_student(sample_student("student1", &batch), false)?;
        store.save()?;

        store.remove_student("student1")?;
        store.save()?;

        let reloaded = RecordStore::open(store.path())?;
        assert!(reloaded.get_student("student1").is_none());
        assert_eq!(reloaded.get_student_count(None), 0);
        Ok(())
    }
}
