//! Classwork operations - attendance, assignment distribution, and test
//! marks.
//!
//! Teachers hold no student data of their own, so these verbs live on the
//! store, which owns the student table. The web layer authorizes who may
//! call what.

use super::RecordStore;
use crate::entities::{Assignment, ClassTest, Subject};
use crate::errors::{Error, Result};
use chrono::NaiveDate;
use tracing::{debug, warn};

impl RecordStore {
    /// Records (or overwrites) a student's attendance for one date.
    ///
    /// Fails with [`Error::StudentNotFound`] if the username is absent.
    pub fn record_attendance(
        &mut self,
        username: &str,
        date: NaiveDate,
        present: bool,
    ) -> Result<()> {
        let Some(record) = self.students.get_mut(username) else {
            return Err(Error::StudentNotFound {
                username: username.to_string(),
            });
        };
        record.student.set_attendance(date, present);
        debug!(
            "Attendance for '{}' on {}: {}",
            username,
            date,
            if present { "present" } else { "absent" }
        );
        Ok(())
    }

    /// Hands an assignment template to every student on a batch's roster.
    ///
    /// Each student receives an independent, unsubmitted copy. Fails with
    /// [`Error::BatchNotFound`] if the batch is absent.
    pub fn assign_to_batch(&mut self, batch_name: &str, assignment: &Assignment) -> Result<()> {
        let Some(batch) = self.batches.get(batch_name) else {
            return Err(Error::BatchNotFound {
                name: batch_name.to_string(),
            });
        };
        let roster = batch.students.clone();
        for username in &roster {
            match self.students.get_mut(username) {
                Some(record) => record.student.receive_assignment(assignment),
                // roster and table are kept in sync by add/remove/update
                None => warn!(
                    "Batch '{}' roster lists unknown student '{}'",
                    batch_name, username
                ),
            }
        }
        debug!(
            "Assigned '{}' ({}) to {} students of batch '{}'",
            assignment.name,
            assignment.subject,
            roster.len(),
            batch_name
        );
        Ok(())
    }

    /// Enters a test into the mark book of every student on a batch's
    /// roster, ungraded.
    ///
    /// Fails with [`Error::BatchNotFound`] if the batch is absent.
    pub fn assign_test_to_batch(&mut self, batch_name: &str, test: &ClassTest) -> Result<()> {
        let Some(batch) = self.batches.get(batch_name) else {
            return Err(Error::BatchNotFound {
                name: batch_name.to_string(),
            });
        };
        let roster = batch.students.clone();
        for username in &roster {
            if let Some(record) = self.students.get_mut(username) {
                record.student.receive_test(test);
            }
        }
        debug!(
            "Assigned test '{}' ({}) to {} students of batch '{}'",
            test.name,
            test.subject,
            roster.len(),
            batch_name
        );
        Ok(())
    }

    /// Records (or overwrites) a student's mark for a test.
    ///
    /// Fails with [`Error::StudentNotFound`] if the username is absent.
    pub fn record_test_mark(&mut self, username: &str, test: &ClassTest, mark: u32) -> Result<()> {
        let Some(record) = self.students.get_mut(username) else {
            return Err(Error::StudentNotFound {
                username: username.to_string(),
            });
        };
        record.student.set_mark(test, mark);
        debug!(
            "Mark for '{}' on test '{}' ({}): {}",
            username, test.name, test.subject, mark
        );
        Ok(())
    }

    /// Flags a student's own copy of an assignment as submitted.
    ///
    /// Fails with [`Error::StudentNotFound`] if the username is absent and
    /// [`Error::AssignmentNotFound`] if no such assignment was handed out.
    pub fn submit_assignment(
        &mut self,
        username: &str,
        subject: &Subject,
        assignment_name: &str,
    ) -> Result<()> {
        let Some(record) = self.students.get_mut(username) else {
            return Err(Error::StudentNotFound {
                username: username.to_string(),
            });
        };
        if !record.student.submit_assignment(subject, assignment_name) {
            return Err(Error::AssignmentNotFound {
                username: username.to_string(),
                assignment: assignment_name.to_string(),
                subject: subject.name.clone(),
            });
        }
        debug!(
            "Student '{}' submitted '{}' ({})",
            username, assignment_name, subject
        );
        Ok(())
    }
}
