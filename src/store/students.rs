//! Student table operations - add/get/update/remove, approval filtering, and
//! the fee aggregate.

use super::{RecordStore, StudentRecord};
use crate::entities::Student;
use crate::errors::{Error, Result};
use tracing::{debug, warn};

/// Partial update for a student record.
///
/// Each member is an explicit "provided or not" sentinel: `Some(value)`
/// always applies, including falsy values such as `fee: Some(0)` or
/// `approved: Some(false)`; `None` leaves the field untouched.
#[derive(Debug, Default)]
pub struct StudentUpdate {
    /// New password
    pub password: Option<String>,
    /// New given name
    pub first_name: Option<String>,
    /// New family name
    pub last_name: Option<String>,
    /// New contact number
    pub contact: Option<String>,
    /// New fee
    pub fee: Option<u32>,
    /// New roll number
    pub roll: Option<u32>,
    /// Name of the batch to move the student into
    pub batch: Option<String>,
    /// New approval status
    pub approved: Option<bool>,
}

impl RecordStore {
    /// Inserts a student with the given approval status and enrolls it in
    /// its batch's roster.
    ///
    /// Fails with [`Error::DuplicateStudent`] if the username is taken and
    /// [`Error::BatchNotFound`] if the student references a batch that is
    /// not in the store; either failure leaves the store untouched.
    pub fn add_student(&mut self, student: Student, approved: bool) -> Result<()> {
        if self.students.contains_key(&student.username) {
            return Err(Error::DuplicateStudent {
                username: student.username,
            });
        }
        let Some(batch) = self.batches.get_mut(&student.batch) else {
            return Err(Error::BatchNotFound {
                name: student.batch,
            });
        };
        batch.enroll(&student.username);
        debug!(
            "Added student '{}' to batch '{}' (approved: {})",
            student.username, student.batch, approved
        );
        self.students
            .insert(student.username.clone(), StudentRecord { student, approved });
        Ok(())
    }

    /// Looks up a student by username.
    pub fn get_student(&self, username: &str) -> Option<&Student> {
        self.students.get(username).map(|r| &r.student)
    }

    /// The approval status of a student record, if the record exists.
    pub fn student_status(&self, username: &str) -> Option<bool> {
        self.students.get(username).map(|r| r.approved)
    }

    /// All students whose approval status equals `approved`, in username
    /// order.
    pub fn get_all_students(&self, approved: bool) -> Vec<&Student> {
        self.students
            .values()
            .filter(|r| r.approved == approved)
            .map(|r| &r.student)
            .collect()
    }

    /// Counts students: all of them for `None`, otherwise only those whose
    /// status matches the filter.
    pub fn get_student_count(&self, approved: Option<bool>) -> usize {
        match approved {
            None => self.students.len(),
            Some(status) => self
                .students
                .values()
                .filter(|r| r.approved == status)
                .count(),
        }
    }

    /// Sums the fees of every student whose status matches; an empty match
    /// set sums to zero.
    pub fn get_total_fees(&self, approved: bool) -> u64 {
        self.students
            .values()
            .filter(|r| r.approved == approved)
            .map(|r| u64::from(r.student.fee))
            .sum()
    }

    /// Applies a partial update to a student record.
    ///
    /// Fails with [`Error::StudentNotFound`] if the username is absent, and
    /// with [`Error::BatchNotFound`] if the update names a target batch that
    /// does not exist - checked before anything is modified, so a failed
    /// update never leaves a half-applied record. A batch change moves the
    /// student between rosters.
    pub fn update_student(&mut self, username: &str, update: StudentUpdate) -> Result<()> {
        if let Some(name) = &update.batch {
            if !self.batches.contains_key(name) {
                return Err(Error::BatchNotFound { name: name.clone() });
            }
        }
        let Some(record) = self.students.get_mut(username) else {
            return Err(Error::StudentNotFound {
                username: username.to_string(),
            });
        };

        let StudentUpdate {
            password,
            first_name,
            last_name,
            contact,
            fee,
            roll,
            batch,
            approved,
        } = update;

        if let Some(password) = password {
            record.student.set_password(password);
        }
        if let Some(first_name) = first_name {
            record.student.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            record.student.last_name = last_name;
        }
        if let Some(contact) = contact {
            record.student.contact = contact;
        }
        if let Some(fee) = fee {
            record.student.fee = fee;
        }
        if let Some(roll) = roll {
            record.student.roll = roll;
        }
        if let Some(approved) = approved {
            record.approved = approved;
        }
        if let Some(new_batch) = batch {
            let old_batch = std::mem::replace(&mut record.student.batch, new_batch.clone());
            if old_batch != new_batch {
                match self.batches.get_mut(&old_batch) {
                    Some(batch) => batch.withdraw(username),
                    // the admission invariant should make this unreachable
                    None => warn!(
                        "Student '{}' was enrolled in missing batch '{}'",
                        username, old_batch
                    ),
                }
                if let Some(batch) = self.batches.get_mut(&new_batch) {
                    batch.enroll(username);
                }
                debug!(
                    "Moved student '{}' from batch '{}' to '{}'",
                    username, old_batch, new_batch
                );
            }
        }
        debug!("Updated student '{}'", username);
        Ok(())
    }

    /// Removes a student from the student table and from its batch roster.
    ///
    /// Fails with [`Error::StudentNotFound`] if the username is absent.
    pub fn remove_student(&mut self, username: &str) -> Result<()> {
        let Some(record) = self.students.remove(username) else {
            return Err(Error::StudentNotFound {
                username: username.to_string(),
            });
        };
        match self.batches.get_mut(&record.student.batch) {
            Some(batch) => batch.withdraw(username),
            None => warn!(
                "Removed student '{}' referenced missing batch '{}'",
                username, record.student.batch
            ),
        }
        debug!(
            "Removed student '{}' from the store and batch '{}'",
            username, record.student.batch
        );
        Ok(())
    }
}
