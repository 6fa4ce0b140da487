//! Teacher table operations - add/get/update/remove, approval filtering, and
//! the salary aggregate.

use super::{RecordStore, TeacherRecord};
use crate::entities::Teacher;
use crate::errors::{Error, Result};
use tracing::debug;

/// Partial update for a teacher record.
///
/// Same sentinel convention as [`StudentUpdate`]: `Some(value)` always
/// applies, falsy values included; `None` leaves the field untouched.
///
/// [`StudentUpdate`]: super::StudentUpdate
#[derive(Debug, Default)]
pub struct TeacherUpdate {
    /// New password
    pub password: Option<String>,
    /// New given name
    pub first_name: Option<String>,
    /// New family name
    pub last_name: Option<String>,
    /// New contact number
    pub contact: Option<String>,
    /// New salary
    pub salary: Option<u32>,
    /// New approval status
    pub approved: Option<bool>,
}

impl RecordStore {
    /// Inserts a teacher with the given approval status.
    ///
    /// Fails with [`Error::DuplicateTeacher`] if the username is taken.
    pub fn add_teacher(&mut self, teacher: Teacher, approved: bool) -> Result<()> {
        if self.teachers.contains_key(&teacher.username) {
            return Err(Error::DuplicateTeacher {
                username: teacher.username,
            });
        }
        debug!(
            "Added teacher '{}' (approved: {})",
            teacher.username, approved
        );
        self.teachers
            .insert(teacher.username.clone(), TeacherRecord { teacher, approved });
        Ok(())
    }

    /// Looks up a teacher by username.
    pub fn get_teacher(&self, username: &str) -> Option<&Teacher> {
        self.teachers.get(username).map(|r| &r.teacher)
    }

    /// The approval status of a teacher record, if the record exists.
    pub fn teacher_status(&self, username: &str) -> Option<bool> {
        self.teachers.get(username).map(|r| r.approved)
    }

    /// All teachers whose approval status equals `approved`, in username
    /// order.
    pub fn get_all_teachers(&self, approved: bool) -> Vec<&Teacher> {
        self.teachers
            .values()
            .filter(|r| r.approved == approved)
            .map(|r| &r.teacher)
            .collect()
    }

    /// Counts teachers: all of them for `None`, otherwise only those whose
    /// status matches the filter.
    pub fn get_teacher_count(&self, approved: Option<bool>) -> usize {
        match approved {
            None => self.teachers.len(),
            Some(status) => self
                .teachers
                .values()
                .filter(|r| r.approved == status)
                .count(),
        }
    }

    /// Sums the salaries of every teacher whose status matches; an empty
    /// match set sums to zero.
    pub fn get_total_salary(&self, approved: bool) -> u64 {
        self.teachers
            .values()
            .filter(|r| r.approved == approved)
            .map(|r| u64::from(r.teacher.salary))
            .sum()
    }

    /// Applies a partial update to a teacher record.
    ///
    /// Fails with [`Error::TeacherNotFound`] if the username is absent.
    pub fn update_teacher(&mut self, username: &str, update: TeacherUpdate) -> Result<()> {
        let Some(record) = self.teachers.get_mut(username) else {
            return Err(Error::TeacherNotFound {
                username: username.to_string(),
            });
        };

        let TeacherUpdate {
            password,
            first_name,
            last_name,
            contact,
            salary,
            approved,
        } = update;

        if let Some(password) = password {
            record.teacher.set_password(password);
        }
        if let Some(first_name) = first_name {
            record.teacher.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            record.teacher.last_name = last_name;
        }
        if let Some(contact) = contact {
            record.teacher.contact = contact;
        }
        if let Some(salary) = salary {
            record.teacher.salary = salary;
        }
        if let Some(approved) = approved {
            record.approved = approved;
        }
        debug!("Updated teacher '{}'", username);
        Ok(())
    }

    /// Removes a teacher from the teacher table.
    ///
    /// Fails with [`Error::TeacherNotFound`] if the username is absent.
    pub fn remove_teacher(&mut self, username: &str) -> Result<()> {
        if self.teachers.remove(username).is_none() {
            return Err(Error::TeacherNotFound {
                username: username.to_string(),
            });
        }
        debug!("Removed teacher '{}'", username);
        Ok(())
    }
}
