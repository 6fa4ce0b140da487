//! Teacher entity - a user with a salary and join date.
//!
//! Teachers own no student data: attendance, assignment, and test operations
//! act on students through the store, so the teacher record is just its own
//! fields.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A teacher record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique username (identity key within the teacher table)
    pub username: String,
    /// Login secret; read through [`Teacher::password`] only
    password: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact number
    pub contact: String,
    /// Monthly salary
    pub salary: u32,
    /// Date the teacher joined the school
    pub join_date: NaiveDate,
}

impl Teacher {
    /// Creates a teacher joining today.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        contact: impl Into<String>,
        salary: u32,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            contact: contact.into(),
            salary,
            join_date: Utc::now().date_naive(),
        }
    }

    /// The stored password. The store compares it exactly on login; nothing
    /// else should touch it.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Replaces the stored password.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }
}
