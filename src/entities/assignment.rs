//! Assignment entity - homework handed to a batch, copied per student.

use super::subject::Subject;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A homework assignment.
///
/// The instance handed to [`RecordStore::assign_to_batch`] acts as a
/// template: every roster member receives an independent copy, and the
/// `submitted` flag on that copy is student-owned.
///
/// [`RecordStore::assign_to_batch`]: crate::store::RecordStore::assign_to_batch
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assignment name
    pub name: String,
    /// Subject the assignment belongs to
    pub subject: Subject,
    /// Due date
    pub due_date: NaiveDate,
    /// Whether the owning student has submitted their copy
    pub submitted: bool,
}

impl Assignment {
    /// Creates an unsubmitted assignment.
    pub fn new(name: impl Into<String>, subject: Subject, due_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            subject,
            due_date,
            submitted: false,
        }
    }
}
