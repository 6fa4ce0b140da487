//! Batch entity - a cohort of students sharing a roster and subject list.

use super::subject::Subject;
use serde::{Deserialize, Serialize};

/// A batch (class grouping), identified by its unique name.
///
/// The roster holds member student **usernames**; the student entities
/// themselves live in the store's student table. A batch must exist in the
/// store before any student referencing it is admitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Unique batch name
    pub name: String,
    /// Usernames of the students enrolled in this batch, in enrollment order
    pub students: Vec<String>,
    /// Subjects taught in this batch
    pub subjects: Vec<Subject>,
}

impl Batch {
    /// Creates an empty batch with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            students: Vec::new(),
            subjects: Vec::new(),
        }
    }

    /// Adds a subject to the batch's taught list.
    pub fn add_subject(&mut self, subject: Subject) {
        self.subjects.push(subject);
    }

    /// Appends a student username to the roster. Store-internal: the store
    /// keeps the roster consistent with its student table.
    pub(crate) fn enroll(&mut self, username: &str) {
        self.students.push(username.to_string());
    }

    /// Drops a student username from the roster.
    pub(crate) fn withdraw(&mut self, username: &str) {
        self.students.retain(|u| u != username);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_batch_is_empty() {
        let batch = Batch::new("batch1");
        assert_eq!(batch.name, "batch1");
        assert!(batch.students.is_empty());
        assert!(batch.subjects.is_empty());
    }

    #[test]
    fn test_roster_enroll_and_withdraw() {
        let mut batch = Batch::new("batch1");
        batch.enroll("student1");
        batch.enroll("student2");
        assert_eq!(batch.students, vec!["student1", "student2"]);

        batch.withdraw("student1");
        assert_eq!(batch.students, vec!["student2"]);
    }
}
