//! Student entity - a user enrolled in exactly one batch, with per-date
//! attendance, per-subject assignments, and per-subject test marks.

use super::{assignment::Assignment, batch::Batch, class_test::ClassTest, subject::Subject};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A student record.
///
/// Identity is the username. The `batch` field names the owning batch; the
/// store guarantees it refers to a batch present in the batch table. The
/// classwork maps are mutated only through the store's classwork operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique username (identity key within the student table)
    pub username: String,
    /// Login secret; read through [`Student::password`] only
    password: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact number
    pub contact: String,
    /// Name of the owning batch (exactly one at a time)
    pub batch: String,
    /// Fee owed, non-negative
    pub fee: u32,
    /// Roll number within the batch
    pub roll: u32,
    /// Subjects the student is enrolled in
    pub subjects: Vec<Subject>,
    /// Per-date attendance: date -> present
    attendance: BTreeMap<NaiveDate, bool>,
    /// Per-subject assignments, each an independent copy of the handed-out
    /// template: subject name -> assignments
    assignments: BTreeMap<String, Vec<Assignment>>,
    /// Per-subject test marks: subject name -> test name -> mark
    /// (`None` = assigned but not yet graded)
    marks: BTreeMap<String, BTreeMap<String, Option<u32>>>,
}

impl Student {
    /// Creates a student enrolled in the given batch.
    ///
    /// Enrolled subjects default to the batch's subject list; replace
    /// [`Student::subjects`] afterwards for a custom enrollment.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        batch: &Batch,
        fee: u32,
        roll: u32,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            contact: contact.into(),
            batch: batch.name.clone(),
            fee,
            roll,
            subjects: batch.subjects.clone(),
            attendance: BTreeMap::new(),
            assignments: BTreeMap::new(),
            marks: BTreeMap::new(),
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

    /// Full attendance history, date -> present.
    pub fn attendance(&self) -> &BTreeMap<NaiveDate, bool> {
        &self.attendance
    }

    /// Attendance on a single date; `None` if none was recorded.
    pub fn attendance_on(&self, date: NaiveDate) -> Option<bool> {
        self.attendance.get(&date).copied()
    }

    /// All assignments, grouped by subject name.
    pub fn assignments(&self) -> &BTreeMap<String, Vec<Assignment>> {
        &self.assignments
    }

    /// This student's copies of the assignments for one subject.
    pub fn assignments_for(&self, subject: &Subject) -> &[Assignment] {
        self.assignments
            .get(&subject.name)
            .map_or(&[], Vec::as_slice)
    }

    /// All test marks, grouped by subject name.
    pub fn marks(&self) -> &BTreeMap<String, BTreeMap<String, Option<u32>>> {
        &self.marks
    }

    /// The result of one test: `None` if the test was never assigned,
    /// `Some(None)` if assigned but not yet graded.
    pub fn test_result(&self, test: &ClassTest) -> Option<Option<u32>> {
        self.marks.get(&test.subject.name)?.get(&test.name).copied()
    }

    /// Upserts the attendance flag for a date.
    pub(crate) fn set_attendance(&mut self, date: NaiveDate, present: bool) {
        self.attendance.insert(date, present);
    }

    /// Hands this student its own copy of an assignment template.
    pub(crate) fn receive_assignment(&mut self, template: &Assignment) {
        let copy = Assignment {
            submitted: false,
            ..template.clone()
        };
        self.assignments
            .entry(template.subject.name.clone())
            .or_default()
            .push(copy);
    }

    /// Enters a test into the mark book; ungraded until a mark is recorded.
    pub(crate) fn receive_test(&mut self, test: &ClassTest) {
        self.marks
            .entry(test.subject.name.clone())
            .or_default()
            .entry(test.name.clone())
            .or_insert(None);
    }

    /// Records (or overwrites) the mark for a test.
    pub(crate) fn set_mark(&mut self, test: &ClassTest, mark: u32) {
        self.marks
            .entry(test.subject.name.clone())
            .or_default()
            .insert(test.name.clone(), Some(mark));
    }

    /// Flags this student's copy of an assignment as submitted. Returns
    /// false if no such assignment was ever handed out.
    pub(crate) fn submit_assignment(&mut self, subject: &Subject, assignment_name: &str) -> bool {
        let Some(copies) = self.assignments.get_mut(&subject.name) else {
            return false;
        };
        match copies.iter_mut().find(|a| a.name == assignment_name) {
            Some(copy) => {
                copy.submitted = true;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maths_batch() -> Batch {
        let mut batch = Batch::new("batch1");
        batch.add_subject(Subject::new("Maths"));
        batch.add_subject(Subject::new("English"));
        batch
    }

    #[test]
    fn test_subjects_default_to_batch_subjects() {
        let batch = maths_batch();
        let student = Student::new(
            "student1", "password", "John", "Doe", &batch, 1000, 1, "1234567890",
        );
        assert_eq!(student.batch, "batch1");
        assert_eq!(student.subjects, batch.subjects);
    }

    #[test]
    fn test_password_round_trips_through_setter() {
        let batch = maths_batch();
        let mut student = Student::new(
            "student1", "password", "John", "Doe", &batch, 1000, 1, "1234567890",
        );
        assert_eq!(student.password(), "password");
        student.set_password("newpassword");
        assert_eq!(student.password(), "newpassword");
    }

    #[test]
    fn test_received_assignment_is_an_independent_copy() {
        let batch = maths_batch();
        let mut student = Student::new(
            "student1", "password", "John", "Doe", &batch, 1000, 1, "1234567890",
        );
        let subject = Subject::new("Maths");
        let mut template = Assignment::new(
            "Assignment1",
            subject.clone(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        );
        template.submitted = true; // a tainted template must not leak through

        student.receive_assignment(&template);
        let copies = student.assignments_for(&subject);
        assert_eq!(copies.len(), 1);
        assert!(!copies[0].submitted);
    }

    #[test]
    fn test_submit_unknown_assignment_is_rejected() {
        let batch = maths_batch();
        let mut student = Student::new(
            "student1", "password", "John", "Doe", &batch, 1000, 1, "1234567890",
        );
        assert!(!student.submit_assignment(&Subject::new("Maths"), "Assignment1"));
    }

    #[test]
    fn test_test_result_distinguishes_unassigned_from_ungraded() {
        let batch = maths_batch();
        let mut student = Student::new(
            "student1", "password", "John", "Doe", &batch, 1000, 1, "1234567890",
        );
        let test = ClassTest::new("Test1", Subject::new("Maths"));

        assert_eq!(student.test_result(&test), None);
        student.receive_test(&test);
        assert_eq!(student.test_result(&test), Some(None));
        student.set_mark(&test, 90);
        assert_eq!(student.test_result(&test), Some(Some(90)));
    }
}
