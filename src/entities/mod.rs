//! Entity module - Contains the plain-data definitions the record store keeps.
//! Entities hold their own serialized state; approval status lives on the
//! store-level record wrappers, not here. Cross-references between entities
//! (student to batch, batch roster to students) are by name/username so that
//! the whole graph round-trips through the backing file.

pub mod assignment;
pub mod batch;
pub mod student;
pub mod subject;
pub mod teacher;

pub use assignment::Assignment;
pub use batch::Batch;
pub use class_test::ClassTest;
pub use student::Student;
pub use subject::Subject;
pub use teacher::Teacher;
