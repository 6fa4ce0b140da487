use thiserror::Error;

/// Unified error type for every fallible record store operation.
///
/// Gets on a missing key return `Option` rather than an error; the variants
/// here are the explicit failure signals the web layer must handle.
#[derive(Debug, Error)]
pub enum Error {
    /// A student with this username is already in the store.
    #[error("student '{username}' already exists")]
    DuplicateStudent {
        /// The conflicting username
        username: String,
    },

    /// A teacher with this username is already in the store.
    #[error("teacher '{username}' already exists")]
    DuplicateTeacher {
        /// The conflicting username
        username: String,
    },

    /// A batch with this name is already in the store.
    #[error("batch '{name}' already exists")]
    DuplicateBatch {
        /// The conflicting batch name
        name: String,
    },

    /// An update/remove targeted a student that is not in the store.
    #[error("no student named '{username}'")]
    StudentNotFound {
        /// The missing username
        username: String,
    },

    /// An update/remove targeted a teacher that is not in the store.
    #[error("no teacher named '{username}'")]
    TeacherNotFound {
        /// The missing username
        username: String,
    },

    /// An operation referenced a batch that is not in the store.
    #[error("no batch named '{name}'")]
    BatchNotFound {
        /// The missing batch name
        name: String,
    },

    /// A submission targeted an assignment the student was never given.
    #[error("student '{username}' has no assignment '{assignment}' in {subject}")]
    AssignmentNotFound {
        /// The student who attempted the submission
        username: String,
        /// The assignment name that was not found
        assignment: String,
        /// The subject searched
        subject: String,
    },

    /// Configuration file could not be read or parsed.
    #[error("configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// I/O failure while saving or loading the backing file. A *missing*
    /// file on load is not an error (it means "fresh store"); anything else
    /// surfaces here.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but could not be decoded, or a snapshot could
    /// not be encoded. Fatal on startup rather than silently yielding an
    /// empty store.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
