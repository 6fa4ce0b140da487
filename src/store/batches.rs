//! Batch table operations - add/get and whole-list replacement updates.

use super::RecordStore;
use crate::entities::{Batch, Subject};
use crate::errors::{Error, Result};
use tracing::debug;

impl RecordStore {
    /// Inserts a batch.
    ///
    /// Fails with [`Error::DuplicateBatch`] if the name is taken. Batches
    /// have no dependencies, so they are created before the students that
    /// reference them.
    pub fn add_batch(&mut self, batch: Batch) -> Result<()> {
        if self.batches.contains_key(&batch.name) {
            return Err(Error::DuplicateBatch { name: batch.name });
        }
        debug!("Added batch '{}'", batch.name);
        self.batches.insert(batch.name.clone(), batch);
        Ok(())
    }

    /// Looks up a batch by name.
    pub fn get_batch(&self, name: &str) -> Option<&Batch> {
        self.batches.get(name)
    }

    /// Replaces a batch's roster and/or subject list.
    ///
    /// A provided list fully replaces the existing one - no merging. Fails
    /// with [`Error::BatchNotFound`] if the name is absent.
    pub fn update_batch(
        &mut self,
        name: &str,
        students: Option<Vec<String>>,
        subjects: Option<Vec<Subject>>,
    ) -> Result<()> {
        let Some(batch) = self.batches.get_mut(name) else {
            return Err(Error::BatchNotFound {
                name: name.to_string(),
            });
        };
        if let Some(students) = students {
            batch.students = students;
        }
        if let Some(subjects) = subjects {
            batch.subjects = subjects;
        }
        debug!("Updated batch '{}'", name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{sample_batch, setup_store};

    #[test]
    fn test_add_and_get_batch() -> Result<()> {
        let (mut store, _dir) = setup_store()?;
        let batch = sample_batch("batch2");
        let expected = batch.clone();
        store.add_batch(batch)?;
        assert_eq!(store.get_batch("batch2"), Some(&expected));
        Ok(())
    }

    #[test]
    fn test_add_duplicate_batch_fails() -> Result<()> {
        let (mut store, _dir) = setup_store()?;
        store.add_batch(sample_batch("batch1"))?;
        let result = store.add_batch(Batch::new("batch1"));
        assert!(matches!(result, Err(Error::DuplicateBatch { name }) if name == "batch1"));
        // the original batch is untouched
        assert!(!store.get_batch("batch1").unwrap().subjects.is_empty());
        Ok(())
    }

    #[test]
    fn test_update_batch_replaces_lists_without_merging() -> Result<()> {
        let (mut store, _dir) = setup_store()?;
        store.add_batch(sample_batch("batch1"))?;

        let new_students = vec!["student2".to_string()];
        let new_subjects = vec![Subject::new("Maths")];
        store.update_batch(
            "batch1",
            Some(new_students.clone()),
            Some(new_subjects.clone()),
        )?;

        let updated = store.get_batch("batch1").unwrap();
        assert_eq!(updated.students, new_students);
        assert_eq!(updated.subjects, new_subjects);
        Ok(())
    }

    #[test]
    fn test_update_batch_leaves_unprovided_list_alone() -> Result<()> {
        let (mut store, _dir) = setup_store()?;
        store.add_batch(sample_batch("batch1"))?;
        let subjects_before = store.get_batch("batch1").unwrap().subjects.clone();

        store.update_batch("batch1", Some(vec!["student9".to_string()]), None)?;
        let updated = store.get_batch("batch1").unwrap();
        assert_eq!(updated.students, vec!["student9"]);
        assert_eq!(updated.subjects, subjects_before);
        Ok(())
    }

    #[test]
    fn test_update_nonexistent_batch_fails() -> Result<()> {
        let (mut store, _dir) = setup_store()?;
        let result = store.update_batch("nonexistent_batch", Some(vec![]), Some(vec![]));
        assert!(matches!(result, Err(Error::BatchNotFound { name: _ })));
        Ok(())
    }
}
