use super::DataStore;
use crate::error::{PhonebookError, Result};
use crate::model::Record;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: HashMap<PathBuf, Record>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn new_record_path(&self) -> PathBuf {
        PathBuf::from(format!("memory/{}.jcontact", Uuid::new_v4()))
    }

    fn save_record(&mut self, record: &Record) -> Result<()> {
        self.records.insert(record.file.clone(), record.clone());
        Ok(())
    }

    fn load_record(&self, path: &Path) -> Result<Record> {
        self.records
            .get(path)
            .cloned()
            .ok_or_else(|| PhonebookError::RecordNotFound(path.to_path_buf()))
    }

    fn list_records(&self) -> Result<Vec<Record>> {
        Ok(self.records.values().cloned().collect())
    }

    fn delete_record(&mut self, path: &Path) -> Result<()> {
        if self.records.remove(path).is_none() {
            return Err(PhonebookError::RecordNotFound(path.to_path_buf()));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::fixtures::{max_mustermann, named};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_people(mut self, names: &[(&str, &str)]) -> Self {
            for (first, last) in names {
                self.store.save_record(&named(first, last)).unwrap();
            }
            self
        }

        pub fn with_max(mut self) -> Self {
            let path = self.store.new_record_path();
            let record = max_mustermann(path.to_str().unwrap());
            self.store.save_record(&record).unwrap();
            self
        }
    }
}
