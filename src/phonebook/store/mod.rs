//! # Storage Layer
//!
//! The [`DataStore`] trait hides where records live. Business logic only ever
//! talks to the trait.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON document per record in the phonebook folder
//! - [`memory::InMemoryStore`]: a map keyed by path, for tests
//!
//! ## Storage Format
//!
//! ```text
//! ~/phonebook/
//! ├── 0b5c…e1.jcontact    # one record, file name is a random UUID
//! ├── 7f21…9a.jcontact
//! └── config.json         # phonebook configuration
//! ```
//!
//! A record is identified by its file path. The path is handed out once by
//! [`DataStore::new_record_path`] and never recomputed afterwards.

use crate::error::Result;
use crate::model::Record;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// A fresh, unused path for a new record
    fn new_record_path(&self) -> PathBuf;

    /// Save a record to its own path (create or update)
    fn save_record(&mut self, record: &Record) -> Result<()>;

    /// Load the record stored at `path`
    fn load_record(&self, path: &Path) -> Result<Record>;

    /// All records that could be loaded
    fn list_records(&self) -> Result<Vec<Record>>;

    /// Remove a record for good
    fn delete_record(&mut self, path: &Path) -> Result<()>;
}
