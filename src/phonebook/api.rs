//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! phonebook operations, whichever UI drives them.
//!
//! The facade dispatches to `commands/*.rs` and normalizes inputs (list
//! numbers typed as strings become indexes). It does no business logic and
//! no terminal I/O; every method returns `Result<CmdResult>`.
//!
//! `PhonebookApi<S: DataStore>` is generic over the storage backend:
//! `FileStore` in the binary, `InMemoryStore` in tests.

use crate::commands;
use crate::error::{PhonebookError, Result};
use crate::model::Record;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub struct PhonebookApi<S: DataStore> {
    store: S,
    folder: PathBuf,
}

impl<S: DataStore> PhonebookApi<S> {
    pub fn new(store: S, folder: PathBuf) -> Self {
        Self { store, folder }
    }

    /// A blank record with its file path already assigned.
    pub fn new_record(&self) -> Record {
        commands::create::draft(&self.store)
    }

    pub fn create_record(&mut self, record: Record) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, record)
    }

    pub fn update_record(&mut self, record: Record) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, record)
    }

    pub fn list_records(&self, query: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, query)
    }

    pub fn view_records<I: AsRef<str>>(&self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::view::run(&self.store, &indexes)
    }

    pub fn delete_records<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::delete::run(&mut self.store, &indexes)
    }

    pub fn delete_record(&mut self, record: Record) -> Result<commands::CmdResult> {
        commands::delete::remove(&mut self.store, record)
    }

    pub fn record_paths<I: AsRef<str>>(&self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::paths::run(&self.store, &indexes)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.folder, action)
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }
}

fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<usize>> {
    inputs
        .iter()
        .map(|s| {
            let s = s.as_ref().trim();
            s.parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| PhonebookError::Api(format!("Invalid index: {}", s)))
        })
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
