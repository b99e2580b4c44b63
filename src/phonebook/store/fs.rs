use super::DataStore;
use crate::config::CONFIG_FILENAME;
use crate::error::{PhonebookError, Result};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
    file_ext: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_ext: ".jcontact".to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    fn is_record_file(&self, path: &Path) -> bool {
        path.is_file()
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| {
                    n != CONFIG_FILENAME
                        && n.to_lowercase().ends_with(&self.file_ext.to_lowercase())
                })
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(PhonebookError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn new_record_path(&self) -> PathBuf {
        self.root
            .join(format!("{}{}", Uuid::new_v4(), self.file_ext))
    }

    fn save_record(&mut self, record: &Record) -> Result<()> {
        if record.file.as_os_str().is_empty() {
            return Err(PhonebookError::Store(
                "Record has no file path".to_string(),
            ));
        }
        if let Some(parent) = record.file.parent() {
            self.ensure_dir(parent)?;
        }
        let content =
            serde_json::to_string_pretty(record).map_err(PhonebookError::Serialization)?;
        fs::write(&record.file, content).map_err(PhonebookError::Io)?;
        debug!(path = %record.file.display(), "saved record");
        Ok(())
    }

    fn load_record(&self, path: &Path) -> Result<Record> {
        if !path.exists() {
            return Err(PhonebookError::RecordNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(PhonebookError::Io)?;
        let mut record: Record =
            serde_json::from_str(&content).map_err(PhonebookError::Serialization)?;
        record.file = path.to_path_buf();
        debug!(path = %path.display(), "loaded record");
        Ok(record)
    }

    fn list_records(&self) -> Result<Vec<Record>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(PhonebookError::Io)? {
            let path = entry.map_err(PhonebookError::Io)?.path();
            if !self.is_record_file(&path) {
                continue;
            }
            match self.load_record(&path) {
                Ok(record) => records.push(record),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable record"),
            }
        }
        Ok(records)
    }

    fn delete_record(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PhonebookError::RecordNotFound(path.to_path_buf()));
        }
        fs::remove_file(path).map_err(PhonebookError::Io)?;
        debug!(path = %path.display(), "deleted record");
        Ok(())
    }
}
