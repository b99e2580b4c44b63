use crate::api::PhonebookApi;
use crate::config::PhonebookConfig;
use crate::store::fs::FileStore;
use directories::BaseDirs;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const HOME_ENV: &str = "PHONEBOOK_HOME";
const DEFAULT_FOLDER: &str = "phonebook";

pub struct PhonebookContext {
    pub api: PhonebookApi<FileStore>,
    pub config: PhonebookConfig,
}

/// Picks the phonebook folder: explicit path, then `$PHONEBOOK_HOME`, then
/// `~/phonebook`. Falls back to `./phonebook` when no home directory exists.
pub fn resolve_folder(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return path;
    }
    if let Some(path) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(path);
    }
    match BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(DEFAULT_FOLDER),
        None => PathBuf::from(DEFAULT_FOLDER),
    }
}

pub fn initialize(home: Option<PathBuf>) -> PhonebookContext {
    let folder = resolve_folder(home);
    let config = PhonebookConfig::load(&folder).unwrap_or_else(|e| {
        warn!(folder = %folder.display(), error = %e, "unreadable config, using defaults");
        PhonebookConfig::default()
    });
    debug!(folder = %folder.display(), "phonebook folder");

    let store = FileStore::new(folder.clone()).with_file_ext(config.get_file_ext());
    let api = PhonebookApi::new(store, folder);

    PhonebookContext { api, config }
}
