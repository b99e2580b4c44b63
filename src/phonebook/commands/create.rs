use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;

/// A fresh record bound to a new file path. Nothing is written yet.
pub fn draft<S: DataStore>(store: &S) -> Record {
    Record::new(store.new_record_path())
}

/// Persists a newly entered record. Empty records are dropped, not saved.
pub fn run<S: DataStore>(store: &mut S, mut record: Record) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if record.is_empty() {
        result.add_message(CmdMessage::warning("Empty contact was not saved."));
        return Ok(result);
    }

    if record.file.as_os_str().is_empty() {
        record.file = store.new_record_path();
    }
    store.save_record(&record)?;
    result.add_message(CmdMessage::success(format!(
        "Contact created: {}",
        record.display_name()
    )));
    Ok(result.with_affected_records(vec![record]))
}
