use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;

/// Writes an edited record back to its own file.
pub fn run<S: DataStore>(store: &mut S, record: Record) -> Result<CmdResult> {
    // Refuse to resurrect a record deleted behind our back.
    store.load_record(&record.file)?;
    store.save_record(&record)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact updated: {}",
        record.display_name()
    )));
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::view;
    use crate::error::PhonebookError;
    use crate::model::fixtures::named;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn updates_record_in_place() {
        let mut fixture = StoreFixture::new().with_people(&[("Max", "Mustermann")]);
        let mut record = view::run(&fixture.store, &[1]).unwrap().listed_records[0]
            .record
            .clone();
        record.personals.nickname = "Maxi".into();

        run(&mut fixture.store, record).unwrap();

        let records = fixture.store.list_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].personals.nickname, "Maxi");
    }

    #[test]
    fn unknown_record_is_not_found() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, named("Max", "Mustermann")).unwrap_err();
        assert!(matches!(err, PhonebookError::RecordNotFound(_)));
    }
}
