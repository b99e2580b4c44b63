use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::DataStore;

use super::helpers::records_by_indexes;

pub fn run<S: DataStore>(store: &mut S, indexes: &[usize]) -> Result<CmdResult> {
    let targets = records_by_indexes(store, indexes)?;
    let mut result = CmdResult::default();

    for dr in targets {
        if result.affected_records.iter().any(|r| r.file == dr.record.file) {
            continue;
        }
        store.delete_record(&dr.record.file)?;
        result.add_message(CmdMessage::success(format!(
            "Contact deleted ({}): {}",
            dr.index,
            dr.record.display_name()
        )));
        result.affected_records.push(dr.record);
    }

    Ok(result)
}

/// Deletes one record by its file, for callers already holding the record.
pub fn remove<S: DataStore>(store: &mut S, record: Record) -> Result<CmdResult> {
    store.delete_record(&record.file)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact deleted: {}",
        record.display_name()
    )));
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_records_by_index() {
        let mut fixture =
            StoreFixture::new().with_people(&[("Max", "Mustermann"), ("Anna", "Adams")]);
        let result = run(&mut fixture.store, &[1]).unwrap();
        assert_eq!(result.affected_records[0].personals.last_name, "Adams");

        let remaining = list::run(&fixture.store, None).unwrap();
        assert_eq!(remaining.listed_records.len(), 1);
        assert_eq!(remaining.listed_records[0].index, 1);
    }

    #[test]
    fn indexes_refer_to_listing_before_deletion() {
        let mut fixture = StoreFixture::new().with_people(&[
            ("Anna", "Adams"),
            ("Bert", "Brecht"),
            ("Carl", "Czerny"),
        ]);
        let result = run(&mut fixture.store, &[1, 3, 3]).unwrap();
        assert_eq!(result.affected_records.len(), 2);

        let remaining = list::run(&fixture.store, None).unwrap();
        assert_eq!(remaining.listed_records[0].record.personals.last_name, "Brecht");
    }

    #[test]
    fn unknown_index_deletes_nothing() {
        let mut fixture = StoreFixture::new().with_people(&[("Max", "Mustermann")]);
        assert!(run(&mut fixture.store, &[1, 2]).is_err());
        assert_eq!(fixture.store.list_records().unwrap().len(), 1);
    }

    #[test]
    fn remove_by_record() {
        let mut fixture = StoreFixture::new().with_max();
        let record = list::run(&fixture.store, None).unwrap().listed_records[0]
            .record
            .clone();
        let result = remove(&mut fixture.store, record.clone()).unwrap();
        assert_eq!(result.messages[0].content, "Contact deleted: Mustermann, Max");
        assert!(remove(&mut fixture.store, record).is_err());
    }
}
