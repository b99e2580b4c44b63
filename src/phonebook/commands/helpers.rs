use crate::error::{PhonebookError, Result};
use crate::index::{index_records, DisplayRecord};
use crate::store::DataStore;

pub fn indexed_records<S: DataStore>(store: &S) -> Result<Vec<DisplayRecord>> {
    let records = store.list_records()?;
    Ok(index_records(records))
}

/// Looks up records by their list number, in the order requested.
pub fn records_by_indexes<S: DataStore>(
    store: &S,
    indexes: &[usize],
) -> Result<Vec<DisplayRecord>> {
    let indexed = indexed_records(store)?;

    indexes
        .iter()
        .map(|idx| {
            indexed
                .iter()
                .find(|dr| dr.index == *idx)
                .cloned()
                .ok_or_else(|| PhonebookError::Api(format!("Index {} not found", idx)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn resolves_indexes_in_requested_order() {
        let fixture = StoreFixture::new().with_people(&[("Max", "Mustermann"), ("Anna", "Adams")]);
        let found = records_by_indexes(&fixture.store, &[2, 1]).unwrap();
        assert_eq!(found[0].record.personals.last_name, "Mustermann");
        assert_eq!(found[1].record.personals.last_name, "Adams");
    }

    #[test]
    fn unknown_index_is_an_error() {
        let fixture = StoreFixture::new().with_people(&[("Max", "Mustermann")]);
        let err = records_by_indexes(&fixture.store, &[3]).unwrap_err();
        assert!(err.to_string().contains("Index 3 not found"));
    }
}
