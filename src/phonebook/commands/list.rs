use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::Query;
use crate::store::DataStore;

use super::helpers::indexed_records;

/// Lists all records, or those matching `query`.
///
/// Filtering happens after indexing so matches keep their full-list numbers.
pub fn run<S: DataStore>(store: &S, query: Option<&str>) -> Result<CmdResult> {
    let records = indexed_records(store)?;
    let query = query.map(str::trim).filter(|q| !q.is_empty());

    let Some(raw) = query else {
        return Ok(CmdResult::default().with_listed_records(records));
    };

    let query = Query::parse(raw);
    let listed: Vec<_> = records
        .into_iter()
        .filter(|dr| query.matches(&dr.record))
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!("No contacts match '{}'.", raw)));
    }
    Ok(result.with_listed_records(listed))
}
