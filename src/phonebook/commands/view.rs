use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::records_by_indexes;

pub fn run<S: DataStore>(store: &S, indexes: &[usize]) -> Result<CmdResult> {
    let records = records_by_indexes(store, indexes)?;
    Ok(CmdResult::default().with_listed_records(records))
}
