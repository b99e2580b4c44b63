use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::records_by_indexes;

pub fn run<S: DataStore>(store: &S, indexes: &[usize]) -> Result<CmdResult> {
    let paths = records_by_indexes(store, indexes)?
        .into_iter()
        .map(|dr| dr.record.file)
        .collect();
    Ok(CmdResult::default().with_record_paths(paths))
}
