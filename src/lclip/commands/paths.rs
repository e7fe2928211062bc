use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ClipboardStore;

/// Report the backing file the store is using.
pub fn run(store: &ClipboardStore) -> Result<CmdResult> {
    Ok(CmdResult::default().with_store_path(store.path().to_path_buf()))
}
