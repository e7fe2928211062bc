use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ClipboardStore;

/// List all bound labels, sorted for stable display.
pub fn run(store: &ClipboardStore) -> Result<CmdResult> {
    let mut labels = store.labels();
    labels.sort();
    Ok(CmdResult::default().with_listed_labels(labels))
}
