use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LclipError, Result};
use crate::store::ClipboardStore;

/// Unbind each label in `labels`.
///
/// Any unknown label aborts the whole command before the store is
/// touched, so a partial delete is never persisted.
pub fn run(store: &mut ClipboardStore, labels: &[String]) -> Result<CmdResult> {
    let bound = store.labels();
    for label in labels {
        if !bound.contains(label) {
            return Err(LclipError::LabelNotFound(label.clone()));
        }
    }

    let mut result = CmdResult::default();
    for label in labels {
        store.remove(label);
        result.add_message(CmdMessage::success(format!("Deleted {:?}", label)));
    }
    Ok(result)
}
