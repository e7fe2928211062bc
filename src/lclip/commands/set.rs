use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ClipboardStore;

/// Bind `label` to `payload`, replacing any previous binding.
///
/// In-memory only; the caller persists via the store's close.
pub fn run(store: &mut ClipboardStore, label: String, payload: Vec<u8>) -> Result<CmdResult> {
    let replaced = store.labels().contains(&label);
    let size = payload.len();
    store.set(label.clone(), payload);

    let mut result = CmdResult::default();
    let verb = if replaced { "Replaced" } else { "Set" };
    result.add_message(CmdMessage::success(format!(
        "{} {:?} ({} bytes)",
        verb, label, size
    )));
    Ok(result)
}
