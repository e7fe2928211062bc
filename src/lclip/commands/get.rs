use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ClipboardStore;

/// Fetch the payload bound to `label`.
///
/// An unbound label yields an empty payload, never an error. The caller
/// cannot tell an unbound label from a label bound to empty bytes; that
/// is the contract.
pub fn run(store: &ClipboardStore, label: &str) -> Result<CmdResult> {
    Ok(CmdResult::default().with_payload(store.get(label)))
}
