//! On-disk representation of the clipboard.
//!
//! The backing file is a single JSON object mapping each label to its
//! payload encoded as standard base64. Base64 keeps the file valid JSON
//! for arbitrary binary payloads; labels stay plain UTF-8 strings, so
//! multibyte labels survive untouched.

use crate::error::{LclipError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The JSON shape of the backing file: label -> base64 payload.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct Wire(HashMap<String, String>);

/// Parse backing-file bytes into the in-memory mapping.
///
/// Strict: malformed JSON or an undecodable payload is fatal. There is
/// no best-effort recovery of the remaining entries.
pub fn decode(raw: &[u8]) -> Result<HashMap<String, Vec<u8>>> {
    let wire: Wire = serde_json::from_slice(raw)?;

    let mut entries = HashMap::with_capacity(wire.0.len());
    for (label, encoded) in wire.0 {
        let payload = STANDARD.decode(&encoded).map_err(|e| {
            LclipError::Store(format!("Invalid payload for label {:?}: {}", label, e))
        })?;
        entries.insert(label, payload);
    }
    Ok(entries)
}

/// Serialize the in-memory mapping into backing-file bytes.
///
/// The exact inverse of [`decode`]: `decode(&encode(m)?)? == m` for every
/// mapping, including the empty one and entries with empty labels or
/// empty payloads. Key order in the output is unspecified.
pub fn encode(entries: &HashMap<String, Vec<u8>>) -> Result<Vec<u8>> {
    let wire = Wire(
        entries
            .iter()
            .map(|(label, payload)| (label.clone(), STANDARD.encode(payload)))
            .collect(),
    );
    Ok(serde_json::to_vec_pretty(&wire)?)
}
