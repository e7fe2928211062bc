//! # Storage Layer
//!
//! [`ClipboardStore`] owns the label→payload mapping for one process
//! invocation. The full mapping is loaded from the backing file when the
//! store is opened, served from memory, and written back in one piece by
//! [`ClipboardStore::close`].
//!
//! ## Lifecycle
//!
//! ```text
//! open(path)  -> read + decode the backing file (missing file = empty store)
//! get/set/... -> pure in-memory operations, no disk I/O
//! close()     -> encode + atomically replace the backing file
//! ```
//!
//! Close writes to a temp file in the same directory and renames it into
//! place, so an interrupted write leaves the previous file intact rather
//! than a truncated one.
//!
//! The store is single-owner: no locking, no concurrent access across
//! threads or processes. One store instance per invocation by contract.

use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

mod codec;

/// A label→payload clipboard backed by a single file.
pub struct ClipboardStore {
    path: PathBuf,
    entries: HashMap<String, Vec<u8>>,
}

impl ClipboardStore {
    /// Open the clipboard at `path`.
    ///
    /// A missing file is not an error: the store starts empty and an
    /// empty backing file is created immediately, so the path exists on
    /// disk for the whole lifetime of the store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let raw = fs::read(&path)?;
            codec::decode(&raw)?
        } else {
            let store = Self {
                path,
                entries: HashMap::new(),
            };
            store.write_backing_file()?;
            return Ok(store);
        };

        Ok(Self { path, entries })
    }

    /// The payload bound to `label`, or empty bytes if unbound.
    ///
    /// Absence is a value, not an error; callers that care can check
    /// [`labels`](Self::labels).
    pub fn get(&self, label: &str) -> Vec<u8> {
        self.entries.get(label).cloned().unwrap_or_default()
    }

    /// Bind `label` to `payload`, replacing any previous binding.
    ///
    /// In-memory only; nothing reaches disk until [`close`](Self::close).
    pub fn set(&mut self, label: impl Into<String>, payload: Vec<u8>) {
        self.entries.insert(label.into(), payload);
    }

    /// Unbind `label`. Returns whether it was bound.
    pub fn remove(&mut self, label: &str) -> bool {
        self.entries.remove(label).is_some()
    }

    /// All bound labels, in no particular order.
    pub fn labels(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the mapping and consume the store.
    ///
    /// The backing file ends up holding exactly the current mapping, or
    /// (on failure) keeps its previous contents.
    pub fn close(self) -> Result<()> {
        self.write_backing_file()
    }

    fn write_backing_file(&self) -> Result<()> {
        let raw = codec::encode(&self.entries)?;

        // Temp file in the same directory so the rename stays on one
        // filesystem.
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "lclip".to_string());
        let tmp_path = self
            .path
            .with_file_name(format!(".{}-{}.tmp", file_name, std::process::id()));

        fs::write(&tmp_path, raw)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_path(dir: &TempDir) -> PathBuf {
        dir.path().join(".lclip.json")
    }

    #[test]
    fn test_open_missing_path_starts_empty() {
        let dir = TempDir::new().unwrap();
        let store = ClipboardStore::open(store_path(&dir)).unwrap();
        assert!(store.labels().is_empty());
    }

    #[test]
    fn test_open_missing_path_creates_backing_file() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        assert!(!path.exists());

        let _store = ClipboardStore::open(&path).unwrap();
        assert!(path.exists());

        let raw = fs::read(&path).unwrap();
        assert_eq!(raw, b"{}");
    }

    #[test]
    fn test_set_then_get_returns_exact_bytes() {
        let dir = TempDir::new().unwrap();
        let mut store = ClipboardStore::open(store_path(&dir)).unwrap();

        let payload = vec![0u8, 1, 2, 254, 255];
        store.set("blob", payload.clone());
        assert_eq!(store.get("blob"), payload);
    }

    #[test]
    fn test_get_unbound_label_is_empty_not_error() {
        let dir = TempDir::new().unwrap();
        let store = ClipboardStore::open(store_path(&dir)).unwrap();
        assert_eq!(store.get("nope"), Vec::<u8>::new());
    }

    #[test]
    fn test_last_write_wins() {
        let dir = TempDir::new().unwrap();
        let mut store = ClipboardStore::open(store_path(&dir)).unwrap();

        store.set("x", b"first".to_vec());
        store.set("x", b"second".to_vec());
        assert_eq!(store.get("x"), b"second");
    }

    #[test]
    fn test_labels_collapse_duplicates() {
        let dir = TempDir::new().unwrap();
        let mut store = ClipboardStore::open(store_path(&dir)).unwrap();

        store.set("a", b"1".to_vec());
        store.set("b", b"2".to_vec());
        store.set("a", b"3".to_vec());

        let mut labels = store.labels();
        labels.sort();
        assert_eq!(labels, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_remove() {
        let dir = TempDir::new().unwrap();
        let mut store = ClipboardStore::open(store_path(&dir)).unwrap();

        store.set("gone", b"soon".to_vec());
        assert!(store.remove("gone"));
        assert!(!store.remove("gone"));
        assert_eq!(store.get("gone"), Vec::<u8>::new());
    }

    #[test]
    fn test_close_then_reopen_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);

        let mut store = ClipboardStore::open(&path).unwrap();
        store.set("foo", b"bar".to_vec());
        store.set("hoge", b"piyo".to_vec());
        store.close().unwrap();

        let reopened = ClipboardStore::open(&path).unwrap();
        assert_eq!(reopened.get("foo"), b"bar");
        assert_eq!(reopened.get("hoge"), b"piyo");

        let mut labels = reopened.labels();
        labels.sort();
        assert_eq!(labels, vec!["foo".to_string(), "hoge".to_string()]);
    }

    #[test]
    fn test_roundtrip_multibyte_label_and_payload() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);

        let mut store = ClipboardStore::open(&path).unwrap();
        store.set("日本語", "日本語".as_bytes().to_vec());
        store.close().unwrap();

        let reopened = ClipboardStore::open(&path).unwrap();
        assert_eq!(reopened.get("日本語"), "日本語".as_bytes());
    }

    #[test]
    fn test_roundtrip_binary_payload() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);

        let payload: Vec<u8> = (0u8..=255).collect();
        let mut store = ClipboardStore::open(&path).unwrap();
        store.set("all-bytes", payload.clone());
        store.close().unwrap();

        let reopened = ClipboardStore::open(&path).unwrap();
        assert_eq!(reopened.get("all-bytes"), payload);
    }

    #[test]
    fn test_close_leaves_no_tmp_files() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);

        let mut store = ClipboardStore::open(&path).unwrap();
        store.set("a", b"1".to_vec());
        store.close().unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.ends_with(".tmp"), "leftover tmp file: {}", name);
        }
    }

    #[test]
    fn test_open_corrupt_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);
        fs::write(&path, b"not json at all").unwrap();

        assert!(ClipboardStore::open(&path).is_err());
    }

    #[test]
    fn test_close_preserves_untouched_entries() {
        let dir = TempDir::new().unwrap();
        let path = store_path(&dir);

        let mut store = ClipboardStore::open(&path).unwrap();
        store.set("keep", b"me".to_vec());
        store.set("change", b"old".to_vec());
        store.close().unwrap();

        let mut store = ClipboardStore::open(&path).unwrap();
        store.set("change", b"new".to_vec());
        store.close().unwrap();

        let reopened = ClipboardStore::open(&path).unwrap();
        assert_eq!(reopened.get("keep"), b"me");
        assert_eq!(reopened.get("change"), b"new");
    }
}
