//! # API Facade
//!
//! [`LclipApi`] is the single entry point for clipboard operations. It
//! owns the open store, dispatches to the command layer, and returns
//! structured [`CmdResult`] values — no stdout, no exit codes, no
//! terminal assumptions. Any UI (the bundled CLI, or an embedder using
//! the library directly) goes through here.

use crate::commands;
use crate::error::Result;
use crate::store::ClipboardStore;
use std::path::Path;

pub struct LclipApi {
    store: ClipboardStore,
}

impl LclipApi {
    /// Open the clipboard backed by `path`. A missing file starts empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            store: ClipboardStore::open(path)?,
        })
    }

    pub fn get(&self, label: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, label)
    }

    pub fn set(&mut self, label: String, payload: Vec<u8>) -> Result<commands::CmdResult> {
        commands::set::run(&mut self.store, label, payload)
    }

    pub fn delete(&mut self, labels: &[String]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, labels)
    }

    pub fn labels(&self) -> Result<commands::CmdResult> {
        commands::labels::run(&self.store)
    }

    pub fn store_path(&self) -> Result<commands::CmdResult> {
        commands::paths::run(&self.store)
    }

    /// Persist all mutations back to the backing file.
    ///
    /// Consumes the API; read-only invocations may simply drop it and
    /// leave the file as it was.
    pub fn close(self) -> Result<()> {
        self.store.close()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
