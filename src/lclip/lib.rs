//! # Lclip Architecture
//!
//! Lclip is a **persistent, labeled clipboard**: binary payloads stored
//! under short string labels, kept across invocations in a single backing
//! file. It is a library with a CLI client, and the layering reflects
//! that:
//!
//! ```text
//! CLI layer (args.rs, wired by main.rs)
//!   parses arguments, streams payloads to/from stdin/stdout,
//!   maps errors to exit codes — the only layer doing terminal I/O
//!          │
//!          ▼
//! API layer (api.rs)
//!   LclipApi facade over the open store; returns structured CmdResult
//!          │
//!          ▼
//! Command layer (commands/*.rs)
//!   one module per operation, pure logic, no I/O assumptions
//!          │
//!          ▼
//! Storage layer (store/)
//!   ClipboardStore: load-on-open, in-memory map, atomic write-on-close;
//!   the on-disk format lives in the private store::codec module
//! ```
//!
//! ## Core contract
//!
//! - `get` of an unbound label returns empty bytes, never an error.
//! - `set` replaces wholesale; nothing reaches disk before `close`.
//! - `close` rewrites the whole backing file through a temp-file rename,
//!   so the file is always a complete, valid snapshot.
//! - Payloads are arbitrary bytes and labels arbitrary UTF-8; both
//!   round-trip exactly through the backing file.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Logic for each subcommand
//! - [`store`]: The file-backed clipboard store and its codec
//! - [`paths`]: Default backing-file resolution (`~/.lclip.json`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod paths;
pub mod store;
