//! # Roster Architecture
//!
//! Roster keeps a small set of student records in memory and persists them to
//! a flat, comma-delimited file between runs. The interactive menu is one
//! client of the library; nothing below the CLI touches the terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Flags, menu loop, prompts, colored output, exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Roster and the DataStore, one method per action │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure logic over a Roster, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record store (roster.rs) + Storage (store/, codec.rs)      │
//! │  - BTreeMap keyed by id, per-roster id counter              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ids
//!
//! The [`roster::Roster`] hands out ids from its own counter, starting at
//! [`roster::FIRST_ID`]. Ids are never reused. A [`model::Student`] cannot
//! change its own id; [`roster::Roster::change_id`] does it and rejects
//! collisions.
//!
//! When the data file is loaded, ids are kept by default
//! ([`config::IdPolicy::Preserve`]). [`config::IdPolicy::Reassign`] renumbers
//! every record from the roster's counter instead.
//!
//! ## File format
//!
//! See [`codec`]. Values must not contain `,` or line breaks: there is no
//! quoting, and such a value splits into extra fields when read back.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Logic for each menu action and the load/save bridge
//! - [`roster`]: The in-memory record store
//! - [`model`]: The `Student` record
//! - [`codec`]: The line format
//! - [`store`]: Persistence backends
//! - [`config`]: Configuration file and data-file resolution
//! - [`init`]: Startup wiring
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod roster;
pub mod store;
