//! # Greenbook Architecture
//!
//! Greenbook keeps a small list of gardening customers in a JSON file and
//! shows it as a plain text table. It is a library with a thin CLI client on
//! top, and the layers below keep it that way.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints tables and messages             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load → one mutation → save                               │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Partial Updates
//!
//! Every operation loads the whole list, validates and applies a single
//! change in memory, and only then saves. Any error before the save leaves
//! the backing file exactly as it was. Two processes writing at once are not
//! coordinated: the last writer wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation (list, add, edit, delete)
//! - [`store`]: Storage abstraction, id assignment and lookup
//! - [`model`]: `Customer` and the add/edit input types
//! - [`table`]: Column-aligned table rendering
//! - [`config`]: Backing file location
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod table;
