//! # Phonebook Architecture
//!
//! Phonebook is a personal contact manager: one JSON file per contact in a
//! folder, edited through a line-oriented console.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the interactive menus             │
//! │  - The ONLY place that knows about stdout/exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (typed list numbers → indexes)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Create, update, delete, list, view, paths, config        │
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
//! Next to the layers sit the console engines the CLI drives:
//!
//! - [`input`]: typed prompts with control tokens and scoped help
//! - [`editor`]: the numbered-line note editor
//! - [`edit`]: the basic, details and notes passes over a record
//! - [`query`]: prefix-based search over record fields
//!
//! They take any `BufRead`/`Write` pair, so tests drive them with in-memory
//! buffers.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Record`, `Personals`, `Contact`, `Address`
//! - [`index`]: Sorting, list numbers and paging
//! - [`config`]: Configuration management
//! - [`init`]: Folder resolution and context setup
//! - [`launcher`]: Opening `mailto:`/`tel:` links
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod edit;
pub mod editor;
pub mod error;
pub mod index;
pub mod init;
pub mod input;
pub mod launcher;
pub mod model;
pub mod query;
pub mod store;
