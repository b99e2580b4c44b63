//! # CLI Layer
//!
//! One UI client for the phonebook library. This is the only place that
//! parses arguments, owns stdout and turns errors into exit codes.
//!
//! - `setup`: clap definitions
//! - `commands`: `run()` plus one `handle_*` per subcommand
//! - `session`: the interactive menus started when no subcommand is given
//! - `print`: renders `CmdResult` data as terminal text

mod commands;
mod print;
mod session;
mod setup;

pub use commands::run;
