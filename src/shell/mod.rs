//! Shell Module
//!
//! Line-oriented command shell over a [`crate::Cache`], used by the
//! `mini_cache` binary.
//!
//! # Commands
//! - `get <key>` / `getstr <key>` / `getint <key>` - Read a value
//! - `type <key>` - Print the kind of the stored value
//! - `put <key> <value> [ttl]` - Store a value (ttl <= 0 or absent = forever)
//! - `forever <key> <value>` - Store a value without expiry
//! - `pull <key>` - Read and remove a value
//! - `remove <key>` (`del`) - Remove a value
//! - `clear` / `purge` / `stats` / `help` / `quit`

pub mod command;
pub mod handler;
pub mod session;

pub use command::{Command, ShellError};
pub use handler::execute;
pub use session::{run_session, spawn_line_reader, SessionEnd};
