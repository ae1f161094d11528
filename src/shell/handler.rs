//! Shell command execution
//!
//! Runs a parsed [`Command`] against a cache and renders the reply line.

use crate::cache::{Cache, Value};
use crate::shell::Command;

/// Printed for a miss.
pub const NIL: &str = "(nil)";

pub const HELP: &str = "\
commands:
  get <key>                 read a value
  getstr <key>              read a string value
  getint <key>              read an integer value
  type <key>                print the kind of a stored value
  put <key> <value> [ttl]   store a value (ttl in seconds, <= 0 = forever)
  forever <key> <value>     store a value without expiry
  pull <key>                read and remove a value
  remove <key>              remove a value (alias: del)
  clear                     remove every value
  purge                     drop expired values
  stats                     print driver counters as JSON
  quit                      leave the shell (alias: exit)";

/// Executes `command` against `cache` and returns the text to print.
pub fn execute(cache: &Cache, command: Command) -> String {
    match command {
        Command::Get(key) => render(cache.get(&key)),
        Command::GetString(key) => render(cache.get_string(&key)),
        Command::GetInt(key) => render(cache.get_int(&key)),
        Command::Type(key) => cache
            .get(&key)
            .map_or_else(|| NIL.to_string(), |value| value.kind().to_string()),
        Command::Put { key, value, ttl } => {
            cache.put(&key, value, ttl);
            "OK".to_string()
        }
        Command::PutForever { key, value } => {
            cache.put_forever(&key, value);
            "OK".to_string()
        }
        Command::Pull(key) => render(cache.pull(&key)),
        Command::Remove(key) => {
            cache.remove(&key);
            "OK".to_string()
        }
        Command::Clear => {
            cache.clear();
            "OK".to_string()
        }
        Command::Purge => format!("purged {}", cache.purge_expired()),
        Command::Stats => match cache.stats() {
            Some(stats) => serde_json::to_string(&stats)
                .unwrap_or_else(|e| format!("(error) {}", e)),
            None => "(no stats for this driver)".to_string(),
        },
        Command::Help => HELP.to_string(),
        Command::Quit => "bye".to_string(),
    }
}

fn render<T: Into<Value>>(value: Option<T>) -> String {
    match value {
        Some(value) => value.into().to_string(),
        None => NIL.to_string(),
    }
}
