//! Shell command parsing
//!
//! Turns one input line into a [`Command`].

use thiserror::Error;

use crate::cache::Value;

/// Errors produced while parsing a shell line. Never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    #[error("{command}: missing argument <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{0}: too many arguments")]
    TooManyArguments(&'static str),

    #[error("invalid ttl: {0}")]
    InvalidTtl(String),
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Get(String),
    GetString(String),
    GetInt(String),
    Type(String),
    Put { key: String, value: Value, ttl: i64 },
    PutForever { key: String, value: Value },
    Pull(String),
    Remove(String),
    Clear,
    Purge,
    Stats,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, ShellError> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = parts.collect();

        let command = match name.to_lowercase().as_str() {
            "get" => Command::Get(single_key("get", &args)?),
            "getstr" => Command::GetString(single_key("getstr", &args)?),
            "getint" => Command::GetInt(single_key("getint", &args)?),
            "type" => Command::Type(single_key("type", &args)?),
            "pull" => Command::Pull(single_key("pull", &args)?),
            "remove" | "del" => Command::Remove(single_key("remove", &args)?),
            "put" => parse_put(&args)?,
            "forever" => {
                let (key, value) = key_and_value("forever", &args)?;
                expect_at_most("forever", &args, 2)?;
                Command::PutForever { key, value }
            }
            "clear" => no_args("clear", &args, Command::Clear)?,
            "purge" => no_args("purge", &args, Command::Purge)?,
            "stats" => no_args("stats", &args, Command::Stats)?,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ShellError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn parse_put(args: &[&str]) -> Result<Command, ShellError> {
    let (key, value) = key_and_value("put", args)?;
    expect_at_most("put", args, 3)?;

    let ttl = match args.get(2) {
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| ShellError::InvalidTtl(raw.to_string()))?,
        None => 0,
    };

    Ok(Command::Put { key, value, ttl })
}

fn single_key(command: &'static str, args: &[&str]) -> Result<String, ShellError> {
    let key = args.first().ok_or(ShellError::MissingArgument {
        command,
        argument: "key",
    })?;
    expect_at_most(command, args, 1)?;
    Ok(key.to_string())
}

fn key_and_value(command: &'static str, args: &[&str]) -> Result<(String, Value), ShellError> {
    match args {
        [] => Err(ShellError::MissingArgument {
            command,
            argument: "key",
        }),
        [_] => Err(ShellError::MissingArgument {
            command,
            argument: "value",
        }),
        [key, value, ..] => Ok((key.to_string(), Value::parse_literal(value))),
    }
}

fn expect_at_most(command: &'static str, args: &[&str], max: usize) -> Result<(), ShellError> {
    if args.len() > max {
        Err(ShellError::TooManyArguments(command))
    } else {
        Ok(())
    }
}

fn no_args(command: &'static str, args: &[&str], parsed: Command) -> Result<Command, ShellError> {
    expect_at_most(command, args, 0)?;
    Ok(parsed)
}
