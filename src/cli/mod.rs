use std::io::{stdin, BufRead};

use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, warn};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::{
    error::Error,
    key::Key,
    storage::{eager::EagerMap, lazy::LazyMap, NormalizingMap},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[clap(subcommand)]
    pub subcommand: Runtime,

    #[clap(long, value_enum, default_value_t = Variant::Lazy, global = true)]
    pub variant: Variant,

    /// JSON array of `[key, value]` pairs to start from.
    #[clap(long, global = true)]
    pub seed: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Runtime {
    Interactive,
    Run { commands: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    Eager,
    Lazy,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{0}` expects a {1}")]
    MissingArgument(&'static str, &'static str),
    #[error(transparent)]
    Map(#[from] Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(Key, String),
    Get(Key),
    GetOr(Key, String),
    Has(Key),
    Del(Key),
    Len,
    Keys,
    Dump,
}

impl Command {
    /// Parses one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut parts = line.split_whitespace();
        let name = match parts.next() {
            Some(name) => name,
            None => return Ok(None),
        };

        let cmd = match name {
            "set" => {
                let key = next_key(&mut parts, "set")?;
                Command::Set(key, rest(parts, "set")?)
            }
            "get" => Command::Get(next_key(&mut parts, "get")?),
            "getor" => {
                let key = next_key(&mut parts, "getor")?;
                Command::GetOr(key, rest(parts, "getor")?)
            }
            "has" => Command::Has(next_key(&mut parts, "has")?),
            "del" => Command::Del(next_key(&mut parts, "del")?),
            "len" => Command::Len,
            "keys" => Command::Keys,
            "dump" => Command::Dump,
            other => return Err(CommandError::UnknownCommand(other.to_owned())),
        };

        Ok(Some(cmd))
    }
}

fn next_key<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    cmd: &'static str,
) -> Result<Key, CommandError> {
    parts
        .next()
        .map(parse_key)
        .ok_or(CommandError::MissingArgument(cmd, "key"))
}

fn rest<'a>(parts: impl Iterator<Item = &'a str>, cmd: &'static str) -> Result<String, CommandError> {
    let value = parts.collect::<Vec<_>>().join(" ");
    if value.is_empty() {
        return Err(CommandError::MissingArgument(cmd, "value"));
    }
    Ok(value)
}

/// `true`/`false` become booleans, integers become `Key::Int`, a
/// double-quoted token is always a string.
pub fn parse_key(token: &str) -> Key {
    if let Some(s) = token.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
        return Key::from(s);
    }
    match token {
        "true" => Key::Bool(true),
        "false" => Key::Bool(false),
        _ => token
            .parse::<i64>()
            .map(Key::Int)
            .unwrap_or_else(|_| Key::from(token)),
    }
}

trait SessionMap: NormalizingMap<String> {
    fn to_json(&self) -> serde_json::Result<String>;
}

impl<M: NormalizingMap<String> + Serialize> SessionMap for M {
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub struct Session {
    map: Box<dyn SessionMap>,
}

impl Session {
    pub fn new(variant: Variant, seed: Option<&str>) -> Result<Self, CommandError> {
        let map: Box<dyn SessionMap> = match variant {
            Variant::Eager => Box::new(seeded::<EagerMap<String>>(seed)?),
            Variant::Lazy => Box::new(seeded::<LazyMap<String>>(seed)?),
        };
        Ok(Self { map })
    }

    pub fn execute(&mut self, line: &str) -> Result<Option<String>, CommandError> {
        let cmd = match Command::parse(line)? {
            Some(cmd) => cmd,
            None => return Ok(None),
        };
        debug!("executing {:?}", cmd);

        let reply = match cmd {
            Command::Set(key, value) => match self.map.set_item(key, value) {
                Some(old) => format!("OK (replaced {})", old),
                None => "OK".to_owned(),
            },
            Command::Get(key) => self.map.get_item(&key)?.clone(),
            Command::GetOr(key, default) => self.map.get(&key, &default).clone(),
            Command::Has(key) => self.map.contains(&key).to_string(),
            Command::Del(key) => self.map.remove(&key).unwrap_or_else(|| "(nil)".to_owned()),
            Command::Len => self.map.len().to_string(),
            Command::Keys => {
                let mut keys: Vec<String> = self
                    .map
                    .keys()
                    .into_iter()
                    .map(|k| format!("{:?}", k))
                    .collect();
                keys.sort();
                keys.join("\n")
            }
            Command::Dump => self.map.to_json()?,
        };

        Ok(Some(reply))
    }
}

fn seeded<M: DeserializeOwned + Default>(seed: Option<&str>) -> Result<M, CommandError> {
    match seed {
        Some(json) => Ok(serde_json::from_str(json)?),
        None => Ok(M::default()),
    }
}

fn report(result: Result<Option<String>, CommandError>) {
    match result {
        Ok(Some(reply)) => println!("{}", reply),
        Ok(None) => {}
        Err(e) => {
            warn!("command failed: {}", e);
            println!("(error) {}", e);
        }
    }
}

pub fn run_commands(session: &mut Session, commands: &[String]) {
    for line in commands {
        report(session.execute(line));
    }
}

pub fn start_interactive(session: &mut Session) -> Result<(), CommandError> {
    for line in stdin().lock().lines() {
        let line = line?;
        report(session.execute(&line));
    }
    Ok(())
}
