use crate::error::Error;
use std::{env, fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    Encode,
    Decode,
    RoundTrip,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Error> {
        match value {
            "encode" => Ok(Self::Encode),
            "decode" => Ok(Self::Decode),
            "roundtrip" => Ok(Self::RoundTrip),
            _ => Err(Error::new(format!("Unknown mode {}", value))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Encode => write!(f, "encode"),
            Self::Decode => write!(f, "decode"),
            Self::RoundTrip => write!(f, "roundtrip"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    input: String,
    mode: Mode,
    rounds: usize,
    verbose: bool,
    log_interval: usize,
}

type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

fn var(lookup: Lookup, key: &str, default: Option<&str>) -> Result<String, Error> {
    match lookup(key) {
        Some(value) => Ok(value),
        None => default.map(String::from).ok_or_else(|| Error::new(format!("Missing {}", key))),
    }
}

fn var_map<T>(lookup: Lookup, key: &str, f: impl FnOnce(&str) -> Option<T>, default: T) -> Result<T, Error> {
    match lookup(key) {
        Some(value) => f(&value).ok_or_else(|| Error::new(format!("Invalid {} {}", key, value))),
        None => Ok(default),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn parse_positive(value: &str) -> Option<usize> {
    value.parse().ok().filter(|&value| value > 0)
}

impl Configuration {
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    pub fn from_lookup(lookup: Lookup) -> Result<Self, Error> {
        let input = var(lookup, "BASE45_INPUT", None)?;
        let mode = var_map(lookup, "BASE45_MODE", |mode| mode.parse().ok(), Mode::RoundTrip)?;
        let rounds = var_map(lookup, "BASE45_ROUNDS", parse_positive, 1)?;
        let verbose = var_map(lookup, "BASE45_VERBOSE", parse_bool, false)?;
        let log_interval = var_map(lookup, "BASE45_LOG_INTERVAL", parse_positive, 10000)?;
        Ok(Self {
            input,
            mode,
            rounds,
            verbose,
            log_interval,
        })
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn log_interval(&self) -> usize {
        self.log_interval
    }
}
