mod chronometer;
mod configuration;
mod error;
mod logger;
mod payload;
mod report;

use self::{
    chronometer::Chronometer,
    configuration::{Configuration, Mode},
    error::Error,
    logger::{Logger, PartialLogger},
    payload::Payload,
    report::Report,
};
use serde_json::json;
use std::{process, time::Duration};

fn main() {
    if let Err(error) = run() {
        eprintln!("{}", json!({ "message": error.message() }));
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let configuration = Configuration::new()?;
    let logger = Logger::new(configuration.verbose());
    logger.log(format!("Running {} for {} rounds", configuration.mode(), configuration.rounds()));

    let report = match configuration.mode() {
        Mode::Encode => encode(&configuration, &logger)?,
        Mode::Decode => decode(&configuration, &logger)?,
        Mode::RoundTrip => round_trip(&configuration, &logger)?,
    };

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

/// Runs `f` once per configured round and keeps the last output.
fn repeat<T>(configuration: &Configuration, logger: &Logger, mut f: impl FnMut() -> Result<T, Error>) -> Result<(T, Duration), Error> {
    let chronometer = Chronometer::new();
    let mut partial_logger = PartialLogger::new(configuration.log_interval(), logger);
    let mut output = None;
    for _ in 0..configuration.rounds() {
        partial_logger.log(|round| format!("Round {} of {}", round + 1, configuration.rounds()));
        output = Some(f()?);
    }
    let elapsed = chronometer.elapsed();
    output.map(|output| (output, elapsed)).ok_or_else(|| Error::new("No rounds to run"))
}

fn trace_words(logger: &Logger, bytes: &[u8]) {
    if !logger.verbose() {
        return;
    }
    for chunk in bytes.chunks(2) {
        let word = chunk.iter().fold(0u16, |word, &byte| (word << 8) | byte as u16);
        let digits = base45::encode_word(word);
        logger.log(format!("word {:#06x} -> digits {:?}", word, &digits[..chunk.len() + 1]));
    }
}

fn trace_groups(logger: &Logger, text: &str) {
    if !logger.verbose() {
        return;
    }
    let characters: Vec<char> = text.chars().collect();
    for group in characters.chunks(3) {
        let group_text: String = group.iter().collect();
        match *group {
            [c, d, e] => logger.log(format!("group {:?} -> {:?}", group_text, base45::decode_triple(c, d, e))),
            [c, d] => logger.log(format!("group {:?} -> {:?}", group_text, base45::decode_triple(c, d, '0'))),
            _ => logger.log(format!("group {:?} -> incomplete", group_text)),
        }
    }
}

fn encode(configuration: &Configuration, logger: &Logger) -> Result<Report, Error> {
    let payload = Payload::parse(configuration.input())?;
    trace_words(logger, payload.bytes());
    let (encoded, elapsed) = repeat(configuration, logger, || Ok(base45::encode(payload.bytes())))?;
    logger.debug(|| format!("Encoded {} bytes into {} characters", payload.bytes().len(), encoded.len()));
    Ok(Report::new(Mode::Encode, configuration.rounds(), payload.render(), payload.bytes().len(), elapsed).with_encoded(encoded))
}

fn decode(configuration: &Configuration, logger: &Logger) -> Result<Report, Error> {
    let text = configuration.input();
    trace_groups(logger, text);
    let (decoded, elapsed) = repeat(configuration, logger, || Ok(base45::decode(text)?))?;
    let decoded = Payload::from_bytes(decoded, false);
    logger.debug(|| format!("Decoded {} characters into {} bytes", text.chars().count(), decoded.bytes().len()));
    Ok(Report::new(Mode::Decode, configuration.rounds(), text.to_string(), text.chars().count(), elapsed)
        .with_decoded(decoded.render(), decoded.bytes().len()))
}

fn round_trip(configuration: &Configuration, logger: &Logger) -> Result<Report, Error> {
    let payload = Payload::parse(configuration.input())?;
    trace_words(logger, payload.bytes());
    let ((encoded, decoded), elapsed) = repeat(configuration, logger, || {
        let encoded = base45::encode(payload.bytes());
        let decoded = base45::decode(&encoded)?;
        if decoded != payload.bytes() {
            return Err(Error::new(format!("Round trip mismatch for {:?}", encoded)));
        }
        Ok((encoded, decoded))
    })?;
    trace_groups(logger, &encoded);
    let decoded = Payload::from_bytes(decoded, payload.hex());
    Ok(Report::new(Mode::RoundTrip, configuration.rounds(), payload.render(), payload.bytes().len(), elapsed)
        .with_encoded(encoded)
        .with_decoded(decoded.render(), decoded.bytes().len()))
}
