use crate::{chronometer::format_duration, configuration::Mode};
use serde::Serialize;
use std::time::Duration;

/// Outcome of a driver run, printed as one JSON object.
#[derive(Debug, Serialize)]
pub struct Report {
    mode: String,
    rounds: usize,
    input: String,
    input_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    encoded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    encoded_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    decoded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    decoded_length: Option<usize>,
    elapsed: String,
}

impl Report {
    pub fn new(mode: Mode, rounds: usize, input: String, input_length: usize, elapsed: Duration) -> Self {
        Self {
            mode: mode.to_string(),
            rounds,
            input,
            input_length,
            encoded: None,
            encoded_length: None,
            decoded: None,
            decoded_length: None,
            elapsed: format_duration(elapsed),
        }
    }

    pub fn with_encoded(mut self, encoded: String) -> Self {
        self.encoded_length = Some(encoded.chars().count());
        self.encoded = Some(encoded);
        self
    }

    pub fn with_decoded(mut self, decoded: String, length: usize) -> Self {
        self.decoded = Some(decoded);
        self.decoded_length = Some(length);
        self
    }
}
