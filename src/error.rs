use std::{error, fmt};

/// Failure of the driver, carrying the message reported to the user.
#[derive(Debug)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl error::Error for Error {}

impl From<base45::decode::Error> for Error {
    fn from(error: base45::decode::Error) -> Self {
        Self::new(format!("Could not decode base45 input: {}", error))
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::new(format!("Could not serialize report: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn from_decode_error() {
        let error = Error::from(base45::decode::Error::InvalidLength { length: 4 });
        assert_eq!(error.message(), "Could not decode base45 input: Invalid number of input characters 4");
    }
}
