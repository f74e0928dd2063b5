use super::{ALPHABET, RADIX};
use crate::alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidLength { length: usize },
    InvalidCharacter { character: char, index: usize },
    InvalidCode { code: u32, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidLength { length } => write!(f, "Invalid number of input characters {}", length),
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character {:?} at index {}", character, index),
            Error::InvalidCode { code, index } => write!(f, "Invalid code {} at index {}", code, index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        Error::InvalidCharacter {
            character: error.character,
            index: error.index,
        }
    }
}

/// Number of bytes decoded from `len` characters, for lengths that are valid.
pub const fn decoded_len(len: usize) -> usize {
    (len / 3) * 2 + if len % 3 == 2 { 1 } else { 0 }
}

fn decode_group(characters: [char; 3], index: usize) -> Result<u16, Error> {
    let [c, d, e] = characters;
    let c = ALPHABET.decode(c, index)? as u32;
    let d = ALPHABET.decode(d, index + 1)? as u32;
    let e = ALPHABET.decode(e, index + 2)? as u32;
    let radix = RADIX as u32;
    let code = c + radix * (d + radix * e);
    u16::try_from(code).map_err(|_| Error::InvalidCode { code, index })
}

/// Decodes three characters into a word, least significant digit first.
pub fn decode_triple(c: char, d: char, e: char) -> Result<u16, Error> {
    decode_group([c, d, e], 0)
}

/// On error the contents of `output` are unspecified.
pub fn decode_into(input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    let output = output.as_mut();
    let mut characters = input.as_ref().chars();
    let mut input_index = 0;
    let mut output_index = 0;

    let mut write = |byte: u8| -> Result<(), Error> {
        *output.get_mut(output_index).ok_or(Error::BufferTooSmall)? = byte;
        output_index += 1;
        Ok(())
    };

    loop {
        let c = match characters.next() {
            Some(c) => c,
            None => break,
        };
        let d = match characters.next() {
            Some(d) => d,
            None => return Err(Error::InvalidLength { length: input_index + 1 }),
        };
        match characters.next() {
            Some(e) => {
                let [high, low] = decode_group([c, d, e], input_index)?.to_be_bytes();
                write(high)?;
                write(low)?;
                input_index += 3;
            }
            None => {
                // A trailing pair keeps only the low byte, even when its value exceeds 255.
                let word = decode_group([c, d, ALPHABET.encode(0) as char], input_index)?;
                write(word as u8)?;
                break;
            }
        }
    }

    Ok(output_index)
}

pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    let input = input.as_ref();
    // Byte length bounds the character count.
    let mut output = vec![0u8; decoded_len(input.len())];
    let len = decode_into(input, &mut output)?;
    output.truncate(len);
    Ok(output)
}
