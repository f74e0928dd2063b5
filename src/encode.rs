use super::{ALPHABET, RADIX};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire output.
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

/// Splits a word into its three base45 digits, least significant first.
///
/// The last digit is at most 32 since 65535 < 45 * 45 * 33.
pub const fn encode_word(word: u16) -> [u8; 3] {
    let radix = RADIX as u16;
    let c = word % radix;
    let t = word / radix;
    let d = t % radix;
    let e = t / radix;
    [c as u8, d as u8, e as u8]
}

/// Number of characters produced for `len` input bytes.
pub const fn encoded_len(len: usize) -> usize {
    (len / 2) * 3 + (len % 2) * 2
}

// A single trailing byte is a word with a zero high byte whose last digit,
// always zero, is dropped.
fn characters(input: &[u8]) -> impl Iterator<Item = u8> + '_ {
    input.chunks(2).flat_map(|chunk| {
        let word = chunk.iter().fold(0u16, |word, &byte| (word << 8) | byte as u16);
        encode_word(word)
            .into_iter()
            .take(chunk.len() + 1)
            .map(|digit| ALPHABET.encode(digit as usize))
    })
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    let output = output.as_mut();
    let mut index = 0;
    for character in characters(input.as_ref()) {
        *output.get_mut(index).ok_or(Error::BufferTooSmall)? = character;
        index += 1;
    }
    Ok(index)
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut output = String::with_capacity(encoded_len(input.len()));
    output.extend(characters(input).map(char::from));
    output
}

#[cfg(test)]
mod tests {
    use crate::{ALPHABET, CHARACTERS};

    #[test]
    fn encode() {
        assert_eq!(super::encode("AB"), "BB8");
        assert_eq!(super::encode("Hello!!"), "%69 VD92EX0");
        assert_eq!(super::encode("base-45"), "UJCLQE7W581");
        assert_eq!(super::encode("ietf!"), "QED8WEX0");
        assert_eq!(super::encode([]), "");
        assert_eq!(super::encode([0x00]), "00");
        assert_eq!(super::encode([0x00, 0x00]), "000");
        assert_eq!(super::encode([0x00, 0x00, 0x00]), "00000");
        assert_eq!(super::encode([0xff]), "U5");
        assert_eq!(super::encode([0xff, 0xff]), "FGW");
    }

    #[test]
    fn encode_one_byte() {
        for byte in 0..=u8::MAX {
            let expected: String = [byte as usize % 45, byte as usize / 45]
                .iter()
                .map(|&digit| CHARACTERS[digit] as char)
                .collect();
            assert_eq!(super::encode([byte]), expected);
        }
    }

    #[test]
    fn encode_two_bytes() {
        for word in 0..=u16::MAX {
            let word = word as usize;
            let expected: String = [word % 45, (word / 45) % 45, word / 45 / 45]
                .iter()
                .map(|&digit| CHARACTERS[digit] as char)
                .collect();
            assert_eq!(super::encode((word as u16).to_be_bytes()), expected);
        }
    }

    #[test]
    fn encode_concatenates_groups() {
        let input = [0x8f, 0x01, 0x42, 0xfe, 0x00, 0x7a, 0x13];
        for len in 0..=input.len() {
            let split = len - len % 2;
            let expected = super::encode(&input[..split]) + &super::encode(&input[split..len]);
            assert_eq!(super::encode(&input[..len]), expected);
        }
    }

    #[test]
    fn encode_word() {
        for word in 0..=u16::MAX {
            let [c, d, e] = super::encode_word(word);
            assert_eq!(c as u16, word % 45);
            assert_eq!(d as u16, (word / 45) % 45);
            assert_eq!(e as u16, word / 45 / 45);
            assert!(e <= 32);
        }
        assert_eq!(super::encode_word(0x4142), [11, 11, 8]);
        assert_eq!(super::encode_word(0xffff), [15, 16, 32]);
    }

    #[test]
    fn encode_into() {
        let mut output = [0u8; 8];
        assert_eq!(super::encode_into("ietf!", &mut output), Ok(8));
        assert_eq!(&output, b"QED8WEX0");

        let mut output = [0u8; 7];
        assert_eq!(super::encode_into("ietf!", &mut output), Err(super::Error::BufferTooSmall));

        let mut output = [0u8; 0];
        assert_eq!(super::encode_into([], &mut output), Ok(0));
    }

    #[test]
    fn encoded_len() {
        for len in 0..64 {
            let input = vec![0xa5u8; len];
            let output = super::encode(&input);
            assert_eq!(output.len(), super::encoded_len(len));
            assert!(output.chars().all(|character| ALPHABET.contains(character)));
        }
    }
}
