use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

/// A character that has no value in the alphabet, with its position in the input.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DecodeError {
    pub character: char,
    pub index: usize,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid character {:?} at index {}", self.character, self.index)
    }
}

pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    pub fn decode(&self, character: char, index: usize) -> Result<u8, DecodeError> {
        // Anything past the ASCII range falls outside the table.
        match self.decode.get(character as usize).copied().flatten() {
            Some(value) => Ok(value),
            None => Err(DecodeError { character, index }),
        }
    }

    pub fn contains(&self, character: char) -> bool {
        self.decode(character, 0).is_ok()
    }

    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < N {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { index, character });
            }
            if let Some(first) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn characters(&self) -> &[u8; N] {
        &self.encode
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, DecodeError, Error};

    #[test]
    fn new() {
        assert!(Alphabet::new(b"abc").is_ok());
        assert_eq!(
            Alphabet::new(b"abca").err(),
            Some(Error::DuplicateCharacter {
                character: 'a',
                first: 0,
                second: 3
            })
        );
        assert_eq!(
            Alphabet::new(&[b'a', 0xc3]).err(),
            Some(Error::NonAsciiCharacter { character: 0xc3, index: 1 })
        );
    }

    #[test]
    fn decode() {
        let alphabet = match Alphabet::new(b"xyz") {
            Ok(alphabet) => alphabet,
            Err(error) => panic!("{}", error),
        };
        assert_eq!(alphabet.decode('z', 0), Ok(2));
        assert_eq!(alphabet.decode('a', 4), Err(DecodeError { character: 'a', index: 4 }));
        assert_eq!(alphabet.decode('é', 1), Err(DecodeError { character: 'é', index: 1 }));
        assert_eq!(alphabet.decode('\u{1f600}', 0), Err(DecodeError { character: '\u{1f600}', index: 0 }));
        assert!(alphabet.contains('x'));
        assert!(!alphabet.contains('X'));
        assert_eq!(alphabet.encode(1), b'y');
        assert_eq!(alphabet.len(), 3);
    }
}
