//! Base45 encoding of octet strings, using the 45 characters of the QR code
//! alphanumeric mode.
//!
//! Every two input bytes become three characters and a trailing odd byte
//! becomes two characters.
//!
//! ```
//! assert_eq!(base45::encode("AB"), "BB8");
//! assert_eq!(base45::decode("BB8").unwrap(), b"AB");
//! ```

pub mod alphabet;
pub mod decode;
pub mod encode;

pub use alphabet::Alphabet;
pub use decode::{decode, decode_into, decode_triple, decoded_len};
pub use encode::{encode, encode_into, encode_word, encoded_len};

/// The alphabet, in order of value.
pub const CHARACTERS: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

pub const ALPHABET: Alphabet<45> = match Alphabet::new(CHARACTERS) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const RADIX: usize = ALPHABET.len();
