use crate::error::Error;

const HEX_PREFIX: &str = "0x";
const TABLE: &[u8; 16] = b"0123456789abcdef";

fn hex_value(character: u8, index: usize) -> Result<u8, Error> {
    match character {
        b'A'..=b'F' => Ok(character - b'A' + 10),
        b'a'..=b'f' => Ok(character - b'a' + 10),
        b'0'..=b'9' => Ok(character - b'0'),
        _ => Err(Error::new(format!(
            "Invalid hex character {:?} at position {}",
            character as char, index
        ))),
    }
}

fn hex_decode(input: &str) -> Result<Vec<u8>, Error> {
    let input = input.as_bytes();
    if input.len() % 2 != 0 {
        return Err(Error::new("Odd number of hex digits"));
    }
    input
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| -> Result<u8, Error> { Ok(hex_value(pair[0], 2 * i)? << 4 | hex_value(pair[1], 2 * i + 1)?) })
        .collect()
}

fn hex_encode(input: &[u8]) -> String {
    let mut output = String::with_capacity(HEX_PREFIX.len() + input.len() * 2);
    output.push_str(HEX_PREFIX);
    for byte in input {
        output.push(TABLE[(byte >> 4) as usize] as char);
        output.push(TABLE[(byte & 0x0F) as usize] as char);
    }
    output
}

/// Bytes handed to the codec, remembering whether they were given as hex.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Payload {
    bytes: Vec<u8>,
    hex: bool,
}

impl Payload {
    /// Input prefixed with `0x` is hex, anything else is taken as text.
    pub fn parse(input: &str) -> Result<Self, Error> {
        match input.strip_prefix(HEX_PREFIX) {
            Some(digits) => Ok(Self {
                bytes: hex_decode(digits)?,
                hex: true,
            }),
            None => Ok(Self {
                bytes: input.as_bytes().to_vec(),
                hex: false,
            }),
        }
    }

    /// Wraps decoded bytes, shown as hex when `hex` is set or when they are not UTF-8.
    pub fn from_bytes(bytes: Vec<u8>, hex: bool) -> Self {
        let hex = hex || std::str::from_utf8(&bytes).is_err();
        Self { bytes, hex }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn hex(&self) -> bool {
        self.hex
    }

    pub fn render(&self) -> String {
        if self.hex {
            hex_encode(&self.bytes)
        } else {
            String::from_utf8_lossy(&self.bytes).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Payload;

    #[test]
    fn parse() {
        let payload = Payload::parse("Hello!!").unwrap();
        assert_eq!(payload.bytes(), b"Hello!!");
        assert!(!payload.hex());

        let payload = Payload::parse("0x4142fF").unwrap();
        assert_eq!(payload.bytes(), [0x41, 0x42, 0xff]);
        assert!(payload.hex());

        assert!(Payload::parse("0x").unwrap().bytes().is_empty());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Payload::parse("0x414").unwrap_err().message(), "Odd number of hex digits");
        assert_eq!(
            Payload::parse("0x41g2").unwrap_err().message(),
            "Invalid hex character 'g' at position 2"
        );
    }

    #[test]
    fn render() {
        assert_eq!(Payload::parse("0x4142fF").unwrap().render(), "0x4142ff");
        assert_eq!(Payload::parse("ietf!").unwrap().render(), "ietf!");
        assert_eq!(Payload::from_bytes(b"AB".to_vec(), false).render(), "AB");
        assert_eq!(Payload::from_bytes(b"AB".to_vec(), true).render(), "0x4142");
        assert_eq!(Payload::from_bytes(vec![0xe8], false).render(), "0xe8");
    }
}
