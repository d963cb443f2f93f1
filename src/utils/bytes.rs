use itertools::Itertools;
use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use crate::utils::errors::{Error, Result};

/// Decodes a hex string, upper or lower case, two characters per byte.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    let mut bytes: Vec<u8> = Vec::with_capacity(hex.len() / 2);
    let mut high = None;

    for (position, c) in hex.chars().enumerate() {
        let nibble = match c.to_digit(16) {
            Some(n) => n as u8,
            None => return Err(Error::InvalidHexCharacter { position, found: c }),
        };

        match high.take() {
            None => high = Some(nibble),
            Some(h) => bytes.push(h << 4 | nibble),
        }
    }

    if high.is_some() {
        return Err(Error::OddHexLength { found: hex.chars().count() });
    }

    Ok(bytes)
}

pub fn bytes_to_hex(buf: &[u8]) -> String {
    let result = buf.iter().format("");

    format!("{:02x}", result)
}

/// Renders bytes the way a byte-string literal would, escaping anything
/// that isn't printable ascii.
pub fn escape_bytes(buf: &[u8]) -> String {
    buf.iter()
        .flat_map(|&b| std::ascii::escape_default(b))
        .map(char::from)
        .collect()
}

pub fn random_bytes(size: usize) -> Vec<u8> {
    let mut rng = match OsRng::new() {
        Ok(g) => g,
        Err(e) => panic!("Failed to obtain OS RNG: {}", e),
    };

    let mut bytes = vec![0u8; size];
    rng.fill_bytes(&mut bytes[..]);

    bytes
}

/// Random bytes whose length is drawn uniformly from `min..max`.
pub fn random_size_bytes(min: usize, max: usize) -> Vec<u8> {
    let mut rng = match OsRng::new() {
        Ok(g) => g,
        Err(e) => panic!("Failed to obtain OS RNG: {}", e),
    };

    let size = rng.gen_range(min, max);

    random_bytes(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let bytes = hex_to_bytes("00ff10Ab").unwrap();
        assert_eq!(bytes, vec![0x00, 0xff, 0x10, 0xab]);
        assert_eq!(bytes_to_hex(&bytes), "00ff10ab");
    }

    #[test]
    fn hex_rejects_bad_characters() {
        assert_eq!(
            hex_to_bytes("0g"),
            Err(Error::InvalidHexCharacter { position: 1, found: 'g' })
        );
        assert_eq!(
            hex_to_bytes("é0"),
            Err(Error::InvalidHexCharacter { position: 0, found: 'é' })
        );
    }

    #[test]
    fn hex_rejects_odd_length() {
        assert_eq!(hex_to_bytes("abc"), Err(Error::OddHexLength { found: 3 }));
    }

    #[test]
    fn escape_bytes_matches_literal_form() {
        assert_eq!(escape_bytes(b"A|5\x80\x00"), "A|5\\x80\\x00");
    }

    #[test]
    fn random_size_bytes_respects_bounds() {
        for _ in 0..50 {
            let bytes = random_size_bytes(1, 33);
            assert!(bytes.len() >= 1 && bytes.len() < 33);
        }
    }
}
