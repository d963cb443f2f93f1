use std::error;
use std::fmt::{self, Display, Formatter};
use std::result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A digest string that is not exactly 40 characters long.
    DigestLength { found: usize },
    /// A character outside `[0-9a-fA-F]` in a hex string.
    InvalidHexCharacter { position: usize, found: char },
    /// A hex string with an odd number of characters.
    OddHexLength { found: usize },
    /// A block handed to the compression function that is not 64 bytes.
    BlockLength { found: usize },
    /// Hashing was asked to resume from, or finish on, a non block-aligned length.
    UnalignedLength { length: u64 },
}

impl Error {
    /// True for malformed caller input, false for internal contract violations.
    pub fn is_format_error(&self) -> bool {
        match *self {
            Error::DigestLength { .. }
            | Error::InvalidHexCharacter { .. }
            | Error::OddHexLength { .. } => true,
            Error::BlockLength { .. } | Error::UnalignedLength { .. } => false,
        }
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            Error::DigestLength { found } => write!(
                formatter,
                "digest must be 40 hex characters, got {}",
                found
            ),
            Error::InvalidHexCharacter { position, found } => write!(
                formatter,
                "invalid hex character {:?} at position {}",
                found, position
            ),
            Error::OddHexLength { found } => write!(
                formatter,
                "hex string has an odd number of characters ({})",
                found
            ),
            Error::BlockLength { found } => {
                write!(formatter, "block must be exactly 64 bytes, got {}", found)
            }
            Error::UnalignedLength { length } => write!(
                formatter,
                "length {} is not a multiple of the 64 byte block size",
                length
            ),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_errors_are_classified() {
        assert!(Error::DigestLength { found: 3 }.is_format_error());
        assert!(Error::InvalidHexCharacter { position: 0, found: 'g' }.is_format_error());
        assert!(Error::OddHexLength { found: 3 }.is_format_error());
        assert!(!Error::BlockLength { found: 63 }.is_format_error());
        assert!(!Error::UnalignedLength { length: 65 }.is_format_error());
    }

    #[test]
    fn display_names_the_offending_value() {
        let message = format!("{}", Error::InvalidHexCharacter { position: 7, found: 'z' });
        assert!(message.contains("'z'"));
        assert!(message.contains('7'));
        assert_eq!(
            format!("{}", Error::BlockLength { found: 10 }),
            "block must be exactly 64 bytes, got 10"
        );
    }
}
