//! Error type shared by every stage of the huffzip codec.
//!
//! The codec itself never touches files. Callers working in `std::io` can use `?` on
//! any codec result because `HuffError` converts into `std::io::Error`.

use std::io;

use thiserror::Error;

/// Everything that can go wrong while building or reading a container.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffError {
    /// Compression was asked to encode nothing.
    #[error("empty input, nothing to compress")]
    EmptyInput,

    /// The alphabet size field is one byte, so 256 distinct symbols cannot be stored.
    #[error("alphabet of {0} distinct symbols exceeds the 255 symbol limit")]
    AlphabetTooLarge(usize),

    /// The header disagrees with itself or with the length of the buffer.
    #[error("malformed header at byte {offset}: {reason}")]
    MalformedHeader { offset: usize, reason: String },

    /// The payload ends before the header and padding marker say it should.
    #[error("truncated payload: {0}")]
    TruncatedPayload(String),

    /// Bits were left over at the end of the decode walk that never formed a code.
    #[error("{remaining} trailing bits do not match any code")]
    UnmatchedBits { remaining: usize },

    /// A symbol in the text has no entry in the code table.
    #[error("symbol {0:#04x} has no code in the table")]
    UnknownSymbol(u8),
}

impl HuffError {
    pub(crate) fn malformed<S: Into<String>>(offset: usize, reason: S) -> Self {
        HuffError::MalformedHeader {
            offset,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HuffError>;

impl From<HuffError> for io::Error {
    fn from(e: HuffError) -> Self {
        let kind = match e {
            HuffError::EmptyInput => io::ErrorKind::InvalidInput,
            _ => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, e)
    }
}

#[cfg(test)]
mod test {
    use super::HuffError;
    use std::io;

    #[test]
    fn io_conversion_test() {
        let e: io::Error = HuffError::EmptyInput.into();
        assert_eq!(e.kind(), io::ErrorKind::InvalidInput);
        let e: io::Error = HuffError::UnmatchedBits { remaining: 3 }.into();
        assert_eq!(e.kind(), io::ErrorKind::InvalidData);
        assert_eq!(e.to_string(), "3 trailing bits do not match any code");
    }

    #[test]
    fn display_test() {
        assert_eq!(
            HuffError::malformed(4, "code length of 0").to_string(),
            "malformed header at byte 4: code length of 0"
        );
        assert_eq!(
            HuffError::UnknownSymbol(b'a').to_string(),
            "symbol 0x61 has no code in the table"
        );
    }
}
