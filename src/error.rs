use thiserror::Error;

/// Errors from the ambient surface around the hash core (hex parsing,
/// digest construction from an arbitrary byte slice).
///
/// The compression core, [`Context`](crate::Context), and [`Hmac`](crate::Hmac)
/// never fail: any `&[u8]` of any length is a valid preimage or MAC input, and
/// a fixed-size output array can't be undersized. This type only exists for
/// the convenience constructors on [`Digest`](crate::Digest).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NextHashError {
    /// The string was not valid lowercase/uppercase hex, or had an odd number
    /// of digits.
    #[error("invalid hex digest")]
    InvalidHex,

    /// A byte slice was not exactly [`OUTPUT_BYTES`](crate::OUTPUT_BYTES) long.
    #[error("expected a {expected}-byte digest, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}
