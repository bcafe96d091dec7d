use {crate::{error::NextHashError, hash::nexthash::OUTPUT_BYTES}, std::fmt};

/// A 256-bit NEXTHASH-256 digest, or an HMAC-NEXTHASH-256 tag.
///
/// This is a thin wrapper around the raw 32-byte output that adds hex
/// formatting and parsing; the algorithm itself only ever deals in
/// `[u8; 32]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(pub [u8; OUTPUT_BYTES]);

impl Digest {
    /// Lowercase hex encoding of the digest.
    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }

    /// Parse a digest from a hex string (case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, NextHashError> {
        let mut out = [0u8; OUTPUT_BYTES];
        hex::decode_to_slice(s, &mut out).map_err(|_| NextHashError::InvalidHex)?;
        Ok(Self(out))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl From<[u8; OUTPUT_BYTES]> for Digest {
    fn from(bytes: [u8; OUTPUT_BYTES]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = NextHashError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.len() != OUTPUT_BYTES {
            return Err(NextHashError::WrongLength {
                expected: OUTPUT_BYTES,
                actual: value.len(),
            });
        }
        let mut out = [0u8; OUTPUT_BYTES];
        out.copy_from_slice(value);
        Ok(Self(out))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for Digest {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl IntoIterator for Digest {
    type Item = u8;
    type IntoIter = std::array::IntoIter<u8, OUTPUT_BYTES>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

