mod hmac;

pub use hmac::{hmac, Hmac};

/// A message authentication code algorithm is a method for computing a keyed
/// [hash](crate::Hash).
///
/// A MAC algorithm takes a key and a message, and produces a fixed-size
/// _tag_ that proves the message was authenticated under that key. A MAC
/// does not by itself prevent replay attacks.
pub trait Mac {
    type Tag;

    fn mac(&self, key: &[u8], message: &[u8]) -> Self::Tag;
}
