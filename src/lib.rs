//! NEXTHASH-256 is a multiplication-based cryptographic hash function.
//!
//! It processes a 512-bit internal state through 52 rounds, each mixing in a
//! message-schedule word, a round constant, and ten widening 32x32->64
//! multiplications whose high and low halves are XOR-folded together. The
//! multiplications are the sole source of non-linearity beyond what
//! rotations, XORs, and modular additions already provide — see
//! [`hash::nexthash::primitives::wmul`].
//!
//! This crate also implements [HMAC](mac::Mac) over the same primitive.
//!
//! For more details, see the [`hash::nexthash`] module documentation.

#[cfg(test)]
mod test;

mod bytes;
mod digest;
mod error;
mod hash;
mod mac;

pub use {
    bytes::Bytes,
    digest::Digest,
    error::NextHashError,
    hash::{
        nexthash::{self, Context, NextHash256, BLOCK_BYTES, OUTPUT_BYTES},
        Hash,
    },
    mac::{hmac, Hmac, Mac},
};
