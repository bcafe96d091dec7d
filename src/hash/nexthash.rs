//! NEXTHASH-256: message schedule, round function, permutation, compression,
//! and the streaming absorber built on top of them.
//!
//! The algorithm is Merkle-Damgard with a Davies-Meyer compression function:
//! [`compress`] runs 52 rounds of [`round::mix`] over a 512-bit state,
//! permuting every 4th round, then feeds the round output back into the
//! state by modular addition. [`Context`] buffers arbitrary-length input
//! into 64-byte blocks and drives [`compress`] one block at a time;
//! [`Context::finalize`] pads the final block Merkle-Damgard style and folds
//! the 512-bit state down to a 256-bit digest with [`finalize::fold`].

pub(crate) mod compress;
pub(crate) mod constants;
pub(crate) mod finalize;
pub mod primitives;
pub(crate) mod round;
pub(crate) mod schedule;

use {
    super::Hash,
    crate::Digest,
    compress::compress,
    constants::{H_INIT, STATE_WORDS},
    finalize::fold,
    zeroize::{Zeroize, ZeroizeOnDrop},
};

/// Size of one message block, in bytes.
pub const BLOCK_BYTES: usize = 64;

/// Size of the digest, in bytes.
pub const OUTPUT_BYTES: usize = 32;

/// The NEXTHASH-256 algorithm, as a zero-sized [`Hash`] implementor.
///
/// Most callers want [`oneshot`] or [`Context`] directly; this type exists
/// so NEXTHASH-256 can be passed around as a value wherever a generic
/// [`Hash`] is expected (see [`crate::Hmac`]).
#[derive(Debug, Default, Clone, Copy)]
pub struct NextHash256;

impl Hash for NextHash256 {
    type Output = [u8; OUTPUT_BYTES];

    fn hash(&self, input: &[u8]) -> Self::Output {
        oneshot(input).0
    }
}

/// Streaming NEXTHASH-256 context.
///
/// Absorbs input of arbitrary length across any number of [`update`]
/// calls — the digest produced by `update`-ing a message in pieces is
/// identical to hashing it in one call, for any split of the message
/// (including an empty one). A context must not be reused after
/// [`finalize`](Context::finalize): finalization pads and compresses the
/// final block(s), then zeroes the context's own memory so the algorithm's
/// intermediate state doesn't linger after the digest has been extracted.
///
/// [`update`]: Context::update
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Context {
    state: [u32; STATE_WORDS],
    bitcount: u64,
    buffer: [u8; BLOCK_BYTES],
    buflen: u8,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Start a new context at the initial state, with nothing absorbed yet.
    pub fn new() -> Self {
        Self {
            state: H_INIT,
            bitcount: 0,
            buffer: [0; BLOCK_BYTES],
            buflen: 0,
        }
    }

    /// Absorb more input. An empty `data` leaves the context unchanged.
    pub fn update(&mut self, data: &[u8]) {
        self.bitcount = self
            .bitcount
            .wrapping_add((data.len() as u64).wrapping_mul(8));

        let mut data = data;

        if self.buflen > 0 {
            let buflen = self.buflen as usize;
            let need = BLOCK_BYTES - buflen;
            if data.len() < need {
                self.buffer[buflen..buflen + data.len()].copy_from_slice(data);
                self.buflen += data.len() as u8;
                return;
            }
            self.buffer[buflen..BLOCK_BYTES].copy_from_slice(&data[..need]);
            compress(&mut self.state, &self.buffer);
            data = &data[need..];
            self.buflen = 0;
        }

        while data.len() >= BLOCK_BYTES {
            let block: &[u8; BLOCK_BYTES] = data[..BLOCK_BYTES].try_into().unwrap();
            compress(&mut self.state, block);
            data = &data[BLOCK_BYTES..];
        }

        if !data.is_empty() {
            self.buffer[..data.len()].copy_from_slice(data);
            self.buflen = data.len() as u8;
        }
    }

    /// Pad, compress the final block(s), and emit the digest.
    ///
    /// The bit count encoded into the padding is the count *before* the
    /// padding itself is absorbed — padding bytes are fed through the same
    /// [`update`](Context::update) used for real input, so the count would
    /// otherwise include them. The context is zeroed before returning, so it
    /// must not be reused afterwards; `finalize` takes `&mut self` rather
    /// than `self` only so the caller can observe the post-finalize zeroed
    /// state if they choose to.
    pub fn finalize(&mut self) -> Digest {
        let bitcount = self.bitcount;
        let buflen = self.buflen as usize;
        let padlen = if buflen < 56 { 56 - buflen } else { 120 - buflen };

        let mut pad = [0u8; 128];
        pad[0] = 0x80;
        pad[padlen..padlen + 8].copy_from_slice(&bitcount.to_be_bytes());
        self.update(&pad[..padlen + 8]);

        let digest = Digest(fold(&self.state));
        self.zeroize();
        digest
    }
}

#[cfg(test)]
impl Context {
    /// Whether every field is at its zero value, for checking that
    /// [`finalize`](Context::finalize) actually obliterates the context
    /// rather than just leaving `self.zeroize()` unreachable.
    pub(crate) fn is_zeroed(&self) -> bool {
        self.state == [0; STATE_WORDS]
            && self.bitcount == 0
            && self.buffer == [0; BLOCK_BYTES]
            && self.buflen == 0
    }
}

/// Hash `data` in one call: `Context::new()` + `update` + `finalize`.
pub fn oneshot(data: &[u8]) -> Digest {
    let mut ctx = Context::new();
    ctx.update(data);
    ctx.finalize()
}
