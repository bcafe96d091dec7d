//! Message schedule expansion: a 64-byte block becomes 52 non-linearly
//! coupled 32-bit words.

use super::{
    constants::SCHEDULE_WORDS,
    primitives::{lowercase_sigma_0, lowercase_sigma_1, wmul},
    BLOCK_BYTES,
};

/// Expand a 64-byte block into the 52-word message schedule $W_0, \dots,
/// W_{51}$.
///
/// The first 16 words are the block itself, parsed big-endian. Each
/// subsequent word combines a SHA-2-style linear mix of four earlier words
/// with three widening multiplications of other earlier words, which is what
/// makes the schedule non-linearly coupled rather than a pure linear
/// recurrence.
///
/// For `i >= 16`, every index this function reads (`i-16` through `i-1`) is
/// non-negative, so the `i - 14 < 0` wraparound some descriptions of this
/// schedule include is unreachable here and is not implemented.
pub fn expand(block: &[u8; BLOCK_BYTES]) -> [u32; SCHEDULE_WORDS] {
    let mut w = [0u32; SCHEDULE_WORDS];

    for (i, word) in w.iter_mut().enumerate().take(16) {
        *word = u32::from_be_bytes(block[i * 4..i * 4 + 4].try_into().unwrap());
    }

    for i in 16..SCHEDULE_WORDS {
        let linear = lowercase_sigma_1(w[i - 2])
            .wrapping_add(w[i - 7])
            .wrapping_add(lowercase_sigma_0(w[i - 15]))
            .wrapping_add(w[i - 16]);
        let nl1 = wmul(w[i - 3], w[i - 10]);
        let nl2 = wmul(w[i - 5], w[i - 12]);
        let nl3 = wmul(w[i - 1] ^ w[i - 8], w[i - 4] ^ w[i - 14]);
        w[i] = linear.wrapping_add(nl1).wrapping_add(nl2 ^ nl3);
    }

    w
}
