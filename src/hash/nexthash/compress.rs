//! The compression function: one call consumes one 64-byte block and updates
//! the 512-bit state in place.

use super::{
    constants::{K, ROUNDS, STATE_WORDS},
    round::{mix, permute},
    schedule::expand,
    BLOCK_BYTES,
};

/// Compress one block into `state`.
///
/// Runs the message schedule, applies 52 rounds of [`mix`] (permuting every
/// 4th round), then feeds the resulting working state forward into `state`
/// by word-wise modular addition — the Davies-Meyer step. Feed-forward must
/// add into the pre-block state, not replace it; an implementation that
/// overwrites `state` with `working` instead diverges from the first block
/// onward.
pub fn compress(state: &mut [u32; STATE_WORDS], block: &[u8; BLOCK_BYTES]) {
    #[cfg(test)]
    test_support::record_call();

    let schedule = expand(block);
    let mut working = *state;

    for (round, &wi) in schedule.iter().enumerate().take(ROUNDS) {
        mix(&mut working, wi, K[round]);
        if (round + 1) % 4 == 0 {
            permute(&mut working);
        }
    }

    for (s, w) in state.iter_mut().zip(working.iter()) {
        *s = s.wrapping_add(*w);
    }
}
