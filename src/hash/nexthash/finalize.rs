//! Output finalization: folds the 512-bit state down to a 256-bit digest.

use super::{constants::STATE_WORDS, primitives::wmul, OUTPUT_BYTES};

const FOLDED_WORDS: usize = 8;

/// Fold the final 16-word state into a 32-byte big-endian digest.
///
/// First halves the state: each of the 8 output words mixes the
/// corresponding upper and lower state words with three widening
/// multiplications and a rotation that varies by word index. Then runs three
/// more mixing passes over the 8-word result, each widening-multiplying two
/// pairs of words at fixed offsets and rotating two others, before the
/// result is serialized big-endian.
pub fn fold(state: &[u32; STATE_WORDS]) -> [u8; OUTPUT_BYTES] {
    let mut folded = [0u32; FOLDED_WORDS];
    for (i, slot) in folded.iter_mut().enumerate() {
        let upper = state[i];
        let lower = state[i + FOLDED_WORDS];
        *slot = (upper ^ lower)
            .wrapping_add(wmul(upper, lower.rotate_left(13)))
            .wrapping_add(wmul(lower, upper.rotate_right(7)))
            .wrapping_add(wmul(
                upper ^ lower,
                upper.rotate_right(3) ^ lower.rotate_left(11),
            ))
            .wrapping_add((upper ^ lower).rotate_right(i as u32 + 1));
    }

    for _ in 0..3 {
        let mut next = [0u32; FOLDED_WORDS];
        for (i, slot) in next.iter_mut().enumerate() {
            *slot = folded[i]
                .wrapping_add(wmul(
                    folded[(i + 1) % FOLDED_WORDS],
                    folded[(i + 5) % FOLDED_WORDS],
                ))
                .wrapping_add(wmul(
                    folded[(i + 2) % FOLDED_WORDS],
                    folded[(i + 6) % FOLDED_WORDS],
                ))
                .wrapping_add(folded[(i + 3) % FOLDED_WORDS].rotate_right(7))
                .wrapping_add(folded[(i + 7) % FOLDED_WORDS].rotate_left(11));
        }
        folded = next;
    }

    let mut digest = [0u8; OUTPUT_BYTES];
    for (chunk, word) in digest.chunks_exact_mut(4).zip(folded.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    digest
}
