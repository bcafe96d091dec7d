//! The per-round mixing step and the periodic state permutation.

use super::{
    constants::{LOWER_HALF_MASK, STATE_WORDS},
    primitives::{ch, maj, uppercase_sigma_0, uppercase_sigma_1, wmul},
};

/// Mix the 16-word state with one schedule word and one round constant.
///
/// The upper half (registers `a..h`) and lower half (registers `i..p`) each
/// get a SHA-2-style compression step (`T1`/`T2` and `T3`/`T4`), and are then
/// cross-coupled by ten widening multiplications of XORed register pairs
/// drawn from both halves. All ten multiplications and both pairs of temps
/// are computed from the *pre-round* register values — the update below must
/// read only from the `let`-bound copies, never from `state` itself, since
/// later lines would otherwise observe partially-updated registers.
///
/// Four registers (`state[2]`, `state[6]`, `state[10]`, `state[14]`) pass
/// through unchanged. Diffusion into them comes entirely from
/// [`permute`], which runs every 4th round.
pub fn mix(state: &mut [u32; STATE_WORDS], wi: u32, ki: u32) {
    let a = state[0];
    let b = state[1];
    let c = state[2];
    let d = state[3];
    let e = state[4];
    let f = state[5];
    let g = state[6];
    let h = state[7];
    let i = state[8];
    let j = state[9];
    let k = state[10];
    let l = state[11];
    let m = state[12];
    let n = state[13];
    let o = state[14];
    let p = state[15];

    let t1 = h
        .wrapping_add(uppercase_sigma_1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(ki)
        .wrapping_add(wi);
    let t2 = uppercase_sigma_0(a).wrapping_add(maj(a, b, c));

    let m1 = wmul(a ^ i, e ^ m);
    let m2 = wmul(b ^ j, f ^ n);
    let m3 = wmul(c ^ k, g ^ o);
    let m4 = wmul(d ^ l, h ^ p);
    let m5 = wmul(a ^ m, e ^ i);
    let m6 = wmul(b ^ n, f ^ j);
    let m7 = wmul(c ^ o, g ^ k);
    let m8 = wmul(d ^ p, h ^ l);
    let m9 = wmul(a ^ p, d ^ m);
    let m10 = wmul(b ^ o, c ^ n);

    let t3 = p
        .wrapping_add(uppercase_sigma_1(m))
        .wrapping_add(ch(m, n, o))
        .wrapping_add(ki ^ LOWER_HALF_MASK)
        .wrapping_add(wi);
    let t4 = uppercase_sigma_0(i).wrapping_add(maj(i, j, k));

    state[0] = t1.wrapping_add(t2).wrapping_add(m1).wrapping_add(m5).wrapping_add(m9);
    state[1] = a.wrapping_add(m6).wrapping_add(m10);
    state[2] = b;
    state[3] = c.wrapping_add(m2).wrapping_add(m7);
    state[4] = d.wrapping_add(t1).wrapping_add(m9);
    state[5] = e.wrapping_add(m8);
    state[6] = f;
    state[7] = g.wrapping_add(m3).wrapping_add(m10);
    state[8] = t3.wrapping_add(t4).wrapping_add(m1).wrapping_add(m5);
    state[9] = i.wrapping_add(m6);
    state[10] = j;
    state[11] = k.wrapping_add(m4).wrapping_add(m7);
    state[12] = l.wrapping_add(t3).wrapping_add(m9);
    state[13] = m.wrapping_add(m8);
    state[14] = n;
    state[15] = o.wrapping_add(m2 ^ m3 ^ m4).wrapping_add(m10);
}

/// Interleave the upper and lower halves of the state, pair by pair.
///
/// Runs after every 4th round (including the last, since 52 is a multiple of
/// 4) and is the only place the four pass-through registers from [`mix`] get
/// mixed with the rest of the state.
pub fn permute(state: &mut [u32; STATE_WORDS]) {
    const ORDER: [usize; STATE_WORDS] = [0, 8, 1, 9, 2, 10, 3, 11, 4, 12, 5, 13, 6, 14, 7, 15];
    let old = *state;
    for (slot, &src) in state.iter_mut().zip(ORDER.iter()) {
        *slot = old[src];
    }
}
