pub mod nexthash;

use crate::Bytes;

/// A cryptographic hash function.
///
/// A hash takes an input of arbitrary length and produces a fixed-size
/// output that is infeasible to invert or to find collisions for. This
/// crate defines exactly one: [`NextHash256`].
pub trait Hash {
    type Output: Bytes;

    fn hash(&self, input: &[u8]) -> Self::Output;
}
