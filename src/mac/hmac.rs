use {
    crate::{
        hash::nexthash::{Context, BLOCK_BYTES, OUTPUT_BYTES},
        Digest, Mac,
    },
    docext::docext,
};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5C;

/// HMAC-NEXTHASH-256: a hash-based message authentication code built on
/// [`NextHash256`](crate::NextHash256).
///
/// It works by first padding the key with zeros if it is smaller than the
/// hash's internal block size. If the key is larger than the block size, it
/// is first hashed, and the resulting 32-byte digest padded with zeros to
/// the block size instead. The resulting value is $K'$.
///
/// The tag is computed as
///
/// $$
/// H\Big((K' \oplus opad) \parallel H\big((K' \oplus ipad) \parallel m
/// \big) \Big)
/// $$
///
/// where $m$ is the message, $H$ is NEXTHASH-256, $opad$ (outer padding) is
/// 64 bytes of $\mathrm{5C}_{16}$, and $ipad$ (inner padding) is 64 bytes of
/// $\mathrm{36}_{16}$. First an _inner hash_ is computed over the inner
/// padded key concatenated with the message; then an _outer hash_ is
/// computed over the outer padded key concatenated with the inner hash. The
/// outer hash is the tag.
///
/// `Hmac` is specialized directly to [`NextHash256`](crate::NextHash256)
/// rather than generic over [`Hash`](crate::Hash): this crate has exactly
/// one hash algorithm, so a type parameter would have a single
/// instantiation. Since [`Context`] already buffers input incrementally, the
/// inner and outer preimages are streamed through it rather than built up as
/// owned buffers.
#[docext]
#[derive(Debug, Default, Clone, Copy)]
pub struct Hmac;

impl Mac for Hmac {
    type Tag = Digest;

    fn mac(&self, key: &[u8], message: &[u8]) -> Self::Tag {
        let mut k = [0u8; BLOCK_BYTES];
        if key.len() <= BLOCK_BYTES {
            k[..key.len()].copy_from_slice(key);
        } else {
            let hashed = crate::hash::nexthash::oneshot(key);
            k[..OUTPUT_BYTES].copy_from_slice(&hashed.0);
        }

        let mut ipad = [IPAD; BLOCK_BYTES];
        let mut opad = [OPAD; BLOCK_BYTES];
        for (i, byte) in k.iter().enumerate() {
            ipad[i] ^= byte;
            opad[i] ^= byte;
        }

        let mut inner = Context::new();
        inner.update(&ipad);
        inner.update(message);
        let inner_digest = inner.finalize();

        let mut outer = Context::new();
        outer.update(&opad);
        outer.update(&inner_digest.0);
        outer.finalize()
    }
}

/// Compute the HMAC-NEXTHASH-256 tag of `message` under `key` in one call.
pub fn hmac(key: &[u8], message: &[u8]) -> Digest {
    Hmac.mac(key, message)
}
