//! Block trailer layout: the fixed 160-byte record that carries the
//! proof-of-work preimage.

use crate::error::{PowError, Result};

/// Total length of a serialised [`BlockTrailer`].
pub const TRAILER_LEN: usize = 160;

const PHASH_OFF: usize = 0;
const BNUM_OFF: usize = 32;
const MFEE_OFF: usize = 40;
const TCOUNT_OFF: usize = 48;
const TIME0_OFF: usize = 52;
const DIFFICULTY_OFF: usize = 56;
const MROOT_OFF: usize = 60;
const NONCE_OFF: usize = 92;
const STIME_OFF: usize = 124;
const BHASH_OFF: usize = 128;

/// Number of bytes of the trailer that form the Peach mining/verification
/// preimage (everything up to and including `nonce`).
pub const PEACH_PREIMAGE_LEN: usize = NONCE_OFF + 32;

/// The fixed 160-byte block trailer.
///
/// Field order and widths are normative and must round-trip byte-for-byte
/// through [`BlockTrailer::from_bytes`] / [`BlockTrailer::to_bytes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTrailer {
    /// Previous block hash; seeds the Peach map.
    pub phash: [u8; 32],
    /// Block number, little-endian.
    pub bnum: [u8; 8],
    /// Minimum transaction fee.
    pub mfee: [u8; 8],
    /// Transaction count.
    pub tcount: [u8; 4],
    /// Prior solve time.
    pub time0: [u8; 4],
    /// Bit-length difficulty; only the low byte is consulted by `eval`.
    pub difficulty: [u8; 4],
    /// Merkle root of the block's transactions.
    pub mroot: [u8; 32],
    /// Two concatenated 16-byte haiku token streams.
    pub nonce: [u8; 32],
    /// Solve time.
    pub stime: [u8; 4],
    /// Full block hash.
    pub bhash: [u8; 32],
}

impl BlockTrailer {
    /// Parse a trailer from its canonical 160-byte wire form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != TRAILER_LEN {
            return Err(PowError::InvalidTrailerLength {
                expected: TRAILER_LEN,
                actual: bytes.len(),
            });
        }

        let mut t = BlockTrailer {
            phash: [0; 32],
            bnum: [0; 8],
            mfee: [0; 8],
            tcount: [0; 4],
            time0: [0; 4],
            difficulty: [0; 4],
            mroot: [0; 32],
            nonce: [0; 32],
            stime: [0; 4],
            bhash: [0; 32],
        };
        t.phash.copy_from_slice(&bytes[PHASH_OFF..PHASH_OFF + 32]);
        t.bnum.copy_from_slice(&bytes[BNUM_OFF..BNUM_OFF + 8]);
        t.mfee.copy_from_slice(&bytes[MFEE_OFF..MFEE_OFF + 8]);
        t.tcount
            .copy_from_slice(&bytes[TCOUNT_OFF..TCOUNT_OFF + 4]);
        t.time0.copy_from_slice(&bytes[TIME0_OFF..TIME0_OFF + 4]);
        t.difficulty
            .copy_from_slice(&bytes[DIFFICULTY_OFF..DIFFICULTY_OFF + 4]);
        t.mroot.copy_from_slice(&bytes[MROOT_OFF..MROOT_OFF + 32]);
        t.nonce.copy_from_slice(&bytes[NONCE_OFF..NONCE_OFF + 32]);
        t.stime.copy_from_slice(&bytes[STIME_OFF..STIME_OFF + 4]);
        t.bhash.copy_from_slice(&bytes[BHASH_OFF..BHASH_OFF + 32]);
        Ok(t)
    }

    /// Serialise back to the canonical 160-byte wire form.
    pub fn to_bytes(&self) -> [u8; TRAILER_LEN] {
        let mut out = [0u8; TRAILER_LEN];
        out[PHASH_OFF..PHASH_OFF + 32].copy_from_slice(&self.phash);
        out[BNUM_OFF..BNUM_OFF + 8].copy_from_slice(&self.bnum);
        out[MFEE_OFF..MFEE_OFF + 8].copy_from_slice(&self.mfee);
        out[TCOUNT_OFF..TCOUNT_OFF + 4].copy_from_slice(&self.tcount);
        out[TIME0_OFF..TIME0_OFF + 4].copy_from_slice(&self.time0);
        out[DIFFICULTY_OFF..DIFFICULTY_OFF + 4].copy_from_slice(&self.difficulty);
        out[MROOT_OFF..MROOT_OFF + 32].copy_from_slice(&self.mroot);
        out[NONCE_OFF..NONCE_OFF + 32].copy_from_slice(&self.nonce);
        out[STIME_OFF..STIME_OFF + 4].copy_from_slice(&self.stime);
        out[BHASH_OFF..BHASH_OFF + 32].copy_from_slice(&self.bhash);
        out
    }

    /// The 124-byte Peach preimage: the trailer up to and including `nonce`.
    pub fn peach_preimage(&self) -> [u8; PEACH_PREIMAGE_LEN] {
        let bytes = self.to_bytes();
        let mut out = [0u8; PEACH_PREIMAGE_LEN];
        out.copy_from_slice(&bytes[..PEACH_PREIMAGE_LEN]);
        out
    }

    /// Only `difficulty[0]` is consulted by `eval`; the rest is preserved
    /// bit-exact but otherwise ignored by this crate.
    pub fn difficulty_byte(&self) -> u8 {
        self.difficulty[0]
    }

    /// Primary haiku token stream (nonce bytes 0..16).
    pub fn primary_haiku(&self) -> [u8; 16] {
        let mut h = [0u8; 16];
        h.copy_from_slice(&self.nonce[0..16]);
        h
    }

    /// Secondary haiku token stream (nonce bytes 16..32).
    pub fn secondary_haiku(&self) -> [u8; 16] {
        let mut h = [0u8; 16];
        h.copy_from_slice(&self.nonce[16..32]);
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bytes() -> Vec<u8> {
        (0..TRAILER_LEN).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn rejects_wrong_length() {
        let bytes = vec![0u8; TRAILER_LEN - 1];
        let err = BlockTrailer::from_bytes(&bytes).unwrap_err();
        assert!(matches!(
            err,
            PowError::InvalidTrailerLength {
                expected: TRAILER_LEN,
                actual
            } if actual == TRAILER_LEN - 1
        ));
    }

    #[test]
    fn round_trips() {
        let bytes = sample_bytes();
        let trailer = BlockTrailer::from_bytes(&bytes).unwrap();
        assert_eq!(&trailer.to_bytes()[..], &bytes[..]);
    }

    #[test]
    fn peach_preimage_is_first_124_bytes() {
        let bytes = sample_bytes();
        let trailer = BlockTrailer::from_bytes(&bytes).unwrap();
        assert_eq!(&trailer.peach_preimage()[..], &bytes[..124]);
    }

    #[test]
    fn haiku_halves_split_nonce() {
        let bytes = sample_bytes();
        let trailer = BlockTrailer::from_bytes(&bytes).unwrap();
        assert_eq!(&trailer.primary_haiku()[..], &bytes[92..108]);
        assert_eq!(&trailer.secondary_haiku()[..], &bytes[108..124]);
    }
}
