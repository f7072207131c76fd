//! The Peach engine: tile generation, the 8-jump pointer chase, mining
//! attempts, and verification.

use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicBool, Ordering};

use super::map::{PeachMap, PEACH_MAP, PEACH_TILE};
use crate::error::{PowError, Result};
use crate::nighthash::{nighthash, HASHLEN};
use crate::trailer::BlockTrailer;
use crate::trigg::{self, syntax};

const PEACH_GEN: usize = HASHLEN + 4;
const PEACH_NEXT: usize = HASHLEN + 4 + PEACH_TILE;
const PEACH_JUMP: usize = 8;
const MAP_MASK: u32 = (PEACH_MAP - 1) as u32;

/// Deterministically materialise tile `index` for block `phash`, writing
/// it into `tilep` (1,024 bytes). Mirrors the reference's layered
/// Nighthash fill: one 36-byte seed hash, then 31 chained 32-byte hashes.
/// Each chained call runs with `txf=true`, so it mixes its 32-byte input
/// region in place (not a copy) while writing the hash to the next
/// region — every region except the last therefore ends up holding its
/// own `dflop`/`dmemtx`-transformed state, not the clean hash output.
fn fill_tile(tilep: &mut [u8], index: u32, phash: &[u8; 32]) {
    debug_assert_eq!(tilep.len(), PEACH_TILE);

    let mut seed = [0u8; PEACH_GEN];
    seed[0..4].copy_from_slice(&index.to_le_bytes());
    seed[4..36].copy_from_slice(phash);

    let first = nighthash(&mut seed, index, false, true);
    tilep[0..32].copy_from_slice(&first);

    for k in 0..31usize {
        let (left, right) = tilep.split_at_mut((k + 1) * 32);
        let region = &mut left[k * 32..(k + 1) * 32];
        let next = nighthash(region, index, true, true);
        right[0..32].copy_from_slice(&next);
    }
}

/// Perform one jump of the pointer chase: fold the current tile and
/// nonce through Nighthash and land on the next tile index.
///
/// The next index is the masked sum of the hash's 32-bit words; the
/// prior `index` does not contribute beyond seeding that hash, matching
/// the reference's `peach_next` (which overwrites its index variable
/// with the hash-word sum rather than adding to it).
fn jump(index: u32, tile: &[u8], nonce: &[u8; 32]) -> u32 {
    debug_assert_eq!(tile.len(), PEACH_TILE);

    let mut seed = [0u8; PEACH_NEXT];
    seed[0..32].copy_from_slice(nonce);
    seed[32..36].copy_from_slice(&index.to_le_bytes());
    seed[36..].copy_from_slice(tile);

    let hash = nighthash(&mut seed, index, false, false);
    let mut sum: u32 = 0;
    for chunk in hash.chunks_exact(4) {
        sum = sum.wrapping_add(u32::from_le_bytes(chunk.try_into().unwrap()));
    }

    sum & MAP_MASK
}

/// `mario`'s initial map position: a byte-wise product reduction of the
/// preimage hash. Preserved verbatim, including its nontrivial chance of
/// collapsing to zero when any hash byte is zero (see design notes).
fn mario_seed(bt_hash: &[u8; 32]) -> u32 {
    let mut mario = bt_hash[0] as u32;
    for &b in &bt_hash[1..] {
        mario = mario.wrapping_mul(b as u32);
    }
    mario & MAP_MASK
}

/// A running mining/verification engine over a live 1 GiB map.
pub struct PeachEngine {
    map: PeachMap,
    /// `trailer[0..92]`: everything up to `nonce`, held fixed for the
    /// lifetime of the engine.
    trailer_prefix: [u8; 92],
    difficulty: u8,
    primary: [u8; 16],
    secondary: [u8; 16],
}

static STATIC_MAP_IN_USE: AtomicBool = AtomicBool::new(false);

impl PeachEngine {
    /// Allocate a fresh per-engine map and prepare to solve `trailer`.
    pub fn new(trailer: &BlockTrailer) -> Result<Self> {
        let map = PeachMap::new()?;
        let bytes = trailer.to_bytes();
        let mut trailer_prefix = [0u8; 92];
        trailer_prefix.copy_from_slice(&bytes[..92]);
        Ok(PeachEngine {
            map,
            trailer_prefix,
            difficulty: trailer.difficulty_byte(),
            primary: [0u8; 16],
            secondary: trigg::gen(),
        })
    }

    fn phash(&self) -> [u8; 32] {
        let mut phash = [0u8; 32];
        phash.copy_from_slice(&self.trailer_prefix[0..32]);
        phash
    }

    /// Construct an engine reusing a single process-lifetime map, as the
    /// reference's `STATIC_PEACH_MAP` build does. Only one such engine
    /// may be live at a time.
    pub fn new_static(trailer: &BlockTrailer) -> Result<Self> {
        if STATIC_MAP_IN_USE.swap(true, Ordering::AcqRel) {
            return Err(PowError::StaticMapBusy);
        }
        match Self::new(trailer) {
            Ok(engine) => Ok(engine),
            Err(e) => {
                STATIC_MAP_IN_USE.store(false, Ordering::Release);
                Err(e)
            }
        }
    }

    fn gen_tile(&mut self, index: u32) -> [u8; PEACH_TILE] {
        let idx = index as usize;
        if !self.map.is_cached(idx) {
            let phash = self.phash();
            fill_tile(self.map.tile_mut(idx), index, &phash);
            self.map.mark_cached(idx);
        }
        let mut out = [0u8; PEACH_TILE];
        out.copy_from_slice(self.map.tile(idx));
        out
    }

    fn jump_chain(&mut self, mut mario: u32, nonce: &[u8; 32]) -> (u32, [u8; PEACH_TILE]) {
        let mut tile = self.gen_tile(mario);
        for _ in 0..PEACH_JUMP {
            mario = jump(mario, &tile, nonce);
            tile = self.gen_tile(mario);
        }
        (mario, tile)
    }

    /// Attempt one nonce: roll the haiku pair forward, chase the map,
    /// and test the final hash against difficulty. Returns the 32-byte
    /// nonce on success. Always terminates; never loops internally.
    pub fn generate(&mut self) -> Option<[u8; 32]> {
        self.primary = self.secondary;
        self.secondary = trigg::gen();
        let mut nonce = [0u8; 32];
        nonce[0..16].copy_from_slice(&self.primary);
        nonce[16..32].copy_from_slice(&self.secondary);

        let bt_hash = mining_bt_hash(&self.trailer_prefix, &nonce);
        let mario = mario_seed(&bt_hash);
        let (_, tile) = self.jump_chain(mario, &nonce);

        let mut final_ctx = Sha256::new();
        final_ctx.update(bt_hash);
        final_ctx.update(tile);
        let hash: [u8; 32] = final_ctx.finalize().into();

        if trigg::eval(&hash, self.difficulty) {
            Some(nonce)
        } else {
            None
        }
    }
}

fn mining_bt_hash(trailer_prefix_92: &[u8; 92], nonce: &[u8; 32]) -> [u8; 32] {
    let mut ctx = Sha256::new();
    ctx.update(trailer_prefix_92);
    ctx.update(nonce);
    ctx.finalize().into()
}

/// Verify a candidate trailer's Peach proof of work without allocating a
/// map: tile generation writes into a scratch 1,024-byte buffer instead.
/// Returns `(accepted, hash)`.
pub fn checkhash(trailer: &BlockTrailer) -> (bool, [u8; 32]) {
    let primary = trailer.primary_haiku();
    let secondary = trailer.secondary_haiku();
    if !syntax(&primary) || !syntax(&secondary) {
        return (false, [0u8; 32]);
    }

    let preimage = trailer.peach_preimage();
    let bt_hash: [u8; 32] = Sha256::digest(preimage).into();

    let mario = mario_seed(&bt_hash);
    let mut tile = [0u8; PEACH_TILE];
    fill_tile(&mut tile, mario, &trailer.phash);

    let mut idx = mario;
    for _ in 0..PEACH_JUMP {
        idx = jump(idx, &tile, &trailer.nonce);
        fill_tile(&mut tile, idx, &trailer.phash);
    }

    let mut final_ctx = Sha256::new();
    final_ctx.update(bt_hash);
    final_ctx.update(tile);
    let hash: [u8; 32] = final_ctx.finalize().into();

    let accepted = trigg::eval(&hash, trailer.difficulty_byte());
    tracing::debug!(accepted, "peach verification complete");
    (accepted, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mario_seed_collapses_to_zero_when_any_byte_is_zero() {
        let mut hash = [1u8; 32];
        hash[17] = 0;
        assert_eq!(mario_seed(&hash), 0);
    }

    #[test]
    fn mario_seed_masks_to_map_bounds() {
        let hash = [0xFFu8; 32];
        assert!(mario_seed(&hash) < PEACH_MAP as u32);
    }

    #[test]
    fn tile_generation_is_deterministic_and_idempotent() {
        let phash = [0u8; 32];
        let mut a = [0u8; PEACH_TILE];
        let mut b = [0u8; PEACH_TILE];
        fill_tile(&mut a, 0, &phash);
        fill_tile(&mut b, 0, &phash);
        assert_eq!(a, b);
    }

    #[test]
    fn different_tile_indices_diverge() {
        let phash = [0u8; 32];
        let mut a = [0u8; PEACH_TILE];
        let mut b = [0u8; PEACH_TILE];
        fill_tile(&mut a, 0, &phash);
        fill_tile(&mut b, 1, &phash);
        assert_ne!(a, b);
    }

    #[test]
    fn verification_rejects_nonce_that_fails_syntax() {
        let bytes = vec![0u8; crate::trailer::TRAILER_LEN];
        let trailer = BlockTrailer::from_bytes(&bytes).unwrap();
        // All-zero nonce halves: dictionary index 0 is "NIL" which fails
        // every non-empty frame slot, so syntax checking must reject.
        let (accepted, hash) = checkhash(&trailer);
        assert!(!accepted);
        assert_eq!(hash, [0u8; 32]);
    }

    #[test]
    fn mining_and_verification_agree_on_the_bt_hash_preimage() {
        // The mining path hashes trailer[0..92] ++ nonce as two update
        // calls; verification hashes trailer[0..124] as one. They must
        // observe byte-identical input whenever the trailer's nonce
        // field already equals the nonce being hashed.
        let mut bytes = vec![0u8; crate::trailer::TRAILER_LEN];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (i % 200) as u8;
        }
        let trailer = BlockTrailer::from_bytes(&bytes).unwrap();
        let nonce = trailer.nonce;

        let prefix_92: [u8; 92] = bytes[..92].try_into().unwrap();
        let mining_hash = mining_bt_hash(&prefix_92, &nonce);

        let verify_hash: [u8; 32] = Sha256::digest(trailer.peach_preimage()).into();

        assert_eq!(mining_hash, verify_hash);
    }
}
