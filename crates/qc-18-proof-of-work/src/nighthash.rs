//! Nighthash: the deterministic floating-point mixer, memory-transform
//! mixer, and 8-way hash-primitive dispatcher used by Peach tile
//! generation and the jump chain.
//!
//! Determinism of [`dflop`] depends on IEEE-754 single-precision
//! semantics: no extended-precision (x87) intermediates, no FMA
//! contraction, to-nearest-even rounding, and a fixed (little-endian)
//! byte order for the `u32` <-> `f32` reinterpretation. Rust's `f32`
//! already guarantees IEEE-754 binary32 arithmetic with no implicit
//! contraction, so this module only has to pin down the byte order.

use blake2::digest::consts::U32;
use blake2::digest::Mac;
use blake2::Blake2bMac;
use digest::Digest;
use md2::Md2;
use md5::Md5;
use sha1::Sha1;
use sha2::Sha256;
use sha3::{Keccak256, Sha3_256};

/// Output width of every Nighthash call, regardless of which underlying
/// primitive is selected.
pub const HASHLEN: usize = 32;

/// Keyed BLAKE2b with a 32-byte digest. `blake2` only ships the 64-byte
/// `Blake2bMac512` alias; the 32-byte MAC used here is the same type
/// generic over output length.
type Blake2bMac256 = Blake2bMac<U32>;

const OP_SEL_CONST: u32 = 0x26C34;
const OPERAND_CONST: u32 = 0x14198;
const SIGN_CONST: u32 = 0x3D6EC;

/// The floating-point operation mixer (`dflop`).
///
/// Processes `data` in 4-byte chunks (length truncated down to a multiple
/// of 4). When `txf` is set, chunks are mixed in place; otherwise a
/// temporary copy is mixed and `data` is left untouched.
pub fn dflop(data: &mut [u8], index: u32, txf: bool) -> u32 {
    let len = data.len() - (data.len() & 3);
    let mut op: u32 = 0;

    let mut i = 0;
    while i < len {
        let chunk = &data[i..i + 4];
        let first = chunk[0];
        let shift = ((first & 7) + 1) << 1;

        let op_sel = chunk[((OP_SEL_CONST >> shift) & 3) as usize];
        let operand_byte = chunk[((OPERAND_CONST >> shift) & 3) as usize];
        let sign_bit = chunk[((SIGN_CONST >> shift) & 3) as usize] & 1;

        op = op.wrapping_add(op_sel as u32);

        let mut operand = operand_byte as i32;
        if sign_bit != 0 {
            operand ^= i32::MIN;
        }
        let flv = operand as f32;

        let mut flt = f32::from_le_bytes(chunk.try_into().unwrap());
        if flt.is_nan() {
            flt = index as f32;
        }

        flt = match op & 3 {
            0 => flt + flv,
            1 => flt - flv,
            2 => flt * flv,
            3 => flt / flv,
            _ => unreachable!(),
        };

        if flt.is_nan() {
            flt = index as f32;
        }

        let out_bytes = flt.to_le_bytes();
        if txf {
            data[i..i + 4].copy_from_slice(&out_bytes);
        }
        for b in out_bytes {
            op = op.wrapping_add(b as u32);
        }

        i += 4;
    }

    op
}

/// The memory-transformation mixer (`dmemtx`): 8 rounds of an
/// op-selected in-place transform over `data`.
pub fn dmemtx(data: &mut [u8], mut op: u32) -> u32 {
    let len = data.len();
    let halflen = len / 2;

    for round in 0..8u32 {
        op = op.wrapping_add(data[(round as usize) & 31] as u32);

        match op & 7 {
            0 => {
                // Flip bit 0 and bit 7 of every byte.
                for b in data.iter_mut() {
                    *b ^= 0x81;
                }
            }
            1 => {
                // Swap the first half with the second half, element-wise.
                for z in 0..halflen {
                    data.swap(z, halflen + z);
                }
            }
            2 => {
                for b in data.iter_mut() {
                    *b = !*b;
                }
            }
            3 => {
                for (z, b) in data.iter_mut().enumerate() {
                    if z & 1 == 0 {
                        *b = b.wrapping_add(1);
                    } else {
                        *b = b.wrapping_sub(1);
                    }
                }
            }
            4 => {
                let delta = round as u8;
                for (z, b) in data.iter_mut().enumerate() {
                    if z & 1 == 0 {
                        *b = b.wrapping_sub(delta);
                    } else {
                        *b = b.wrapping_add(delta);
                    }
                }
            }
            5 => {
                for b in data.iter_mut() {
                    if *b == 104 {
                        *b = 72;
                    }
                }
            }
            6 => {
                for z in 0..halflen {
                    if data[z] > data[halflen + z] {
                        data.swap(z, halflen + z);
                    }
                }
            }
            7 => {
                for z in 1..len {
                    data[z] ^= data[z - 1];
                }
            }
            _ => unreachable!(),
        }
    }

    op
}

/// Compute the Nighthash of `input`, optionally appending the native
/// 4-byte `index` to the hash input (`hashindex`), and optionally running
/// the full `dflop`/`dmemtx` in-place mixing pass (`txf`). `input` is
/// mutated when `txf` is set, exactly as the mixer requires.
pub fn nighthash(input: &mut [u8], index: u32, hashindex: bool, txf: bool) -> [u8; HASHLEN] {
    let mut algo = dflop(input, index, txf);
    if txf {
        algo = dmemtx(input, algo);
    }
    algo &= 7;

    let index_bytes = index.to_le_bytes();
    let mut out = [0u8; HASHLEN];

    match algo {
        0 | 1 => {
            let key = [algo as u8; 64];
            let key_len = if algo == 0 { 32 } else { 64 };
            let mut mac = Blake2bMac256::new_from_slice(&key[..key_len])
                .expect("blake2b accepts 32 and 64 byte keys");
            Mac::update(&mut mac, &*input);
            if hashindex {
                Mac::update(&mut mac, &index_bytes);
            }
            out.copy_from_slice(&mac.finalize_fixed());
        }
        2 => {
            let mut hasher = Sha1::new();
            hasher.update(&*input);
            if hashindex {
                hasher.update(index_bytes);
            }
            out[..20].copy_from_slice(&hasher.finalize());
        }
        3 => {
            let mut hasher = Sha256::new();
            hasher.update(&*input);
            if hashindex {
                hasher.update(index_bytes);
            }
            out.copy_from_slice(&hasher.finalize());
        }
        4 => {
            let mut hasher = Sha3_256::new();
            hasher.update(&*input);
            if hashindex {
                hasher.update(index_bytes);
            }
            out.copy_from_slice(&hasher.finalize());
        }
        5 => {
            let mut hasher = Keccak256::new();
            hasher.update(&*input);
            if hashindex {
                hasher.update(index_bytes);
            }
            out.copy_from_slice(&hasher.finalize());
        }
        6 => {
            let mut hasher = Md2::new();
            hasher.update(&*input);
            if hashindex {
                hasher.update(index_bytes);
            }
            out[..16].copy_from_slice(&hasher.finalize());
        }
        7 => {
            let mut hasher = Md5::new();
            hasher.update(&*input);
            if hashindex {
                hasher.update(index_bytes);
            }
            out[..16].copy_from_slice(&hasher.finalize());
        }
        _ => unreachable!("algo & 7 is in 0..=7"),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dflop_on_length_three_processes_nothing() {
        let mut data = [1u8, 2, 3];
        assert_eq!(dflop(&mut data, 0, true), 0);
    }

    #[test]
    fn dflop_without_txf_leaves_input_untouched() {
        let mut data = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let original = data;
        dflop(&mut data, 42, false);
        assert_eq!(data, original);
    }

    #[test]
    fn dmemtx_case_zero_flips_bit0_and_bit7() {
        // op chosen so the first round lands on case 0 immediately:
        // op += data[0] (=0), so op stays 0 and op & 7 == 0.
        let mut data = [0u8; 8];
        let result = dmemtx(&mut data, 0);
        assert_eq!(data, [0x81; 8]);
        let _ = result;
    }

    #[test]
    fn dispatch_all_zero_input_selects_blake2b_32byte_key() {
        let mut input = [0u8; 32];
        let out = nighthash(&mut input, 0, false, false);

        let mut mac = Blake2bMac256::new_from_slice(&[0u8; 32]).unwrap();
        Mac::update(&mut mac, &[0u8; 32]);
        let expected = mac.finalize_fixed();

        assert_eq!(&out[..], &expected[..]);
    }

    #[test]
    fn output_is_always_32_bytes_for_every_algo_selection() {
        for algo in 0u8..8 {
            // Force the low 3 bits of dflop's output via the first byte,
            // since algo = dflop(...) & 7 and dflop's accumulator starts
            // at the sum of the first selected byte for a single chunk.
            let mut input = vec![algo; 32];
            let out = nighthash(&mut input, 7, true, false);
            assert_eq!(out.len(), HASHLEN);
        }
    }
}
