//! Case frames for the semantic grammar.
//!
//! Each frame is an ordered list of up to [`MAXH`] feature masks (or
//! literal selectors); a zero slot terminates the frame early. The table
//! is compiled in and has a fixed cardinality ([`NFRAMES`]).

use crate::dict::{
    F_ADJ, F_AMB, F_ING, F_INF, F_MASS, F_NPL, F_NS, F_PREP, F_TIMED, F_TIMEY, S_A, S_CO, S_MD,
    S_NL, S_S,
};

/// Maximum number of slots in a haiku / frame.
pub const MAXH: usize = 16;
/// Number of compiled-in frames.
pub const NFRAMES: usize = 10;

const F_TIME: u32 = F_TIMED | F_TIMEY;

/// The compiled-in frame table, in the order frames are drawn by
/// `trigg_rand() % NFRAMES`.
pub const FRAME: [[u32; MAXH]; NFRAMES] = [
    [
        F_PREP, F_ADJ, F_MASS, S_NL, F_NPL, S_NL, F_INF | F_ING, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    [
        F_PREP, F_MASS, S_NL, F_ADJ, F_NPL, S_NL, F_INF | F_ING, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    [
        F_PREP, F_TIMED, S_NL, F_ADJ, F_NPL, S_NL, F_INF | F_ING, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    [
        F_PREP, F_TIMED, S_NL, S_A, F_NS, S_NL, F_ING, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    [
        F_TIME, F_AMB, S_NL, F_PREP, S_A, F_ADJ, F_NS, S_MD, S_NL, F_ADJ | F_ING, 0, 0, 0, 0, 0,
        0,
    ],
    [
        F_TIME, F_AMB, S_NL, F_ADJ, F_MASS, S_NL, F_ING, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    [
        F_TIME, F_MASS, S_NL, F_INF, S_S, S_CO, S_NL, F_AMB, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    [
        F_ING, F_PREP, S_A, F_ADJ, F_NS, S_NL, F_MASS, F_ING, S_MD, S_NL, S_A, F_ADJ, F_NS, 0, 0,
        0,
    ],
    [
        F_ING, F_PREP, F_TIME, F_MASS, S_NL, F_MASS, F_ING, S_MD, S_NL, S_A, F_ADJ, F_NS, 0, 0, 0,
        0,
    ],
    [
        S_A, F_NS, S_NL, F_PREP, F_TIMED, F_MASS, S_MD, S_NL, F_ADJ, 0, 0, 0, 0, 0, 0, 0,
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_ten_frames() {
        assert_eq!(FRAME.len(), NFRAMES);
    }

    #[test]
    fn every_frame_eventually_terminates() {
        // A frame need not fill all 16 slots, but none is all-nonzero;
        // trigg_syntax relies on a terminating zero to bound matches.
        for frame in FRAME.iter() {
            assert!(frame.iter().any(|&slot| slot == 0));
        }
    }

    #[test]
    fn no_frame_is_all_zero() {
        // The all-zero 16-byte haiku must fail syntax checking.
        for frame in FRAME.iter() {
            assert!(frame.iter().any(|&slot| slot != 0));
        }
    }
}
