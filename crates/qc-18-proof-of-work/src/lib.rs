//! # QC-18 Proof of Work
//!
//! Core mining and verification engine combining two proof-of-work
//! algorithms over a block trailer:
//!
//! - **Trigg** ([`trigg`]): a CPU-bound PoW that embeds a tokenised
//!   haiku, selected by a semantic grammar ([`dict`], [`frame`]), into
//!   the block's nonce.
//! - **Peach** ([`peach`]): a memory-hard PoW layered over Trigg nonces,
//!   backed by a 1 GiB deterministic tile map ([`nighthash`]) and an
//!   8-jump pointer chase.
//!
//! ## Scope
//!
//! This crate is the CORE of the mining/verification engine only. Block
//! trailer serialisation beyond the layout facts needed here, network
//! I/O and block propagation, wallet and transaction logic,
//! mining-pool coordination, and CLI front-ends are all out of scope —
//! they are the concern of whatever node binary embeds this crate.
//!
//! ## Concurrency
//!
//! Every [`peach::PeachEngine`] / [`trigg::TriggEngine`] owns its map
//! state outright; nothing is shared between engine instances except
//! the process-wide [`prng`] used to draw haiku words. Two mining
//! workers solving the same block each allocate their own 1 GiB map.

pub mod dict;
pub mod error;
pub mod frame;
pub mod nighthash;
pub mod peach;
pub mod prng;
pub mod trailer;
pub mod trigg;

pub use error::{PowError, Result};
pub use trailer::BlockTrailer;
