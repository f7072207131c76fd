//! Peach: the memory-hard proof of work layered over Trigg nonces.

mod engine;
mod map;

pub use engine::{checkhash, PeachEngine};
pub use map::{PeachMap, PEACH_MAP, PEACH_SIZE, PEACH_TILE};
