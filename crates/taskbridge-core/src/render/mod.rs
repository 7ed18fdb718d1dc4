//! Text rendering for chat delivery: issue descriptions and size-bounded
//! message chunking.

pub mod chunker;
pub mod issue;
