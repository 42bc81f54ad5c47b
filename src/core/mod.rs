//! Core data structures for the engine
//! Contains block kinds, chunk coordinates and generated chunk records.

pub mod block;
pub mod chunk;

// Re-export commonly used types
pub use block::{BlockKind, DecorationKind};
pub use chunk::{BlockInstance, ChunkCoord, ChunkDims, ChunkRecord, InstanceGroups, Transform};
