//! World generation and streaming modules
//! Contains coherent noise, chunk generation, chunk streaming and the height index.

pub mod generator;
pub mod height;
pub mod noise;
pub mod rng;
pub mod store;
pub mod structures;

// Re-export commonly used types
pub use generator::ChunkGenerator;
pub use height::{HeightQuery, SurfaceHeight};
pub use noise::NoiseField;
pub use store::{ChunkRenderer, ChunkStore, InstanceTally, NullRenderer, StreamDelta};
