pub mod structure;
pub mod tree;

pub use structure::{LeafOffset, leaf, place_offsets};
pub use tree::{OAK, OAK_CANOPY, TreeShape};
