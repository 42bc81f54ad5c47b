use super::structure::{LeafOffset, leaf};

/// Trunk height range and canopy table of a tree species.
#[derive(Debug, Clone, Copy)]
pub struct TreeShape {
    pub trunk_min: i32,
    pub trunk_max: i32,
    /// Offsets relative to the topmost trunk block.
    pub canopy: &'static [LeafOffset],
}

pub const OAK: TreeShape = TreeShape {
    trunk_min: crate::constants::TRUNK_MIN,
    trunk_max: crate::constants::TRUNK_MAX,
    canopy: OAK_CANOPY,
};

#[rustfmt::skip]
pub const OAK_CANOPY: &[LeafOffset] = &[
    // lower skirt
    leaf(-2, -2, -2, 0.3), leaf(-2, -2, -1, 0.85), leaf(-2, -2, 0, 0.85), leaf(-2, -2, 1, 0.85),
    leaf(-2, -2, 2, 0.3), leaf(-1, -2, -2, 0.85), leaf(-1, -2, -1, 1.0), leaf(-1, -2, 0, 1.0),
    leaf(-1, -2, 1, 1.0), leaf(-1, -2, 2, 0.85), leaf(0, -2, -2, 0.85), leaf(0, -2, -1, 1.0),
    leaf(0, -2, 1, 1.0), leaf(0, -2, 2, 0.85), leaf(1, -2, -2, 0.85), leaf(1, -2, -1, 1.0),
    leaf(1, -2, 0, 1.0), leaf(1, -2, 1, 1.0), leaf(1, -2, 2, 0.85), leaf(2, -2, -2, 0.3),
    leaf(2, -2, -1, 0.85), leaf(2, -2, 0, 0.85), leaf(2, -2, 1, 0.85), leaf(2, -2, 2, 0.3),
    // upper skirt
    leaf(-2, -1, -2, 0.5), leaf(-2, -1, -1, 0.85), leaf(-2, -1, 0, 0.85), leaf(-2, -1, 1, 0.85),
    leaf(-2, -1, 2, 0.5), leaf(-1, -1, -2, 0.85), leaf(-1, -1, -1, 1.0), leaf(-1, -1, 0, 1.0),
    leaf(-1, -1, 1, 1.0), leaf(-1, -1, 2, 0.85), leaf(0, -1, -2, 0.85), leaf(0, -1, -1, 1.0),
    leaf(0, -1, 1, 1.0), leaf(0, -1, 2, 0.85), leaf(1, -1, -2, 0.85), leaf(1, -1, -1, 1.0),
    leaf(1, -1, 0, 1.0), leaf(1, -1, 1, 1.0), leaf(1, -1, 2, 0.85), leaf(2, -1, -2, 0.5),
    leaf(2, -1, -1, 0.85), leaf(2, -1, 0, 0.85), leaf(2, -1, 1, 0.85), leaf(2, -1, 2, 0.5),
    // around the trunk top
    leaf(-1, 0, -1, 0.7), leaf(-1, 0, 0, 1.0), leaf(-1, 0, 1, 0.7), leaf(0, 0, -1, 1.0),
    leaf(0, 0, 1, 1.0), leaf(1, 0, -1, 0.7), leaf(1, 0, 0, 1.0), leaf(1, 0, 1, 0.7),
    // cap
    leaf(0, 1, 0, 1.0), leaf(-1, 1, -1, 0.25), leaf(-1, 1, 0, 0.8), leaf(-1, 1, 1, 0.25),
    leaf(0, 1, -1, 0.8), leaf(0, 1, 1, 0.8), leaf(1, 1, -1, 0.25), leaf(1, 1, 0, 0.8),
    leaf(1, 1, 1, 0.25),
    // outreach
    leaf(3, -1, 0, 0.25), leaf(-3, -1, 0, 0.25), leaf(0, -1, 3, 0.25), leaf(0, -1, -3, 0.25),
    leaf(3, -2, 1, 0.15), leaf(-1, -2, 3, 0.15), leaf(-3, -2, -1, 0.15), leaf(1, -2, -3, 0.15),
];
