//! O(1) surface height lookups against loaded chunks

use crate::core::chunk::{ChunkCoord, ChunkDims};
use crate::world::store::ChunkStore;

/// World-space terrain surface under a point.
///
/// Returns `f32::NEG_INFINITY` where no ground is known; callers treat that
/// as open air and keep falling.
pub trait SurfaceHeight {
    fn surface_height(&self, world_x: f32, world_z: f32) -> f32;
}

/// Height index over a [`ChunkStore`]'s loaded heightfields.
pub struct HeightQuery<'a> {
    store: &'a ChunkStore,
    dims: ChunkDims,
}

impl<'a> HeightQuery<'a> {
    pub fn new(store: &'a ChunkStore) -> Self {
        HeightQuery {
            store,
            dims: *store.generator().dims(),
        }
    }

    /// Chunk owning a world position and the cell inside it.
    pub fn locate(&self, world_x: f32, world_z: f32) -> (ChunkCoord, usize, usize) {
        let (bx, bz) = self.dims.block_of(world_x, world_z);
        self.dims.split(bx, bz)
    }
}

impl SurfaceHeight for HeightQuery<'_> {
    fn surface_height(&self, world_x: f32, world_z: f32) -> f32 {
        if !world_x.is_finite() || !world_z.is_finite() {
            return f32::NEG_INFINITY;
        }
        let (coord, lx, lz) = self.locate(world_x, world_z);
        match self.store.get(coord) {
            Some(chunk) => chunk.surface_height(lx, lz),
            None => f32::NEG_INFINITY,
        }
    }
}

impl SurfaceHeight for ChunkStore {
    fn surface_height(&self, world_x: f32, world_z: f32) -> f32 {
        HeightQuery::new(self).surface_height(world_x, world_z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::settings::EngineSettings;
    use crate::world::generator::ChunkGenerator;
    use crate::world::store::NullRenderer;

    fn loaded_store(settings: &EngineSettings, center: ChunkCoord, radius: i32) -> ChunkStore {
        let mut store = ChunkStore::new(ChunkGenerator::new(settings), radius).unwrap();
        store.update(center, &mut NullRenderer);
        store
    }

    #[test]
    fn test_unloaded_is_negative_infinity() {
        let store = loaded_store(&EngineSettings::default(), ChunkCoord::new(0, 0), 0);
        let query = HeightQuery::new(&store);
        assert_eq!(query.surface_height(16.0, 0.0), f32::NEG_INFINITY);
        assert_eq!(query.surface_height(-0.5, 3.0), f32::NEG_INFINITY);
        assert_eq!(query.surface_height(f32::NAN, 3.0), f32::NEG_INFINITY);
        assert!(query.surface_height(0.5, 15.5).is_finite());
    }

    #[test]
    fn test_matches_generated_columns() {
        let settings = EngineSettings::default();
        let store = loaded_store(&settings, ChunkCoord::new(-1, -1), 1);
        let noise = store.generator().noise();

        for (x, z) in [(-17.5_f32, -0.2_f32), (-0.01, -16.0), (3.9, -31.99), (-32.0, 15.0)] {
            let expected = noise.height(x.floor() as i32, z.floor() as i32) as f32;
            assert_eq!(store.surface_height(x, z), expected, "at ({}, {})", x, z);
        }
    }

    #[test]
    fn test_negative_coordinates_wrap_locally() {
        let store = loaded_store(&EngineSettings::default(), ChunkCoord::new(-1, 0), 0);
        let query = HeightQuery::new(&store);
        assert_eq!(query.locate(-0.25, 0.0), (ChunkCoord::new(-1, 0), 15, 0));
        assert_eq!(query.locate(-16.0, 15.75), (ChunkCoord::new(-1, 0), 0, 15));

        let chunk = store.get(ChunkCoord::new(-1, 0)).unwrap();
        assert_eq!(query.surface_height(-0.25, 0.0), chunk.surface_height(15, 0));
    }

    #[test]
    fn test_block_size_scales_lookup() {
        let mut settings = EngineSettings::default();
        settings.world.block_size = 0.5;
        let store = loaded_store(&settings, ChunkCoord::new(0, 0), 0);
        let noise = store.generator().noise();

        // Block (3, 5) spans world [1.5, 2.0) x [2.5, 3.0).
        let expected = noise.height(3, 5) as f32 * 0.5;
        assert_eq!(store.surface_height(1.75, 2.5), expected);
        assert_eq!(store.surface_height(8.0, 0.0), f32::NEG_INFINITY);
    }
}
