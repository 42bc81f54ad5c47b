//! Deterministic chunk generation
//!
//! A chunk is a pure function of its coordinate and the world seed: terrain
//! heights come from the [`NoiseField`], and every random choice (shoreline
//! blending, plants, trees) is drawn from a per-chunk seeded stream.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use rustc_hash::FxHashSet;

use crate::constants::*;
use crate::core::block::{BlockKind, DecorationKind};
use crate::core::chunk::{BlockInstance, ChunkCoord, ChunkDims, ChunkRecord, Transform};
use crate::utils::settings::EngineSettings;
use crate::world::noise::NoiseField;
use crate::world::rng::{Stream, chunk_rng};
use crate::world::structures::{OAK, TreeShape, place_offsets};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Column {
    height: i32,
    surface: BlockKind,
    planted: bool,
}

pub struct ChunkGenerator {
    noise: NoiseField,
    dims: ChunkDims,
    sea_level: i32,
    max_height: i32,
    surface_layers: i32,
    shore_blend: i32,
    plant_chance: f64,
    tree_chance: f64,
    tree: TreeShape,
    pub seed: u32,
}

impl ChunkGenerator {
    pub fn new(settings: &EngineSettings) -> Self {
        let seed = settings.world.seed;
        let terrain = &settings.terrain;
        ChunkGenerator {
            noise: NoiseField::new(seed, terrain),
            dims: settings.dims(),
            sea_level: settings.world.sea_level,
            max_height: terrain.max_height,
            surface_layers: terrain.surface_layers,
            shore_blend: terrain.shore_blend,
            plant_chance: terrain.plant_chance,
            tree_chance: terrain.tree_chance,
            tree: OAK,
            seed,
        }
    }

    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }

    pub fn dims(&self) -> &ChunkDims {
        &self.dims
    }

    pub fn sea_level(&self) -> i32 {
        self.sea_level
    }

    /// Generate a complete chunk at the given coordinate
    pub fn generate_chunk(&self, coord: ChunkCoord) -> ChunkRecord {
        let mut record = ChunkRecord::new(coord, self.dims);
        let (base_x, base_z) = coord.origin_block(&self.dims);
        let width = self.dims.width as usize;
        let depth = self.dims.depth as usize;

        let mut surface_rng = chunk_rng(self.seed, coord, Stream::Surface);
        let mut plant_rng = chunk_rng(self.seed, coord, Stream::Plants);
        let mut columns = Vec::with_capacity(width * depth);

        // Terrain pass
        for lx in 0..width {
            for lz in 0..depth {
                let world_x = base_x + lx as i32;
                let world_z = base_z + lz as i32;
                let height = self.noise.height(world_x, world_z);
                let top = height - 1;

                record.set_surface_height(lx, lz, height as f32 * self.dims.block_size);

                let (surface, near_shore) = self.classify_surface(top, &mut surface_rng);
                for y in 0..height {
                    let kind = self.layer_kind(top - y, surface, near_shore);
                    record.push(self.block(kind, world_x, y, world_z));
                }

                if top < self.sea_level {
                    for y in (top + 1)..=self.sea_level {
                        record.push(self.block(BlockKind::Water, world_x, y, world_z));
                    }
                }

                let mut planted = false;
                if surface == BlockKind::Grass && top > self.sea_level {
                    planted =
                        self.try_place_plant(&mut record, world_x, height, world_z, &mut plant_rng);
                }

                columns.push(Column {
                    height,
                    surface,
                    planted,
                });
            }
        }

        // Decorations pass
        self.generate_trees(&mut record, coord, &columns);

        tracing::debug!(
            "Generated chunk ({}, {}) with {} instances",
            coord.x,
            coord.z,
            record.total_instances()
        );
        record
    }

    /// Surface kind of a column and whether it sits in the shoreline blend band.
    fn classify_surface<R: Rng>(&self, top: i32, rng: &mut R) -> (BlockKind, bool) {
        if top <= self.sea_level {
            return (BlockKind::Sand, true);
        }
        let above = top - self.sea_level;
        if above <= self.shore_blend {
            let shore_chance = 1.0 - above as f64 / (self.shore_blend + 1) as f64;
            let roll: f64 = rng.random();
            if roll < shore_chance {
                return (BlockKind::Sand, true);
            }
            return (BlockKind::Grass, true);
        }
        (BlockKind::Grass, false)
    }

    fn layer_kind(&self, depth_from_top: i32, surface: BlockKind, near_shore: bool) -> BlockKind {
        if depth_from_top == 0 {
            surface
        } else if depth_from_top <= self.surface_layers {
            if near_shore && surface == BlockKind::Grass {
                BlockKind::Dirt
            } else {
                surface
            }
        } else {
            BlockKind::Stone
        }
    }

    fn block(&self, kind: BlockKind, x: i32, y: i32, z: i32) -> BlockInstance {
        let size = self.dims.block_size;
        let center = Vec3::new(x as f32 + 0.5, y as f32 + 0.5, z as f32 + 0.5) * size;
        BlockInstance {
            kind,
            transform: Transform::at(center, size),
        }
    }

    fn try_place_plant<R: Rng>(
        &self,
        record: &mut ChunkRecord,
        world_x: i32,
        height: i32,
        world_z: i32,
        rng: &mut R,
    ) -> bool {
        let roll: f64 = rng.random();
        if roll >= self.plant_chance {
            return false;
        }

        let kind = DecorationKind::ALL[rng.random_range(0..DecorationKind::ALL.len())];
        let jitter_x = rng.random_range(-PLANT_JITTER..PLANT_JITTER);
        let jitter_z = rng.random_range(-PLANT_JITTER..PLANT_JITTER);
        let yaw = rng.random_range(0.0..TAU);

        let size = self.dims.block_size;
        let anchor = Vec3::new(
            world_x as f32 + 0.5 + jitter_x,
            height as f32,
            world_z as f32 + 0.5 + jitter_z,
        ) * size;
        record.push(BlockInstance {
            kind: BlockKind::Decoration(kind),
            transform: Transform::at(anchor, size).with_yaw(yaw),
        });
        true
    }

    fn generate_trees(&self, record: &mut ChunkRecord, coord: ChunkCoord, columns: &[Column]) {
        let width = self.dims.width;
        let depth = self.dims.depth;
        let (base_x, base_z) = coord.origin_block(&self.dims);
        let margin = self
            .tree
            .canopy
            .iter()
            .map(|o| o.dx.abs().max(o.dz.abs()))
            .max()
            .unwrap_or(0);
        if width <= 2 * margin || depth <= 2 * margin {
            return;
        }

        // Trunks stay farther apart than the canopy reaches.
        let spacing = TREE_SPACING.max(margin + 1);
        let column_at = |lx: i32, lz: i32| columns[(lx * depth + lz) as usize];
        let mut rng = chunk_rng(self.seed, coord, Stream::Trees);
        let mut trunks: Vec<(i32, i32)> = Vec::new();

        // Cells above the terrain that already hold an instance.
        let mut occupied: FxHashSet<(i32, i32, i32)> = FxHashSet::default();
        for lx in 0..width {
            for lz in 0..depth {
                let column = column_at(lx, lz);
                if column.planted {
                    occupied.insert((base_x + lx, column.height, base_z + lz));
                }
            }
        }

        for lx in margin..(width - margin) {
            for lz in margin..(depth - margin) {
                let roll: f64 = rng.random();
                if roll >= self.tree_chance {
                    continue;
                }

                let column = column_at(lx, lz);
                if column.surface != BlockKind::Grass
                    || column.planted
                    || column.height - 1 <= self.sea_level + TREE_SHORE_MARGIN
                {
                    continue;
                }

                if trunks
                    .iter()
                    .any(|(px, pz)| (px - lx).abs().max((pz - lz).abs()) < spacing)
                {
                    continue;
                }
                trunks.push((lx, lz));

                let trunk = rng.random_range(self.tree.trunk_min..=self.tree.trunk_max);
                let trunk_top = column.height + trunk - 1;
                let world_x = base_x + lx;
                let world_z = base_z + lz;
                for y in column.height..=trunk_top {
                    occupied.insert((world_x, y, world_z));
                    record.push(self.block(BlockKind::Wood, world_x, y, world_z));
                }

                let mut leaves = Vec::new();
                place_offsets(
                    self.tree.canopy,
                    (world_x, trunk_top, world_z),
                    &mut rng,
                    |x, y, z| leaves.push((x, y, z)),
                );
                for (x, y, z) in leaves {
                    // Skip leaves buried in a taller neighbouring column.
                    if y < column_at(x - base_x, z - base_z).height {
                        continue;
                    }
                    if !occupied.insert((x, y, z)) {
                        continue;
                    }
                    record.push(self.block(BlockKind::Leaves, x, y, z));
                }
            }
        }
    }

    /// First dry grass column found spiralling out from the origin; feet position.
    pub fn find_spawn_point(&self) -> Vec3 {
        let size = self.dims.block_size;
        for radius in 0..64i32 {
            for dx in -radius..=radius {
                for dz in -radius..=radius {
                    if dx.abs() != radius && dz.abs() != radius {
                        continue;
                    }
                    let height = self.noise.height(dx, dz);
                    if height - 1 > self.sea_level + self.shore_blend {
                        return Vec3::new(dx as f32 + 0.5, height as f32, dz as f32 + 0.5) * size;
                    }
                }
            }
        }
        Vec3::new(0.5, (self.max_height + 2) as f32, 0.5) * size
    }
}
