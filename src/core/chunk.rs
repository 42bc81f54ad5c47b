use std::collections::BTreeMap;

use glam::{Mat4, Quat, Vec3};

use crate::constants::*;
use crate::core::block::BlockKind;

/// Horizontal footprint shared by generation, streaming and height lookups.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ChunkDims {
    pub width: i32,
    pub depth: i32,
    pub block_size: f32,
}

impl Default for ChunkDims {
    fn default() -> Self {
        Self {
            width: CHUNK_WIDTH,
            depth: CHUNK_DEPTH,
            block_size: BLOCK_SIZE,
        }
    }
}

impl ChunkDims {
    pub fn new(width: i32, depth: i32, block_size: f32) -> Self {
        Self {
            width,
            depth,
            block_size,
        }
    }

    /// Block column containing a world-space position (floor, not truncation).
    pub fn block_of(&self, world_x: f32, world_z: f32) -> (i32, i32) {
        (
            (world_x / self.block_size).floor() as i32,
            (world_z / self.block_size).floor() as i32,
        )
    }

    /// Splits a global block column into its chunk and the local cell inside it.
    pub fn split(&self, bx: i32, bz: i32) -> (ChunkCoord, usize, usize) {
        let coord = ChunkCoord::new(bx.div_euclid(self.width), bz.div_euclid(self.depth));
        let lx = bx.rem_euclid(self.width) as usize;
        let lz = bz.rem_euclid(self.depth) as usize;
        (coord, lx, lz)
    }

    pub fn cells(&self) -> usize {
        (self.width * self.depth) as usize
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct ChunkCoord {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoord {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    pub fn from_world(world_x: f32, world_z: f32, dims: &ChunkDims) -> Self {
        let (bx, bz) = dims.block_of(world_x, world_z);
        dims.split(bx, bz).0
    }

    pub fn chebyshev(&self, other: ChunkCoord) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    /// First global block column of this chunk.
    pub fn origin_block(&self, dims: &ChunkDims) -> (i32, i32) {
        (self.x * dims.width, self.z * dims.depth)
    }
}

impl From<(i32, i32)> for ChunkCoord {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transform {
    pub translation: Vec3,
    pub yaw: f32,
    pub scale: f32,
}

impl Transform {
    pub fn at(translation: Vec3, scale: f32) -> Self {
        Self {
            translation,
            yaw: 0.0,
            scale,
        }
    }

    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.yaw),
            self.translation,
        )
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BlockInstance {
    pub kind: BlockKind,
    pub transform: Transform,
}

/// Instances grouped by kind so a renderer can batch one draw per group.
pub type InstanceGroups = BTreeMap<BlockKind, Vec<Transform>>;

pub struct ChunkRecord {
    pub coord: ChunkCoord,
    dims: ChunkDims,
    heights: Vec<f32>,
    groups: InstanceGroups,
}

impl ChunkRecord {
    pub fn new(coord: ChunkCoord, dims: ChunkDims) -> Self {
        ChunkRecord {
            coord,
            dims,
            heights: vec![0.0; dims.cells()],
            groups: InstanceGroups::new(),
        }
    }

    fn cell(&self, lx: usize, lz: usize) -> usize {
        lx * self.dims.depth as usize + lz
    }

    pub fn dims(&self) -> &ChunkDims {
        &self.dims
    }

    /// Topmost solid surface world-Y at a local cell.
    pub fn surface_height(&self, lx: usize, lz: usize) -> f32 {
        self.heights[self.cell(lx, lz)]
    }

    pub fn set_surface_height(&mut self, lx: usize, lz: usize, world_y: f32) {
        let idx = self.cell(lx, lz);
        self.heights[idx] = world_y;
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    pub fn push(&mut self, instance: BlockInstance) {
        self.groups
            .entry(instance.kind)
            .or_default()
            .push(instance.transform);
    }

    pub fn groups(&self) -> &InstanceGroups {
        &self.groups
    }

    pub fn instances(&self, kind: BlockKind) -> &[Transform] {
        self.groups.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn instance_count(&self, kind: BlockKind) -> usize {
        self.instances(kind).len()
    }

    pub fn instance_counts(&self) -> BTreeMap<BlockKind, usize> {
        self.groups.iter().map(|(k, v)| (*k, v.len())).collect()
    }

    pub fn total_instances(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn iter_instances(&self) -> impl Iterator<Item = BlockInstance> + '_ {
        self.groups.iter().flat_map(|(kind, transforms)| {
            transforms.iter().map(move |transform| BlockInstance {
                kind: *kind,
                transform: *transform,
            })
        })
    }
}
