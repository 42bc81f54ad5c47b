//! Chunk streaming around the player
//!
//! The store owns every loaded [`ChunkRecord`]. Each `update` reconciles the
//! loaded set with the square view window around the player chunk: chunks
//! outside it are evicted, missing ones are generated synchronously.

use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::block::BlockKind;
use crate::core::chunk::{ChunkCoord, ChunkRecord, InstanceGroups};
use crate::utils::settings::{SettingsError, invalid};
use crate::world::generator::ChunkGenerator;

/// Consumer of chunk geometry, notified as chunks enter and leave the view window.
pub trait ChunkRenderer {
    fn on_chunk_loaded(&mut self, coord: ChunkCoord, instances: &InstanceGroups);
    fn on_chunk_unloaded(&mut self, coord: ChunkCoord);
}

/// Renderer that ignores every notification.
#[derive(Default)]
pub struct NullRenderer;

impl ChunkRenderer for NullRenderer {
    fn on_chunk_loaded(&mut self, _coord: ChunkCoord, _instances: &InstanceGroups) {}
    fn on_chunk_unloaded(&mut self, _coord: ChunkCoord) {}
}

/// Keeps live per-kind instance counts, the way a batching renderer sizes its buffers.
#[derive(Default, Debug)]
pub struct InstanceTally {
    resident: FxHashMap<ChunkCoord, BTreeMap<BlockKind, usize>>,
    totals: BTreeMap<BlockKind, usize>,
    pub loads: usize,
    pub unloads: usize,
}

impl InstanceTally {
    pub fn resident(&self) -> usize {
        self.resident.len()
    }

    pub fn is_resident(&self, coord: ChunkCoord) -> bool {
        self.resident.contains_key(&coord)
    }

    pub fn count(&self, kind: BlockKind) -> usize {
        self.totals.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.totals.values().sum()
    }
}

impl ChunkRenderer for InstanceTally {
    fn on_chunk_loaded(&mut self, coord: ChunkCoord, instances: &InstanceGroups) {
        let counts: BTreeMap<BlockKind, usize> =
            instances.iter().map(|(k, v)| (*k, v.len())).collect();
        for (kind, n) in &counts {
            *self.totals.entry(*kind).or_default() += n;
        }
        if let Some(previous) = self.resident.insert(coord, counts) {
            for (kind, n) in previous {
                if let Some(total) = self.totals.get_mut(&kind) {
                    *total -= n;
                }
            }
        }
        self.loads += 1;
    }

    fn on_chunk_unloaded(&mut self, coord: ChunkCoord) {
        if let Some(counts) = self.resident.remove(&coord) {
            for (kind, n) in counts {
                if let Some(total) = self.totals.get_mut(&kind) {
                    *total -= n;
                    if *total == 0 {
                        self.totals.remove(&kind);
                    }
                }
            }
        }
        self.unloads += 1;
    }
}

/// What one `update` changed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct StreamDelta {
    pub loaded: usize,
    pub evicted: usize,
}

impl StreamDelta {
    pub fn is_empty(&self) -> bool {
        self.loaded == 0 && self.evicted == 0
    }
}

pub struct ChunkStore {
    generator: ChunkGenerator,
    radius: i32,
    chunks: FxHashMap<ChunkCoord, ChunkRecord>,
    center: Option<ChunkCoord>,
}

impl ChunkStore {
    /// Fails on a negative view radius.
    pub fn new(generator: ChunkGenerator, radius: i32) -> Result<Self, SettingsError> {
        if radius < 0 {
            return Err(invalid(format!("view radius {} is negative", radius)));
        }
        Ok(ChunkStore {
            generator,
            radius,
            chunks: FxHashMap::default(),
            center: None,
        })
    }

    pub fn generator(&self) -> &ChunkGenerator {
        &self.generator
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn center(&self) -> Option<ChunkCoord> {
        self.center
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn get(&self, coord: ChunkCoord) -> Option<&ChunkRecord> {
        self.chunks.get(&coord)
    }

    pub fn loaded_coords(&self) -> FxHashSet<ChunkCoord> {
        self.chunks.keys().copied().collect()
    }

    /// Every coordinate within Chebyshev distance `radius` of `center`.
    pub fn required(center: ChunkCoord, radius: i32) -> impl Iterator<Item = ChunkCoord> {
        (-radius..=radius).flat_map(move |dx| {
            (-radius..=radius).map(move |dz| ChunkCoord::new(center.x + dx, center.z + dz))
        })
    }

    /// Reconciles the loaded set with the view window around `center`.
    pub fn update(&mut self, center: ChunkCoord, renderer: &mut dyn ChunkRenderer) -> StreamDelta {
        if self.center == Some(center) {
            return StreamDelta::default();
        }

        let radius = self.radius;
        let chunks_to_remove: Vec<ChunkCoord> = self
            .chunks
            .keys()
            .filter(|coord| coord.chebyshev(center) > radius)
            .copied()
            .collect();

        let mut delta = StreamDelta::default();
        for coord in chunks_to_remove {
            self.chunks.remove(&coord);
            renderer.on_chunk_unloaded(coord);
            tracing::debug!("Evicted chunk ({}, {})", coord.x, coord.z);
            delta.evicted += 1;
        }

        for coord in Self::required(center, radius) {
            if self.chunks.contains_key(&coord) {
                continue;
            }
            let record = self.generator.generate_chunk(coord);
            renderer.on_chunk_loaded(coord, record.groups());
            self.chunks.insert(coord, record);
            delta.loaded += 1;
        }

        self.center = Some(center);
        tracing::info!(
            "View window moved to ({}, {}): {} loaded, {} evicted, {} resident",
            center.x,
            center.z,
            delta.loaded,
            delta.evicted,
            self.chunks.len()
        );
        delta
    }

    /// Evicts everything, e.g. before a teleport. The next `update` rebuilds the window.
    pub fn reset(&mut self, renderer: &mut dyn ChunkRenderer) -> usize {
        let evicted = self.chunks.len();
        for (coord, _) in self.chunks.drain() {
            renderer.on_chunk_unloaded(coord);
        }
        self.center = None;
        evicted
    }
}
