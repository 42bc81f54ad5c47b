//! Coherent-noise terrain sampling using FastNoiseLite
//!
//! Every octave is an independent OpenSimplex2 field with its own seed and
//! frequency. Sampling never mutates state, so chunks can be regenerated at
//! any time with identical results.

use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::utils::settings::TerrainSettings;

/// Octave indices accepted by [`NoiseField::sample`].
pub const OCTAVE_CONTINENT: usize = 0;
pub const OCTAVE_DETAIL: usize = 1;
pub const OCTAVE_MOUNTAIN: usize = 2;

pub struct NoiseField {
    octaves: [FastNoiseLite; 3],
    base_height: f32,
    continent_amplitude: f32,
    detail_amplitude: f32,
    mountain_threshold: f32,
    mountain_boost: f32,
    max_height: i32,
    pub seed: u32,
}

impl NoiseField {
    pub fn new(seed: u32, terrain: &TerrainSettings) -> Self {
        NoiseField {
            octaves: [
                Self::create_noise(seed, terrain.continent_frequency),
                Self::create_noise(seed.wrapping_add(1), terrain.detail_frequency),
                Self::create_noise(seed.wrapping_add(2), terrain.mountain_frequency),
            ],
            base_height: terrain.base_height,
            continent_amplitude: terrain.continent_amplitude,
            detail_amplitude: terrain.detail_amplitude,
            mountain_threshold: terrain.mountain_threshold,
            mountain_boost: terrain.mountain_boost,
            max_height: terrain.max_height.max(1),
            seed,
        }
    }

    fn create_noise(seed: u32, frequency: f32) -> FastNoiseLite {
        let mut noise = FastNoiseLite::with_seed(seed as i32);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(frequency));
        noise
    }

    pub fn octave_count(&self) -> usize {
        self.octaves.len()
    }

    /// Coherent noise in [-1, 1] for one octave. Out-of-range octave indices wrap.
    pub fn sample(&self, x: f32, z: f32, octave: usize) -> f32 {
        let value = self.octaves[octave % self.octaves.len()].get_noise_2d(x, z);
        if value.is_finite() {
            value.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }

    /// Mountain contribution, zero below the threshold and easing in above it.
    fn mountain(&self, x: f32, z: f32) -> f32 {
        let mask = self.sample(x, z, OCTAVE_MOUNTAIN);
        if mask <= self.mountain_threshold {
            return 0.0;
        }
        let t = (mask - self.mountain_threshold) / (1.0 - self.mountain_threshold);
        t * t * self.mountain_boost
    }

    /// Solid block count of the column at a global block coordinate, in [1, max height].
    pub fn height(&self, x: i32, z: i32) -> i32 {
        let fx = x as f32;
        let fz = z as f32;

        let continental = self.sample(fx, fz, OCTAVE_CONTINENT) * self.continent_amplitude;
        let detail = self.sample(fx, fz, OCTAVE_DETAIL) * self.detail_amplitude;
        let raw = self.base_height + continental + detail + self.mountain(fx, fz);

        if raw.is_finite() {
            (raw.round() as i32).clamp(1, self.max_height)
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(seed: u32) -> NoiseField {
        NoiseField::new(seed, &TerrainSettings::default())
    }

    #[test]
    fn test_sample_in_range() {
        let noise = field(7);
        for i in -200..200 {
            let x = i as f32 * 3.7;
            let z = i as f32 * -1.3;
            for octave in 0..noise.octave_count() {
                let v = noise.sample(x, z, octave);
                assert!((-1.0..=1.0).contains(&v), "octave {} gave {}", octave, v);
            }
        }
    }

    #[test]
    fn test_height_is_pure() {
        let a = field(99);
        let b = field(99);
        for x in -40..40 {
            for z in [-300, -1, 0, 17, 512] {
                assert_eq!(a.height(x, z), a.height(x, z));
                assert_eq!(a.height(x, z), b.height(x, z));
            }
        }
    }

    #[test]
    fn test_height_clamped() {
        let mut terrain = TerrainSettings::default();
        terrain.base_height = 1000.0;
        terrain.max_height = 40;
        let high = NoiseField::new(3, &terrain);
        terrain.base_height = -1000.0;
        let low = NoiseField::new(3, &terrain);

        for x in -20..20 {
            assert_eq!(high.height(x, x * 3), 40);
            assert_eq!(low.height(x, x * 3), 1);
        }
    }

    #[test]
    fn test_origin_height_is_base() {
        // OpenSimplex2 is exactly zero on lattice vertices, so every octave vanishes at (0,0).
        for seed in [0, 1, 1337, u32::MAX] {
            assert_eq!(field(seed).height(0, 0), 24);
        }
    }

    #[test]
    fn test_seeds_differ() {
        let a = field(1);
        let b = field(2);
        let differs = (0..64).any(|i| a.height(i * 7, i * 3) != b.height(i * 7, i * 3));
        assert!(differs);
    }

    #[test]
    fn test_reference_heights_off_lattice() {
        let noise = field(1337);
        assert_eq!(noise.height(5, 9), 29);
        assert_eq!(noise.height(100, 50), 31);
        assert_eq!(noise.height(37, -11), 23);
    }
}
