//! Fibonacci-lattice sampling with polar caps removed.
//!
//! Lattice point `i` of an `m`-point pool sits at `y = 1 - 2i/(m-1)` with
//! azimuth `i * golden_angle`. Points inside either polar cap are skipped,
//! so the pool is oversampled and grown until enough points survive.

use glam::{DVec3, Vec3};
use techsphere_config::SphereConfig;

/// Largest accepted pole exclusion; keeps the sampling band non-empty.
pub const MAX_POLE_EXCLUSION: f32 = 0.99;

/// Pool multiplier used by [`distribute`].
pub const DEFAULT_OVERSAMPLE: f32 = 1.5;

/// Generates quasi-uniform unit directions between the polar caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereDistributor {
    /// Fraction of the y range removed at the top, in `[0, 1)`.
    pub pole_exclusion_top: f32,
    /// Fraction of the y range removed at the bottom, in `[0, 1)`.
    pub pole_exclusion_bottom: f32,
    /// Initial pool size relative to the requested count.
    pub oversample_factor: f32,
}

impl Default for SphereDistributor {
    fn default() -> Self {
        Self {
            pole_exclusion_top: 0.3,
            pole_exclusion_bottom: 0.3,
            oversample_factor: DEFAULT_OVERSAMPLE,
        }
    }
}

impl SphereDistributor {
    pub fn from_config(config: &SphereConfig) -> Self {
        Self {
            pole_exclusion_top: config.pole_exclusion_top,
            pole_exclusion_bottom: config.pole_exclusion_bottom,
            oversample_factor: config.oversample_factor,
        }
    }

    /// Exactly `sample_count` unit directions, ordered from north to south.
    ///
    /// `0` gives an empty list and `1` gives the north pole `(0, 1, 0)`;
    /// the lattice formula is undefined for a single sample.
    pub fn distribute(&self, sample_count: usize) -> Vec<Vec3> {
        match sample_count {
            0 => return Vec::new(),
            1 => return vec![Vec3::Y],
            _ => {}
        }

        let top = f64::from(self.pole_exclusion_top.clamp(0.0, MAX_POLE_EXCLUSION));
        let bottom = f64::from(self.pole_exclusion_bottom.clamp(0.0, MAX_POLE_EXCLUSION));
        let y_max = 1.0 - top;
        let y_min = -(1.0 - bottom);
        let band = y_max - y_min;

        let oversample = f64::from(self.oversample_factor.max(1.0));
        let mut pool = ((sample_count as f64) * oversample).ceil() as usize;
        pool = pool.max(2);

        loop {
            let points = sample_band(pool, sample_count, y_min, y_max);
            if points.len() == sample_count {
                return points;
            }
            // A pool of 2n/band + 2 lattice rows always leaves n rows in the band.
            let sufficient = ((2.0 * sample_count as f64) / band).ceil() as usize + 2;
            pool = sufficient.max(pool * 2);
        }
    }
}

/// [`SphereDistributor::distribute`] with the default oversampling factor.
pub fn distribute(sample_count: usize, pole_exclusion_top: f32, pole_exclusion_bottom: f32) -> Vec<Vec3> {
    SphereDistributor {
        pole_exclusion_top,
        pole_exclusion_bottom,
        oversample_factor: DEFAULT_OVERSAMPLE,
    }
    .distribute(sample_count)
}

/// Walk a `pool`-point lattice, keeping at most `wanted` points with `y` in `[y_min, y_max]`.
fn sample_band(pool: usize, wanted: usize, y_min: f64, y_max: f64) -> Vec<Vec3> {
    let golden_angle = std::f64::consts::PI * (3.0 - 5.0_f64.sqrt());
    let last = (pool - 1) as f64;

    let mut points = Vec::with_capacity(wanted);
    for i in 0..pool {
        let y = 1.0 - (i as f64 / last) * 2.0;
        if y > y_max || y < y_min {
            continue;
        }

        let ring_radius = (1.0 - y * y).max(0.0).sqrt();
        let theta = golden_angle * i as f64;
        let point = DVec3::new(theta.cos() * ring_radius, y, theta.sin() * ring_radius);
        points.push(point.as_vec3());

        if points.len() >= wanted {
            break;
        }
    }
    points
}
