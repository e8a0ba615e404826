//! Mini-batch k-means over RGB samples.
//!
//! Centers start from k-means++ seeding over the whole sample set. Each
//! iteration then draws a mini-batch, assigns every batch sample to its nearest
//! center and moves that center by a streaming mean whose per-center count
//! persists across iterations (Sculley, "Web-Scale K-Means Clustering").
//! Iteration stops once the summed squared center shift of one step drops
//! below the tolerance, or at the iteration cap.

use palette::Srgb;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::distance_squared;
use crate::error::PaletteError;

pub const DEFAULT_BATCH_SIZE: usize = 2048;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
/// Summed squared center shift (RGB units²) below which a step counts as converged.
pub const DEFAULT_TOLERANCE: f32 = 1e-2;

/// Builder for a mini-batch k-means run.
///
/// ```
/// use palette::Srgb;
/// use palette_namer::MiniBatchKMeans;
///
/// let samples = vec![Srgb::new(255u8, 0, 0); 64];
/// let centers = MiniBatchKMeans::new(3).seed(42).fit(&samples).unwrap();
/// assert_eq!(centers, vec![Srgb::new(255, 0, 0); 3]);
/// ```
#[derive(Debug, Clone)]
pub struct MiniBatchKMeans {
    k: usize,
    seed: Option<u64>,
    batch_size: usize,
    max_iterations: usize,
    tolerance: f32,
}

impl MiniBatchKMeans {
    #[must_use]
    pub const fn new(k: usize) -> Self {
        Self {
            k,
            seed: None,
            batch_size: DEFAULT_BATCH_SIZE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Seed the random number generator. Without a seed the generator is
    /// seeded from the operating system and runs are not reproducible.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Optional seed, for callers that pass one through.
    #[must_use]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    #[must_use]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    #[must_use]
    pub fn tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Cluster `samples` and return exactly `k` centers, each channel
    /// truncated to an integer. Clusters that never receive a sample keep
    /// their seeded position, so duplicates are possible.
    pub fn fit(&self, samples: &[Srgb<u8>]) -> Result<Vec<Srgb<u8>>, PaletteError> {
        let n = samples.len();
        if self.k == 0 || self.k > n {
            return Err(PaletteError::InvalidArgument {
                k: self.k,
                samples: n,
            });
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut centers = init_plus_plus(samples, self.k, &mut rng);
        let mut counts = vec![0u32; self.k];
        tracing::debug!("Seeded {} centers from {} samples", self.k, n);

        let full_batch = n <= self.batch_size;
        let mut buffer: Vec<Srgb<u8>> = Vec::with_capacity(self.batch_size.min(n));

        for iteration in 1..=self.max_iterations {
            let batch = if full_batch {
                samples
            } else {
                buffer.clear();
                buffer.extend((0..self.batch_size).map(|_| samples[rng.random_range(0..n)]));
                buffer.as_slice()
            };

            let shift = update_step(&mut centers, &mut counts, batch);
            tracing::trace!("iteration {}: center shift {}", iteration, shift);

            if shift < self.tolerance {
                tracing::debug!(
                    "Mini-batch k-means converged after {} iterations (shift {:.5})",
                    iteration,
                    shift
                );
                break;
            }
            if iteration == self.max_iterations {
                tracing::debug!("Mini-batch k-means stopped at iteration cap ({})", iteration);
            }
        }

        Ok(centers.into_iter().map(Center::to_rgb).collect())
    }
}

/// Cluster `samples` into `k` representative colors with the default
/// parameters and an unseeded generator.
pub fn cluster(samples: &[Srgb<u8>], k: usize) -> Result<Vec<Srgb<u8>>, PaletteError> {
    MiniBatchKMeans::new(k).fit(samples)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Center([f32; 3]);

impl Center {
    fn from_rgb(c: Srgb<u8>) -> Self {
        Center([c.red as f32, c.green as f32, c.blue as f32])
    }

    #[inline(always)]
    fn distance_squared(&self, c: Srgb<u8>) -> f32 {
        let dr = self.0[0] - c.red as f32;
        let dg = self.0[1] - c.green as f32;
        let db = self.0[2] - c.blue as f32;
        dr * dr + dg * dg + db * db
    }

    fn shift_squared(&self, other: &Center) -> f32 {
        (0..3).map(|i| (self.0[i] - other.0[i]).powi(2)).sum()
    }

    // `as` truncates toward zero and saturates, keeping every channel in 0..=255.
    fn to_rgb(self) -> Srgb<u8> {
        Srgb::new(self.0[0] as u8, self.0[1] as u8, self.0[2] as u8)
    }
}

/// Index of the nearest center; the first one wins on ties.
#[inline(always)]
fn nearest_center(centers: &[Center], c: Srgb<u8>) -> usize {
    let mut best = 0;
    let mut best_dist = f32::INFINITY;
    for (i, center) in centers.iter().enumerate() {
        let d = center.distance_squared(c);
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}

/// Assign the batch against the current centers, then fold each sample into
/// its center as a streaming mean. Returns the summed squared shift.
fn update_step(centers: &mut [Center], counts: &mut [u32], batch: &[Srgb<u8>]) -> f32 {
    let before = centers.to_vec();
    let assignments: Vec<usize> = batch.iter().map(|&s| nearest_center(&before, s)).collect();

    for (&sample, &idx) in batch.iter().zip(&assignments) {
        counts[idx] += 1;
        let rate = 1.0 / counts[idx] as f32;
        let x = Center::from_rgb(sample);
        let center = &mut centers[idx];
        for ch in 0..3 {
            center.0[ch] += (x.0[ch] - center.0[ch]) * rate;
        }
    }

    centers
        .iter()
        .zip(&before)
        .map(|(after, before)| after.shift_squared(before))
        .sum()
}

/// k-means++ seeding: each further center is drawn with probability
/// proportional to its squared distance from the nearest chosen center. When
/// every remaining distance is zero the draw falls back to uniform.
fn init_plus_plus<R: Rng>(samples: &[Srgb<u8>], k: usize, rng: &mut R) -> Vec<Center> {
    let n = samples.len();
    let mut centers = Vec::with_capacity(k);

    let first = samples[rng.random_range(0..n)];
    centers.push(Center::from_rgb(first));

    let mut weights: Vec<u64> = samples
        .iter()
        .map(|&s| distance_squared(s, first) as u64)
        .collect();
    let mut total: u64 = weights.iter().sum();

    while centers.len() < k {
        let next = if total == 0 {
            samples[rng.random_range(0..n)]
        } else {
            let mut target = rng.random_range(0..total);
            let mut picked = n - 1;
            for (i, &w) in weights.iter().enumerate() {
                if target < w {
                    picked = i;
                    break;
                }
                target -= w;
            }
            samples[picked]
        };
        centers.push(Center::from_rgb(next));

        total = 0;
        for (w, &s) in weights.iter_mut().zip(samples) {
            *w = (*w).min(distance_squared(s, next) as u64);
            total += *w;
        }
    }

    centers
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    /// 10 000 distinct colors, the size of a sampled image.
    fn gradient_samples() -> Vec<Srgb<u8>> {
        (0..10_000u32)
            .map(|i| Srgb::new((i % 256) as u8, (i / 256) as u8, ((i * 7) % 256) as u8))
            .collect()
    }

    #[test]
    fn test_returns_exactly_k_centers() {
        let samples = gradient_samples();
        for k in [1, 2, 7, 10, 64, 10_000] {
            let centers = MiniBatchKMeans::new(k).seed(1).fit(&samples).unwrap();
            assert_eq!(centers.len(), k, "k = {k}");
        }
    }

    #[test]
    fn test_rejects_out_of_range_k() {
        let samples = gradient_samples();
        assert!(matches!(
            cluster(&samples, 0),
            Err(PaletteError::InvalidArgument { k: 0, samples: 10_000 })
        ));
        assert!(matches!(
            cluster(&samples, 10_001),
            Err(PaletteError::InvalidArgument { k: 10_001, samples: 10_000 })
        ));
        assert!(matches!(
            cluster(&[], 1),
            Err(PaletteError::InvalidArgument { k: 1, samples: 0 })
        ));
    }

    #[test]
    fn test_solid_color_yields_k_copies() {
        let c = Srgb::new(12, 200, 77);
        let samples = vec![c; 10_000];
        for k in [1, 3, 10, 500] {
            let centers = cluster(&samples, k).unwrap();
            assert_eq!(centers, vec![c; k]);
        }
    }

    #[test]
    fn test_two_colors_are_separated() {
        let red = Srgb::new(255, 0, 0);
        let blue = Srgb::new(0, 0, 255);
        let mut samples = vec![red; 5_000];
        samples.extend(vec![blue; 5_000]);

        let centers = cluster(&samples, 2).unwrap();
        let found: HashSet<_> = centers.iter().map(|c| (c.red, c.green, c.blue)).collect();
        assert_eq!(found, HashSet::from([(255, 0, 0), (0, 0, 255)]));
    }

    #[test]
    fn test_separated_groups_recover_means() {
        // Three tight groups; every center should land inside one group.
        let groups = [(20u8, 20u8, 20u8), (128, 200, 40), (240, 60, 200)];
        let samples: Vec<Srgb<u8>> = (0..9_000u32)
            .map(|i| {
                let (r, g, b) = groups[(i % 3) as usize];
                let jitter = (i / 3 % 5) as u8;
                Srgb::new(r + jitter, g + jitter, b + jitter)
            })
            .collect();

        let centers = MiniBatchKMeans::new(3).seed(99).fit(&samples).unwrap();
        let mut hit = [false; 3];
        for c in &centers {
            let group = groups
                .iter()
                .position(|&(r, g, b)| distance_squared(*c, Srgb::new(r, g, b)) <= 3 * 5 * 5)
                .unwrap_or_else(|| panic!("center {c:?} is not near any group"));
            hit[group] = true;
        }
        assert_eq!(hit, [true; 3]);
    }

    #[test]
    fn test_same_seed_same_result() {
        let samples = gradient_samples();
        let a = MiniBatchKMeans::new(8).seed(2024).fit(&samples).unwrap();
        let b = MiniBatchKMeans::new(8).seed(2024).fit(&samples).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_small_sample_sets_use_the_full_batch() {
        let samples = vec![Srgb::new(0, 0, 0), Srgb::new(255, 255, 255)];
        let centers = MiniBatchKMeans::new(2).batch_size(2048).fit(&samples).unwrap();
        let found: HashSet<_> = centers.iter().map(|c| (c.red, c.green, c.blue)).collect();
        assert_eq!(found, HashSet::from([(0, 0, 0), (255, 255, 255)]));
    }

    #[test]
    fn test_truncation_not_rounding() {
        assert_eq!(Center([254.9, 0.99, 127.5]).to_rgb(), Srgb::new(254, 0, 127));
    }
}
