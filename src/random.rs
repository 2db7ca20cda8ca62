//! Random sampling for shape construction and mutation.
//!
//! Shapes never own a generator: every construction and mutation call
//! borrows the worker's [`RandomSource`]. Any `rand` generator qualifies
//! through the blanket implementation; [`WorkerRng`] is the concrete
//! seeded generator each search worker is expected to own.

use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::basics::PI;

/// Per-worker pseudo-random generator.
pub type WorkerRng = Pcg32;

/// Source of the uniform and normal draws shapes consume.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`; `0` when `bound <= 0`.
    fn uniform_int(&mut self, bound: i32) -> i32;

    /// Uniform float in `[0, 1)`.
    fn uniform_f64(&mut self) -> f64;

    /// Normally distributed sample (Box–Muller, sine branch).
    ///
    /// The paired cosine sample is discarded, so every call consumes two
    /// uniform draws.
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        // 1 - u lies in (0, 1], keeping ln() finite.
        let u1 = 1.0 - self.uniform_f64();
        let u2 = self.uniform_f64();
        mean + std_dev * (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).sin()
    }

    /// Standard normal sample.
    fn normal(&mut self) -> f64 {
        self.gaussian(0.0, 1.0)
    }

    /// Integer perturbation `trunc(normal * sigma)`.
    fn jitter(&mut self, sigma: f64) -> i32 {
        (self.normal() * sigma) as i32
    }
}

impl<R: RngCore> RandomSource for R {
    #[inline]
    fn uniform_int(&mut self, bound: i32) -> i32 {
        if bound <= 0 {
            0
        } else {
            self.random_range(0..bound)
        }
    }

    #[inline]
    fn uniform_f64(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Seeded generator for one worker.
pub fn worker_rng(seed: u64) -> WorkerRng {
    Pcg32::seed_from_u64(seed)
}

/// Derive `count` independent worker generators from a master generator,
/// so a whole run stays reproducible from a single seed.
pub fn worker_rngs<R: Rng>(master: &mut R, count: usize) -> Vec<WorkerRng> {
    (0..count)
        .map(|_| worker_rng(master.random::<u64>()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_int_in_range() {
        let mut rng = worker_rng(1);
        for _ in 0..1000 {
            let v = rng.uniform_int(7);
            assert!((0..7).contains(&v));
        }
    }

    #[test]
    fn test_uniform_int_non_positive_bound() {
        let mut rng = worker_rng(2);
        assert_eq!(rng.uniform_int(0), 0);
        assert_eq!(rng.uniform_int(-5), 0);
    }

    #[test]
    fn test_gaussian_moments() {
        let mut rng = worker_rng(3);
        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| rng.gaussian(5.0, 2.0)).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|s| (s - mean) * (s - mean)).sum::<f64>() / n as f64;
        assert!((mean - 5.0).abs() < 0.1, "mean {}", mean);
        assert!((var.sqrt() - 2.0).abs() < 0.1, "std {}", var.sqrt());
    }

    #[test]
    fn test_gaussian_is_finite() {
        let mut rng = worker_rng(4);
        assert!((0..10_000).all(|_| rng.normal().is_finite()));
    }

    #[test]
    fn test_jitter_zero_sigma() {
        let mut rng = worker_rng(5);
        assert_eq!(rng.jitter(0.0), 0);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = worker_rng(42);
        let mut b = worker_rng(42);
        for _ in 0..32 {
            assert_eq!(a.uniform_int(1000), b.uniform_int(1000));
        }
    }

    #[test]
    fn test_worker_rngs_are_distinct() {
        let mut master = worker_rng(7);
        let mut workers = worker_rngs(&mut master, 3);
        assert_eq!(workers.len(), 3);
        let firsts: Vec<u32> = workers.iter_mut().map(|r| r.next_u32()).collect();
        assert!(firsts[0] != firsts[1] || firsts[1] != firsts[2]);
    }
}
