//! Deterministic random number generation for sample data.
//!
//! RULE: sample data never touches a platform RNG. Every stream is
//! derived from one seed, so the same seed always writes the same files.
//!
//! Each record collection gets its own stream, seeded from
//! (seed XOR stream index). Adding a stream never changes the others.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

pub struct SampleRng {
    inner: Pcg64Mcg,
}

impl SampleRng {
    pub fn new(seed: u64, stream: SampleStream) -> Self {
        let derived_seed = seed ^ (stream as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_u64_below(items.len() as u64) as usize]
    }

    /// Simplified Pareto draw: most values near `x_min`, a long right tail.
    pub fn pareto(&mut self, x_min: f64, alpha: f64) -> f64 {
        let u = self.next_f64().max(1e-10);
        x_min * u.powf(-1.0 / alpha)
    }
}

/// Stable stream assignments. Append only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum SampleStream {
    Customers = 0,
    Portfolios = 1,
}
