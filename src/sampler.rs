//! Sources of uniform randomness.
//!
//! Every random decision made while building or refining a fragment goes
//! through [`UniformSampler`], so a seeded or scripted source can be swapped
//! in wherever reproducible output is needed.

use rand::Rng;

/// A source of uniform random reals and indices.
pub trait UniformSampler {
    /// A value drawn uniformly between `lo` and `hi`.
    ///
    /// This is `lo + (hi - lo) * u` for `u` in `[0, 1)`, so `lo == hi`
    /// yields `lo` and `lo > hi` is allowed.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;

    /// An index drawn uniformly from `0..len`.
    ///
    /// `len` must be nonzero.
    fn choose(&mut self, len: usize) -> usize;
}

impl<S: UniformSampler + ?Sized> UniformSampler for &mut S {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        (**self).uniform(lo, hi)
    }

    fn choose(&mut self, len: usize) -> usize {
        (**self).choose(len)
    }
}

/// Adapts a [`rand`] generator.
///
/// ```
/// use fragment::{Fragment, RngSampler, Variant};
///
/// let mut sampler = RngSampler(rand::thread_rng());
/// let frag = Fragment::new(Variant::Tame, 1.0, 0.0, 3, &mut sampler);
/// assert_eq!(frag.hinges().len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct RngSampler<R>(pub R);

impl<R: Rng> UniformSampler for RngSampler<R> {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let u: f64 = self.0.gen();
        lo + (hi - lo) * u
    }

    fn choose(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.0.gen_range(0, len)
    }
}

/// Replays a fixed cycle of unit values.
///
/// Each call consumes the next value `u` (clamped to `[0, 1]`) and wraps
/// around at the end. `uniform` maps `u` onto `lo..hi`; `choose` maps it onto
/// an index, with `u == 1` selecting the last one.
#[derive(Clone, Debug)]
pub struct SequenceSampler {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceSampler {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<f64>) -> SequenceSampler {
        assert!(!values.is_empty(), "sequence sampler needs at least one value");
        SequenceSampler { values, pos: 0 }
    }

    /// A sampler that always yields the same unit value.
    pub fn constant(u: f64) -> SequenceSampler {
        SequenceSampler::new(vec![u])
    }

    fn next_unit(&mut self) -> f64 {
        let u = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        u.max(0.0).min(1.0)
    }
}

impl UniformSampler for SequenceSampler {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let u = self.next_unit();
        lo + (hi - lo) * u
    }

    fn choose(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let u = self.next_unit();
        ((u * len as f64) as usize).min(len - 1)
    }
}
