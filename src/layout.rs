//! Placement policies for the initial hinges of a fragment.

use kurbo::Point;
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};
use tracing::trace;

use crate::sampler::UniformSampler;
use crate::util;

/// How the interior hinges of a new fragment are placed.
///
/// Every variant starts at (0, 0), ends at (1, 1) and places `num` hinges in
/// between. Refinement does not depend on the variant; it only decides the
/// starting shape, and the shape of the templates generated during
/// refinement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub enum Variant {
    /// Each x is drawn from `[previous x, 1]`, each y from `[valley, peak]`.
    ///
    /// The x values never decrease but may repeat, and a run of draws tends
    /// to crowd up against 1.
    Unconstrained,
    /// Evenly spaced x, each y drawn from `[valley, peak]`.
    UniformX,
    /// Evenly spaced x, with y bounded by the neighboring slots.
    ///
    /// The y of slot `i` is drawn from
    /// `[max(valley, x[i - 1]), min(peak, x[i + 1])]`, where `x` are the
    /// evenly spaced slot positions. Note the bounds come from the *x*
    /// positions of the neighbors, which keeps the curve near the diagonal.
    Tame,
}

impl Default for Variant {
    fn default() -> Variant {
        Variant::Unconstrained
    }
}

impl Variant {
    /// Build the initial hinge sequence, `num + 2` points long.
    ///
    /// No validation is done: `peak < valley` simply produces draws from the
    /// reversed range.
    pub fn create_hinges(
        self,
        peak: f64,
        valley: f64,
        num: usize,
        sampler: &mut impl UniformSampler,
    ) -> Vec<Point> {
        let hinges = match self {
            Variant::Unconstrained => {
                let mut hinges = Vec::with_capacity(num + 2);
                let mut prev = Point::ORIGIN;
                hinges.push(prev);
                for _ in 0..num {
                    let x = sampler.uniform(prev.x, 1.0);
                    let y = sampler.uniform(valley, peak);
                    prev = Point::new(x, y);
                    hinges.push(prev);
                }
                hinges.push(Point::new(1.0, 1.0));
                hinges
            }
            Variant::UniformX => {
                let xs = util::linspace_unit(num + 2);
                let mut hinges = Vec::with_capacity(num + 2);
                hinges.push(Point::new(xs[0], 0.0));
                for &x in &xs[1..=num] {
                    hinges.push(Point::new(x, sampler.uniform(valley, peak)));
                }
                hinges.push(Point::new(xs[num + 1], 1.0));
                hinges
            }
            Variant::Tame => {
                let xs = util::linspace_unit(num + 2);
                let mut hinges = Vec::with_capacity(num + 2);
                hinges.push(Point::new(xs[0], 0.0));
                for i in 1..=num {
                    let lo = valley.max(xs[i - 1]);
                    let hi = peak.min(xs[i + 1]);
                    hinges.push(Point::new(xs[i], sampler.uniform(lo, hi)));
                }
                hinges.push(Point::new(xs[num + 1], 1.0));
                hinges
            }
        };
        trace!(variant = ?self, num, "created hinges");
        hinges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::{RngSampler, SequenceSampler};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ALL: [Variant; 3] = [Variant::Unconstrained, Variant::UniformX, Variant::Tame];

    #[test]
    fn endpoints_fixed() {
        let mut s = RngSampler(StdRng::seed_from_u64(1));
        for &variant in &ALL {
            for num in 0..6 {
                let hinges = variant.create_hinges(1.0, 0.0, num, &mut s);
                assert_eq!(hinges.len(), num + 2);
                assert_eq!(hinges[0], Point::new(0.0, 0.0));
                assert_eq!(hinges[num + 1], Point::new(1.0, 1.0));
            }
        }
    }

    #[test]
    fn unconstrained_x_non_decreasing() {
        let mut s = RngSampler(StdRng::seed_from_u64(2));
        for _ in 0..50 {
            let hinges = Variant::Unconstrained.create_hinges(2.0, -1.0, 8, &mut s);
            for w in hinges.windows(2) {
                assert!(w[0].x <= w[1].x);
            }
            for p in &hinges[1..9] {
                assert!(p.y >= -1.0 && p.y <= 2.0);
            }
        }
    }

    #[test]
    fn unconstrained_scripted_draws() {
        // x draws alternate with y draws.
        let mut s = SequenceSampler::new(vec![0.5, 0.25, 0.5, 1.0]);
        let hinges = Variant::Unconstrained.create_hinges(1.0, 0.0, 2, &mut s);
        assert_eq!(
            hinges,
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.5, 0.25),
                Point::new(0.75, 1.0),
                Point::new(1.0, 1.0),
            ]
        );
    }

    #[test]
    fn uniform_x_is_evenly_spaced() {
        let mut s = RngSampler(StdRng::seed_from_u64(3));
        for &variant in &[Variant::UniformX, Variant::Tame] {
            for num in 0..10 {
                let hinges = variant.create_hinges(1.0, 0.0, num, &mut s);
                let xs: Vec<f64> = hinges.iter().map(|p| p.x).collect();
                assert_eq!(xs, util::linspace_unit(num + 2));
            }
        }
    }

    #[test]
    fn uniform_x_y_in_range() {
        let mut s = RngSampler(StdRng::seed_from_u64(4));
        let hinges = Variant::UniformX.create_hinges(5.0, 3.0, 20, &mut s);
        for p in &hinges[1..21] {
            assert!(p.y >= 3.0 && p.y <= 5.0);
        }
    }

    #[test]
    fn tame_bounded_by_neighbor_slots() {
        let mut s = RngSampler(StdRng::seed_from_u64(5));
        for &(peak, valley) in &[(1.0, 0.0), (0.6, 0.3), (3.0, -2.0)] {
            let num = 7;
            let xs = util::linspace_unit(num + 2);
            let hinges = Variant::Tame.create_hinges(peak, valley, num, &mut s);
            for i in 1..=num {
                let lo = f64::max(valley, xs[i - 1]);
                let hi = f64::min(peak, xs[i + 1]);
                let y = hinges[i].y;
                assert!(y >= lo.min(hi) && y <= lo.max(hi), "slot {} y {}", i, y);
            }
        }
    }

    #[test]
    fn tame_scripted_bounds() {
        // num = 1: slots are 0, 0.5, 1, so y is drawn from [0, 1].
        let mut s = SequenceSampler::constant(0.25);
        let hinges = Variant::Tame.create_hinges(1.0, 0.0, 1, &mut s);
        assert_eq!(hinges[1], Point::new(0.5, 0.25));
        // valley above the previous slot raises the lower bound.
        let mut s = SequenceSampler::constant(0.0);
        let hinges = Variant::Tame.create_hinges(1.0, 0.4, 1, &mut s);
        assert_eq!(hinges[1], Point::new(0.5, 0.4));
        // peak below the next slot lowers the upper bound.
        let mut s = SequenceSampler::constant(1.0);
        let hinges = Variant::Tame.create_hinges(0.8, 0.0, 1, &mut s);
        assert_eq!(hinges[1], Point::new(0.5, 0.8));
    }
}
