//! Fragments and their refinement.

use std::fmt;

use kurbo::{Affine, BezPath, Point, Vec2};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::RefineError;
use crate::layout::Variant;
use crate::params::FragmentParams;
use crate::sampler::UniformSampler;

/// A curve from (0, 0) to (1, 1) through a sequence of hinges.
///
/// A fragment plays two roles. As a curve it can be refined, which replaces
/// every segment with a scaled copy of some template's interior, adding one
/// level of detail. As a template it supplies those interiors to other
/// fragments.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_")
)]
pub struct Fragment {
    variant: Variant,
    peak: f64,
    valley: f64,
    /// Interior hinge count at construction; refinement does not change it.
    num: usize,
    hinges: Vec<Point>,
}

impl Fragment {
    /// Create a fragment with `num` randomly placed interior hinges.
    pub fn new(
        variant: Variant,
        peak: f64,
        valley: f64,
        num: usize,
        sampler: &mut impl UniformSampler,
    ) -> Fragment {
        let hinges = variant.create_hinges(peak, valley, num, sampler);
        Fragment {
            variant,
            peak,
            valley,
            num,
            hinges,
        }
    }

    pub fn from_params(params: &FragmentParams, sampler: &mut impl UniformSampler) -> Fragment {
        Fragment::new(params.variant, params.peak, params.valley, params.num, sampler)
    }

    /// Create a fragment from an explicit hinge sequence.
    ///
    /// This is mostly useful for building template pools by hand. The hinges
    /// are taken as given: they need not start at (0, 0) or end at (1, 1),
    /// and a template whose endpoints share an x or a y will make any
    /// refinement that picks it fail.
    pub fn from_hinges(hinges: Vec<Point>) -> Fragment {
        let defaults = FragmentParams::default();
        Fragment {
            variant: defaults.variant,
            peak: defaults.peak,
            valley: defaults.valley,
            num: hinges.len().saturating_sub(2),
            hinges,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn peak(&self) -> f64 {
        self.peak
    }

    pub fn valley(&self) -> f64 {
        self.valley
    }

    pub fn num(&self) -> usize {
        self.num
    }

    pub fn hinges(&self) -> &[Point] {
        &self.hinges
    }

    /// The hinges strictly between the first and the last.
    pub fn interior(&self) -> &[Point] {
        match self.hinges.len() {
            0..=2 => &[],
            n => &self.hinges[1..n - 1],
        }
    }

    /// The points copied into a segment when this fragment is a template.
    ///
    /// These are the last `num` interior hinges. Until the fragment is
    /// refined that is the whole interior.
    fn template_points(&self) -> &[Point] {
        let end = self.hinges.len().saturating_sub(1);
        let start = end.saturating_sub(self.num).max(1).min(end);
        &self.hinges[start..end]
    }

    /// Displacement from the first hinge to the last.
    fn span(&self) -> Vec2 {
        match (self.hinges.first(), self.hinges.last()) {
            (Some(&first), Some(&last)) => last - first,
            _ => Vec2::new(0.0, 0.0),
        }
    }

    /// Refine using a freshly generated pool of templates.
    ///
    /// The pool holds `num` fragments of the same variant, each with `num`
    /// interior hinges.
    pub fn refine(&mut self, sampler: &mut impl UniformSampler) -> Result<(), RefineError> {
        self.compute_iteration(&[], sampler)
    }

    /// Refine `depth` times in a row, stopping at the first failure.
    pub fn refine_times(
        &mut self,
        depth: usize,
        sampler: &mut impl UniformSampler,
    ) -> Result<(), RefineError> {
        for _ in 0..depth {
            self.refine(sampler)?;
        }
        Ok(())
    }

    /// Perform one refinement step.
    ///
    /// Every segment gets `num` points of a template picked uniformly (with
    /// replacement) from `pool`, scaled independently in x
    /// and y so that the template's span matches the segment's. An empty
    /// `pool` means a new one is generated for this call, as in
    /// [`refine`](Fragment::refine).
    ///
    /// Segments are processed from the last to the first. If a chosen
    /// template is degenerate the call stops there and returns an error;
    /// the segments already processed stay refined.
    pub fn compute_iteration(
        &mut self,
        pool: &[Fragment],
        sampler: &mut impl UniformSampler,
    ) -> Result<(), RefineError> {
        let generated;
        let pool = if pool.is_empty() {
            generated = self.generate_pool(sampler);
            &generated[..]
        } else {
            pool
        };
        let n_seg = self.hinges.len().saturating_sub(1);
        if n_seg == 0 {
            return Ok(());
        }
        if pool.is_empty() {
            return Err(RefineError::EmptyPool);
        }
        debug!(
            segments = n_seg,
            pool = pool.len(),
            hinges = self.hinges.len(),
            "refining fragment"
        );

        // Insertions after index i never move indices below i, so walking
        // backwards keeps the remaining segment boundaries in place.
        for i in (0..n_seg).rev() {
            let template = &pool[sampler.choose(pool.len())];
            let span = template.span();
            if span.x == 0.0 || span.y == 0.0 {
                warn!(
                    segment = i,
                    x_span = span.x,
                    y_span = span.y,
                    "degenerate template, aborting refinement"
                );
                return Err(RefineError::DegenerateTemplate {
                    x_span: span.x,
                    y_span: span.y,
                });
            }
            let p0 = self.hinges[i];
            let d = self.hinges[i + 1] - p0;
            let a = Affine::new([d.x / span.x, 0.0, 0.0, d.y / span.y, p0.x, p0.y]);
            self.hinges
                .splice(i + 1..i + 1, template.template_points().iter().map(|&p| a * p));
        }

        debug!(hinges = self.hinges.len(), "refinement complete");
        Ok(())
    }

    fn generate_pool(&self, sampler: &mut impl UniformSampler) -> Vec<Fragment> {
        let defaults = FragmentParams::default();
        (0..self.num)
            .map(|_| {
                Fragment::new(
                    self.variant,
                    defaults.peak,
                    defaults.valley,
                    self.num,
                    sampler,
                )
            })
            .collect()
    }

    /// The x and y coordinates of the hinges, as two parallel lists.
    pub fn xy_lists(&self) -> (Vec<f64>, Vec<f64>) {
        self.hinges.iter().map(|p| (p.x, p.y)).unzip()
    }

    /// Ratios `y[i] / y[i - 1]` of consecutive hinges.
    ///
    /// Pairs whose first y is zero are left out, so the result may be
    /// shorter than the number of segments.
    pub fn compute_deltas(&self) -> Vec<f64> {
        self.hinges
            .windows(2)
            .filter(|w| w[0].y != 0.0)
            .map(|w| w[1].y / w[0].y)
            .collect()
    }

    /// The hinges as a polyline.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        if let Some((&first, rest)) = self.hinges.split_first() {
            path.move_to(first);
            for &p in rest {
                path.line_to(p);
            }
        }
        path
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.hinges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({:?}, {:?})", p.x, p.y)?;
        }
        write!(f, "]")
    }
}
