//! Random self-affine fractal curves.
//!
//! A [`Fragment`] is a curve from (0, 0) to (1, 1) through a handful of
//! randomly placed hinges. Refining it replaces every segment with a copy of
//! another fragment's interior, stretched to fit the segment, so each step
//! adds a level of jagged detail. There is no fixed rule: every segment gets
//! its own randomly chosen template, and by default the templates are fresh
//! random fragments themselves.
//!
//! ```
//! use fragment::{Fragment, RngSampler, Variant};
//!
//! let mut sampler = RngSampler(rand::thread_rng());
//! let mut frag = Fragment::new(Variant::UniformX, 1.0, 0.0, 2, &mut sampler);
//! frag.refine_times(3, &mut sampler).unwrap();
//! let (xs, ys) = frag.xy_lists();
//! assert_eq!(xs.len(), ys.len());
//! ```
//!
//! All randomness goes through [`UniformSampler`]; use a seeded generator or
//! a [`SequenceSampler`] for reproducible curves.

mod error;
mod fragment;
mod layout;
mod params;
mod sampler;
mod util;

pub use crate::error::RefineError;
pub use crate::fragment::Fragment;
pub use crate::layout::Variant;
pub use crate::params::FragmentParams;
pub use crate::sampler::{RngSampler, SequenceSampler, UniformSampler};
