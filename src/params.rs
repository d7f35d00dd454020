#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::layout::Variant;

/// Construction parameters for a [`Fragment`](crate::Fragment).
///
/// Missing fields fall back to the defaults when deserializing, so
/// `{"num": 4}` is a complete description.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", default)
)]
pub struct FragmentParams {
    pub variant: Variant,
    /// Upper bound for random y values.
    pub peak: f64,
    /// Lower bound for random y values.
    pub valley: f64,
    /// Number of hinges between the two endpoints.
    pub num: usize,
}

impl Default for FragmentParams {
    fn default() -> FragmentParams {
        FragmentParams {
            variant: Variant::default(),
            peak: 1.0,
            valley: 0.0,
            num: 2,
        }
    }
}

impl FragmentParams {
    pub fn new() -> FragmentParams {
        FragmentParams::default()
    }

    pub fn with_variant(mut self, variant: Variant) -> FragmentParams {
        self.variant = variant;
        self
    }

    pub fn with_peak(mut self, peak: f64) -> FragmentParams {
        self.peak = peak;
        self
    }

    pub fn with_valley(mut self, valley: f64) -> FragmentParams {
        self.valley = valley;
        self
    }

    pub fn with_num(mut self, num: usize) -> FragmentParams {
        self.num = num;
        self
    }
}
