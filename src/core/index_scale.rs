use serde::{Deserialize, Serialize};

use crate::core::PlotRegion;

/// Maps dataset indices onto evenly spaced x positions across a plot region.
///
/// The first index sits on the left edge and the last on the right edge. A
/// single point (or none) uses a zero step, so everything lands on `left`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexScale {
    left: f64,
    step: f64,
    count: usize,
}

impl IndexScale {
    #[must_use]
    pub fn new(region: PlotRegion, count: usize) -> Self {
        let step = if count > 1 {
            region.width() / (count - 1) as f64
        } else {
            0.0
        };

        Self {
            left: region.left(),
            step,
            count,
        }
    }

    #[must_use]
    pub fn step(self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn x_position(self, index: usize) -> f64 {
        self.left + index as f64 * self.step
    }
}
