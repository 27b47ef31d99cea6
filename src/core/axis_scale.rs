use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlotRegion;
use crate::error::{ChartError, ChartResult};

/// Tuning controls for zero-based value-axis autoscaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScaleOptions {
    pub tick_count: usize,
    /// Headroom added above the data maximum, as a fraction of it.
    #[serde(default)]
    pub padding_fraction: Option<f64>,
    /// The domain maximum is rounded up to a multiple of this unit.
    pub rounding_unit: f64,
}

impl Default for AxisScaleOptions {
    fn default() -> Self {
        Self {
            tick_count: 6,
            padding_fraction: None,
            rounding_unit: 10.0,
        }
    }
}

impl AxisScaleOptions {
    #[must_use]
    pub fn new(tick_count: usize, rounding_unit: f64) -> Self {
        Self {
            tick_count,
            padding_fraction: None,
            rounding_unit,
        }
    }

    #[must_use]
    pub fn with_padding_fraction(mut self, padding_fraction: f64) -> Self {
        self.padding_fraction = Some(padding_fraction);
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        validate_tick_count(self.tick_count)?;

        if !self.rounding_unit.is_finite() || self.rounding_unit <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "axis rounding unit must be finite and > 0".to_owned(),
            ));
        }

        if let Some(padding) = self.padding_fraction {
            if !padding.is_finite() || padding < 0.0 {
                return Err(ChartError::InvalidConfig(
                    "axis padding fraction must be finite and >= 0".to_owned(),
                ));
            }
        }

        Ok(self)
    }
}

/// Zero-based linear value axis mapped onto an inverted Y pixel axis.
///
/// The domain always starts at `0` and ends at a "nice" maximum. Mapping is
/// not clamped: values above the domain land above the plot region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    domain_min: f64,
    domain_max: f64,
    tick_count: usize,
}

impl AxisScale {
    /// Creates a scale with an explicit domain maximum.
    pub fn new(domain_max: f64, tick_count: usize) -> ChartResult<Self> {
        validate_tick_count(tick_count)?;
        if !domain_max.is_finite() || domain_max <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis domain max must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_min: 0.0,
            domain_max,
            tick_count,
        })
    }

    /// Fits the domain to `values` using padding and nice rounding.
    ///
    /// Empty or all-zero input yields a domain of one rounding unit.
    pub fn from_values(values: &[f64], options: AxisScaleOptions) -> ChartResult<Self> {
        let options = options.validate()?;

        let mut max = 0.0_f64;
        for &value in values {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(
                    "axis values must be finite and >= 0".to_owned(),
                ));
            }
            max = max.max(value);
        }

        let padded = match options.padding_fraction {
            Some(padding) => max * (1.0 + padding),
            None => max,
        };
        let rounded = (padded / options.rounding_unit).ceil() * options.rounding_unit;
        let domain_max = if rounded > 0.0 {
            rounded
        } else {
            options.rounding_unit
        };

        Ok(Self {
            domain_min: 0.0,
            domain_max,
            tick_count: options.tick_count,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn domain_min(self) -> f64 {
        self.domain_min
    }

    #[must_use]
    pub fn domain_max(self) -> f64 {
        self.domain_max
    }

    #[must_use]
    pub fn tick_count(self) -> usize {
        self.tick_count
    }

    /// Evenly spaced tick values from `domain_min` to `domain_max` inclusive.
    #[must_use]
    pub fn tick_values(self) -> SmallVec<[f64; 8]> {
        let span = self.domain_max - self.domain_min;
        let intervals = (self.tick_count - 1) as f64;
        (0..self.tick_count)
            .map(|index| self.domain_min + (index as f64 * span) / intervals)
            .collect()
    }

    /// Maps `value` onto the inverted pixel axis of `region`.
    ///
    /// Interpolation starts from the nearer edge, so `domain_min` lands
    /// exactly on `bottom` and `domain_max` exactly on `top`.
    #[must_use]
    pub fn value_to_pixel(self, value: f64, region: PlotRegion) -> f64 {
        let ratio = (value - self.domain_min) / (self.domain_max - self.domain_min);
        if ratio <= 0.5 {
            region.bottom() - ratio * region.height()
        } else {
            region.top() + (1.0 - ratio) * region.height()
        }
    }

    #[must_use]
    pub fn pixel_to_value(self, pixel: f64, region: PlotRegion) -> f64 {
        let ratio = (region.bottom() - pixel) / region.height();
        let span = self.domain_max - self.domain_min;
        if ratio <= 0.5 {
            self.domain_min + ratio * span
        } else {
            self.domain_max - (1.0 - ratio) * span
        }
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.domain_min..=self.domain_max).contains(&value)
    }
}

fn validate_tick_count(tick_count: usize) -> ChartResult<()> {
    if tick_count < 2 {
        return Err(ChartError::InvalidTickCount { tick_count });
    }
    Ok(())
}
