use serde::{Deserialize, Serialize};

/// Compact monetary label format: whole thousands with a unit suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountFormat {
    pub currency_symbol: String,
    pub thousands_suffix: String,
}

impl Default for AmountFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_owned(),
            thousands_suffix: "k".to_owned(),
        }
    }
}

impl AmountFormat {
    /// Formats `value` rounded to the nearest thousand, e.g. `₹12k`.
    ///
    /// Zero renders as a bare `₹0` without the suffix. Non-finite values
    /// render as `NaN`, `inf` or `-inf`.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        if value == 0.0 {
            return format!("{}0", self.currency_symbol);
        }
        let thousands = (value / 1_000.0).round();
        format!(
            "{}{thousands}{}",
            self.currency_symbol, self.thousands_suffix
        )
    }
}

/// Formats an amount with the default `₹`/`k` format.
#[must_use]
pub fn format_amount(value: f64) -> String {
    AmountFormat::default().format(value)
}

/// Left-axis tick label: the tick value rounded to an integer.
#[must_use]
pub fn format_count_tick(value: f64) -> String {
    value.round().to_string()
}

/// Count with an optional unit, e.g. `10 txns`.
#[must_use]
pub fn format_count_value(value: f64, unit: Option<&str>) -> String {
    match unit {
        Some(unit) if !unit.is_empty() => format!("{value} {unit}"),
        _ => format!("{value}"),
    }
}
