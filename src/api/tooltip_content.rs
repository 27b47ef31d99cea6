use crate::core::{DataPoint, SeriesKind};
use crate::interaction::{PointRef, TooltipPayload};

use super::ChartConfig;
use super::axis_label_format::format_count_value;

/// Builds the tooltip payload for one series value of `point`.
///
/// Title is `<label> • <series name>`. The primary series shows the raw count
/// with its unit, the secondary series the compact amount format. Every field
/// is copied so later dataset changes cannot alter a shown tooltip.
#[must_use]
pub fn tooltip_payload(
    config: &ChartConfig,
    point: &DataPoint,
    target: PointRef,
) -> TooltipPayload {
    let style = config.series_style(target.series);
    let value = match target.series {
        SeriesKind::Primary => {
            format_count_value(point.primary_value, style.value_unit.as_deref())
        }
        SeriesKind::Secondary => config.amount_format.format(point.secondary_value),
    };

    TooltipPayload::new(
        format!("{} • {}", point.label, style.name),
        value,
        style.color.to_css_hex(),
    )
    .for_point(target)
}
