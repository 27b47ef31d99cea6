use approx::assert_abs_diff_eq;
use dual_axis_chart::ChartError;
use dual_axis_chart::core::{AxisScale, AxisScaleOptions, PlotRegion};

fn region() -> PlotRegion {
    PlotRegion::new(90.0, 810.0, 70.0, 450.0).expect("valid region")
}

#[test]
fn count_axis_rounds_up_to_next_ten() {
    let counts = [10.0, 20.0, 30.0, 50.0, 40.0, 60.0, 100.0];
    let scale = AxisScale::from_values(&counts, AxisScaleOptions::new(6, 10.0)).expect("scale");
    assert_eq!(scale.domain(), (0.0, 100.0));

    let scale =
        AxisScale::from_values(&[3.0, 41.0], AxisScaleOptions::new(6, 10.0)).expect("scale");
    assert_eq!(scale.domain_max(), 50.0);
}

#[test]
fn amount_axis_applies_padding_before_rounding() {
    let options = AxisScaleOptions::new(6, 10_000.0).with_padding_fraction(0.1);
    let amounts = [20_000.0, 30_000.0, 40_000.0, 70_000.0, 60_000.0, 80_000.0, 90_000.0];

    let scale = AxisScale::from_values(&amounts, options).expect("scale");
    assert_eq!(scale.domain_max(), 100_000.0);
}

#[test]
fn empty_and_all_zero_values_fall_back_to_one_rounding_unit() {
    let options = AxisScaleOptions::new(6, 10_000.0).with_padding_fraction(0.1);

    let empty = AxisScale::from_values(&[], options).expect("empty scale");
    assert_eq!(empty.domain_max(), 10_000.0);

    let zeros = AxisScale::from_values(&[0.0, 0.0, 0.0], options).expect("zero scale");
    assert_eq!(zeros.domain_max(), 10_000.0);
}

#[test]
fn tick_values_interpolate_domain_inclusively() {
    let scale = AxisScale::new(100_000.0, 6).expect("scale");
    let ticks = scale.tick_values();
    assert_eq!(
        ticks.as_slice(),
        &[0.0, 20_000.0, 40_000.0, 60_000.0, 80_000.0, 100_000.0]
    );

    let two = AxisScale::new(7.0, 2).expect("scale").tick_values();
    assert_eq!(two.as_slice(), &[0.0, 7.0]);
}

#[test]
fn tick_count_below_two_is_a_configuration_error() {
    for tick_count in [0, 1] {
        let result = AxisScale::from_values(&[5.0], AxisScaleOptions::new(tick_count, 10.0));
        assert!(matches!(
            result,
            Err(ChartError::InvalidTickCount { tick_count: count }) if count == tick_count
        ));
    }
    assert!(matches!(
        AxisScale::new(10.0, 1),
        Err(ChartError::InvalidTickCount { tick_count: 1 })
    ));
}

#[test]
fn invalid_rounding_and_padding_are_rejected() {
    for unit in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        let result = AxisScale::from_values(&[5.0], AxisScaleOptions::new(6, unit));
        assert!(matches!(result, Err(ChartError::InvalidConfig(_))));
    }

    let negative_padding = AxisScaleOptions::new(6, 10.0).with_padding_fraction(-0.1);
    assert!(matches!(
        AxisScale::from_values(&[5.0], negative_padding),
        Err(ChartError::InvalidConfig(_))
    ));
}

#[test]
fn negative_or_non_finite_values_are_invalid_data() {
    let options = AxisScaleOptions::new(6, 10.0);
    for bad in [-1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            AxisScale::from_values(&[1.0, bad], options),
            Err(ChartError::InvalidData(_))
        ));
    }
}

#[test]
fn value_to_pixel_maps_domain_onto_inverted_region() {
    let region = region();
    let counts = AxisScale::new(100.0, 6).expect("scale");
    let amounts = AxisScale::new(100_000.0, 6).expect("scale");

    assert_eq!(counts.value_to_pixel(0.0, region), 450.0);
    assert_eq!(counts.value_to_pixel(100.0, region), 70.0);
    assert_abs_diff_eq!(counts.value_to_pixel(10.0, region), 412.0, epsilon = 1e-9);
    assert_abs_diff_eq!(amounts.value_to_pixel(20_000.0, region), 374.0, epsilon = 1e-9);
}

#[test]
fn out_of_domain_values_extrapolate_beyond_region() {
    let region = region();
    let scale = AxisScale::new(100.0, 6).expect("scale");

    let above = scale.value_to_pixel(150.0, region);
    assert!(above < region.top());
    assert_abs_diff_eq!(above, -120.0, epsilon = 1e-9);
    assert!(!scale.contains(150.0));
}

#[test]
fn pixel_to_value_inverts_value_to_pixel() {
    let region = region();
    let scale = AxisScale::new(100_000.0, 6).expect("scale");

    let pixel = scale.value_to_pixel(42_500.0, region);
    let recovered = scale.pixel_to_value(pixel, region);
    assert_abs_diff_eq!(recovered, 42_500.0, epsilon = 1e-6);
}

#[test]
fn explicit_scale_requires_positive_domain() {
    assert!(matches!(AxisScale::new(0.0, 6), Err(ChartError::InvalidData(_))));
    assert!(matches!(AxisScale::new(f64::NAN, 6), Err(ChartError::InvalidData(_))));
}

#[test]
fn domain_ends_land_exactly_on_fractional_region_edges() {
    let scale = AxisScale::new(100.0, 6).expect("scale");
    for (top, bottom) in [(0.1, 1.1), (70.3, 450.7), (33.3, 1_000.1), (0.7, 2.9)] {
        let region = PlotRegion::new(0.0, 10.0, top, bottom).expect("region");
        assert_eq!(scale.value_to_pixel(100.0, region), top);
        assert_eq!(scale.value_to_pixel(0.0, region), bottom);
        assert_eq!(scale.pixel_to_value(top, region), 100.0);
    }
}
