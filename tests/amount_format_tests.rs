use dual_axis_chart::api::{AmountFormat, format_amount, format_count_tick};

#[test]
fn amounts_render_in_whole_thousands() {
    assert_eq!(format_amount(0.0), "₹0");
    assert_eq!(format_amount(20_000.0), "₹20k");
    assert_eq!(format_amount(90_000.0), "₹90k");
    assert_eq!(format_amount(100_000.0), "₹100k");
}

#[test]
fn amounts_round_to_nearest_thousand() {
    assert_eq!(format_amount(12_345.0), "₹12k");
    assert_eq!(format_amount(12_500.0), "₹13k");
    assert_eq!(format_amount(999.0), "₹1k");
    // Sub-500 amounts round down to zero thousands but keep the suffix.
    assert_eq!(format_amount(400.0), "₹0k");
}

#[test]
fn custom_symbol_and_suffix_are_applied() {
    let format = AmountFormat {
        currency_symbol: "$".to_owned(),
        thousands_suffix: "K".to_owned(),
    };
    assert_eq!(format.format(0.0), "$0");
    assert_eq!(format.format(45_600.0), "$46K");
}

#[test]
fn non_finite_values_render_as_themselves() {
    assert_eq!(format_amount(f64::NAN), "NaN");
    assert_eq!(format_amount(f64::INFINITY), "inf");
    assert_eq!(format_amount(f64::NEG_INFINITY), "-inf");
    assert_eq!(format_count_tick(f64::INFINITY), "inf");
    assert_eq!(format_count_tick(f64::NAN), "NaN");
}
