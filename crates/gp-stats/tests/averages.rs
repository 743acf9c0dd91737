//! Averages computed from parsed logs.

use gp_core::{GasId, LogLayout, Quantity, approx_eq};
use gp_log::parse_str;
use gp_stats::{DEFAULT_WINDOW, StatsError, compute_averages};

/// Gas g carries flow `flow * (g + 1)` and pressure `pressure`.
fn line(iteration: i64, flow: f64, pressure: f64) -> String {
    let mut fields = vec![iteration.to_string()];
    for g in 0..7 {
        fields.push("1".to_string());
        fields.push("1".to_string());
        fields.push((flow * (g + 1) as f64).to_string());
        fields.push(pressure.to_string());
    }
    fields.join(" ")
}

fn log_of(flows: &[f64]) -> String {
    flows
        .iter()
        .enumerate()
        .map(|(i, &f)| line(i as i64, f, 2.0 * f))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn three_line_scenario() {
    let log = parse_str(&log_of(&[10.0, 20.0, 30.0]), &LogLayout::default()).unwrap();
    let averages = compute_averages(&log, DEFAULT_WINDOW).unwrap();

    assert_eq!(averages.window, DEFAULT_WINDOW);
    assert_eq!(averages.gas_count(), 7);
    assert_eq!(averages.get(GasId::from_index(0), Quantity::Flow), Some(20.0));
    assert_eq!(averages.get(GasId::from_index(2), Quantity::Flow), Some(60.0));
    assert_eq!(
        averages.get(GasId::from_index(0), Quantity::Pressure),
        Some(40.0)
    );
}

#[test]
fn single_line_averages_equal_the_line() {
    let log = parse_str(&line(7, 1.25, 3.5), &LogLayout::default()).unwrap();
    let averages = compute_averages(&log, DEFAULT_WINDOW).unwrap();

    for (gas, value) in averages.iter(Quantity::Flow) {
        assert_eq!(value, 1.25 * (gas.index() + 1) as f64);
    }
    assert!(averages.iter(Quantity::Pressure).all(|(_, v)| v == 3.5));
}

#[test]
fn the_101st_line_pushes_out_the_first() {
    let layout = LogLayout::default();
    let mut flows: Vec<f64> = (1..=100).map(|i| i as f64).collect();
    let hundred = compute_averages(&parse_str(&log_of(&flows), &layout).unwrap(), 100).unwrap();

    flows.push(500.0);
    let hundred_one =
        compute_averages(&parse_str(&log_of(&flows), &layout).unwrap(), 100).unwrap();

    let gas0 = GasId::from_index(0);
    let before = hundred.get(gas0, Quantity::Flow).unwrap();
    let after = hundred_one.get(gas0, Quantity::Flow).unwrap();
    // first value (1.0) leaves the window, 500.0 enters it
    let expected_shift = (500.0 - 1.0) / 100.0;
    assert!(approx_eq(before, 50.5));
    assert!(approx_eq(after - before, expected_shift));
}

#[test]
fn repeated_computation_is_identical() {
    let log = parse_str(&log_of(&[0.1, 0.2, 0.3, 0.4]), &LogLayout::default()).unwrap();
    let first = compute_averages(&log, DEFAULT_WINDOW).unwrap();
    let second = compute_averages(&log, DEFAULT_WINDOW).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_log_is_insufficient_data() {
    let log = parse_str("\n\n", &LogLayout::default()).unwrap();
    let err = compute_averages(&log, DEFAULT_WINDOW).unwrap_err();
    assert_eq!(
        err,
        StatsError::InsufficientData {
            gas: GasId::from_index(0),
            quantity: Quantity::Flow,
        }
    );
    assert!(err.to_string().contains("no flow samples for gas 0"));
}

#[test]
fn zero_window_is_rejected() {
    let log = parse_str(&log_of(&[1.0]), &LogLayout::default()).unwrap();
    assert_eq!(
        compute_averages(&log, 0).unwrap_err(),
        StatsError::InvalidWindow { window: 0 }
    );
}
