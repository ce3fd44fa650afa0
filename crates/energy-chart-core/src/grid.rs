// File: crates/energy-chart-core/src/grid.rs
// Summary: Gridline and tick value helpers.

/// Most gridlines a background may carry.
pub const MAX_GRIDLINES: usize = 10_000;

/// Multiples of `increment` strictly below `max`: `increment, 2·increment, …`.
/// Empty for a non-positive increment; at most [`MAX_GRIDLINES`] values.
pub fn gridline_values(increment: f64, max: f64) -> Vec<f64> {
    if !(increment > 0.0) || !increment.is_finite() {
        return Vec::new();
    }
    (1..)
        .map(|k| increment * k as f64)
        .take_while(|v| *v < max && (max - v).abs() > increment * 1e-9)
        .take(MAX_GRIDLINES)
        .collect()
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// `0, 10, …, 100`, the default Y ticks of the line graph.
pub fn default_percent_ticks() -> Vec<f64> {
    (0..=10).map(|i| i as f64 * 10.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gridlines_exclude_max() {
        assert_eq!(gridline_values(10.0, 100.0), vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0]);
        assert_eq!(gridline_values(25.0, 60.0), vec![25.0, 50.0]);
    }

    #[test]
    fn fractional_increment_does_not_drift_onto_max() {
        let v = gridline_values(0.1, 1.0);
        assert_eq!(v.len(), 9);
    }

    #[test]
    fn non_positive_increment_yields_nothing() {
        assert!(gridline_values(0.0, 10.0).is_empty());
        assert!(gridline_values(-1.0, 10.0).is_empty());
    }

    #[test]
    fn gridline_count_is_capped() {
        assert_eq!(gridline_values(0.001, 1e12).len(), MAX_GRIDLINES);
    }

    #[test]
    fn linspace_endpoints() {
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
    }
}
