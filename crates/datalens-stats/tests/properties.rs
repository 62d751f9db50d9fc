use std::num::NonZeroUsize;

use datalens_stats::{
    correlation::correlation_matrix,
    descriptive,
    histogram::Histogram,
    percentiles::quantile,
    regression::regress,
    summary::summarize,
    table::Table,
};
use proptest::prelude::*;

fn sample(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6_f64, min_len..=max_len)
}

/// Tables whose columns live at independent magnitudes between 1e-150 and 1e150.
fn tables(columns: usize, max_rows: usize) -> impl Strategy<Value = Table> {
    let rows =
        prop::collection::vec(prop::collection::vec(-1.0e3..1.0e3_f64, columns), 1..=max_rows);
    let exponents = prop::collection::vec(-150..=150_i32, columns);
    (rows, exponents).prop_map(move |(rows, exponents)| {
        let mut table = Table::new((0..columns).map(|i| format!("c{i}"))).unwrap();
        for row in rows {
            let row = row
                .iter()
                .zip(&exponents)
                .map(|(v, &e)| v * 10.0_f64.powi(e))
                .collect();
            table.push_row(row).unwrap();
        }
        table
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn summary_is_ordered(values in sample(1, 80)) {
        let s = summarize(&values, "v").unwrap();
        prop_assert_eq!(s.count, values.len());
        prop_assert!(s.min <= s.q1, "min {} > q1 {}", s.min, s.q1);
        prop_assert!(s.q1 <= s.median, "q1 {} > median {}", s.q1, s.median);
        prop_assert!(s.median <= s.q3, "median {} > q3 {}", s.median, s.q3);
        prop_assert!(s.q3 <= s.max, "q3 {} > max {}", s.q3, s.max);
        prop_assert!(values.contains(&s.mode));
        prop_assert!(s.variance >= 0.0);
        prop_assert!((s.std_dev * s.std_dev - s.variance).abs() <= 1e-6 * s.variance.max(1.0));
    }

    #[test]
    fn mean_stays_within_range(values in sample(1, 80)) {
        let mean = descriptive::mean(&values).unwrap();
        let min = descriptive::min(&values).unwrap();
        let max = descriptive::max(&values).unwrap();
        let slack = 1e-9 * max.abs().max(min.abs()).max(1.0);
        prop_assert!(mean >= min - slack && mean <= max + slack);
    }

    #[test]
    fn summary_is_deterministic(values in sample(1, 40)) {
        prop_assert_eq!(summarize(&values, "v").unwrap(), summarize(&values, "v").unwrap());
    }

    #[test]
    fn quantile_lies_within_sample(values in sample(1, 60), p in 0.0..=1.0_f64) {
        let q = quantile(&values, p).unwrap();
        prop_assert!(q >= descriptive::min(&values).unwrap());
        prop_assert!(q <= descriptive::max(&values).unwrap());
    }

    #[test]
    fn correlation_matrix_is_symmetric(table in tables(4, 30)) {
        let columns = table.columns().to_vec();
        let matrix = correlation_matrix(&table, &columns).unwrap();
        prop_assert_eq!(matrix.len(), columns.len());
        for i in 0..matrix.len() {
            let column = table.project(i);
            if descriptive::has_spread(&column) {
                prop_assert_eq!(matrix.get(i, i), Some(1.0));
            } else {
                prop_assert_eq!(matrix.get(i, i), None);
            }
            for j in 0..matrix.len() {
                prop_assert_eq!(
                    matrix.get(i, j).map(f64::to_bits),
                    matrix.get(j, i).map(f64::to_bits)
                );
                if let Some(r) = matrix.get(i, j) {
                    prop_assert!((-1.0..=1.0).contains(&r));
                }
            }
        }
    }

    #[test]
    fn regression_line_passes_through_endpoints(xs in sample(2, 50), ys in sample(2, 50)) {
        let len = xs.len().min(ys.len());
        let (xs, ys) = (&xs[..len], &ys[..len]);
        prop_assume!(descriptive::has_spread(xs));

        let result = regress(xs, ys).unwrap();
        let fit = result.fit();
        let [start, end] = result.line_points;
        prop_assert_eq!(start.x, descriptive::min(xs).unwrap());
        prop_assert_eq!(end.x, descriptive::max(xs).unwrap());
        prop_assert_eq!(start.y, fit.predict(start.x));
        prop_assert_eq!(end.y, fit.predict(end.x));
        if let Some(r_squared) = result.r_squared {
            prop_assert!(r_squared <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn regression_recovers_exact_line(
        xs in prop::collection::vec(-1.0e3..1.0e3_f64, 2..=50),
        slope in -100.0..100.0_f64,
        intercept in -100.0..100.0_f64,
    ) {
        let spread = descriptive::max(&xs).unwrap() - descriptive::min(&xs).unwrap();
        prop_assume!(spread > 1.0);
        prop_assume!(slope.abs() > 1e-2);
        let ys = xs.iter().map(|x| slope * x + intercept).collect::<Vec<_>>();

        let result = regress(&xs, &ys).unwrap();
        prop_assert!((result.slope - slope).abs() <= 1e-6 * slope.abs().max(1.0));
        let r_squared = result.r_squared.unwrap();
        prop_assert!((r_squared - 1.0).abs() < 1e-6, "r² = {}", r_squared);
    }

    #[test]
    fn regression_is_scale_invariant(
        xs in prop::collection::vec(-1.0e3..1.0e3_f64, 3..=30),
        ys in prop::collection::vec(-1.0e3..1.0e3_f64, 3..=30),
        ex in -150..=150_i32,
        ey in -150..=150_i32,
    ) {
        let len = xs.len().min(ys.len());
        let (xs, ys) = (&xs[..len], &ys[..len]);
        let spread = descriptive::max(xs).unwrap() - descriptive::min(xs).unwrap();
        prop_assume!(spread > 1.0);

        let reference = regress(xs, ys).unwrap();
        let scaled_xs = xs.iter().map(|x| x * 10.0_f64.powi(ex)).collect::<Vec<_>>();
        let scaled_ys = ys.iter().map(|y| y * 10.0_f64.powi(ey)).collect::<Vec<_>>();
        let scaled = regress(&scaled_xs, &scaled_ys).unwrap();

        let slope = scaled.slope * 10.0_f64.powi(ex - ey);
        prop_assert!(
            (slope - reference.slope).abs() <= 1e-6 * reference.slope.abs().max(1e-3),
            "slope {} vs {}", slope, reference.slope
        );
        if let (Some(a), Some(b)) = (scaled.r_squared, reference.r_squared) {
            prop_assert!((a - b).abs() < 1e-6, "r² {} vs {}", a, b);
        }
    }

    #[test]
    fn histogram_counts_every_value(values in sample(1, 80), bins in 1..30_usize) {
        let histogram = Histogram::new(&values, NonZeroUsize::new(bins).unwrap()).unwrap();
        prop_assert_eq!(histogram.bins.len(), bins);
        prop_assert_eq!(histogram.total(), values.len());
    }
}
