use crate::dto::box_stats::*;

const WHISKER_IQR_FACTOR: f64 = 1.5;

#[doc = "Quantile `q` of ascending `sorted` with linear interpolation between closest ranks"]
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let position: f64 = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower: usize = position.floor() as usize;
    let upper: usize = position.ceil() as usize;
    let fraction: f64 = position - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

#[doc = r#"
    Box-and-whisker summary of `values`. Non-finite values are ignored.

    1. sort a copy of the finite values
    2. q1 / median / q3 by linear interpolation
    3. whiskers at the most extreme values within [q1 - 1.5 IQR, q3 + 1.5 IQR]
    4. values outside the whiskers are fliers

    Returns `None` for an empty group.
"#]
pub fn compute_box_stats(values: &[f64]) -> Option<BoxStats> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let q1: f64 = quantile(&sorted, 0.25)?;
    let median: f64 = quantile(&sorted, 0.5)?;
    let q3: f64 = quantile(&sorted, 0.75)?;

    let iqr: f64 = q3 - q1;
    let low_fence: f64 = q1 - WHISKER_IQR_FACTOR * iqr;
    let high_fence: f64 = q3 + WHISKER_IQR_FACTOR * iqr;

    let whisker_low: f64 = sorted
        .iter()
        .copied()
        .find(|v| *v >= low_fence)
        .unwrap_or(q1);

    let whisker_high: f64 = sorted
        .iter()
        .rev()
        .copied()
        .find(|v| *v <= high_fence)
        .unwrap_or(q3);

    let fliers: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|v| *v < whisker_low || *v > whisker_high)
        .collect();

    Some(BoxStats::new(
        sorted.len(),
        whisker_low,
        q1,
        median,
        q3,
        whisker_high,
        fliers,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn quantiles_interpolate_linearly() {
        let sorted: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0];

        assert!(approx(quantile(&sorted, 0.25).unwrap(), 1.75));
        assert!(approx(quantile(&sorted, 0.5).unwrap(), 2.5));
        assert!(approx(quantile(&sorted, 0.75).unwrap(), 3.25));
        assert!(approx(quantile(&sorted, 1.0).unwrap(), 4.0));
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn outlier_becomes_flier_and_whisker_stops_at_last_inlier() {
        let values: Vec<f64> = vec![9.0, 1.0, 100.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let stats: BoxStats = compute_box_stats(&values).unwrap();

        assert_eq!(*stats.count(), 10);
        assert!(approx(*stats.q1(), 3.25));
        assert!(approx(*stats.median(), 5.5));
        assert!(approx(*stats.q3(), 7.75));
        assert_eq!(*stats.whisker_low(), 1.0);
        assert_eq!(*stats.whisker_high(), 9.0);
        assert_eq!(stats.fliers(), &vec![100.0]);
        assert_eq!(stats.drawn_max(), 100.0);
        assert_eq!(stats.drawn_min(), 1.0);
    }

    #[test]
    fn single_run_collapses_to_one_value() {
        let stats: BoxStats = compute_box_stats(&[0.75]).unwrap();

        assert_eq!(*stats.count(), 1);
        assert_eq!(*stats.whisker_low(), 0.75);
        assert_eq!(*stats.q1(), 0.75);
        assert_eq!(*stats.median(), 0.75);
        assert_eq!(*stats.q3(), 0.75);
        assert_eq!(*stats.whisker_high(), 0.75);
        assert!(stats.fliers().is_empty());
    }

    #[test]
    fn empty_or_non_finite_group_has_no_box() {
        assert!(compute_box_stats(&[]).is_none());
        assert!(compute_box_stats(&[f64::NAN]).is_none());

        let stats: BoxStats = compute_box_stats(&[f64::NAN, 0.5, 0.7]).unwrap();
        assert_eq!(*stats.count(), 2);
    }
}
