use serde::{Deserialize, Serialize};
use trendlens_types::TrendPoint;

/// Headline numbers shown above the interest chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendStats {
    pub peak: u32,
    pub peak_date: String,
    pub average: f64,
    /// Most recent sample.
    pub current: u32,
    pub samples: usize,
}

impl TrendStats {
    pub fn average_rounded(&self) -> u32 {
        self.average.round() as u32
    }
}

/// Peak, mean and latest value of a series; `None` for an empty series.
///
/// Points are taken in the order the API returned them. Ties for the peak
/// keep the earliest date.
pub fn summarize(points: &[TrendPoint]) -> Option<TrendStats> {
    let last = points.last()?;

    let mut peak = &points[0];
    let mut total: u64 = 0;
    for point in points {
        total += u64::from(point.value);
        if point.value > peak.value {
            peak = point;
        }
    }

    Some(TrendStats {
        peak: peak.value,
        peak_date: peak.date.clone(),
        average: total as f64 / points.len() as f64,
        current: last.value,
        samples: points.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[(&str, u32)]) -> Vec<TrendPoint> {
        values
            .iter()
            .map(|(date, value)| TrendPoint::new(*date, *value))
            .collect()
    }

    #[test]
    fn test_peak_average_current() {
        let series = points(&[("2024-01-01", 10), ("2024-02-01", 50), ("2024-03-01", 30)]);
        let stats = summarize(&series).unwrap();

        assert_eq!(stats.peak, 50);
        assert_eq!(stats.peak_date, "2024-02-01");
        assert_eq!(stats.average, 30.0);
        assert_eq!(stats.current, 30);
        assert_eq!(stats.samples, 3);
    }

    #[test]
    fn test_empty_series_has_no_stats() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_single_point() {
        let stats = summarize(&points(&[("2024-01-01", 7)])).unwrap();
        assert_eq!((stats.peak, stats.current), (7, 7));
        assert_eq!(stats.average_rounded(), 7);
    }

    #[test]
    fn test_peak_tie_keeps_first_date() {
        let stats = summarize(&points(&[("a", 100), ("b", 100), ("c", 0)])).unwrap();
        assert_eq!(stats.peak_date, "a");
        assert_eq!(stats.current, 0);
    }

    #[test]
    fn test_fractional_average_rounds() {
        let stats = summarize(&points(&[("a", 1), ("b", 2)])).unwrap();
        assert_eq!(stats.average, 1.5);
        assert_eq!(stats.average_rounded(), 2);
    }
}
