use chrono::NaiveDate;
use serde::Serialize;
use trendlens_types::TrendPoint;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
    pub date: String,
}

/// Interest-over-time prepared for a line chart: x is the sample index.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrendSeries {
    pub points: Vec<SeriesPoint>,
    pub max_value: u32,
}

impl TrendSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.y)).collect()
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.points.len().saturating_sub(1).max(1) as f64]
    }

    /// Labels for the first, middle and last sample.
    pub fn axis_labels(&self) -> Vec<String> {
        match self.points.len() {
            0 => Vec::new(),
            1 => vec![axis_label(&self.points[0].date)],
            len => vec![
                axis_label(&self.points[0].date),
                axis_label(&self.points[len / 2].date),
                axis_label(&self.points[len - 1].date),
            ],
        }
    }

    /// Values as integers for sparkline widgets.
    pub fn values(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.y as u64).collect()
    }
}

pub fn trend_series(points: &[TrendPoint]) -> TrendSeries {
    TrendSeries {
        points: points
            .iter()
            .enumerate()
            .map(|(i, p)| SeriesPoint {
                x: i as f64,
                y: f64::from(p.value),
                date: p.date.clone(),
            })
            .collect(),
        max_value: points.iter().map(|p| p.value).max().unwrap_or(0),
    }
}

/// `2024-03-01` → `Mar 2024`. Dates the API sends in another shape are
/// shown as-is.
pub fn axis_label(date: &str) -> String {
    let day = date.get(..10).unwrap_or(date);
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_indexes_points() {
        let series = trend_series(&[
            TrendPoint::new("2024-01-01", 10),
            TrendPoint::new("2024-02-01", 50),
        ]);
        assert_eq!(series.coordinates(), vec![(0.0, 10.0), (1.0, 50.0)]);
        assert_eq!(series.max_value, 50);
        assert_eq!(series.values(), vec![10, 50]);
        assert_eq!(series.x_bounds(), [0.0, 1.0]);
    }

    #[test]
    fn test_axis_labels() {
        let series = trend_series(&[
            TrendPoint::new("2024-01-01", 1),
            TrendPoint::new("2024-02-01", 2),
            TrendPoint::new("2024-03-01 00:00:00", 3),
        ]);
        assert_eq!(series.axis_labels(), vec!["Jan 2024", "Feb 2024", "Mar 2024"]);
    }

    #[test]
    fn test_unparseable_date_passes_through() {
        assert_eq!(axis_label("week 12"), "week 12");
    }

    #[test]
    fn test_empty_series() {
        let series = trend_series(&[]);
        assert!(series.is_empty());
        assert!(series.axis_labels().is_empty());
        assert_eq!(series.x_bounds(), [0.0, 1.0]);
    }
}
