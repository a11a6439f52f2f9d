use std::fmt;
use trendlens_engine::{RegionChart, WeightedTerm};

use crate::presentation::formatters::{bar, format_average, sparkline, truncate};
use crate::presentation::view_models::{CompareViewModel, TrendsViewModel, ViewOptions};

// --------------------------------------------------------
// Trends View
// --------------------------------------------------------

pub struct TrendsView<'a> {
    data: &'a TrendsViewModel,
    options: ViewOptions,
}

impl<'a> TrendsView<'a> {
    pub fn new(data: &'a TrendsViewModel, options: ViewOptions) -> Self {
        Self { data, options }
    }

    fn fmt_regions(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Top regions")?;
        match &self.data.regions {
            RegionChart::Placeholder { message } => writeln!(f, "  {}", message),
            RegionChart::Bars { bars, max } => {
                let width = self.options.bar_width();
                for region in bars {
                    writeln!(
                        f,
                        "  {:<18} {:>3} {}",
                        truncate(&region.region, 18),
                        region.value,
                        bar(region.value, *max, width)
                    )?;
                }
                Ok(())
            }
        }
    }
}

fn fmt_terms(f: &mut fmt::Formatter, title: &str, terms: &[WeightedTerm]) -> fmt::Result {
    writeln!(f, "{}", title)?;
    if terms.is_empty() {
        return writeln!(f, "  (none)");
    }
    let joined: Vec<String> = terms
        .iter()
        .map(|t| format!("{} ({})", t.text, t.value))
        .collect();
    writeln!(f, "  {}", joined.join(", "))
}

impl<'a> fmt::Display for TrendsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        writeln!(f, "{} · {}", data.keyword, data.timeframe_label)?;
        if let Some(location) = &data.location {
            writeln!(f, "{} / {}", location.topic_id, location.sub_topic_id)?;
        }
        writeln!(f)?;

        let Some(stats) = &data.stats else {
            writeln!(f, "No interest data for this keyword and timeframe.")?;
            return Ok(());
        };

        writeln!(f, "{:<9} {} ({})", "Peak", stats.peak, stats.peak_date)?;
        writeln!(f, "{:<9} {}", "Average", format_average(stats.average))?;
        writeln!(f, "{:<9} {}", "Current", stats.current)?;
        writeln!(f)?;

        writeln!(f, "Interest over time")?;
        let labels = data.series.axis_labels();
        writeln!(
            f,
            "  {}  {}",
            sparkline(&data.series.values(), u64::from(data.series.max_value)),
            labels.join(" … ")
        )?;
        writeln!(f)?;

        self.fmt_regions(f)?;
        writeln!(f)?;
        fmt_terms(f, "Related queries", &data.related)?;
        fmt_terms(f, "Rising queries", &data.rising)?;
        Ok(())
    }
}

// --------------------------------------------------------
// Compare View
// --------------------------------------------------------

pub struct CompareView<'a> {
    data: &'a CompareViewModel,
}

impl<'a> CompareView<'a> {
    pub fn new(data: &'a CompareViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CompareView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(heading) = &self.data.heading {
            writeln!(f, "{} Trends", heading)?;
        }
        writeln!(
            f,
            "Analyzing {} keywords over {}",
            self.data.keywords.len(),
            self.data.timeframe_label
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<26} {:>6} {:>8} {:>8} {:>5} {:>8} {:>8}",
            "KEYWORD", "POINTS", "REGIONS", "RELATED", "PEAK", "AVERAGE", "CURRENT"
        )?;
        writeln!(f, "{}", "-".repeat(75))?;

        for entry in &self.data.keywords {
            let (peak, average, current) = match &entry.stats {
                Some(s) => (
                    s.peak.to_string(),
                    format_average(s.average),
                    s.current.to_string(),
                ),
                None => ("-".to_string(), "-".to_string(), "-".to_string()),
            };
            writeln!(
                f,
                "{:<26} {:>6} {:>8} {:>8} {:>5} {:>8} {:>8}",
                truncate(&entry.keyword, 26),
                entry.data_points,
                entry.regions,
                entry.related_queries,
                peak,
                average,
                current
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::trends_view_model;
    use trendlens_types::{Timeframe, TrendsResponse};

    #[test]
    fn test_empty_payload_view() {
        let vm = trends_view_model("Ziply Fiber", Timeframe::ThreeMonths, &TrendsResponse::default());
        let text = TrendsView::new(&vm, ViewOptions::default()).to_string();

        insta::assert_snapshot!(text, @r"
        Ziply Fiber · 3 Months

        No interest data for this keyword and timeframe.
        ");
    }
}
