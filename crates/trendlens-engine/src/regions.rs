use serde::Serialize;
use trendlens_types::RegionPoint;

pub const NO_REGION_DATA: &str = "No region data available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionBar {
    pub region: String,
    pub value: u32,
}

/// Model behind the region panel.
///
/// An empty snapshot renders as a placeholder, never as an empty chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegionChart {
    Placeholder { message: &'static str },
    Bars { bars: Vec<RegionBar>, max: u32 },
}

impl RegionChart {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, RegionChart::Placeholder { .. })
    }

    pub fn bars(&self) -> &[RegionBar] {
        match self {
            RegionChart::Placeholder { .. } => &[],
            RegionChart::Bars { bars, .. } => bars,
        }
    }
}

/// Top `limit` regions by value, highest first.
///
/// Zero-valued regions carry no signal and are dropped; if nothing is left
/// the placeholder is returned.
pub fn region_chart(regions: &[RegionPoint], limit: usize) -> RegionChart {
    let mut bars: Vec<RegionBar> = regions
        .iter()
        .filter(|r| r.value > 0)
        .map(|r| RegionBar {
            region: r.region.clone(),
            value: r.value,
        })
        .collect();

    if bars.is_empty() || limit == 0 {
        return RegionChart::Placeholder {
            message: NO_REGION_DATA,
        };
    }

    // Stable sort keeps API order among equal values.
    bars.sort_by(|a, b| b.value.cmp(&a.value));
    bars.truncate(limit);
    let max = bars[0].value;

    RegionChart::Bars { bars, max }
}
