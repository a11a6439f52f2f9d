use serde::Serialize;
use trendlens_types::QueryTerm;

pub const MIN_FONT_SIZE: f64 = 16.0;
pub const MAX_FONT_SIZE: f64 = 72.0;

/// Terms above this size are drawn bold.
pub const BOLD_THRESHOLD: f64 = 28.0;

pub const PALETTE: [&str; 10] = [
    "#2563eb", "#7c3aed", "#db2777", "#059669", "#d97706", "#dc2626", "#0891b2", "#65a30d",
    "#9333ea", "#ea580c",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedTerm {
    pub text: String,
    pub value: u32,
    pub font_size: f64,
    pub color: &'static str,
    pub bold: bool,
}

/// Scale query weights onto font sizes for the word cloud.
///
/// Sizes are linear between the smallest and largest weight in the input;
/// when every weight is equal they all land on the midpoint. Colors follow
/// input order through the palette. Placement is left to the renderer.
pub fn word_cloud(terms: &[QueryTerm]) -> Vec<WeightedTerm> {
    let Some(min) = terms.iter().map(|t| t.value).min() else {
        return Vec::new();
    };
    let max = terms.iter().map(|t| t.value).max().unwrap_or(min);

    terms
        .iter()
        .enumerate()
        .map(|(i, term)| {
            let font_size = scale(term.value, min, max);
            WeightedTerm {
                text: term.text.clone(),
                value: term.value,
                font_size,
                color: PALETTE[i % PALETTE.len()],
                bold: font_size > BOLD_THRESHOLD,
            }
        })
        .collect()
}

fn scale(value: u32, min: u32, max: u32) -> f64 {
    if max == min {
        return (MIN_FONT_SIZE + MAX_FONT_SIZE) / 2.0;
    }
    let t = f64::from(value - min) / f64::from(max - min);
    MIN_FONT_SIZE + t * (MAX_FONT_SIZE - MIN_FONT_SIZE)
}
