const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const EIGHTHS: [char; 8] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉'];

/// One-line chart of `values` scaled to `max`.
pub fn sparkline(values: &[u64], max: u64) -> String {
    if max == 0 {
        return SPARK_LEVELS[0].to_string().repeat(values.len());
    }
    values
        .iter()
        .map(|&v| {
            let idx = (v.min(max) * (SPARK_LEVELS.len() as u64 - 1) + max / 2) / max;
            SPARK_LEVELS[idx as usize]
        })
        .collect()
}

/// Horizontal bar of `value / max` over `width` cells, with eighth-cell
/// resolution.
pub fn bar(value: u32, max: u32, width: usize) -> String {
    if max == 0 || width == 0 {
        return String::new();
    }
    let eighths = (u64::from(value.min(max)) * width as u64 * 8) / u64::from(max);
    let full = (eighths / 8) as usize;
    let rest = (eighths % 8) as usize;

    let mut out = "█".repeat(full);
    if rest > 0 {
        out.push(EIGHTHS[rest]);
    }
    out
}
