pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

pub fn format_average(average: f64) -> String {
    format!("{:.1}", average)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Starlink", 20), "Starlink");
        assert_eq!(truncate("T-Mobile Home Internet", 10), "T-Mobile …");
    }

    #[test]
    fn test_format_average() {
        assert_eq!(format_average(30.0), "30.0");
        assert_eq!(format_average(33.333), "33.3");
    }
}
