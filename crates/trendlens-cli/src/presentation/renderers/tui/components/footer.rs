use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

pub(crate) struct FooterComponent;

const HINTS: &str = "←/→ topic  Tab focus  ↑/↓ move  Enter select  t/1-4 timeframe  r retry  q quit";

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let mut status = format!(
            "cached {} · in flight {}",
            state.cache.entries, state.cache.in_flight
        );
        if let Some(secs) = state.data_age_secs {
            status.push_str(" · ");
            status.push_str(&format_age(secs));
        }

        let line = Line::from(vec![
            Span::styled(HINTS, Style::default().fg(Color::DarkGray)),
            Span::raw("  │  "),
            Span::styled(status, Style::default().fg(Color::Gray)),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }
}

fn format_age(secs: i64) -> String {
    match secs.max(0) {
        0..=4 => "updated just now".to_string(),
        s @ 5..=59 => format!("updated {}s ago", s),
        s @ 60..=3599 => format!("updated {}m ago", s / 60),
        s => format!("updated {}h ago", s / 3600),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_age_buckets() {
        assert_eq!(format_age(0), "updated just now");
        assert_eq!(format_age(42), "updated 42s ago");
        assert_eq!(format_age(125), "updated 2m ago");
        assert_eq!(format_age(7300), "updated 2h ago");
    }

    #[test]
    fn test_clock_skew_reads_as_fresh() {
        assert_eq!(format_age(-3), "updated just now");
    }
}
