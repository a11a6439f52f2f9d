use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};
use trendlens_types::Timeframe;

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

/// Topic tabs on the left, timeframe selector on the right.
pub(crate) struct NavComponent;

impl Component for NavComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(44)])
            .split(area);

        let titles: Vec<String> = state.topics().iter().map(|t| t.label.to_string()).collect();
        let tabs = Tabs::new(titles)
            .select(state.topic_idx)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(Span::styled(
                        " trendlens ",
                        Style::default()
                            .fg(Color::LightCyan)
                            .add_modifier(Modifier::BOLD),
                    )),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs, layout[0]);

        let spans: Vec<Span> = Timeframe::ALL
            .iter()
            .enumerate()
            .flat_map(|(i, tf)| {
                let style = if *tf == state.timeframe {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                [
                    Span::styled(format!(" {} {} ", i + 1, tf.label()), style),
                    Span::raw(" "),
                ]
            })
            .collect();

        let selector = ratatui::widgets::Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Timeframe "),
        );
        f.render_widget(selector, layout[1]);
    }
}
