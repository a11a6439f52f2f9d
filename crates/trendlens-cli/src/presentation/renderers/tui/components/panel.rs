use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
};
use trendlens_engine::{RegionChart, WeightedTerm};

use super::Component;
use crate::presentation::formatters::{bar, format_average, truncate};
use crate::presentation::renderers::tui::app::AppState;
use crate::presentation::view_models::{PanelViewModel, TrendsViewModel};

/// Stats cards, interest chart, region bars and query clouds for the
/// selected keyword.
pub(crate) struct PanelComponent;

impl Component for PanelComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        match &state.panel {
            PanelViewModel::Idle => message(f, area, "Select a keyword", Color::Gray),
            PanelViewModel::Loading { keyword } => message(
                f,
                area,
                &format!("Loading trends for {}…", keyword),
                Color::Cyan,
            ),
            PanelViewModel::NoData { keyword } => message(
                f,
                area,
                &format!("No interest data for {} in this timeframe", keyword),
                Color::Yellow,
            ),
            // Details go to the log file, not the screen.
            PanelViewModel::Failed { keyword, .. } => message(
                f,
                area,
                &format!("Nothing loaded for {}. Press r to try again.", keyword),
                Color::Gray,
            ),
            PanelViewModel::Ready { trends } => render_trends(f, area, trends),
        }
    }
}

fn message(f: &mut Frame, area: Rect, text: &str, color: Color) {
    let widget = Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_trends(f: &mut Frame, area: Rect, trends: &TrendsViewModel) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(12),
        ])
        .split(area);

    render_stats(f, rows[0], trends);
    render_chart(f, rows[1], trends);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);
    render_regions(f, bottom[0], trends);

    let clouds = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(bottom[1]);
    render_cloud(f, clouds[0], " Related queries ", &trends.related);
    render_cloud(f, clouds[1], " Rising queries ", &trends.rising);
}

fn render_stats(f: &mut Frame, area: Rect, trends: &TrendsViewModel) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let (peak, average, current) = match &trends.stats {
        Some(s) => (
            s.peak.to_string(),
            format_average(s.average),
            s.current.to_string(),
        ),
        None => ("-".to_string(), "-".to_string(), "-".to_string()),
    };

    for (i, (title, value)) in [("Peak", peak), ("Average", average), ("Current", current)]
        .into_iter()
        .enumerate()
    {
        let card = Paragraph::new(Span::styled(
            value,
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} ", title)),
        );
        f.render_widget(card, cards[i]);
    }
}

fn render_chart(f: &mut Frame, area: Rect, trends: &TrendsViewModel) {
    let title = format!(" {} · {} ", trends.keyword, trends.timeframe_label);
    let coordinates = trends.series.coordinates();
    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&coordinates);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(title),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(trends.series.x_bounds())
                .labels(trends.series.axis_labels()),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, 100.0])
                .labels(["0", "50", "100"]),
        );
    f.render_widget(chart, area);
}

fn render_regions(f: &mut Frame, area: Rect, trends: &TrendsViewModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Top regions ");

    let lines: Vec<Line> = match &trends.regions {
        RegionChart::Placeholder { message } => vec![Line::from(Span::styled(
            *message,
            Style::default().fg(Color::Gray),
        ))],
        RegionChart::Bars { bars, max } => {
            let width = (area.width as usize).saturating_sub(24).max(4);
            bars.iter()
                .map(|r| {
                    Line::from(vec![
                        Span::raw(format!("{:<14} {:>3} ", truncate(&r.region, 14), r.value)),
                        Span::styled(bar(r.value, *max, width), Style::default().fg(Color::Blue)),
                    ])
                })
                .collect()
        }
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_cloud(f: &mut Frame, area: Rect, title: &str, terms: &[WeightedTerm]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title.to_string());

    if terms.is_empty() {
        let empty = Paragraph::new(Span::styled("(none)", Style::default().fg(Color::Gray)));
        f.render_widget(empty.block(block), area);
        return;
    }

    let spans: Vec<Span> = terms
        .iter()
        .flat_map(|t| {
            let mut style = Style::default().fg(t.color.parse().unwrap_or(Color::White));
            if t.bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            [Span::styled(t.text.clone(), style), Span::raw("  ")]
        })
        .collect();

    let cloud = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(cloud, area);
}
