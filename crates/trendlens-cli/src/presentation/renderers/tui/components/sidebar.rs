use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use super::Component;
use crate::presentation::renderers::tui::app::{AppState, Focus};

/// Sub-topic list above the keyword list of the chosen sub-topic.
pub(crate) struct SidebarComponent;

impl Component for SidebarComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(area);

        let sub_topics: Vec<&str> = state.sub_topics().iter().map(|s| s.label).collect();
        render_list(
            f,
            chunks[0],
            " Sub-topics ",
            &sub_topics,
            state.sub_topic_idx,
            state.focus == Focus::SubTopics,
        );

        render_list(
            f,
            chunks[1],
            " Keywords ",
            state.keywords(),
            state.keyword_idx,
            state.focus == Focus::Keywords,
        );
    }
}

fn render_list(f: &mut Frame, area: Rect, title: &str, items: &[&str], selected: usize, focused: bool) {
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    let items: Vec<ListItem> = items.iter().map(|i| ListItem::new(i.to_string())).collect();
    // Cursor is clamped here; the list may be shorter than the stored index.
    let selected = (!items.is_empty()).then(|| selected.min(items.len() - 1));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(title.to_string()),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(selected);
    f.render_stateful_widget(list, area, &mut list_state);
}
