use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::AppState;
use super::components::{
    Component, FooterComponent, NavComponent, PanelComponent, SidebarComponent,
};

pub(crate) fn draw(f: &mut Frame, state: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    NavComponent.render(f, main_chunks[0], state);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(0)])
        .split(main_chunks[1]);

    SidebarComponent.render(f, body[0], state);
    PanelComponent.render(f, body[1], state);

    FooterComponent.render(f, main_chunks[2], state);
}
