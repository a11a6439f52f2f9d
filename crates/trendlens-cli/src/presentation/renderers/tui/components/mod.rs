use ratatui::{Frame, layout::Rect};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState);
}

pub(crate) mod footer;
pub(crate) mod nav;
pub(crate) mod panel;
pub(crate) mod sidebar;

pub(crate) use footer::FooterComponent;
pub(crate) use nav::NavComponent;
pub(crate) use panel::PanelComponent;
pub(crate) use sidebar::SidebarComponent;
