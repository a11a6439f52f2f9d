mod app;
mod components;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, info};
use trendlens_runtime::Dashboard;

use crate::presentation::presenters::present_panel;
pub(crate) use app::{Action, AppState};

const TICK: Duration = Duration::from_millis(100);

/// Drive the interactive dashboard until the user quits.
///
/// Fetches run on the dashboard's tokio handle; this loop only drains their
/// completions between key events, so a slow request never blocks input.
pub(crate) fn run(dashboard: &mut Dashboard, mut state: AppState) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let result = event_loop(&mut terminal, dashboard, &mut state);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    dashboard: &mut Dashboard,
    state: &mut AppState,
) -> Result<()> {
    if let Some(keyword) = state.current_keyword() {
        dispatch(dashboard, Action::Select(keyword));
    }

    loop {
        for outcome in dashboard.poll() {
            debug!(?outcome, "fetch settled");
        }
        refresh(state, dashboard);

        terminal.draw(|f| ui::draw(f, state))?;

        if !event::poll(TICK)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match state.handle_key(key.code, key.modifiers) {
            Some(Action::Quit) => break,
            Some(action) => dispatch(dashboard, action),
            None => {}
        }
    }

    info!("dashboard closed");
    Ok(())
}

fn dispatch(dashboard: &mut Dashboard, action: Action) {
    match action {
        Action::Select(keyword) => {
            let outcome = dashboard.select(keyword);
            debug!(keyword, ?outcome, "select");
        }
        Action::SetTimeframe(timeframe) => {
            let outcome = dashboard.set_timeframe(timeframe);
            debug!(timeframe = %timeframe, ?outcome, "timeframe changed");
        }
        Action::Retry => {
            if let Some(keyword) = dashboard.selection().map(|s| s.key.keyword.clone()) {
                dashboard.select(&keyword);
            }
        }
        Action::Quit => {}
    }
}

fn refresh(state: &mut AppState, dashboard: &Dashboard) {
    state.panel = present_panel(&dashboard.view_state());
    state.cache = dashboard.cache_stats();
    state.data_age_secs = dashboard.displayed_age().map(|age| age.num_seconds());
    state.timeframe = dashboard.timeframe();
}
