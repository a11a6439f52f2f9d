use crossterm::event::{KeyCode, KeyModifiers};
use trendlens_catalog::{SubTopicEntry, TopicEntry};
use trendlens_runtime::CacheStats;
use trendlens_types::Timeframe;

use crate::presentation::view_models::PanelViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    SubTopics,
    Keywords,
}

/// Requests the event loop forwards to the dashboard controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    Quit,
    Select(&'static str),
    SetTimeframe(Timeframe),
    /// Re-select the current keyword, e.g. after a failed request.
    Retry,
}

pub(crate) struct AppState {
    pub topic_idx: usize,
    pub sub_topic_idx: usize,
    pub keyword_idx: usize,
    pub focus: Focus,
    pub timeframe: Timeframe,
    pub panel: PanelViewModel,
    pub cache: CacheStats,
    /// Seconds since the displayed data was fetched.
    pub data_age_secs: Option<i64>,
}

impl AppState {
    pub fn new(topic_idx: usize, timeframe: Timeframe) -> Self {
        Self {
            topic_idx: topic_idx.min(trendlens_catalog::topics().len().saturating_sub(1)),
            sub_topic_idx: 0,
            keyword_idx: 0,
            focus: Focus::Keywords,
            timeframe,
            panel: PanelViewModel::Idle,
            cache: CacheStats::default(),
            data_age_secs: None,
        }
    }

    pub fn topics(&self) -> &'static [TopicEntry] {
        trendlens_catalog::topics()
    }

    pub fn topic(&self) -> Option<&'static TopicEntry> {
        self.topics().get(self.topic_idx)
    }

    pub fn sub_topics(&self) -> &'static [SubTopicEntry] {
        self.topic().map(|t| t.sub_topics).unwrap_or(&[])
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        self.sub_topics()
            .get(self.sub_topic_idx)
            .map(|s| s.keywords)
            .unwrap_or(&[])
    }

    pub fn current_keyword(&self) -> Option<&'static str> {
        self.keywords().get(self.keyword_idx).copied()
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Right | KeyCode::Char('l') => {
                self.switch_topic(1);
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.switch_topic(self.topics().len().saturating_sub(1));
                None
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::SubTopics => Focus::Keywords,
                    Focus::Keywords => Focus::SubTopics,
                };
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(true);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(false);
                None
            }
            KeyCode::Enter => match self.focus {
                Focus::SubTopics => {
                    self.focus = Focus::Keywords;
                    None
                }
                Focus::Keywords => self.current_keyword().map(Action::Select),
            },
            KeyCode::Char('t') => Some(Action::SetTimeframe(self.timeframe.next())),
            KeyCode::Char('T') => Some(Action::SetTimeframe(self.timeframe.previous())),
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                Timeframe::ALL.get(idx).copied().map(Action::SetTimeframe)
            }
            KeyCode::Char('r') => Some(Action::Retry),
            _ => None,
        }
    }

    // `step` is added modulo the topic count, so len-1 moves back one.
    fn switch_topic(&mut self, step: usize) {
        let count = self.topics().len();
        if count == 0 {
            return;
        }
        self.topic_idx = (self.topic_idx + step) % count;
        self.sub_topic_idx = 0;
        self.keyword_idx = 0;
        self.focus = Focus::SubTopics;
    }

    fn move_cursor(&mut self, down: bool) {
        let len = match self.focus {
            Focus::SubTopics => self.sub_topics().len(),
            Focus::Keywords => self.keywords().len(),
        };
        if len == 0 {
            return;
        }
        let cursor = match self.focus {
            Focus::SubTopics => &mut self.sub_topic_idx,
            Focus::Keywords => &mut self.keyword_idx,
        };
        *cursor = if down {
            (*cursor + 1).min(len - 1)
        } else {
            cursor.saturating_sub(1)
        };
        if self.focus == Focus::SubTopics {
            self.keyword_idx = 0;
        }
    }
}
