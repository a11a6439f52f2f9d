use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicSource {
    Catalog,
    Remote,
}

#[derive(Debug, Serialize)]
pub struct TopicListViewModel {
    pub source: TopicSource,
    pub topics: Vec<TopicEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct TopicEntryViewModel {
    pub id: String,
    pub label: String,
    /// Empty for remote topics; the API only lists flat keywords.
    pub sub_topics: Vec<SubTopicViewModel>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SubTopicViewModel {
    pub id: String,
    pub label: String,
    pub keywords: Vec<String>,
}

impl CreateView for TopicListViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::topics::TopicListView;
        Box::new(TopicListView::new(self))
    }
}
