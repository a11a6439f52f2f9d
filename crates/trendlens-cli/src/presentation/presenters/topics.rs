use trendlens_catalog::TopicEntry;
use trendlens_types::TopicsResponse;

use crate::presentation::view_models::{
    CommandResultViewModel, SubTopicViewModel, TopicEntryViewModel, TopicListViewModel,
    TopicSource,
};

pub fn present_catalog_topics(
    entries: &[&TopicEntry],
) -> CommandResultViewModel<TopicListViewModel> {
    let topics = entries
        .iter()
        .map(|topic| TopicEntryViewModel {
            id: topic.id.to_string(),
            label: topic.label.to_string(),
            sub_topics: topic
                .sub_topics
                .iter()
                .map(|sub| SubTopicViewModel {
                    id: sub.id.to_string(),
                    label: sub.label.to_string(),
                    keywords: sub.keywords.iter().map(|k| k.to_string()).collect(),
                })
                .collect(),
            keywords: topic.keywords().into_iter().map(String::from).collect(),
        })
        .collect();

    CommandResultViewModel::new(TopicListViewModel {
        source: TopicSource::Catalog,
        topics,
    })
}

pub fn present_remote_topics(
    response: TopicsResponse,
    topic_filter: Option<&str>,
) -> CommandResultViewModel<TopicListViewModel> {
    let topics = response
        .topics
        .into_iter()
        .filter(|t| topic_filter.is_none_or(|id| t.id == id))
        .map(|t| TopicEntryViewModel {
            id: t.id,
            label: t.label,
            sub_topics: Vec::new(),
            keywords: t.keywords,
        })
        .collect();

    CommandResultViewModel::new(TopicListViewModel {
        source: TopicSource::Remote,
        topics,
    })
}
