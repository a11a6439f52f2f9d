//! Keyword catalog driving navigation and comparison requests.
//!
//! The catalog is compiled in: three topics, each split into sub-topics,
//! each holding the keywords that are sent to the trends API. Lookups hand
//! out `&'static` entries; use [`TopicEntry::to_topic`] and
//! [`SubTopicEntry::to_sub_topic`] when an owned model is needed.

mod data;

use once_cell::sync::Lazy;
use std::collections::HashMap;
use trendlens_types::{KeywordLocation, MAX_COMPARE_KEYWORDS, SubTopic, Topic};

pub use data::TOPICS;

#[derive(Debug, Clone, Copy)]
pub struct TopicEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub sub_topics: &'static [SubTopicEntry],
}

#[derive(Debug, Clone, Copy)]
pub struct SubTopicEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

impl TopicEntry {
    pub fn to_topic(&self) -> Topic {
        Topic {
            id: self.id.to_string(),
            label: self.label.to_string(),
        }
    }

    pub fn sub_topic(&self, sub_topic_id: &str) -> Option<&'static SubTopicEntry> {
        self.sub_topics.iter().find(|s| s.id == sub_topic_id)
    }

    /// Every keyword under this topic, in catalog order.
    pub fn keywords(&self) -> Vec<&'static str> {
        self.sub_topics
            .iter()
            .flat_map(|s| s.keywords.iter().copied())
            .collect()
    }
}

impl SubTopicEntry {
    pub fn to_sub_topic(&self) -> SubTopic {
        SubTopic {
            id: self.id.to_string(),
            label: self.label.to_string(),
            keywords: self.keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

// First occurrence wins if a keyword is ever listed twice.
static KEYWORD_INDEX: Lazy<HashMap<&'static str, (&'static str, &'static str)>> =
    Lazy::new(|| {
        let mut index = HashMap::new();
        for topic in TOPICS {
            for sub in topic.sub_topics {
                for keyword in sub.keywords {
                    index.entry(*keyword).or_insert((topic.id, sub.id));
                }
            }
        }
        index
    });

pub fn topics() -> &'static [TopicEntry] {
    TOPICS
}

pub fn topic(topic_id: &str) -> Option<&'static TopicEntry> {
    TOPICS.iter().find(|t| t.id == topic_id)
}

pub fn sub_topics(topic_id: &str) -> &'static [SubTopicEntry] {
    topic(topic_id).map(|t| t.sub_topics).unwrap_or(&[])
}

pub fn sub_topic(topic_id: &str, sub_topic_id: &str) -> Option<&'static SubTopicEntry> {
    topic(topic_id).and_then(|t| t.sub_topic(sub_topic_id))
}

pub fn keywords(topic_id: &str, sub_topic_id: &str) -> &'static [&'static str] {
    sub_topic(topic_id, sub_topic_id)
        .map(|s| s.keywords)
        .unwrap_or(&[])
}

/// Reverse lookup: which topic and sub-topic list `keyword`.
pub fn locate(keyword: &str) -> Option<KeywordLocation> {
    KEYWORD_INDEX
        .get(keyword)
        .map(|(topic_id, sub_topic_id)| KeywordLocation {
            topic_id: topic_id.to_string(),
            sub_topic_id: sub_topic_id.to_string(),
        })
}

pub fn contains(keyword: &str) -> bool {
    KEYWORD_INDEX.contains_key(keyword)
}

/// Split a keyword list into batches the compare endpoint accepts.
pub fn comparison_batches<'a>(keywords: &'a [&'a str]) -> Vec<Vec<&'a str>> {
    keywords
        .chunks(MAX_COMPARE_KEYWORDS)
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Title-case a snake_case id: `cord_cutting` → `Cord Cutting`.
pub fn heading(id: &str) -> String {
    id.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_topics_in_nav_order() {
        let ids: Vec<&str> = topics().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["broadband", "cord_cutting", "mobile"]);
    }

    #[test]
    fn test_every_sub_topic_has_five_keywords() {
        for topic in topics() {
            assert_eq!(topic.sub_topics.len(), 5, "topic {}", topic.id);
            for sub in topic.sub_topics {
                assert_eq!(sub.keywords.len(), 5, "{}/{}", topic.id, sub.id);
            }
        }
    }

    #[test]
    fn test_sub_topic_ids_are_scoped_by_topic() {
        let broadband = keywords("broadband", "switching_intent");
        let mobile = keywords("mobile", "switching_intent");
        assert!(broadband.contains(&"Cancel Spectrum"));
        assert!(mobile.contains(&"Cancel Verizon"));
        assert_ne!(broadband, mobile);
    }

    #[test]
    fn test_unknown_lookups_are_empty() {
        assert!(topic("satellite").is_none());
        assert!(sub_topics("satellite").is_empty());
        assert!(keywords("broadband", "nope").is_empty());
    }

    #[test]
    fn test_locate_keyword() {
        let location = locate("Starlink").unwrap();
        assert_eq!(location.topic_id, "broadband");
        assert_eq!(location.sub_topic_id, "new_technology");
        assert!(locate("starlink").is_none());
        assert!(contains("Roku"));
    }

    #[test]
    fn test_topic_keywords_flatten_in_order() {
        let all = topic("cord_cutting").unwrap().keywords();
        assert_eq!(all.len(), 25);
        assert_eq!(all[0], "YouTube TV");
        assert_eq!(all[24], "Smart TV");
    }

    #[test]
    fn test_comparison_batches_cap_at_five() {
        let all = topic("mobile").unwrap().keywords();
        let batches = comparison_batches(&all);
        assert_eq!(batches.len(), 5);
        assert!(batches.iter().all(|b| b.len() <= MAX_COMPARE_KEYWORDS));

        let three = ["a", "b", "c"];
        assert_eq!(comparison_batches(&three), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_heading() {
        assert_eq!(heading("cord_cutting"), "Cord Cutting");
        assert_eq!(heading("broadband"), "Broadband");
        assert_eq!(heading("speed__reliability"), "Speed Reliability");
    }

    #[test]
    fn test_owned_conversions() {
        let entry = sub_topic("broadband", "pricing").unwrap();
        let owned = entry.to_sub_topic();
        assert_eq!(owned.label, "Pricing");
        assert!(owned.contains("Internet Deals"));
        assert_eq!(topic("mobile").unwrap().to_topic().label, "Mobile");
    }
}
