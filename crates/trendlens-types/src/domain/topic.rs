use serde::{Deserialize, Serialize};

/// Top-level navigation group (e.g. Broadband).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub label: String,
}

/// Second-level group holding the keywords that are actually queried.
///
/// Ids are only unique within their parent topic: `switching_intent`
/// exists under every topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTopic {
    pub id: String,
    pub label: String,
    pub keywords: Vec<String>,
}

impl SubTopic {
    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }
}

/// Where a keyword sits in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordLocation {
    pub topic_id: String,
    pub sub_topic_id: String,
}
