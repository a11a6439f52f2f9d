use std::fmt;

use crate::presentation::view_models::TopicListViewModel;

pub struct TopicListView<'a> {
    data: &'a TopicListViewModel,
}

impl<'a> TopicListView<'a> {
    pub fn new(data: &'a TopicListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for TopicListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.topics.is_empty() {
            writeln!(f, "No topics found.")?;
            return Ok(());
        }

        for (i, topic) in self.data.topics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{} ({})", topic.label, topic.id)?;

            if topic.sub_topics.is_empty() {
                writeln!(f, "  {}", topic.keywords.join(", "))?;
                continue;
            }

            for sub in &topic.sub_topics {
                writeln!(f, "  {} ({})", sub.label, sub.id)?;
                writeln!(f, "    {}", sub.keywords.join(", "))?;
            }
        }

        Ok(())
    }
}
