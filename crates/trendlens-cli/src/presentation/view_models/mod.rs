pub mod common;
pub mod dashboard;
pub mod result;
pub mod system;
pub mod topics;
pub mod trends;

pub use common::{Guidance, StatusBadge, StatusLevel, ViewOptions};
pub use dashboard::PanelViewModel;
pub use result::CommandResultViewModel;
pub use system::{
    ConfigInitViewModel, ConfigViewModel, ExportViewModel, GuidanceViewModel, HealthViewModel,
};
pub use topics::{SubTopicViewModel, TopicEntryViewModel, TopicListViewModel, TopicSource};
pub use trends::{CompareViewModel, TrendsViewModel};

use std::fmt;

/// Bridge from a view model to the `Display` view that lays it out as text.
pub trait CreateView {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a>;
}
