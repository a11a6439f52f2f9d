pub mod chart;
pub mod text;

pub use chart::{bar, sparkline};
pub use text::{format_average, truncate};
