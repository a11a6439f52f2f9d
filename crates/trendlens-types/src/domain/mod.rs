pub mod cache_key;
pub mod timeframe;
pub mod topic;
pub mod trends;

pub use cache_key::*;
pub use timeframe::*;
pub use topic::*;
pub use trends::*;
