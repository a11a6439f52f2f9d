pub mod dashboard;
pub mod system;
pub mod topics;
pub mod trends;

pub use dashboard::*;
pub use system::*;
pub use topics::*;
pub use trends::*;
