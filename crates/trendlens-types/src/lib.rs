pub mod api;
pub mod domain;
pub mod error;

pub use api::*;
pub use domain::*;
pub use error::{Error, Result};
