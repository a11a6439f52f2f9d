//! Client for the remote trends API.
//!
//! [`TrendsApi`] is the seam the runtime depends on; [`HttpTrendsClient`]
//! is the reqwest implementation used by the CLI.

pub mod error;
pub mod http;
pub mod traits;

pub use error::{Error, Result};
pub use http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, HttpTrendsClient};
pub use traits::TrendsApi;
