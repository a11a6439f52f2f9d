// Views lay view models out as text; they never compute domain values.

pub mod system;
pub mod topics;
pub mod trends;
