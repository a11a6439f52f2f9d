mod context;

pub mod compare;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod guidance;
pub mod health;
pub mod topics;
pub mod trends;

pub use context::HandlerContext;
