//! Testing infrastructure for trendlens integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated config + binary invocation for CLI tests
//! - `FakeTrendsApi`: in-process `TrendsApi` with per-key gates
//! - `server`: wiremock-backed stand-in for the trends HTTP API
//! - `fixtures`: sample payloads
//! - `assertions`: JSON output checks

pub mod assertions;
pub mod fake;
pub mod fixtures;
pub mod server;
pub mod world;

pub use fake::FakeTrendsApi;
pub use server::MockTrendsServer;
pub use world::TestWorld;
