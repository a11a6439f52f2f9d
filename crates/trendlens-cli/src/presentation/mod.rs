//! # Presentation Layer
//!
//! Console output follows a one-way flow:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! * `view_models/`: serializable data. Raw numbers, no formatted strings.
//! * `presenters/`: turn API payloads and engine output into view models.
//! * `views/`: `fmt::Display` layouts over view models.
//! * `formatters/`: small text helpers used by views.
//! * `renderers/`: console driver (JSON or text) and the interactive TUI.
//!
//! The TUI reuses `TrendsViewModel` for its panels; its components keep
//! navigation state (selected tab, list cursor) out of the view models.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView};
