//! Presentation pipeline: payload -> view models -> rendered output.
//!
//! Presenters are pure functions; views and renderers only map view
//! models onto the console or the TUI and make no decisions of their
//! own. Chart instances live in [`charts::ChartSet`] with an explicit
//! destroy-before-recreate lifecycle.

pub mod charts;
pub mod formatters;
pub mod presenters;
pub mod view_models;
pub mod views;
pub mod renderers;
