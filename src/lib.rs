//! Core of the aidhub humanitarian aid distribution dashboard.
//!
//! The in-memory [`store::EntityStore`] holds the entity graph. [`scope::compose_scope`]
//! derives the records a signed-in identity may see, [`stats`] reduces them to dashboard
//! counters, and [`navigation`] routes each identity to its dashboard. The Dioxus client in
//! `main.rs` renders all of it.

pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod lifecycle;
pub mod navigation;
pub mod scope;
pub mod stats;
pub mod store;
pub mod telemetry;

pub use error::Error;
