//! Dog breed image search for the browser.
//!
//! Modules are split so that everything except `ui` is plain Rust and can be
//! tested on the host.

pub mod api;
pub mod config;
pub mod controller;
pub mod messages;
pub mod ui;
