// UNRaf Academy - lib.rs
//
// Library entry point, exposing the record filter, catalogue, and
// application layers for the CLI, integration tests, and any other
// presentation layer.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
