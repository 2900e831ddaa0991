// UNRaf Academy - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: app, platform, or any CLI crate.

pub mod catalog;
pub mod date;
pub mod export;
pub mod filter;
pub mod model;
