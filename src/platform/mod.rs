// UNRaf Academy - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: util, core vocabulary types, directories crate.
// Must NOT depend on: app.

pub mod config;
