// UNRaf Academy - app/mod.rs
//
// Application layer: listing state, catalogue mutations, browsing.
// Dependencies: core layer.
// Must NOT depend on: platform specifics.

pub mod actions;
pub mod browse;
pub mod state;
