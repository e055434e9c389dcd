//! Cube Match-3 (workspace facade crate).
//!
//! The engine lives in dedicated crates under `crates/`; this package re-exports
//! them as `cube_match3::{core,term,types}` and hosts the demo driver.

pub mod demo;

pub use cube_match3_core as core;
pub use cube_match3_term as term;
pub use cube_match3_types as types;
