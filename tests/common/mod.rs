//! Common test utilities for Folio CLI tests.
//!
//! - `TestEnv`: isolated project directory with its own user config and settings
//! - Fixtures: reusable catalog content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
