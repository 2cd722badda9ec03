//! Per-command renderers
//!
//! Each view turns a command result into text; commands decide whether to
//! print it or emit JSON instead.

pub mod catalog;
pub mod contact;
pub mod diff;
pub mod persona;
pub mod theme;
pub mod validate;
