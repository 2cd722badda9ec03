//! File system implementations

mod local;

pub use local::{atomic_write, LocalFs};
