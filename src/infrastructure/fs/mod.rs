//! File System Helpers

pub mod atomic;

pub use atomic::{atomic_write, stage, StagedWrite};
