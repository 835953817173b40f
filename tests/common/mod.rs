//! Common test utilities for serverstore integration tests.
//!
//! - `TestEnv`: isolated temp directory holding one registry file
//! - Fixtures: reusable server records

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
