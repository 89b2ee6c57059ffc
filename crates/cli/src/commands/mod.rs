//! CLI command implementations.

pub mod storage;
