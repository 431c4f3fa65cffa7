//! Task-tree model and run-mode resolution core for a test runner.
//!
//! This crate holds the in-memory hierarchy of suites and tests, plus the
//! pure queries that decide what executes and how results roll up. The
//! architecture enforces a strict separation:
//!
//! - **[`tree`]**: The arena-backed task tree and its construction API. The
//!   collection phase of the embedding engine builds it; the execution engine
//!   writes results into it.
//! - **[`core`]**: Pure, deterministic logic (traversal, run-mode resolution,
//!   concurrency partitioning, naming, validation). No I/O, fully testable
//!   in isolation.
//!
//! File loading, scheduling, and test execution live in the embedding
//! engine; this crate never spawns work or touches the filesystem.

pub mod core;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod tree;
