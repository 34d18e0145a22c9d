//! Integration tests for marga.
//!
//! These tests drive the public API end to end: grids built from obstacle
//! points, A* checked against a brute-force search, and the arena dataset
//! pipeline writing real files.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration -- --nocapture
//!
//! # Keep the rendered SVGs around
//! MARGA_TEST_OUTPUT=test_output cargo test --test integration arena
//! ```

mod arena;
mod optimality;
mod scenarios;
