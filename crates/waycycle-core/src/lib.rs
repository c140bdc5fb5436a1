//! Waycycle Core Library
//!
//! Subset-restricted cycle detection over a named directed graph. Two
//! independent engines answer the same question and must agree: a
//! path-sensitive depth-first traversal and a declarative recursive query
//! against the SQLite-backed graph store.

pub mod db;
pub mod detect;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
