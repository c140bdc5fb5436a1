//! Traversal engine: subset-restricted, path-sensitive cycle search

mod detect;
mod evaluate;
mod frontier;
pub mod types;

pub use detect::detect_cycle;
pub use evaluate::{evaluate_extension, Verdict};
pub use frontier::expand_frontier;
pub use types::{Edge, GraphSource, Node, SearchPath};

#[cfg(test)]
mod tests;
