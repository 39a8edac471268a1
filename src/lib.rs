//! Backtracking solver for the m-coloring problem

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// coloring instance base trait, solutions and checker
pub mod color;

/// input and parsing errors
pub mod error;

/// read DIMACS formats
pub mod dimacs;

/// compact instance (adjacency lists + adjacency matrix)
pub mod compact_instance;

/// instance generators (complete graphs, cycles, random graphs)
pub mod generator;

/// helper and utility methods for executables
pub mod util;

/// search procedures for the m-coloring problem
pub mod search;
