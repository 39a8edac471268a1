//! Search procedures for the m-coloring problem.

/// exhaustive backtracking (first solution or all solutions)
pub mod backtracking;
