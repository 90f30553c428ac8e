//! Command implementations

pub mod benchmark;
pub mod neighbors;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use neighbors::{NeighborsResult, list_neighbors};
pub use simple::{SessionOutcome, run_session, run_simple};
pub use solve::{SolveConfig, SolveResult, solve_ladder};
