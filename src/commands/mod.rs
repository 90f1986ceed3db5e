//! Command implementations

pub mod check;
pub mod simple;
pub mod simulate;

pub use check::{CheckReport, check_pool};
pub use simple::run_simple;
pub use simulate::{SessionOutcome, SimulationConfig, SimulationResult, run_simulation};
