pub mod priority;

// Re-export the items from priority
pub use priority::{best_phase, phase_pressure, phase_score};
