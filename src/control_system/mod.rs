// control_system/mod.rs
pub mod phase_scheduler;
