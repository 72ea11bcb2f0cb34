pub mod communication;
pub mod control_system;
pub mod flow_analyzer;
pub mod monitoring;
pub mod simulation_engine;
