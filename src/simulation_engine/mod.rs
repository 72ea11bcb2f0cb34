// simulation_engine/mod.rs
pub mod approaches;
pub mod intersections;
pub mod phases;
pub mod simulation;
pub mod vehicles;
