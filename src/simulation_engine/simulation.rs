// simulation.rs
use log::debug;
use serde::Serialize;

use crate::control_system::phase_scheduler::PhaseScheduler;
use crate::simulation_engine::approaches::{Approach, ALL_APPROACHES};
use crate::simulation_engine::intersections::Intersection;
use crate::simulation_engine::vehicles::{TurnKind, Vehicle};

/// Everything observable about one step: the ids of the vehicles that
/// crossed the junction, in departure order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepStatus {
    pub left_vehicles: Vec<String>,
}

/// One simulation run: the junction model plus the scheduler that owns its
/// right-of-way decisions. Steps are discrete and synchronous; nothing
/// advances between calls.
#[derive(Debug, Clone)]
pub struct Simulation {
    intersection: Intersection,
    scheduler: PhaseScheduler,
}

impl Simulation {
    pub fn new() -> Self {
        Simulation {
            intersection: Intersection::new(),
            scheduler: PhaseScheduler::new(),
        }
    }

    /// Read access to the junction model, for scoring and inspection.
    pub fn intersection(&self) -> &Intersection {
        &self.intersection
    }

    pub fn scheduler(&self) -> &PhaseScheduler {
        &self.scheduler
    }

    /// Vehicles still queued across all lanes.
    pub fn queued_vehicles(&self) -> usize {
        self.intersection.queued_vehicles()
    }

    /// Queues a new vehicle on its start road. Any start/end combination is
    /// accepted, including a U-turn back onto the same road, and ids are
    /// taken as-is without uniqueness checks.
    pub fn add_vehicle(&mut self, id: &str, start_road: Approach, end_road: Approach) {
        let vehicle = Vehicle::new(id.to_string(), start_road, end_road);
        debug!(
            "adding vehicle {} from {:?} to {:?} ({:?})",
            vehicle.id, start_road, end_road, vehicle.turn
        );
        self.intersection.enqueue(vehicle);
    }

    /// Advances the junction by one step and reports who departed.
    ///
    /// The order within a step is fixed: every queued vehicle ages first,
    /// the very first step then grants the initial green, departures are
    /// released under the current lights, the released count feeds the
    /// green budget, and finally the scheduler completes or considers a
    /// phase change. Departures therefore still happen under yellow, and a
    /// new green never releases anyone before the step after it appears.
    pub fn step(&mut self) -> StepStatus {
        self.intersection.age_all();
        self.scheduler.ensure_initialized(&mut self.intersection);

        debug!(
            "lights: N({:?}/{:?}/{}) E({:?}/{:?}/{}) S({:?}/{:?}/{}) W({:?}/{:?}/{})",
            self.intersection.road(Approach::North).left_turn_light,
            self.intersection.road(Approach::North).main_light,
            self.intersection.road(Approach::North).right_arrow,
            self.intersection.road(Approach::East).left_turn_light,
            self.intersection.road(Approach::East).main_light,
            self.intersection.road(Approach::East).right_arrow,
            self.intersection.road(Approach::South).left_turn_light,
            self.intersection.road(Approach::South).main_light,
            self.intersection.road(Approach::South).right_arrow,
            self.intersection.road(Approach::West).left_turn_light,
            self.intersection.road(Approach::West).main_light,
            self.intersection.road(Approach::West).right_arrow,
        );

        let left_vehicles = self.release_departures();
        self.scheduler.record_step(left_vehicles.len());
        self.scheduler.update(&mut self.intersection);

        debug!("departed this step: {:?}", left_vehicles);
        StepStatus { left_vehicles }
    }

    /// Releases at most one vehicle per signal grant, walking approaches in
    /// canonical order. Within one road the protected left lane goes first,
    /// then the through lane, then the permissive right arrow; the arrow
    /// check looks at whatever vehicle fronts the through lane after the
    /// main light has already taken its turn, and only a right-turner may
    /// use it.
    fn release_departures(&mut self) -> Vec<String> {
        let mut departed = Vec::new();
        for approach in ALL_APPROACHES {
            let road = self.intersection.road_mut(approach);

            if road.left_turn_light.releases() {
                if let Some(vehicle) = road.left_lane.pop_front() {
                    debug!(
                        "vehicle {} left {:?} left lane (waited {} steps)",
                        vehicle.id, approach, vehicle.waiting_for
                    );
                    departed.push(vehicle.id);
                }
            }

            if road.main_light.releases() {
                if let Some(vehicle) = road.right_lane.pop_front() {
                    debug!(
                        "vehicle {} left {:?} right lane (waited {} steps)",
                        vehicle.id, approach, vehicle.waiting_for
                    );
                    departed.push(vehicle.id);
                }
            }

            if road.right_arrow
                && road
                    .right_lane
                    .front()
                    .map(|vehicle| vehicle.turn == TurnKind::Right)
                    .unwrap_or(false)
            {
                if let Some(vehicle) = road.right_lane.pop_front() {
                    debug!(
                        "vehicle {} left {:?} right lane via right arrow (waited {} steps)",
                        vehicle.id, approach, vehicle.waiting_for
                    );
                    departed.push(vehicle.id);
                }
            }
        }
        departed
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Simulation::new()
    }
}
