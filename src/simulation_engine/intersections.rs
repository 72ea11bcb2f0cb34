use std::collections::VecDeque;

use crate::simulation_engine::approaches::Approach;
use crate::simulation_engine::phases::{LaneSide, Phase};
use crate::simulation_engine::vehicles::Vehicle;

/// Signal head states. `RedYellow` is the pre-green display an incoming
/// phase shows while the outgoing phase is still on yellow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightState {
    Red,
    RedYellow,
    Yellow,
    Green,
}

impl LightState {
    /// Green and yellow both release traffic; red and redyellow hold it.
    pub fn releases(self) -> bool {
        matches!(self, LightState::Green | LightState::Yellow)
    }
}

/// One approach road: two FIFO lane queues plus its signal indicators.
#[derive(Debug, Clone)]
pub struct Road {
    /// Protected lane for left turns and U-turns.
    pub left_lane: VecDeque<Vehicle>,
    /// Shared lane for straight-ahead and right-turning traffic.
    pub right_lane: VecDeque<Vehicle>,
    /// Head governing the right (through) lane.
    pub main_light: LightState,
    /// Head governing the protected left lane.
    pub left_turn_light: LightState,
    /// Permissive right-turn grant, independent of the main light.
    pub right_arrow: bool,
}

impl Road {
    fn new() -> Self {
        Road {
            left_lane: VecDeque::new(),
            right_lane: VecDeque::new(),
            main_light: LightState::Red,
            left_turn_light: LightState::Red,
            right_arrow: false,
        }
    }

    pub fn lane(&self, side: LaneSide) -> &VecDeque<Vehicle> {
        match side {
            LaneSide::Left => &self.left_lane,
            LaneSide::Right => &self.right_lane,
        }
    }
}

/// The junction model: four approach roads indexed by compass ordinal.
/// Created empty with every head red; queues and lights only change through
/// the methods below.
#[derive(Debug, Clone)]
pub struct Intersection {
    roads: [Road; 4],
}

impl Intersection {
    pub fn new() -> Self {
        Intersection {
            roads: [Road::new(), Road::new(), Road::new(), Road::new()],
        }
    }

    pub fn road(&self, approach: Approach) -> &Road {
        &self.roads[approach.ordinal()]
    }

    pub fn road_mut(&mut self, approach: Approach) -> &mut Road {
        &mut self.roads[approach.ordinal()]
    }

    /// Appends a vehicle to the tail of the lane its turn kind selects on
    /// its start road.
    pub fn enqueue(&mut self, vehicle: Vehicle) {
        let road = self.road_mut(vehicle.start_road);
        if vehicle.turn.uses_left_lane() {
            road.left_lane.push_back(vehicle);
        } else {
            road.right_lane.push_back(vehicle);
        }
    }

    /// Vehicles currently queued across all eight lanes.
    pub fn queued_vehicles(&self) -> usize {
        self.roads
            .iter()
            .map(|road| road.left_lane.len() + road.right_lane.len())
            .sum()
    }

    /// Ages every queued vehicle by one step.
    pub fn age_all(&mut self) {
        for road in &mut self.roads {
            for vehicle in road.left_lane.iter_mut() {
                vehicle.waiting_for += 1;
            }
            for vehicle in road.right_lane.iter_mut() {
                vehicle.waiting_for += 1;
            }
        }
    }

    /// Forces every head to red and withdraws all right arrows.
    pub fn reset_lights(&mut self) {
        for road in &mut self.roads {
            road.main_light = LightState::Red;
            road.left_turn_light = LightState::Red;
            road.right_arrow = false;
        }
    }

    /// Sets the given phase's two heads to `state`. Putting a left-turn
    /// phase into any non-red state also grants the perpendicular right
    /// arrows, so the arrows ride along through redyellow and yellow, not
    /// just green.
    pub fn set_phase_lights(&mut self, phase: Phase, state: LightState) {
        for approach in phase.approaches() {
            let road = self.road_mut(approach);
            match phase.lane_side() {
                LaneSide::Right => road.main_light = state,
                LaneSide::Left => road.left_turn_light = state,
            }
        }
        if state != LightState::Red {
            if let Some(arrow_approaches) = phase.arrow_approaches() {
                for approach in arrow_approaches {
                    self.road_mut(approach).right_arrow = true;
                }
            }
        }
    }
}

impl Default for Intersection {
    fn default() -> Self {
        Intersection::new()
    }
}
