use crate::simulation_engine::intersections::Intersection;
use crate::simulation_engine::phases::{Phase, ALL_PHASES};

/// Demand score for one phase: the sum of `waiting_for` squared over every
/// vehicle in the phase's two lanes. Squaring makes age count superlinearly,
/// so a long-starved movement eventually outbids a merely busy one.
pub fn phase_score(intersection: &Intersection, phase: Phase) -> u64 {
    let side = phase.lane_side();
    phase
        .approaches()
        .iter()
        .map(|&approach| {
            intersection
                .road(approach)
                .lane(side)
                .iter()
                .map(|vehicle| u64::from(vehicle.waiting_for) * u64::from(vehicle.waiting_for))
                .sum::<u64>()
        })
        .sum()
}

/// How many departing steps the phase needs to drain: the longer of its two
/// lane queues, since opposite lanes release in parallel.
pub fn phase_pressure(intersection: &Intersection, phase: Phase) -> usize {
    let side = phase.lane_side();
    phase
        .approaches()
        .iter()
        .map(|&approach| intersection.road(approach).lane(side).len())
        .max()
        .unwrap_or(0)
}

/// Picks the phase with the highest demand score. Candidates are scanned in
/// the fixed `ALL_PHASES` order and the running best is replaced only on
/// strict improvement, so ties go to the earliest phase in that order.
pub fn best_phase(intersection: &Intersection) -> Phase {
    let mut best = ALL_PHASES[0];
    let mut best_score = phase_score(intersection, best);
    for &candidate in &ALL_PHASES[1..] {
        let score = phase_score(intersection, candidate);
        if score > best_score {
            best = candidate;
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation_engine::approaches::Approach;
    use crate::simulation_engine::vehicles::Vehicle;

    fn aged_vehicle(id: &str, start: Approach, end: Approach, waited: u32) -> Vehicle {
        let mut vehicle = Vehicle::new(id.to_string(), start, end);
        vehicle.waiting_for = waited;
        vehicle
    }

    #[test]
    fn score_is_sum_of_squared_waits_over_both_lanes() {
        let mut intersection = Intersection::new();
        intersection.enqueue(aged_vehicle("n1", Approach::North, Approach::South, 1));
        intersection.enqueue(aged_vehicle("n2", Approach::North, Approach::West, 2));
        intersection.enqueue(aged_vehicle("s1", Approach::South, Approach::North, 3));

        assert_eq!(
            phase_score(&intersection, Phase::NorthSouthStraightRight),
            1 + 4 + 9
        );
        assert_eq!(phase_score(&intersection, Phase::EastWestStraightRight), 0);
    }

    #[test]
    fn score_ignores_the_other_lane() {
        let mut intersection = Intersection::new();
        intersection.enqueue(aged_vehicle("left", Approach::North, Approach::East, 5));

        assert_eq!(phase_score(&intersection, Phase::NorthSouthStraightRight), 0);
        assert_eq!(phase_score(&intersection, Phase::NorthSouthLeftTurn), 25);
    }

    #[test]
    fn pressure_is_the_longer_of_the_two_queues() {
        let mut intersection = Intersection::new();
        intersection.enqueue(aged_vehicle("e1", Approach::East, Approach::West, 1));
        intersection.enqueue(aged_vehicle("e2", Approach::East, Approach::West, 1));
        intersection.enqueue(aged_vehicle("w1", Approach::West, Approach::East, 1));

        assert_eq!(phase_pressure(&intersection, Phase::EastWestStraightRight), 2);
        assert_eq!(phase_pressure(&intersection, Phase::NorthSouthStraightRight), 0);
    }

    #[test]
    fn empty_junction_defaults_to_the_first_phase() {
        let intersection = Intersection::new();
        assert_eq!(best_phase(&intersection), Phase::NorthSouthStraightRight);
    }

    #[test]
    fn ties_go_to_the_earliest_phase_in_order() {
        let mut intersection = Intersection::new();
        intersection.enqueue(aged_vehicle("n", Approach::North, Approach::South, 2));
        intersection.enqueue(aged_vehicle("e", Approach::East, Approach::West, 2));

        assert_eq!(best_phase(&intersection), Phase::NorthSouthStraightRight);
    }

    #[test]
    fn older_waiters_outbid_longer_queues() {
        let mut intersection = Intersection::new();
        // Three fresh vehicles straight through north: score 3.
        for n in 0..3 {
            intersection.enqueue(aged_vehicle(
                &format!("n{}", n),
                Approach::North,
                Approach::South,
                1,
            ));
        }
        // One vehicle stuck in the west left lane for 2 steps: score 4.
        intersection.enqueue(aged_vehicle("w1", Approach::West, Approach::West, 2));

        assert_eq!(best_phase(&intersection), Phase::EastWestLeftTurn);
    }
}
