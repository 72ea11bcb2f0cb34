use crate::simulation_engine::approaches::Approach;

/// How a route crosses the junction, derived from the compass distance
/// between its start and end approaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnKind {
    UTurn,
    Left,
    Straight,
    Right,
}

impl TurnKind {
    /// Classifies a route as `(end - start + 4) mod 4` over the compass
    /// ordinals: 0 is a U-turn, 1 a left turn, 2 straight ahead, 3 a right
    /// turn. A route back onto its own road is a valid U-turn.
    pub fn classify(start_road: Approach, end_road: Approach) -> TurnKind {
        let distance = (end_road.ordinal() + 4 - start_road.ordinal()) % 4;
        match distance {
            0 => TurnKind::UTurn,
            1 => TurnKind::Left,
            2 => TurnKind::Straight,
            _ => TurnKind::Right,
        }
    }

    /// U-turns and left turns queue in the protected left lane; straight
    /// and right-turning traffic shares the through lane.
    pub fn uses_left_lane(self) -> bool {
        matches!(self, TurnKind::UTurn | TurnKind::Left)
    }
}

/// A vehicle queued at the junction.
///
/// The id is an opaque caller-supplied label. Duplicate ids are accepted;
/// every queue entry is its own vehicle regardless of what it is called.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: String,
    pub start_road: Approach,
    pub end_road: Approach,
    /// Steps spent queued so far. Bumped once at the top of every step,
    /// including the step in which the vehicle departs.
    pub waiting_for: u32,
    pub turn: TurnKind,
}

impl Vehicle {
    /// Creates a queued vehicle with its turn classified once up front.
    pub fn new(id: String, start_road: Approach, end_road: Approach) -> Self {
        let turn = TurnKind::classify(start_road, end_road);
        Vehicle {
            id,
            start_road,
            end_road,
            waiting_for: 0,
            turn,
        }
    }
}
