use crate::simulation_engine::approaches::Approach;

/// Which lane of an approach a phase drains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneSide {
    Left,
    Right,
}

/// One of the four mutually exclusive right-of-way groups. Each phase
/// serves one lane on each of two opposite approaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NorthSouthStraightRight,
    EastWestStraightRight,
    NorthSouthLeftTurn,
    EastWestLeftTurn,
}

/// Fixed evaluation order. Best-phase ties resolve to the earliest entry,
/// so this order is part of the scheduling behaviour, not a convenience.
pub const ALL_PHASES: [Phase; 4] = [
    Phase::NorthSouthStraightRight,
    Phase::EastWestStraightRight,
    Phase::NorthSouthLeftTurn,
    Phase::EastWestLeftTurn,
];

impl Phase {
    /// The two opposite approaches this phase serves.
    pub fn approaches(self) -> [Approach; 2] {
        match self {
            Phase::NorthSouthStraightRight | Phase::NorthSouthLeftTurn => {
                [Approach::North, Approach::South]
            }
            Phase::EastWestStraightRight | Phase::EastWestLeftTurn => {
                [Approach::East, Approach::West]
            }
        }
    }

    /// Which lane this phase releases on its approaches.
    pub fn lane_side(self) -> LaneSide {
        match self {
            Phase::NorthSouthStraightRight | Phase::EastWestStraightRight => LaneSide::Right,
            Phase::NorthSouthLeftTurn | Phase::EastWestLeftTurn => LaneSide::Left,
        }
    }

    /// Left-turn phases grant a permissive right arrow to the perpendicular
    /// axis while their lights show anything other than red. Straight
    /// phases grant none.
    pub fn arrow_approaches(self) -> Option<[Approach; 2]> {
        match self {
            Phase::NorthSouthLeftTurn => Some([Approach::East, Approach::West]),
            Phase::EastWestLeftTurn => Some([Approach::North, Approach::South]),
            _ => None,
        }
    }
}
