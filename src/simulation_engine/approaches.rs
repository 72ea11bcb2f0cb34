use serde::{Deserialize, Serialize};

/// The four roads meeting at the junction, named by compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Approach {
    North,
    East,
    South,
    West,
}

/// Canonical iteration order. Vehicle release and tie-breaking both walk
/// approaches in exactly this order, so it must not be reordered.
pub const ALL_APPROACHES: [Approach; 4] = [
    Approach::North,
    Approach::East,
    Approach::South,
    Approach::West,
];

impl Approach {
    /// Position on the compass ring (north = 0, east = 1, south = 2,
    /// west = 3), used for turn-direction arithmetic and road indexing.
    pub fn ordinal(self) -> usize {
        match self {
            Approach::North => 0,
            Approach::East => 1,
            Approach::South => 2,
            Approach::West => 3,
        }
    }
}
