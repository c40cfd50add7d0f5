/// One of the six block faces a connector can occupy. The declaration
/// order is persisted as an ordinal in the tag format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Down,
    Up,
    North,
    South,
    East,
    West,
}

impl Side {
    pub const ALL: [Side; 6] = [
        Side::Down,
        Side::Up,
        Side::North,
        Side::South,
        Side::East,
        Side::West,
    ];

    pub fn index(self) -> u8 {
        match self {
            Side::Down => 0,
            Side::Up => 1,
            Side::North => 2,
            Side::South => 3,
            Side::East => 4,
            Side::West => 5,
        }
    }

    pub fn from_index(index: u8) -> Option<Side> {
        Side::ALL.get(index as usize).copied()
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Down => Side::Up,
            Side::Up => Side::Down,
            Side::North => Side::South,
            Side::South => Side::North,
            Side::East => Side::West,
            Side::West => Side::East,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Down => "down",
            Side::Up => "up",
            Side::North => "north",
            Side::South => "south",
            Side::East => "east",
            Side::West => "west",
        }
    }

    pub fn from_name(name: &str) -> Option<Side> {
        Side::ALL
            .iter()
            .copied()
            .find(|side| side.name().eq_ignore_ascii_case(name))
    }
}
