//! Grid directions and their quarter-turn rotation.
//!
//! Coordinates follow the map convention: x grows toward the south-west
//! edge, y toward the south-east edge. A quarter turn maps `(x, y)` to
//! `(-y, x)`; every direction type here rotates consistently with that so a
//! rotated blueprint keeps its cross-tile relationships.

use crate::tile::TileOffset;

/// One of the four tile edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagDirection {
    NE,
    SE,
    SW,
    NW,
}

impl DiagDirection {
    pub const ALL: [DiagDirection; 4] = [
        DiagDirection::NE,
        DiagDirection::SE,
        DiagDirection::SW,
        DiagDirection::NW,
    ];

    /// Offset to the neighbouring tile across this edge.
    pub fn offset(self) -> TileOffset {
        match self {
            DiagDirection::NE => TileOffset::new(-1, 0),
            DiagDirection::SE => TileOffset::new(0, 1),
            DiagDirection::SW => TileOffset::new(1, 0),
            DiagDirection::NW => TileOffset::new(0, -1),
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            DiagDirection::NE => DiagDirection::SW,
            DiagDirection::SE => DiagDirection::NW,
            DiagDirection::SW => DiagDirection::NE,
            DiagDirection::NW => DiagDirection::SE,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            DiagDirection::NE | DiagDirection::SW => Axis::X,
            DiagDirection::SE | DiagDirection::NW => Axis::Y,
        }
    }

    /// Quarter turn, matching `TileOffset::rotated`.
    pub fn rotated(self) -> Self {
        match self {
            DiagDirection::NE => DiagDirection::NW,
            DiagDirection::SE => DiagDirection::NE,
            DiagDirection::SW => DiagDirection::SE,
            DiagDirection::NW => DiagDirection::SW,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn other(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    pub fn rotated(self) -> Self {
        self.other()
    }

    /// The straight track running along this axis.
    pub fn track(self) -> Track {
        match self {
            Axis::X => Track::X,
            Axis::Y => Track::Y,
        }
    }
}

/// A rail piece within one tile. `Upper`, `Lower`, `Left` and `Right` are the
/// diagonal pieces in the north, south, west and east corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Track {
    X,
    Y,
    Upper,
    Lower,
    Left,
    Right,
}

impl Track {
    pub const ALL: [Track; 6] = [
        Track::X,
        Track::Y,
        Track::Upper,
        Track::Lower,
        Track::Left,
        Track::Right,
    ];

    pub fn rotated(self) -> Self {
        match self {
            Track::X => Track::Y,
            Track::Y => Track::X,
            Track::Upper => Track::Left,
            Track::Left => Track::Lower,
            Track::Lower => Track::Right,
            Track::Right => Track::Upper,
        }
    }
}

/// A track piece together with a travel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Trackdir {
    XNe,
    YSe,
    UpperE,
    LowerE,
    LeftS,
    RightS,
    XSw,
    YNw,
    UpperW,
    LowerW,
    LeftN,
    RightN,
}

impl Trackdir {
    pub const ALL: [Trackdir; 12] = [
        Trackdir::XNe,
        Trackdir::YSe,
        Trackdir::UpperE,
        Trackdir::LowerE,
        Trackdir::LeftS,
        Trackdir::RightS,
        Trackdir::XSw,
        Trackdir::YNw,
        Trackdir::UpperW,
        Trackdir::LowerW,
        Trackdir::LeftN,
        Trackdir::RightN,
    ];

    pub fn track(self) -> Track {
        match self {
            Trackdir::XNe | Trackdir::XSw => Track::X,
            Trackdir::YSe | Trackdir::YNw => Track::Y,
            Trackdir::UpperE | Trackdir::UpperW => Track::Upper,
            Trackdir::LowerE | Trackdir::LowerW => Track::Lower,
            Trackdir::LeftS | Trackdir::LeftN => Track::Left,
            Trackdir::RightS | Trackdir::RightN => Track::Right,
        }
    }

    /// Edge a train leaves the tile through.
    pub fn exit_dir(self) -> DiagDirection {
        match self {
            Trackdir::XNe | Trackdir::UpperE | Trackdir::RightN => DiagDirection::NE,
            Trackdir::YSe | Trackdir::LowerE | Trackdir::RightS => DiagDirection::SE,
            Trackdir::XSw | Trackdir::LeftS | Trackdir::LowerW => DiagDirection::SW,
            Trackdir::YNw | Trackdir::UpperW | Trackdir::LeftN => DiagDirection::NW,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Trackdir::XNe => Trackdir::XSw,
            Trackdir::YSe => Trackdir::YNw,
            Trackdir::UpperE => Trackdir::UpperW,
            Trackdir::LowerE => Trackdir::LowerW,
            Trackdir::LeftS => Trackdir::LeftN,
            Trackdir::RightS => Trackdir::RightN,
            Trackdir::XSw => Trackdir::XNe,
            Trackdir::YNw => Trackdir::YSe,
            Trackdir::UpperW => Trackdir::UpperE,
            Trackdir::LowerW => Trackdir::LowerE,
            Trackdir::LeftN => Trackdir::LeftS,
            Trackdir::RightN => Trackdir::RightS,
        }
    }

    /// Trackdir a straight-line run continues with on the tile it exits into.
    /// Straight pieces repeat; diagonal pieces alternate corners.
    pub fn next(self) -> Self {
        match self {
            Trackdir::UpperE => Trackdir::LowerE,
            Trackdir::LowerE => Trackdir::UpperE,
            Trackdir::LeftS => Trackdir::RightS,
            Trackdir::RightS => Trackdir::LeftS,
            Trackdir::UpperW => Trackdir::LowerW,
            Trackdir::LowerW => Trackdir::UpperW,
            Trackdir::LeftN => Trackdir::RightN,
            Trackdir::RightN => Trackdir::LeftN,
            straight => straight,
        }
    }

    pub fn from_track_and_exit(track: Track, exit: DiagDirection) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|td| td.track() == track && td.exit_dir() == exit)
    }

    pub fn rotated(self) -> Self {
        let track = self.track().rotated();
        let exit = self.exit_dir().rotated();
        // Rotation maps tile edges onto tile edges, so the pair stays valid.
        Self::from_track_and_exit(track, exit).unwrap_or(self)
    }

    /// Dense index used as the signal position on a tile.
    pub fn index(self) -> u8 {
        self as u8
    }
}
