//! Draft moves: (source, color, destination) tuples.

use serde::{Deserialize, Serialize};

use crate::tiles::Color;

/// Where a draft takes tiles from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSource {
    /// A factory display, by index.
    Display(usize),
    /// The center of the table.
    Center,
}

/// Where drafted tiles go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// A staging row, by index (capacity = index + 1).
    Row(usize),
    /// Straight to the floor line. Only generated when no staging row can
    /// legally accept the color.
    Floor,
}

/// One complete draft move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub source: MoveSource,
    pub color: Color,
    pub dest: Destination,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.source {
            MoveSource::Display(i) => write!(f, "display {}", i + 1)?,
            MoveSource::Center => write!(f, "center")?,
        }
        write!(f, ": {} -> ", self.color)?;
        match self.dest {
            Destination::Row(r) => write!(f, "row {}", r + 1),
            Destination::Floor => write!(f, "floor"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_form() {
        let mv = Move {
            source: MoveSource::Display(0),
            color: Color::Red,
            dest: Destination::Row(2),
        };
        assert_eq!(mv.to_string(), "display 1: R -> row 3");

        let mv = Move {
            source: MoveSource::Center,
            color: Color::White,
            dest: Destination::Floor,
        };
        assert_eq!(mv.to_string(), "center: W -> floor");
    }

    #[test]
    fn test_serde_round_trip() {
        let mv = Move {
            source: MoveSource::Center,
            color: Color::Black,
            dest: Destination::Row(4),
        };
        let json = serde_json::to_string(&mv).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mv);
    }
}
