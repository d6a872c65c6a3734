//! Map coordinates.

use std::fmt;

/// A coordinate on the square world map.
///
/// Whether the map wraps is a property of the [`WorldGrid`](crate::WorldGrid),
/// not of the coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MapCoord {
    /// Horizontal position in tiles.
    pub x: i32,
    /// Vertical position in tiles.
    pub y: i32,
}

impl MapCoord {
    /// Create a coordinate.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for MapCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}|{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for MapCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_pipe_notation() {
        assert_eq!(MapCoord::new(-3, 17).to_string(), "(-3|17)");
    }

    #[test]
    fn from_tuple() {
        assert_eq!(MapCoord::from((1, 2)), MapCoord::new(1, 2));
    }
}
