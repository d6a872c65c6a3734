//! The square world map and its distance metric.

use crate::coord::MapCoord;
use crate::error::MapError;

/// How the map treats its edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// A flat map: distance is plain Euclidean.
    Bounded,
    /// A toroidal map: each axis wraps, and the shorter way around wins.
    Wrap,
}

/// A square world map, `size` tiles per side.
///
/// Under [`EdgeBehavior::Wrap`] the map is a torus: each axis delta is
/// reduced to `min(|Δ|, size − |Δ|)` before the Euclidean norm. Deltas are
/// canonicalized with `rem_euclid`, so coordinates outside `[0, size)`
/// still yield a correct wrap distance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldGrid {
    size: u32,
    edge: EdgeBehavior,
}

impl WorldGrid {
    /// Maximum side length: coordinates use `i32`.
    pub const MAX_SIZE: u32 = i32::MAX as u32;

    /// Create a grid with `size` tiles per side.
    ///
    /// Returns [`MapError::EmptyGrid`] for `size == 0` and
    /// [`MapError::SizeTooLarge`] beyond [`Self::MAX_SIZE`].
    pub fn new(size: u32, edge: EdgeBehavior) -> Result<Self, MapError> {
        if size == 0 {
            return Err(MapError::EmptyGrid);
        }
        if size > Self::MAX_SIZE {
            return Err(MapError::SizeTooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self { size, edge })
    }

    /// Tiles per side.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The configured edge behavior.
    pub fn edge(&self) -> EdgeBehavior {
        self.edge
    }

    /// Whether `coord` lies within `[0, size)` on both axes.
    pub fn contains(&self, coord: MapCoord) -> bool {
        let n = self.size as i32;
        (0..n).contains(&coord.x) && (0..n).contains(&coord.y)
    }

    /// 1D distance along a single axis, accounting for wrap.
    fn axis_distance(&self, a: i32, b: i32) -> f64 {
        match self.edge {
            EdgeBehavior::Bounded => (f64::from(a) - f64::from(b)).abs(),
            EdgeBehavior::Wrap => {
                let n = i64::from(self.size);
                let diff = (i64::from(a) - i64::from(b)).rem_euclid(n);
                diff.min(n - diff) as f64
            }
        }
    }

    /// Euclidean distance between two coordinates, in tiles.
    pub fn distance(&self, a: MapCoord, b: MapCoord) -> f64 {
        let dx = self.axis_distance(a.x, b.x);
        let dy = self.axis_distance(a.y, b.y);
        dx.hypot(dy)
    }
}
