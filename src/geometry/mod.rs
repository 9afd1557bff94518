pub mod polygon;

pub use polygon::Polygon;

use std::fmt;

use crate::ordering::UNKNOWN_AREA_SORT_KEY;

/// Area of a shape, which may be unknown when it cannot be derived from the
/// information the shape was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Area {
    /// A computed, non-negative area.
    Known(f64),
    /// The area cannot be derived (e.g. a non-triangle given only edge lengths).
    Unknown,
}

impl Area {
    /// Returns the area value, or `None` if unknown.
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Known(area) => Some(area),
            Self::Unknown => None,
        }
    }

    /// Returns `true` if the area has been computed.
    #[must_use]
    pub fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Key used for ordering; unknown areas map to [`UNKNOWN_AREA_SORT_KEY`].
    #[must_use]
    pub fn sort_key(self) -> f64 {
        self.value().unwrap_or(UNKNOWN_AREA_SORT_KEY)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(area) => write!(f, "{area:.2}"),
            Self::Unknown => f.write_str("n/a"),
        }
    }
}

/// Common measurements of a closed shape.
pub trait Shape {
    /// Total length of the boundary.
    fn perimeter(&self) -> f64;

    /// Enclosed area, if it can be determined.
    fn area(&self) -> Area;
}
