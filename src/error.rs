use thiserror::Error;

/// Top-level error type for polyfig.
#[derive(Debug, Error)]
pub enum FigureError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A geometric invariant of a polygon was violated.
///
/// Edge and vertex indices are zero-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("a polygon needs at least 3 edges, got {count}")]
    TooFewEdges { count: usize },

    #[error("a polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("edge {index} has non-positive length {length}")]
    NonPositiveEdge { index: usize, length: f64 },

    #[error("edge {index} has non-finite length {length}")]
    NonFiniteEdge { index: usize, length: f64 },

    #[error("edge {index} (length {length}) is not shorter than the sum of the other edges ({rest})")]
    InequalityViolated {
        index: usize,
        length: f64,
        rest: f64,
    },

    #[error("translating vertex {index} by ({dx}, {dy}) overflows the coordinate range")]
    CoordinateOverflow { index: usize, dx: i32, dy: i32 },
}

/// A presentation attribute of a styled polygon is malformed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    #[error("invalid color in {field}: {value:?} (expected #RRGGBB)")]
    InvalidColor { field: &'static str, value: String },

    #[error("missing color in {field} (expected #RRGGBB)")]
    MissingColor { field: &'static str },

    #[error("opacity {value} is out of range [0.0, 1.0]")]
    OpacityOutOfRange { value: f64 },
}

/// A figure block could not be turned into a styled polygon.
///
/// `block` is the one-based ordinal of the block within the input. Every
/// variant is fatal to the load; unsupported classes are skipped instead of
/// being reported here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("figure #{block}: missing coordinates")]
    MissingCoordinates { block: usize },

    #[error("figure #{block}: insufficient vertices: {found}")]
    InsufficientVertices { block: usize, found: usize },

    #[error("figure #{block}: coordinate {value} is out of range")]
    CoordinateOutOfRange { block: usize, value: String },

    #[error("figure #{block}: invalid opacity: {value:?}")]
    InvalidOpacity { block: usize, value: String },

    #[error("figure #{block}: {source}")]
    Shape {
        block: usize,
        #[source]
        source: ShapeError,
    },

    #[error("figure #{block}: {source}")]
    Style {
        block: usize,
        #[source]
        source: StyleError,
    },
}

impl ParseError {
    /// Returns the one-based ordinal of the offending block.
    #[must_use]
    pub fn block(&self) -> usize {
        match self {
            Self::MissingCoordinates { block }
            | Self::InsufficientVertices { block, .. }
            | Self::CoordinateOutOfRange { block, .. }
            | Self::InvalidOpacity { block, .. }
            | Self::Shape { block, .. }
            | Self::Style { block, .. } => *block,
        }
    }
}

/// Errors related to figure scene bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("figure not found in scene")]
    FigureNotFound,
}

/// A figure cannot be written in the figure text format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("figure {name:?}: vertex {index} has a negative coordinate")]
    NegativeCoordinate { name: String, index: usize },

    #[error("figure name {name:?} spans several lines")]
    MultilineName { name: String },
}

/// Convenience type alias for results using [`FigureError`].
pub type Result<T> = std::result::Result<T, FigureError>;
