pub mod color;
pub mod scene;
pub mod styled_polygon;

pub use color::{HexColor, Rgb};
pub use scene::{FigureId, FigureScene};
pub use styled_polygon::{Bounds, StyledPolygon};

/// Display name given to figures whose name is absent or blank.
pub const DEFAULT_NAME: &str = "Unnamed";
