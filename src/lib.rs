pub mod error;
pub mod figure;
pub mod geometry;
pub mod io;
pub mod math;
pub mod ordering;
pub mod parser;

pub use error::{FigureError, Result};
pub use figure::{FigureId, FigureScene, HexColor, StyledPolygon};
pub use geometry::{Area, Polygon, Shape};
pub use math::Vertex;
pub use parser::{parse_figure_text, parse_figures, FigureParser, ParseOptions};
