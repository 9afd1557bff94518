pub mod polygon_2d;

/// Integer 2D vertex of a figure outline.
pub type Vertex = nalgebra::Point2<i32>;

/// Integer 2D displacement applied to a figure.
pub type Offset = nalgebra::Vector2<i32>;
