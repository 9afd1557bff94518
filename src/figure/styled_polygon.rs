use std::fmt;

use crate::error::{Result, ShapeError, StyleError};
use crate::geometry::{Area, Polygon, Shape};
use crate::math::polygon_2d::point_in_polygon_2d;
use crate::math::{Offset, Vertex};

use super::color::HexColor;
use super::DEFAULT_NAME;

/// Axis-aligned integer bounds of a figure's vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Vertex,
    pub max: Vertex,
}

impl Bounds {
    /// Width of the bounds (`max.x - min.x`).
    #[must_use]
    pub fn width(&self) -> i64 {
        i64::from(self.max.x) - i64::from(self.min.x)
    }

    /// Height of the bounds (`max.y - min.y`).
    #[must_use]
    pub fn height(&self) -> i64 {
        i64::from(self.max.y) - i64::from(self.min.y)
    }
}

/// A polygon with a display name, stroke and fill colors, and opacity.
///
/// The geometry is always derived from the stored vertices. The vertices are
/// owned by the figure: they are copied on construction and on every read, and
/// [`StyledPolygon::translate`] is the only way to change them.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledPolygon {
    vertices: Vec<Vertex>,
    geometry: Polygon,
    name: String,
    stroke_color: HexColor,
    fill_color: HexColor,
    opacity: f64,
}

impl StyledPolygon {
    /// Creates a styled polygon.
    ///
    /// A blank `name` is replaced by [`DEFAULT_NAME`]; otherwise it is trimmed.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if the vertices do not form a valid polygon, or
    /// a [`StyleError`] if a color is not `#RRGGBB` or `opacity` is outside `[0.0, 1.0]`.
    pub fn new(
        vertices: &[Vertex],
        name: &str,
        stroke_color: &str,
        fill_color: &str,
        opacity: f64,
    ) -> Result<Self> {
        let geometry = Polygon::from_vertices(vertices)?;
        let name = match name.trim() {
            "" => DEFAULT_NAME,
            trimmed => trimmed,
        };
        let stroke_color = HexColor::parse(stroke_color, "lineColor")?;
        let fill_color = HexColor::parse(fill_color, "fillColor")?;
        if !(0.0..=1.0).contains(&opacity) {
            return Err(StyleError::OpacityOutOfRange { value: opacity }.into());
        }
        Ok(Self {
            vertices: vertices.to_vec(),
            geometry,
            name: name.to_owned(),
            stroke_color,
            fill_color,
            opacity,
        })
    }

    /// Returns a copy of the vertices in outline order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Vertex> {
        self.vertices.clone()
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the underlying geometry.
    #[must_use]
    pub fn geometry(&self) -> &Polygon {
        &self.geometry
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn stroke_color(&self) -> &HexColor {
        &self.stroke_color
    }

    #[must_use]
    pub fn fill_color(&self) -> &HexColor {
        &self.fill_color
    }

    /// Returns the stroke color code as given at construction.
    #[must_use]
    pub fn stroke_color_hex(&self) -> &str {
        self.stroke_color.as_str()
    }

    /// Returns the fill color code as given at construction.
    #[must_use]
    pub fn fill_color_hex(&self) -> &str {
        self.fill_color.as_str()
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Returns `true` if the point lies inside the outline (winding number rule).
    #[must_use]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        point_in_polygon_2d(x, y, &self.vertices)
    }

    /// Returns the bounding rectangle of the vertices.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let first = self.vertices[0];
        let (min, max) = self.vertices[1..]
            .iter()
            .fold((first, first), |(min, max), p| {
                (
                    Vertex::new(min.x.min(p.x), min.y.min(p.y)),
                    Vertex::new(max.x.max(p.x), max.y.max(p.y)),
                )
            });
        Bounds { min, max }
    }

    /// Shifts every vertex by `(dx, dy)`.
    ///
    /// Either every vertex moves or none does.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::CoordinateOverflow`] if a shifted coordinate does
    /// not fit in `i32`; the figure is left unchanged.
    pub fn translate(&mut self, dx: i32, dy: i32) -> std::result::Result<(), ShapeError> {
        let offset = Offset::new(dx, dy);
        let moved = self
            .vertices
            .iter()
            .enumerate()
            .map(|(index, p)| {
                match (p.x.checked_add(offset.x), p.y.checked_add(offset.y)) {
                    (Some(x), Some(y)) => Ok(Vertex::new(x, y)),
                    _ => Err(ShapeError::CoordinateOverflow { index, dx, dy }),
                }
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.geometry = Polygon::from_vertices(&moved)?;
        self.vertices = moved;
        Ok(())
    }
}

impl Shape for StyledPolygon {
    fn perimeter(&self) -> f64 {
        self.geometry.perimeter()
    }

    fn area(&self) -> Area {
        self.geometry.area()
    }
}

impl fmt::Display for StyledPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (P={:.2})", self.name, self.perimeter())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FigureError;
    use approx::assert_relative_eq;

    fn v(x: i32, y: i32) -> Vertex {
        Vertex::new(x, y)
    }

    fn blue_square() -> StyledPolygon {
        StyledPolygon::new(
            &[v(1, 1), v(5, 1), v(5, 5), v(1, 5)],
            "Blue square",
            "#0000FF",
            "#AAAAFF",
            0.9,
        )
        .unwrap()
    }

    #[test]
    fn round_trip_of_inputs() {
        let sq = blue_square();
        assert_eq!(sq.vertices(), vec![v(1, 1), v(5, 1), v(5, 5), v(1, 5)]);
        assert_eq!(sq.stroke_color_hex(), "#0000FF");
        assert_eq!(sq.fill_color_hex(), "#AAAAFF");
        assert_relative_eq!(sq.opacity(), 0.9);
        assert_eq!(sq.display_name(), "Blue square");
        assert_eq!(sq.area(), Area::Known(16.0));
        assert_relative_eq!(sq.perimeter(), 16.0);
    }

    #[test]
    fn input_vertices_are_copied() {
        let mut pts = vec![v(0, 0), v(4, 0), v(2, 3)];
        let tri = StyledPolygon::new(&pts, "t", "#FF0000", "#FFAAAA", 0.7).unwrap();
        pts[0] = v(100, 100);
        assert_eq!(tri.vertices()[0], v(0, 0));
    }

    #[test]
    fn returned_vertices_are_copies() {
        let sq = blue_square();
        let mut copy = sq.vertices();
        copy[0] = v(-9, -9);
        assert_eq!(sq.vertices()[0], v(1, 1));
    }

    #[test]
    fn blank_name_gets_default() {
        let tri = StyledPolygon::new(&[v(0, 0), v(4, 0), v(2, 3)], "   ", "#FF0000", "#FFAAAA", 1.0)
            .unwrap();
        assert_eq!(tri.display_name(), DEFAULT_NAME);
        let named =
            StyledPolygon::new(&[v(0, 0), v(4, 0), v(2, 3)], "  Red  ", "#FF0000", "#FFAAAA", 1.0)
                .unwrap();
        assert_eq!(named.display_name(), "Red");
    }

    #[test]
    fn invalid_color_names_field() {
        let err = StyledPolygon::new(&[v(0, 0), v(4, 0), v(2, 3)], "t", "#FF0000", "blue", 1.0)
            .unwrap_err();
        assert!(matches!(
            err,
            FigureError::Style(StyleError::InvalidColor {
                field: "fillColor",
                ..
            })
        ));
    }

    #[test]
    fn opacity_bounds_are_inclusive() {
        let tri = [v(0, 0), v(4, 0), v(2, 3)];
        assert!(StyledPolygon::new(&tri, "t", "#000000", "#FFFFFF", 0.0).is_ok());
        assert!(StyledPolygon::new(&tri, "t", "#000000", "#FFFFFF", 1.0).is_ok());
        for bad in [-0.1, 1.01, f64::NAN] {
            assert!(matches!(
                StyledPolygon::new(&tri, "t", "#000000", "#FFFFFF", bad),
                Err(FigureError::Style(StyleError::OpacityOutOfRange { .. }))
            ));
        }
    }

    #[test]
    fn invalid_geometry_is_a_shape_error() {
        let err = StyledPolygon::new(&[v(0, 0), v(4, 0)], "t", "#000000", "#FFFFFF", 1.0)
            .unwrap_err();
        assert!(matches!(
            err,
            FigureError::Shape(ShapeError::TooFewVertices { count: 2 })
        ));
    }

    #[test]
    fn contains_point() {
        let sq = blue_square();
        assert!(sq.contains_point(3, 3));
        assert!(!sq.contains_point(0, 0));
        assert!(!sq.contains_point(6, 3));
    }

    #[test]
    fn translate_shifts_every_vertex() {
        let mut sq = blue_square();
        let before = sq.vertices();
        sq.translate(2, -1).unwrap();
        let after = sq.vertices();
        for (b, a) in before.iter().zip(&after) {
            assert_eq!(a - b, Offset::new(2, -1));
        }
        assert_eq!(sq.stroke_color_hex(), "#0000FF");
        assert_eq!(sq.fill_color_hex(), "#AAAAFF");
        assert_relative_eq!(sq.opacity(), 0.9);
        assert_eq!(sq.display_name(), "Blue square");
        assert_eq!(sq.area(), Area::Known(16.0));
        assert!(sq.contains_point(4, 2));
        assert!(!sq.contains_point(2, 2));
    }

    #[test]
    fn translate_overflow_leaves_figure_unchanged() {
        let mut sq = blue_square();
        let err = sq.translate(i32::MAX, 0).unwrap_err();
        assert!(matches!(err, ShapeError::CoordinateOverflow { index: 0, .. }));
        assert_eq!(sq.vertices(), vec![v(1, 1), v(5, 1), v(5, 5), v(1, 5)]);
    }

    #[test]
    fn bounds_cover_vertices() {
        let tri = StyledPolygon::new(&[v(0, 2), v(4, 0), v(2, 3)], "t", "#000000", "#FFFFFF", 1.0)
            .unwrap();
        let b = tri.bounds();
        assert_eq!(b.min, v(0, 0));
        assert_eq!(b.max, v(4, 3));
        assert_eq!(b.width(), 4);
        assert_eq!(b.height(), 3);
    }

    #[test]
    fn display_shows_name_and_perimeter() {
        assert_eq!(blue_square().to_string(), "Blue square (P=16.00)");
    }
}
