use std::fmt;

use crate::error::ShapeError;
use crate::math::polygon_2d::{edge_lengths, heron_area, signed_area_2d};
use crate::math::Vertex;

use super::{Area, Shape};

/// A closed polygon described by the lengths of its edges.
///
/// Every instance satisfies the generalized polygon inequality: each edge is
/// strictly shorter than the sum of all the others. Instances are immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    edges: Vec<f64>,
    area: Area,
}

impl Polygon {
    /// Creates a polygon from its edge lengths, in traversal order.
    ///
    /// The area is computed with Heron's formula for triangles and is
    /// [`Area::Unknown`] for any other edge count.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if there are fewer than 3 edges, an edge is not
    /// a positive finite number, or an edge is not shorter than the rest combined.
    pub fn from_edges(edges: &[f64]) -> Result<Self, ShapeError> {
        validate_edges(edges)?;
        let area = match *edges {
            [a, b, c] => Area::Known(heron_area(a, b, c)),
            _ => Area::Unknown,
        };
        Ok(Self {
            edges: edges.to_vec(),
            area,
        })
    }

    /// Creates a polygon from an ordered vertex loop.
    ///
    /// Edges run between consecutive vertices and from the last vertex back to
    /// the first. The area comes from the shoelace formula, so clockwise and
    /// counter-clockwise orderings give the same result.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if there are fewer than 3 vertices or the
    /// derived edges violate the polygon invariants (e.g. repeated or collinear vertices).
    pub fn from_vertices(vertices: &[Vertex]) -> Result<Self, ShapeError> {
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices {
                count: vertices.len(),
            });
        }
        let edges = edge_lengths(vertices);
        validate_edges(&edges)?;
        Ok(Self {
            edges,
            area: Area::Known(signed_area_2d(vertices).abs()),
        })
    }

    /// Returns the edge lengths in traversal order.
    #[must_use]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl Shape for Polygon {
    fn perimeter(&self) -> f64 {
        self.edges.iter().sum()
    }

    fn area(&self) -> Area {
        self.area
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "polygon with {} edges, perimeter {:.2}, area {}",
            self.edge_count(),
            self.perimeter(),
            self.area
        )
    }
}

/// Checks the edge count, edge positivity, and the generalized polygon inequality.
fn validate_edges(edges: &[f64]) -> Result<(), ShapeError> {
    if edges.len() < 3 {
        return Err(ShapeError::TooFewEdges { count: edges.len() });
    }
    for (index, &length) in edges.iter().enumerate() {
        if !length.is_finite() {
            return Err(ShapeError::NonFiniteEdge { index, length });
        }
        if length <= 0.0 {
            return Err(ShapeError::NonPositiveEdge { index, length });
        }
    }
    // When the plain sum overflows, compare in units of the longest edge.
    let scale = if edges.iter().sum::<f64>().is_finite() {
        1.0
    } else {
        edges.iter().copied().fold(0.0, f64::max)
    };
    let total: f64 = edges.iter().map(|&length| length / scale).sum();
    for (index, &length) in edges.iter().enumerate() {
        let share = length / scale;
        let rest = total - share;
        if share >= rest {
            return Err(ShapeError::InequalityViolated {
                index,
                length,
                rest: rest * scale,
            });
        }
    }
    Ok(())
}
