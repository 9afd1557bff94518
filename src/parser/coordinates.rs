use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::math::Vertex;

/// `(x,y)` with non-negative decimal integers; whitespace may follow the comma.
#[allow(clippy::expect_used)]
static COORDINATE_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([0-9]+),\s*([0-9]+)\)").expect("coordinate pattern is valid")
});

/// Minimum number of vertex pairs a `coordinates` field must contain.
const MIN_VERTICES: usize = 3;

/// Extracts the vertices listed in a `coordinates` field value.
///
/// Every non-overlapping `(x,y)` match is taken left to right; text between
/// matches is ignored.
///
/// # Errors
///
/// Returns [`ParseError::InsufficientVertices`] if fewer than 3 pairs match, or
/// [`ParseError::CoordinateOutOfRange`] if a number does not fit in `i32`.
pub fn parse_coordinates(value: &str, block: usize) -> Result<Vec<Vertex>, ParseError> {
    let parse = |digits: &str| {
        digits
            .parse::<i32>()
            .map_err(|_| ParseError::CoordinateOutOfRange {
                block,
                value: digits.to_owned(),
            })
    };
    let vertices = COORDINATE_PAIR
        .captures_iter(value)
        .map(|caps| -> Result<Vertex, ParseError> {
            let (_, [x, y]) = caps.extract();
            Ok(Vertex::new(parse(x)?, parse(y)?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if vertices.len() < MIN_VERTICES {
        return Err(ParseError::InsufficientVertices {
            block,
            found: vertices.len(),
        });
    }
    Ok(vertices)
}
