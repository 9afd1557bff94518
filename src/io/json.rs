use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::figure::StyledPolygon;
use crate::math::Vertex;

/// JSON shape of one figure.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FigureDocument {
    name: String,
    line_color: String,
    fill_color: String,
    opacity: f64,
    coordinates: Vec<[i32; 2]>,
}

impl From<&StyledPolygon> for FigureDocument {
    fn from(figure: &StyledPolygon) -> Self {
        Self {
            name: figure.display_name().to_owned(),
            line_color: figure.stroke_color_hex().to_owned(),
            fill_color: figure.fill_color_hex().to_owned(),
            opacity: figure.opacity(),
            coordinates: figure.vertices().iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}

impl FigureDocument {
    fn into_figure(self) -> Result<StyledPolygon> {
        let vertices: Vec<Vertex> = self
            .coordinates
            .iter()
            .map(|&[x, y]| Vertex::new(x, y))
            .collect();
        StyledPolygon::new(
            &vertices,
            &self.name,
            &self.line_color,
            &self.fill_color,
            self.opacity,
        )
    }
}

/// Serializes figures as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn figures_to_json(figures: &[StyledPolygon]) -> Result<String> {
    let documents: Vec<FigureDocument> = figures.iter().map(FigureDocument::from).collect();
    Ok(serde_json::to_string_pretty(&documents)?)
}

/// Deserializes figures from a JSON array, validating each one.
///
/// # Errors
///
/// Returns a JSON error for malformed input, or the shape/style error of the
/// first invalid figure.
pub fn figures_from_json(json: &str) -> Result<Vec<StyledPolygon>> {
    let documents: Vec<FigureDocument> = serde_json::from_str(json)?;
    documents
        .into_iter()
        .map(FigureDocument::into_figure)
        .collect()
}

/// Writes figures to a JSON file.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn save_json(path: impl AsRef<Path>, figures: &[StyledPolygon]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, figures_to_json(figures)?)?;
    debug!(path = %path.display(), count = figures.len(), "saved figure json");
    Ok(())
}

/// Reads figures from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are invalid.
pub fn load_json(path: impl AsRef<Path>) -> Result<Vec<StyledPolygon>> {
    let path = path.as_ref();
    let figures = figures_from_json(&fs::read_to_string(path)?)?;
    debug!(path = %path.display(), count = figures.len(), "loaded figure json");
    Ok(figures)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{FigureError, ShapeError, StyleError};

    fn square() -> StyledPolygon {
        StyledPolygon::new(
            &[
                Vertex::new(1, 1),
                Vertex::new(5, 1),
                Vertex::new(5, 5),
                Vertex::new(1, 5),
            ],
            "Blue square",
            "#0000FF",
            "#AAAAFF",
            0.9,
        )
        .unwrap()
    }

    #[test]
    fn document_layout() {
        let json = figures_to_json(&[square()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "name": "Blue square",
                "lineColor": "#0000FF",
                "fillColor": "#AAAAFF",
                "opacity": 0.9,
                "coordinates": [[1, 1], [5, 1], [5, 5], [1, 5]]
            }])
        );
        assert!(json.contains("\n  {"), "expected two-space indent: {json}");
    }

    #[test]
    fn negative_coordinates_survive_json() {
        let mut fig = square();
        fig.translate(-10, -10).unwrap();
        let back = figures_from_json(&figures_to_json(&[fig.clone()]).unwrap()).unwrap();
        assert_eq!(back, vec![fig]);
    }

    #[test]
    fn invalid_figure_fails_whole_load() {
        let json = r##"[
            {"name": "ok", "lineColor": "#000000", "fillColor": "#FFFFFF", "opacity": 1.0,
             "coordinates": [[0, 0], [4, 0], [2, 3]]},
            {"name": "bad", "lineColor": "#000000", "fillColor": "white", "opacity": 1.0,
             "coordinates": [[0, 0], [4, 0], [2, 3]]}
        ]"##;
        assert!(matches!(
            figures_from_json(json),
            Err(FigureError::Style(StyleError::InvalidColor { field: "fillColor", .. }))
        ));
    }

    #[test]
    fn too_few_points_is_shape_error() {
        let json = r##"[{"name": "", "lineColor": "#000000", "fillColor": "#FFFFFF",
            "opacity": 0.5, "coordinates": [[0, 0], [4, 0]]}]"##;
        assert!(matches!(
            figures_from_json(json),
            Err(FigureError::Shape(ShapeError::TooFewVertices { count: 2 }))
        ));
    }

    #[test]
    fn malformed_json_is_json_error() {
        assert!(matches!(
            figures_from_json("{not json"),
            Err(FigureError::Json(_))
        ));
        assert!(matches!(
            figures_from_json(r#"[{"name": "x"}]"#),
            Err(FigureError::Json(_))
        ));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figures.json");
        save_json(&path, &[square()]).unwrap();
        assert_eq!(load_json(&path).unwrap(), vec![square()]);
    }
}
