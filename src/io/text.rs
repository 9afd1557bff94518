use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{FormatError, Result};
use crate::figure::StyledPolygon;
use crate::parser::{parse_figure_text, FIGURE_DELIMITER, SUPPORTED_CLASS};

/// Reads a figure text file and parses every block in it.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a parse error as
/// described in [`crate::parser::FigureParser::parse`].
pub fn load_figures(path: impl AsRef<Path>) -> Result<Vec<StyledPolygon>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let figures = parse_figure_text(&text)?;
    debug!(path = %path.display(), count = figures.len(), "loaded figure file");
    Ok(figures)
}

/// Writes figures to a file in the figure text format.
///
/// # Errors
///
/// Returns an error if a figure cannot be represented in the format or the
/// file cannot be written.
pub fn save_figures(path: impl AsRef<Path>, figures: &[StyledPolygon]) -> Result<()> {
    let path = path.as_ref();
    let text = write_figures(figures)?;
    fs::write(path, text)?;
    debug!(path = %path.display(), count = figures.len(), "saved figure file");
    Ok(())
}

/// Renders figures in the figure text format, one block per figure.
///
/// # Errors
///
/// Returns [`FormatError`] if a figure has a negative coordinate or a
/// multi-line name, neither of which the format can express.
pub fn write_figures(figures: &[StyledPolygon]) -> std::result::Result<String, FormatError> {
    let mut out = String::new();
    for (i, figure) in figures.iter().enumerate() {
        let name = figure.display_name();
        if name.contains(['\n', '\r']) {
            return Err(FormatError::MultilineName {
                name: name.to_owned(),
            });
        }
        let mut coordinates = Vec::with_capacity(figure.vertex_count());
        for (index, p) in figure.vertices().iter().enumerate() {
            if p.x < 0 || p.y < 0 {
                return Err(FormatError::NegativeCoordinate {
                    name: name.to_owned(),
                    index,
                });
            }
            coordinates.push(format!("({},{})", p.x, p.y));
        }

        if i > 0 {
            out.push('\n');
        }
        // Writing into a `String` cannot fail.
        let _ = writeln!(out, "{FIGURE_DELIMITER}");
        let _ = writeln!(out, "class: {SUPPORTED_CLASS}");
        let _ = writeln!(out, "name: {name}");
        let _ = writeln!(out, "coordinates: {}", coordinates.join(" "));
        let _ = writeln!(out, "lineColor: {}", figure.stroke_color_hex());
        let _ = writeln!(out, "fillColor: {}", figure.fill_color_hex());
        let _ = writeln!(out, "opacity: {}", figure.opacity());
    }
    Ok(out)
}
