//! Parser for the block-structured figure text format.
//!
//! ```text
//! --- FIGURE ---
//! class: ColoredPolygon
//! name: Red triangle
//! coordinates: (0,0) (4,0) (2,3)
//! lineColor: #FF0000
//! fillColor: #FFAAAA
//! opacity: 0.7
//! ```
//!
//! Blocks with an unsupported `class` are skipped with a warning. Any other
//! defect in a block aborts the whole load.
//!
//! `opacity` takes a plain decimal or exponent number (`0.7`, `.5`, `7e-1`),
//! read with [`str::parse::<f64>`]. Type suffixes such as `0.5f` or `0.5d` and
//! hexadecimal floats are rejected as [`ParseError::InvalidOpacity`].

mod coordinates;
pub mod record;

pub use coordinates::parse_coordinates;
pub use record::FigureRecord;

use tracing::{debug, trace, warn};

use crate::error::{FigureError, ParseError, Result, StyleError};
use crate::figure::{StyledPolygon, DEFAULT_NAME};

/// Line that opens a figure block.
pub const FIGURE_DELIMITER: &str = "--- FIGURE ---";

/// The only `class` tag the parser builds figures for.
pub const SUPPORTED_CLASS: &str = "ColoredPolygon";

/// Opacity used when a block has no `opacity` field.
pub const DEFAULT_OPACITY: f64 = 1.0;

/// Tunable parts of the figure text format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Line that opens a block, compared after trimming.
    pub delimiter: String,
    /// Accepted `class` tag; blocks with any other tag are skipped.
    pub supported_class: String,
    /// Name used when a block has no (or a blank) `name` field.
    pub default_name: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: FIGURE_DELIMITER.to_owned(),
            supported_class: SUPPORTED_CLASS.to_owned(),
            default_name: DEFAULT_NAME.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    InBlock,
}

/// Turns a sequence of text lines into styled polygons.
#[derive(Debug, Clone, Default)]
pub struct FigureParser {
    options: ParseOptions,
}

impl FigureParser {
    /// Creates a parser for the default format.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets custom format options.
    #[must_use]
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses every figure block in `lines`, returning the figures in input order.
    ///
    /// Lines before the first delimiter are ignored. Inside a block, lines are
    /// trimmed and blank lines dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] for the first block that has no coordinates, too
    /// few vertices, an unreadable opacity, or that fails shape or style
    /// validation. No figures are returned in that case.
    pub fn parse<I, S>(&self, lines: I) -> Result<Vec<StyledPolygon>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut figures = Vec::new();
        let mut state = State::Outside;
        let mut block: Vec<String> = Vec::new();
        let mut ordinal = 0;

        for line in lines {
            let line = line.as_ref().trim();
            if line == self.options.delimiter {
                self.flush(&mut block, ordinal, &mut figures)?;
                ordinal += 1;
                state = State::InBlock;
            } else if line.is_empty() {
                trace!(block = ordinal, "skipping blank line");
            } else if state == State::InBlock {
                block.push(line.to_owned());
            } else {
                trace!(line, "ignoring line outside figure block");
            }
        }
        self.flush(&mut block, ordinal, &mut figures)?;

        debug!(blocks = ordinal, figures = figures.len(), "parsed figure blocks");
        Ok(figures)
    }

    /// Parses and emits the accumulated block, leaving the buffer empty.
    fn flush(
        &self,
        block: &mut Vec<String>,
        ordinal: usize,
        figures: &mut Vec<StyledPolygon>,
    ) -> Result<()> {
        if block.is_empty() {
            return Ok(());
        }
        let lines = std::mem::take(block);
        if let Some(figure) = self.parse_block(&lines, ordinal)? {
            debug!(block = ordinal, name = figure.display_name(), "parsed figure");
            figures.push(figure);
        }
        Ok(())
    }

    /// Builds the figure for one block, or `None` if its class is unsupported.
    fn parse_block(&self, lines: &[String], block: usize) -> Result<Option<StyledPolygon>> {
        let record = FigureRecord::from_lines(lines);

        match record.get("class") {
            Some(class) if class == self.options.supported_class => {}
            class => {
                warn!(
                    block,
                    class,
                    supported = %self.options.supported_class,
                    "skipping figure with unsupported class"
                );
                return Ok(None);
            }
        }

        let name = record
            .get("name")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(self.options.default_name.as_str());

        let coordinates = record
            .get("coordinates")
            .ok_or(ParseError::MissingCoordinates { block })?;
        let vertices = parse_coordinates(coordinates, block)?;

        let opacity = match record.get("opacity") {
            None => DEFAULT_OPACITY,
            Some(raw) => raw.parse::<f64>().map_err(|_| ParseError::InvalidOpacity {
                block,
                value: raw.to_owned(),
            })?,
        };

        let color = |field: &'static str| {
            record.get(field).ok_or(ParseError::Style {
                block,
                source: StyleError::MissingColor { field },
            })
        };
        let stroke_color = color("lineColor")?;
        let fill_color = color("fillColor")?;

        StyledPolygon::new(&vertices, name, stroke_color, fill_color, opacity)
            .map(Some)
            .map_err(|err| match err {
                FigureError::Shape(source) => ParseError::Shape { block, source }.into(),
                FigureError::Style(source) => ParseError::Style { block, source }.into(),
                other => other,
            })
    }
}

/// Parses figure blocks with the default format options.
///
/// # Errors
///
/// See [`FigureParser::parse`].
pub fn parse_figures<I, S>(lines: I) -> Result<Vec<StyledPolygon>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    FigureParser::new().parse(lines)
}

/// Parses figure blocks from a whole text, split into lines.
///
/// # Errors
///
/// See [`FigureParser::parse`].
pub fn parse_figure_text(text: &str) -> Result<Vec<StyledPolygon>> {
    parse_figures(text.lines())
}
