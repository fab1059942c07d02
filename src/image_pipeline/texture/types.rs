//! Texture labels

use std::fmt;

use crate::image_pipeline::color::ColorCategory;

/// Where marker color shows up inside a pair of slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Only the upper slice shows marker color.
    Top,
    /// Both slices show marker color.
    Middle,
    /// Only the lower slice shows marker color.
    Bottom,
    /// Neither slice shows marker color.
    Empty,
}

impl Position {
    pub fn from_markers(upper: bool, lower: bool) -> Self {
        match (upper, lower) {
            (true, false) => Position::Top,
            (true, true) => Position::Middle,
            (false, true) => Position::Bottom,
            (false, false) => Position::Empty,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Position::Top => "superior",
            Position::Middle => "meio",
            Position::Bottom => "inferior",
            Position::Empty => "vazio",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dominant color of a quadrant together with the position label of its pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairReading {
    pub color: Option<ColorCategory>,
    pub position: Position,
}
