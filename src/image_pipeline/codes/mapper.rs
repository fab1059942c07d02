use crate::image_pipeline::color::{ColorCategory, QUADRANT_COUNT};
use crate::image_pipeline::codes::matrix::ResultRow;
use crate::image_pipeline::texture::{PairReading, Position};

/// Code used for gray and for quadrants without any recognised color.
pub const EMPTY_COLOR_CODE: &str = "vzo";

pub fn color_code(color: Option<ColorCategory>) -> &'static str {
    match color {
        Some(ColorCategory::Red) => "vm",
        Some(ColorCategory::Green) => "vr",
        Some(ColorCategory::White) => "br",
        Some(ColorCategory::Yellow) => "am",
        Some(ColorCategory::Gray) | None => EMPTY_COLOR_CODE,
    }
}

pub fn position_code(position: Position) -> &'static str {
    match position {
        Position::Top => "s",
        Position::Middle => "m",
        Position::Bottom => "i",
        Position::Empty => "",
    }
}

pub fn code_for(reading: &PairReading) -> String {
    format!("{}{}", color_code(reading.color), position_code(reading.position))
}

/// Code for a color given by name; unknown names fall back to [`EMPTY_COLOR_CODE`].
pub fn code_for_label(color_label: &str, position: Position) -> String {
    code_for(&PairReading {
        color: ColorCategory::from_label(color_label),
        position,
    })
}

pub fn map_codes(readings: &[PairReading; QUADRANT_COUNT]) -> ResultRow {
    ResultRow::new(std::array::from_fn(|i| code_for(&readings[i])))
}
