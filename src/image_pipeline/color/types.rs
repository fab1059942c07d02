//! Color categories and their HSV ranges

use std::fmt;

use crate::image_pipeline::raster::HsvPixel;

/// Named color category a token face can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCategory {
    Red,
    Green,
    White,
    Gray,
    Yellow,
}

impl ColorCategory {
    /// All categories in tie-break priority order, highest first.
    pub const PRIORITY: [ColorCategory; 5] = [
        ColorCategory::Red,
        ColorCategory::Green,
        ColorCategory::White,
        ColorCategory::Yellow,
        ColorCategory::Gray,
    ];

    /// Name used in diagnostics and reports.
    pub fn label(self) -> &'static str {
        match self {
            ColorCategory::Red => "vermelho",
            ColorCategory::Green => "verde",
            ColorCategory::White => "branco",
            ColorCategory::Gray => "cinza",
            ColorCategory::Yellow => "amarelo",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::PRIORITY.into_iter().find(|c| c.label() == label)
    }

    /// Marker colors are the ones whose presence in a slice counts; gray does not.
    pub fn is_marker(self) -> bool {
        !matches!(self, ColorCategory::Gray)
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ColorCategory::Red => 0,
            ColorCategory::Green => 1,
            ColorCategory::White => 2,
            ColorCategory::Gray => 3,
            ColorCategory::Yellow => 4,
        }
    }
}

impl fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive per-channel HSV bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRange {
    pub lower: HsvPixel,
    pub upper: HsvPixel,
}

impl ColorRange {
    pub const fn new(lower: HsvPixel, upper: HsvPixel) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, pixel: &HsvPixel) -> bool {
        (0..3).all(|c| self.lower[c] <= pixel[c] && pixel[c] <= self.upper[c])
    }
}

/// Table of HSV ranges per category.
///
/// A category may own several disjoint ranges; its pixel count is the sum
/// over all of them. Red uses two because hue wraps at 0/180.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    ranges: Vec<(ColorCategory, ColorRange)>,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            ranges: vec![
                (ColorCategory::Red, ColorRange::new([0, 120, 70], [10, 255, 255])),
                (ColorCategory::Red, ColorRange::new([170, 120, 70], [180, 255, 255])),
                (ColorCategory::Green, ColorRange::new([35, 100, 100], [85, 255, 255])),
                (ColorCategory::White, ColorRange::new([0, 0, 200], [180, 30, 255])),
                (ColorCategory::Gray, ColorRange::new([0, 0, 50], [180, 50, 200])),
                (ColorCategory::Yellow, ColorRange::new([30, 100, 100], [50, 255, 255])),
            ],
        }
    }
}

impl ColorTable {
    pub fn new(ranges: Vec<(ColorCategory, ColorRange)>) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &[(ColorCategory, ColorRange)] {
        &self.ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds_are_inclusive() {
        let range = ColorRange::new([10, 20, 30], [40, 50, 60]);
        assert!(range.contains(&[10, 20, 30]));
        assert!(range.contains(&[40, 50, 60]));
        assert!(!range.contains(&[9, 20, 30]));
        assert!(!range.contains(&[40, 51, 60]));
    }

    #[test]
    fn test_default_table_has_two_red_ranges() {
        let table = ColorTable::default();
        let count = |category: ColorCategory| table.ranges().iter().filter(|(c, _)| *c == category).count();
        assert_eq!(count(ColorCategory::Red), 2);
        assert_eq!(count(ColorCategory::Gray), 1);
        assert_eq!(table.ranges().len(), 6);
    }

    #[test]
    fn test_labels_round_trip() {
        for category in ColorCategory::PRIORITY {
            assert_eq!(ColorCategory::from_label(category.label()), Some(category));
        }
        assert_eq!(ColorCategory::from_label("roxo"), None);
        assert!(!ColorCategory::Gray.is_marker());
        assert!(ColorCategory::White.is_marker());
    }
}
