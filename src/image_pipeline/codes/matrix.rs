//! Result rows and the per-run result matrix

use std::fmt;

use crate::image_pipeline::color::QUADRANT_COUNT;

/// The four codes of one token image, in quadrant order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    codes: [String; QUADRANT_COUNT],
}

impl ResultRow {
    pub fn new(codes: [String; QUADRANT_COUNT]) -> Self {
        Self { codes }
    }

    pub fn codes(&self) -> &[String; QUADRANT_COUNT] {
        &self.codes
    }
}

impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.codes.join(", "))
    }
}

/// Rows of a run in processing order. Rows are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultMatrix {
    rows: Vec<ResultRow>,
}

impl ResultMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a ResultMatrix {
    type Item = &'a ResultRow;
    type IntoIter = std::slice::Iter<'a, ResultRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FromIterator<ResultRow> for ResultMatrix {
    fn from_iter<I: IntoIterator<Item = ResultRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
