//! Code mapping module
//!
//! Turns (dominant color, position) readings into short report codes and
//! holds the rows and matrix those codes are collected in.

mod mapper;
pub mod matrix;

pub use mapper::{EMPTY_COLOR_CODE, code_for, code_for_label, color_code, map_codes, position_code};
pub use matrix::{ResultMatrix, ResultRow};
