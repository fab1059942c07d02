//! Token boundary search over a binary edge map.
//!
//! Only outer borders of top-level components count: a border nested in
//! another component's hole is part of the token's face, not its outline.

use image::GrayImage;
use imageproc::contours::{BorderType, Contour, find_contours};
use imageproc::geometry::contour_area;
use imageproc::point::Point;

/// Boundaries with a shorter side are edge runs, not a token.
pub const MIN_BOUNDARY_SIDE: u32 = 8;

/// Axis-aligned rectangle in pixel coordinates, inclusive of both edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingRect {
    pub fn of_points(points: &[Point<i32>]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in points {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            x: min_x.max(0) as u32,
            y: min_y.max(0) as u32,
            width: (max_x - min_x + 1) as u32,
            height: (max_y - min_y + 1) as u32,
        })
    }

    pub fn is_token_sized(&self) -> bool {
        self.width >= MIN_BOUNDARY_SIDE && self.height >= MIN_BOUNDARY_SIDE
    }
}

/// Selected token outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub rect: BoundingRect,
    pub area: f64,
}

/// Outer borders of the components not enclosed by any other, in raster order.
pub fn external_contours(edges: &GrayImage) -> Vec<Contour<i32>> {
    find_contours::<i32>(edges)
        .into_iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
        .collect()
}

/// Largest-area contour whose bounding rectangle is token sized.
/// The earliest contour wins a tie.
pub fn largest_boundary(contours: &[Contour<i32>]) -> Option<Boundary> {
    let mut best: Option<Boundary> = None;
    for contour in contours {
        let Some(rect) = BoundingRect::of_points(&contour.points) else {
            continue;
        };
        if !rect.is_token_sized() {
            continue;
        }
        let area = contour_area(&contour.points);
        match best {
            Some(top) if top.area >= area => {}
            _ => best = Some(Boundary { rect, area }),
        }
    }
    best
}
