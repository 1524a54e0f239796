//! Reference lines over the canvas
//!
//! The canvas is divided into 12 columns and 24 rows; the outer lines of that
//! grid frame the header, the card area and the footer.

use macroquad::prelude::{vec2, Vec2};

const COLUMNS: f32 = 12.0;
const ROWS: f32 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub column_width: f32,
    pub left: f32,
    pub center_x: f32,
    pub right: f32,
    pub top: f32,
    pub center_y: f32,
    pub bottom: f32,
}

impl Anchors {
    pub fn new(canvas: Vec2) -> Self {
        let column_width = canvas.x / COLUMNS;
        let row_height = canvas.y / ROWS;
        Self {
            column_width,
            left: column_width,
            center_x: canvas.x / 2.0,
            right: canvas.x - column_width,
            top: row_height,
            center_y: canvas.y / 2.0,
            bottom: canvas.y - row_height,
        }
    }

    /// The nine intersections of left/center/right with top/center/bottom
    pub fn points(&self) -> [Vec2; 9] {
        let xs = [self.left, self.center_x, self.right];
        let ys = [self.top, self.center_y, self.bottom];
        let mut points = [Vec2::ZERO; 9];
        for (i, x) in xs.iter().enumerate() {
            for (j, y) in ys.iter().enumerate() {
                points[i * 3 + j] = vec2(*x, *y);
            }
        }
        points
    }
}
