use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

pub const fn point(x: i32, y: i32) -> Point {
    Point { x, y }
}

pub fn point_add(a: Point, b: Point) -> Point {
    point(a.x + b.x, a.y + b.y)
}

pub fn point_sub(a: Point, b: Point) -> Point {
    point(a.x - b.x, a.y - b.y)
}

pub fn point_neg(a: Point) -> Point {
    point(-a.x, -a.y)
}

/// Axis-aligned rectangle with inclusive bounds on both corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect {
        Rect {
            min: point(x0, y0),
            max: point(x1, y1),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    pub fn is_well_formed(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }
}
