use super::vector2d::Vector2D;
use super::{Axes, Vector};

/// Vector holding its axes as two named fields.
#[derive(Debug, Copy, Clone, VectorType)]
pub struct ObjectVector {
    pub x: f64,
    pub y: f64,
}

impl Default for ObjectVector {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl ObjectVector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Axes for ObjectVector {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn write_x(&mut self, x: f64) {
        self.x = x;
    }

    fn write_y(&mut self, y: f64) {
        self.y = y;
    }
}

impl From<[f64; 2]> for ObjectVector {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<(f64, f64)> for ObjectVector {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<Vector2D> for ObjectVector {
    fn from(value: Vector2D) -> Self {
        Self::new(value.x, value.y)
    }
}
