use super::vector2d::Vector2D;
use super::{Axes, Vector};

/// Vector whose axes live in a heap allocated, growable sequence.
///
/// The sequence always holds exactly two slots, x then y.
#[derive(Debug, Clone, VectorType)]
pub struct ArrayVector {
    axes: Vec<f64>,
}

impl Default for ArrayVector {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl ArrayVector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { axes: vec![x, y] }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.axes
    }
}

impl Axes for ArrayVector {
    fn x(&self) -> f64 {
        self.axes[0]
    }

    fn y(&self) -> f64 {
        self.axes[1]
    }

    fn write_x(&mut self, x: f64) {
        self.axes[0] = x;
    }

    fn write_y(&mut self, y: f64) {
        self.axes[1] = y;
    }
}

impl From<[f64; 2]> for ArrayVector {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<(f64, f64)> for ArrayVector {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<Vector2D> for ArrayVector {
    fn from(value: Vector2D) -> Self {
        Self::new(value.x, value.y)
    }
}
