use super::Axes;

/// Plain `{x, y}` record, the value returned by `Vector::to_object`.
///
/// It can be passed anywhere an operand is expected but carries none of the
/// fluent operations itself.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Default for Vector2D {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl Axes for Vector2D {
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

impl From<vek::Vec2<f64>> for Vector2D {
    fn from(value: vek::Vec2<f64>) -> Self {
        Vector2D { x: value.x, y: value.y }
    }
}

impl From<Vector2D> for vek::Vec2<f64> {
    fn from(value: Vector2D) -> Self {
        vek::Vec2::new(value.x, value.y)
    }
}
