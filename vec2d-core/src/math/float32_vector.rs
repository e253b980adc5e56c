use super::vector2d::Vector2D;
use super::{Axes, Vector};

/// Vector backed by a fixed two-slot `f32` buffer.
///
/// Arithmetic runs in `f64` on the widened stored values; every write
/// narrows back to `f32`, so results carry single precision.
#[repr(C)]
#[derive(Debug, Copy, Clone, VectorType)]
pub struct Float32Vector {
    axes: [f32; 2],
}

impl Default for Float32Vector {
    fn default() -> Self {
        Self { axes: [0.0; 2] }
    }
}

impl Float32Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            axes: [x as f32, y as f32],
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.axes
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.axes
    }
}

impl Axes for Float32Vector {
    fn x(&self) -> f64 {
        self.axes[0] as f64
    }

    fn y(&self) -> f64 {
        self.axes[1] as f64
    }

    fn write_x(&mut self, x: f64) {
        self.axes[0] = x as f32;
    }

    fn write_y(&mut self, y: f64) {
        self.axes[1] = y as f32;
    }
}

impl From<[f64; 2]> for Float32Vector {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<(f64, f64)> for Float32Vector {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<Vector2D> for Float32Vector {
    fn from(value: Vector2D) -> Self {
        Self::new(value.x, value.y)
    }
}
