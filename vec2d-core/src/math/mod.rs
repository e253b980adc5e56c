pub mod any_vector;
pub mod array_vector;
pub mod float32_vector;
pub mod object_vector;
pub mod vector2d;

use vector2d::Vector2D;

/// Decimal places used by callers that don't care, e.g. `v.round(DEFAULT_ROUND_DECIMALS)`.
pub const DEFAULT_ROUND_DECIMALS: usize = 2;

/// Powers of ten for `round`, indexed by decimal places.
const PRECISION: [f64; 11] = [
    1.0,
    10.0,
    100.0,
    1000.0,
    10000.0,
    100000.0,
    1000000.0,
    10000000.0,
    100000000.0,
    1000000000.0,
    10000000000.0,
];

fn precision(decimals: usize) -> f64 {
    match PRECISION.get(decimals) {
        Some(p) => *p,
        None => 10f64.powi(decimals as i32),
    }
}

/// Storage capability behind every vector representation.
///
/// Implementors only decide where the two axes live. Reads always widen to
/// `f64`; writes may lose precision if the storage is narrower.
pub trait Axes {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    fn write_x(&mut self, x: f64);
    fn write_y(&mut self, y: f64);
}

/// The operation contract shared by all representations.
///
/// Every method is provided in terms of [`Axes`], so a representation gets
/// the whole set from `#[derive(VectorType)]`. Mutating operations work in
/// place and hand back `&mut Self` for chaining. Degenerate inputs (zero
/// divisors, normalising a zero vector) produce NaN or Infinity; nothing
/// here panics or returns an error.
pub trait Vector: Axes + Clone {
    fn set_x(&mut self, x: f64) -> &mut Self {
        self.write_x(x);
        self
    }

    fn set_y(&mut self, y: f64) -> &mut Self {
        self.write_y(y);
        self
    }

    fn set_axes(&mut self, x: f64, y: f64) -> &mut Self {
        self.write_x(x);
        self.write_y(y);
        self
    }

    /// `"(x, y)"` with each axis rounded to the nearest integer first.
    fn to_string_rounded(&self) -> String {
        format!("({}, {})", self.x().round(), self.y().round())
    }

    fn to_array(&self) -> [f64; 2] {
        [self.x(), self.y()]
    }

    fn to_object(&self) -> Vector2D {
        Vector2D {
            x: self.x(),
            y: self.y(),
        }
    }

    fn add(&mut self, v: &impl Axes) -> &mut Self {
        let (x, y) = (self.x() + v.x(), self.y() + v.y());
        self.set_axes(x, y)
    }

    fn subtract(&mut self, v: &impl Axes) -> &mut Self {
        let (x, y) = (self.x() - v.x(), self.y() - v.y());
        self.set_axes(x, y)
    }

    /// Exact comparison of both axes. No epsilon is applied.
    fn equals(&self, v: &impl Axes) -> bool {
        self.x() == v.x() && self.y() == v.y()
    }

    fn multiply_by_vector(&mut self, v: &impl Axes) -> &mut Self {
        let (x, y) = (self.x() * v.x(), self.y() * v.y());
        self.set_axes(x, y)
    }

    fn mul_v(&mut self, v: &impl Axes) -> &mut Self {
        self.multiply_by_vector(v)
    }

    fn divide_by_vector(&mut self, v: &impl Axes) -> &mut Self {
        let (x, y) = (self.x() / v.x(), self.y() / v.y());
        self.set_axes(x, y)
    }

    fn div_v(&mut self, v: &impl Axes) -> &mut Self {
        self.divide_by_vector(v)
    }

    fn multiply_by_scalar(&mut self, n: f64) -> &mut Self {
        let (x, y) = (self.x() * n, self.y() * n);
        self.set_axes(x, y)
    }

    fn mul_s(&mut self, n: f64) -> &mut Self {
        self.multiply_by_scalar(n)
    }

    fn divide_by_scalar(&mut self, n: f64) -> &mut Self {
        let (x, y) = (self.x() / n, self.y() / n);
        self.set_axes(x, y)
    }

    fn div_s(&mut self, n: f64) -> &mut Self {
        self.divide_by_scalar(n)
    }

    /// Scales to unit length. A zero vector becomes `(NaN, NaN)`.
    fn normalise(&mut self) -> &mut Self {
        let mag = self.magnitude();
        self.divide_by_scalar(mag)
    }

    fn normalize(&mut self) -> &mut Self {
        self.normalise()
    }

    fn unit(&mut self) -> &mut Self {
        self.normalise()
    }

    fn magnitude(&self) -> f64 {
        self.length_sq().sqrt()
    }

    fn length(&self) -> f64 {
        self.magnitude()
    }

    fn length_sq(&self) -> f64 {
        let (x, y) = (self.x(), self.y());
        x * x + y * y
    }

    fn dot(&self, v: &impl Axes) -> f64 {
        self.x() * v.x() + self.y() * v.y()
    }

    /// Z component of the equivalent 3D cross product.
    fn cross(&self, v: &impl Axes) -> f64 {
        self.x() * v.y() - self.y() * v.x()
    }

    fn reverse(&mut self) -> &mut Self {
        let (x, y) = (-self.x(), -self.y());
        self.set_axes(x, y)
    }

    fn abs(&mut self) -> &mut Self {
        let (x, y) = (self.x().abs(), self.y().abs());
        self.set_axes(x, y)
    }

    fn zero(&mut self) -> &mut Self {
        self.set_axes(0.0, 0.0)
    }

    fn distance(&self, v: &impl Axes) -> f64 {
        let x = self.x() - v.x();
        let y = self.y() - v.y();
        (x * x + y * y).sqrt()
    }

    /// Rotates counter-clockwise by `radians`.
    fn rotate(&mut self, radians: f64) -> &mut Self {
        let (sin, cos) = radians.sin_cos();
        let (ox, oy) = (self.x(), self.y());

        self.set_axes(ox * cos - oy * sin, ox * sin + oy * cos)
    }

    /// Rounds half-up to `decimals` places: `floor(0.5 + axis * 10^n) / 10^n`.
    ///
    /// Negative halves round towards positive infinity, e.g. `-0.125`
    /// becomes `-0.12` at two places.
    fn round(&mut self, decimals: usize) -> &mut Self {
        let p = precision(decimals);
        let (x, y) = (self.x(), self.y());

        self.set_axes((0.5 + x * p).floor() / p, (0.5 + y * p).floor() / p)
    }

    /// Like [`Vector::round`] but truncates through an `i32`.
    ///
    /// Only exact while `axis * 10^n` fits in an `i32`; past that the cast
    /// saturates. Truncation goes towards zero, so negative inputs round
    /// differently from `round` (`-5.227` becomes `-5.22`).
    fn round_fast(&mut self, decimals: usize) -> &mut Self {
        let p = precision(decimals);
        let (x, y) = (0.5 + self.x() * p, 0.5 + self.y() * p);

        debug_assert!(
            x.abs() <= i32::MAX as f64 && y.abs() <= i32::MAX as f64,
            "round_fast out of i32 range: ({}, {}) at {} places",
            self.x(),
            self.y(),
            decimals
        );

        self.set_axes((x as i32) as f64 / p, (y as i32) as f64 / p)
    }
}
