use crate::factory::Representation;

use super::array_vector::ArrayVector;
use super::float32_vector::Float32Vector;
use super::object_vector::ObjectVector;
use super::vector2d::Vector2D;
use super::{Axes, Vector};

/// A vector whose representation is picked at runtime.
///
/// This is what [`VectorFactory::create`](crate::factory::VectorFactory::create)
/// returns. Operations dispatch to the wrapped storage, so an `AnyVector`
/// behaves exactly like the concrete type it holds.
#[derive(Debug, Clone, VectorType)]
pub enum AnyVector {
    StandardArray(ArrayVector),
    Float32Array(Float32Vector),
    Object(ObjectVector),
}

impl AnyVector {
    pub fn new(representation: Representation, x: f64, y: f64) -> Self {
        match representation {
            Representation::StandardArray => AnyVector::StandardArray(ArrayVector::new(x, y)),
            Representation::Float32Array => AnyVector::Float32Array(Float32Vector::new(x, y)),
            Representation::Object => AnyVector::Object(ObjectVector::new(x, y)),
        }
    }

    pub fn representation(&self) -> Representation {
        match self {
            AnyVector::StandardArray(_) => Representation::StandardArray,
            AnyVector::Float32Array(_) => Representation::Float32Array,
            AnyVector::Object(_) => Representation::Object,
        }
    }
}

impl Axes for AnyVector {
    fn x(&self) -> f64 {
        match self {
            AnyVector::StandardArray(v) => v.x(),
            AnyVector::Float32Array(v) => v.x(),
            AnyVector::Object(v) => v.x(),
        }
    }

    fn y(&self) -> f64 {
        match self {
            AnyVector::StandardArray(v) => v.y(),
            AnyVector::Float32Array(v) => v.y(),
            AnyVector::Object(v) => v.y(),
        }
    }

    fn write_x(&mut self, x: f64) {
        match self {
            AnyVector::StandardArray(v) => v.write_x(x),
            AnyVector::Float32Array(v) => v.write_x(x),
            AnyVector::Object(v) => v.write_x(x),
        }
    }

    fn write_y(&mut self, y: f64) {
        match self {
            AnyVector::StandardArray(v) => v.write_y(y),
            AnyVector::Float32Array(v) => v.write_y(y),
            AnyVector::Object(v) => v.write_y(y),
        }
    }
}

impl From<ArrayVector> for AnyVector {
    fn from(value: ArrayVector) -> Self {
        AnyVector::StandardArray(value)
    }
}

impl From<Float32Vector> for AnyVector {
    fn from(value: Float32Vector) -> Self {
        AnyVector::Float32Array(value)
    }
}

impl From<ObjectVector> for AnyVector {
    fn from(value: ObjectVector) -> Self {
        AnyVector::Object(value)
    }
}

impl From<AnyVector> for Vector2D {
    fn from(value: AnyVector) -> Self {
        value.to_object()
    }
}
