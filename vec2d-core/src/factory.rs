use core::fmt;
use std::cell::RefCell;

use anyhow::Result;
use strum_macros::{Display, EnumIter, EnumString};
use tinyrand::StdRand;
use typed_builder::TypedBuilder;

use crate::math::any_vector::AnyVector;
use crate::math::vector2d::Vector2D;
use crate::math::{Axes, Vector};
use crate::rand::uniform_f64;

/// Storage strategy a factory builds new vectors with.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Representation {
    #[default]
    #[strum(to_string = "standard-array", serialize = "array")]
    StandardArray,
    #[strum(to_string = "float32-array", serialize = "float32")]
    Float32Array,
    #[strum(to_string = "object")]
    Object,
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct FactoryConfig {
    #[builder(default)]
    pub representation: Representation,
    /// Fixed seed for `random`; clock seeded when absent.
    #[builder(default, setter(strip_option))]
    pub seed: Option<u64>,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        FactoryConfig::builder().build()
    }
}

/// Builds vectors with a selectable default representation.
///
/// Each factory owns its mode and random source, so independent factories
/// never interfere. Switching mode only affects vectors created afterwards.
pub struct VectorFactory {
    representation: Representation,
    rng: StdRand,
}

impl fmt::Debug for VectorFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorFactory")
            .field("representation", &self.representation)
            .finish_non_exhaustive()
    }
}

impl Default for VectorFactory {
    fn default() -> Self {
        VectorFactory::new(FactoryConfig::default())
    }
}

impl VectorFactory {
    #[tracing::instrument(level = "debug")]
    pub fn new(config: FactoryConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => crate::seeded_rng(seed),
            None => crate::create_rng(),
        };

        debug!("vector factory created with {} representation", config.representation);

        Self {
            representation: config.representation,
            rng,
        }
    }

    pub fn representation(&self) -> Representation {
        self.representation
    }

    pub fn set_representation(&mut self, representation: Representation) -> &mut Self {
        if self.representation != representation {
            debug!("vector factory switched {} -> {}", self.representation, representation);
        }

        self.representation = representation;
        self
    }

    pub fn use_standard_arrays(&mut self) -> &mut Self {
        self.set_representation(Representation::StandardArray)
    }

    pub fn use_float32_arrays(&mut self) -> &mut Self {
        self.set_representation(Representation::Float32Array)
    }

    pub fn use_objects(&mut self) -> &mut Self {
        self.set_representation(Representation::Object)
    }

    pub fn create(&self, x: f64, y: f64) -> AnyVector {
        AnyVector::new(self.representation, x, y)
    }

    /// Each axis is drawn uniformly from its closed range.
    pub fn random(&mut self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> AnyVector {
        let x = uniform_f64(&mut self.rng, min_x, max_x);
        let y = uniform_f64(&mut self.rng, min_y, max_y);

        trace!("random vector ({}, {})", x, y);

        self.create(x, y)
    }

    pub fn from_array(&self, axes: [f64; 2]) -> AnyVector {
        self.create(axes[0], axes[1])
    }

    pub fn from_object(&self, record: Vector2D) -> AnyVector {
        self.create(record.x, record.y)
    }

    pub fn from_slice(&self, axes: &[f64]) -> Result<AnyVector> {
        ensure!(axes.len() == 2, "a 2D vector needs exactly 2 axes, got {}", axes.len());

        Ok(self.create(axes[0], axes[1]))
    }
}

thread_local! {
    static DEFAULT_FACTORY: RefCell<VectorFactory> = RefCell::new(VectorFactory::default());
}

fn with_default<R>(f: impl FnOnce(&mut VectorFactory) -> R) -> R {
    DEFAULT_FACTORY.with(|factory| f(&mut factory.borrow_mut()))
}

/// Creates a vector with this thread's default factory.
pub fn create(x: f64, y: f64) -> AnyVector {
    with_default(|factory| factory.create(x, y))
}

pub fn random(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> AnyVector {
    with_default(|factory| factory.random(min_x, max_x, min_y, max_y))
}

pub fn representation() -> Representation {
    with_default(|factory| factory.representation())
}

pub fn set_representation(representation: Representation) {
    with_default(|factory| {
        factory.set_representation(representation);
    })
}

pub fn use_standard_arrays() {
    set_representation(Representation::StandardArray)
}

pub fn use_float32_arrays() {
    set_representation(Representation::Float32Array)
}

pub fn use_objects() {
    set_representation(Representation::Object)
}

// Pure variants of the instance operations. Arguments are never mutated and
// results keep the representation of the first operand.

pub fn add<V: Vector>(v0: &V, v1: &impl Axes) -> V {
    let mut out = v0.clone();
    out.add(v1);
    out
}

pub fn subtract<V: Vector>(v0: &V, v1: &impl Axes) -> V {
    let mut out = v0.clone();
    out.subtract(v1);
    out
}

pub fn multiply_vector_by_vector<V: Vector>(v0: &V, v1: &impl Axes) -> V {
    let mut out = v0.clone();
    out.multiply_by_vector(v1);
    out
}

pub fn multiply_vector_by_scalar<V: Vector>(v: &V, n: f64) -> V {
    let mut out = v.clone();
    out.multiply_by_scalar(n);
    out
}

pub fn rotate<V: Vector>(v: &V, radians: f64) -> V {
    let mut out = v.clone();
    out.rotate(radians);
    out
}

pub fn reverse<V: Vector>(v: &V) -> V {
    let mut out = v.clone();
    out.reverse();
    out
}

pub fn abs<V: Vector>(v: &V) -> V {
    let mut out = v.clone();
    out.abs();
    out
}

pub fn normalise<V: Vector>(v: &V) -> V {
    let mut out = v.clone();
    out.normalise();
    out
}

pub fn equals(v0: &impl Vector, v1: &impl Axes) -> bool {
    v0.equals(v1)
}

pub fn distance(v0: &impl Vector, v1: &impl Axes) -> f64 {
    v0.distance(v1)
}

pub fn dot(v0: &impl Vector, v1: &impl Axes) -> f64 {
    v0.dot(v1)
}

pub fn cross(v0: &impl Vector, v1: &impl Axes) -> f64 {
    v0.cross(v1)
}

pub fn magnitude(v: &impl Vector) -> f64 {
    v.magnitude()
}

pub fn length(v: &impl Vector) -> f64 {
    v.length()
}
