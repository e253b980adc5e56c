#[macro_use]
extern crate log;

#[macro_use]
extern crate anyhow;

#[macro_use]
extern crate vec2d_macro;

pub mod factory;
pub mod math;
pub mod rand;

#[cfg(test)]
pub mod test_common;

pub mod prelude {
    pub use crate::factory::{Representation, VectorFactory};
    pub use crate::math::any_vector::AnyVector;
    pub use crate::math::array_vector::ArrayVector;
    pub use crate::math::float32_vector::Float32Vector;
    pub use crate::math::object_vector::ObjectVector;
    pub use crate::math::vector2d::Vector2D;
    pub use crate::math::{Axes, Vector};
}

pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn create_rng() -> tinyrand::StdRand {
    #[cfg(feature = "std")]
    {
        use tinyrand::Rand;
        use tinyrand_std::clock_seed::ClockSeed;

        seeded_rng(ClockSeed::default().next_u64())
    }

    #[cfg(not(feature = "std"))]
    {
        tinyrand::StdRand::default()
    }
}

pub fn seeded_rng(seed: u64) -> tinyrand::StdRand {
    use tinyrand::{Seeded, StdRand};

    StdRand::seed(seed)
}
