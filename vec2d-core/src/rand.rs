use tinyrand::Rand;

/// Uniform sample in `[0, 1]`, both ends included.
pub fn unit_f64(rng: &mut impl Rand) -> f64 {
    rng.next_u64() as f64 / u64::MAX as f64
}

/// Uniform sample on the closed range between `min` and `max`.
///
/// The bounds may be given in either order; `min == max` always yields `min`.
pub fn uniform_f64(rng: &mut impl Rand, min: f64, max: f64) -> f64 {
    min + (max - min) * unit_f64(rng)
}
