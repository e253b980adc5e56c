use std::num::NonZeroUsize;

use clap::Parser;
use strum::IntoEnumIterator;
use vec2d_core::factory::Representation;

pub const DEFAULT_VECTOR_COUNT: NonZeroUsize = NonZeroUsize::new(100_000).unwrap();
pub const DEFAULT_ROUNDS: NonZeroUsize = NonZeroUsize::new(5).unwrap();

/// Times the vector operations of each representation.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "vec2d-playbox", version)]
pub struct SuiteOptions {
    /// Representations to run: standard-array, float32-array, object (all when omitted)
    pub representations: Vec<Representation>,

    /// Number of vectors in the generated set
    #[arg(long, default_value_t = DEFAULT_VECTOR_COUNT)]
    pub vectors: NonZeroUsize,

    /// Passes averaged per operation
    #[arg(long, default_value_t = DEFAULT_ROUNDS)]
    pub rounds: NonZeroUsize,

    /// Fixed seed for the vector set and operand picks
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for SuiteOptions {
    fn default() -> Self {
        Self {
            representations: Vec::new(),
            vectors: DEFAULT_VECTOR_COUNT,
            rounds: DEFAULT_ROUNDS,
            seed: None,
        }
    }
}

impl SuiteOptions {
    pub fn selected_representations(&self) -> Vec<Representation> {
        if self.representations.is_empty() {
            Representation::iter().collect()
        } else {
            self.representations.clone()
        }
    }
}
