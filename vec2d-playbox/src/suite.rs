use std::hint::black_box;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use tinyrand::{Rand, StdRand};
use vec2d_core::factory::{FactoryConfig, Representation, VectorFactory};
use vec2d_core::prelude::*;

use crate::suite_options::SuiteOptions;

const RAND_MIN: f64 = -1000.0;
const RAND_MAX: f64 = 1000.0;

#[derive(Debug, Clone)]
pub struct SuiteResult {
    pub name: &'static str,
    pub average: Duration,
}

/// Times every vector operation over one representation.
///
/// Each operation runs once over the whole vector set per round; the
/// reported time is the per-round average.
pub struct Suite {
    vectors: Vec<AnyVector>,
    operands: Vec<AnyVector>,
    rounds: NonZeroUsize,
    rng: StdRand,
    results: Vec<SuiteResult>,
}

impl Suite {
    pub fn new(representation: Representation, options: &SuiteOptions) -> Self {
        let config = match options.seed {
            Some(seed) => FactoryConfig::builder().representation(representation).seed(seed).build(),
            None => FactoryConfig::builder().representation(representation).build(),
        };
        let mut factory = VectorFactory::new(config);
        let mut results = Vec::new();

        let start = Instant::now();
        let vectors: Vec<AnyVector> = (0..options.vectors.get())
            .map(|_| factory.random(RAND_MIN, RAND_MAX, RAND_MIN, RAND_MAX))
            .collect();
        results.push(SuiteResult {
            name: "generate",
            average: start.elapsed(),
        });

        let operands = (0..options.vectors.get())
            .map(|_| factory.random(RAND_MIN, RAND_MAX, RAND_MIN, RAND_MAX))
            .collect();

        debug!("{} suite ready with {} vectors", representation, options.vectors);

        Self {
            vectors,
            operands,
            rounds: options.rounds,
            rng: options.seed.map(vec2d_core::seeded_rng).unwrap_or_else(vec2d_core::create_rng),
            results,
        }
    }

    pub fn run(mut self) -> Vec<SuiteResult> {
        self.time("add", |suite, i| {
            let j = suite.random_index();
            suite.vectors[i].add(&suite.operands[j]);
        });
        self.time("subtract", |suite, i| {
            let j = suite.random_index();
            suite.vectors[i].subtract(&suite.operands[j]);
        });
        self.time("round", |suite, i| {
            suite.vectors[i].round(2);
        });
        self.time("round_fast", |suite, i| {
            suite.vectors[i].round_fast(2);
        });
        self.time("abs", |suite, i| {
            suite.vectors[i].abs();
        });
        self.time("magnitude", |suite, i| {
            black_box(suite.vectors[i].magnitude());
        });
        self.time("clone", |suite, i| {
            black_box(suite.vectors[i].clone());
        });
        self.time("zero", |suite, i| {
            suite.vectors[i].zero();
        });
        self.time("reverse", |suite, i| {
            suite.vectors[i].reverse();
        });
        self.time("to_string", |suite, i| {
            black_box(suite.vectors[i].to_string());
        });
        self.time("multiply_by_scalar", |suite, i| {
            let n = suite.random_scalar();
            suite.vectors[i].multiply_by_scalar(n);
        });
        self.time("normalise", |suite, i| {
            suite.vectors[i].normalise();
        });
        self.time("div_s", |suite, i| {
            let n = suite.random_scalar();
            suite.vectors[i].div_s(n);
        });
        self.time("length_sq", |suite, i| {
            black_box(suite.vectors[i].length_sq());
        });

        self.results
    }

    fn time(&mut self, name: &'static str, mut op: impl FnMut(&mut Suite, usize)) {
        let mut total = Duration::ZERO;

        for _ in 0..self.rounds.get() {
            let start = Instant::now();

            for i in 0..self.vectors.len() {
                op(self, i);
            }

            total += start.elapsed();
        }

        let average = total / self.rounds.get() as u32;
        trace!("{}: {:?}", name, average);

        self.results.push(SuiteResult { name, average });
    }

    fn random_index(&mut self) -> usize {
        (self.rng.next_u64() % self.operands.len() as u64) as usize
    }

    /// Whole number in `1..=10`.
    fn random_scalar(&mut self) -> f64 {
        (1 + self.rng.next_u64() % 10) as f64
    }
}
