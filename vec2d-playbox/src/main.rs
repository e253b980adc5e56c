#[macro_use]
extern crate log;

use clap::Parser;
use suite::Suite;
use suite_options::SuiteOptions;

mod suite;
mod suite_options;

fn main() {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let options = SuiteOptions::parse();

    info!("vec2d-core {}", vec2d_core::get_version());
    println!(
        "Tests are averaged from {} passes/runs on a set of {} vectors. Please wait...",
        options.rounds, options.vectors
    );

    for representation in options.selected_representations() {
        let results = Suite::new(representation, &options).run();

        println!("\n{}:", representation);
        for result in results {
            println!("\"{}\", {:.3}ms", result.name, result.average.as_secs_f64() * 1000.0);
        }
    }
}
