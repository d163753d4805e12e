use anyhow::Context;
use clap::{Arg, Command};
use log::info;

use mcpi::consts::DEFAULT_N_SAMPLES;
use mcpi::harness::{self, HarnessConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let matches = Command::new("mcpi")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Estimate pi by Monte Carlo sampling, one point at a time and in bulk")
        .arg(
            Arg::new("samples")
                .help("Number of points each estimator draws [default: 1000000]")
                .short('n')
                .long("samples")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .help("Seed for reproducible runs; drawn from system entropy if omitted")
                .short('s')
                .long("seed")
                .value_parser(clap::value_parser!(u64)),
        )
        .get_matches();

    let mut config = HarnessConfig::default().with_n_samples(
        matches
            .get_one::<usize>("samples")
            .copied()
            .unwrap_or(DEFAULT_N_SAMPLES),
    );
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(seed);
    }

    let comparison = harness::run(&config).with_context(|| {
        format!("failed to estimate pi from {} samples", config.n_samples())
    })?;

    println!("{}", comparison.scalar);
    println!("{}", comparison.batch);

    match comparison.speedup() {
        Some(speedup) => info!("batch/scalar speedup: {speedup:.2}x"),
        None => info!("batch run was too fast to time"),
    }

    Ok(())
}
