use std::{
    sync::mpsc::{self, Sender},
    time::Instant,
};

use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use log::{info, warn};
use rand::Rng as _;
use threadpool::ThreadPool;
use xso::{Partition, Rng64, State};

/// Splits one generator into non-overlapping streams and runs each on a worker thread,
/// estimating pi by sampling points in the unit square.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of streams to run
    #[arg(short = 'k', long, default_value_t = 16)]
    streams: usize,

    /// Samples drawn from each stream
    #[arg(short, long, default_value_t = 1_000_000)]
    samples: u64,

    /// Seed for the parent generator (uses system entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

/// Sends the hit count of stream `i` back to the main thread, returning `false` if nobody is
/// listening anymore.
fn report(sender: &Sender<(usize, u64)>, i: usize, hits: u64) -> bool {
    let sent = sender.send((i, hits)).is_ok();
    if !sent {
        warn!("Result of stream {i} dropped: receiver hung up");
    }
    sent
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.streams == 0 {
        bail!("Need at least one stream");
    }

    let parent = match args.seed {
        Some(seed) => Rng64::from_seed_word(seed),
        None => Rng64::new(),
    };

    let partition = Partition::new(&parent, args.streams)?;
    println!(
        "Splitting {} into {} streams of 2^{} steps",
        Rng64::name(),
        args.streams,
        partition.jump_size_log2()
    );

    let pool = ThreadPool::new(num_cpus::get());
    info!("Running on {} threads", pool.max_count());

    let now = Instant::now();
    let (sender, receiver) = mpsc::channel();
    for (i, mut rng) in partition.take(args.streams).enumerate() {
        let sender = sender.clone();
        let samples = args.samples;
        pool.execute(move || {
            let hits = (0..samples)
                .filter(|_| {
                    let (x, y): (f64, f64) = (rng.gen(), rng.gen());
                    x * x + y * y < 1.0
                })
                .count() as u64;
            report(&sender, i, hits);
        });
    }
    drop(sender);

    let mut results: Vec<(usize, u64)> = receiver.iter().collect();
    results.sort_unstable();

    let mut total = 0;
    for (i, hits) in &results {
        let estimate = 4.0 * *hits as f64 / args.samples as f64;
        println!("stream {i:>4}: pi ~ {estimate:.6}");
        total += hits;
    }

    let estimate = 4.0 * total as f64 / (args.samples * results.len() as u64) as f64;
    let error = (estimate - std::f64::consts::PI).abs();
    let verdict = if error < 1e-2 {
        format!("{estimate:.6}").green()
    } else {
        format!("{estimate:.6}").red()
    };

    println!();
    println!("Combined estimate:     {verdict}");
    println!("Elapsed Time:          {:.1?}", now.elapsed());
    Ok(())
}
