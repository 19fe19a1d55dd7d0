use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use xso::{jump_coefficients, State};
use xso_tools::{for_state, StateChoice};

/// Times jumping ahead against stepping one at a time, for growing jump sizes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// State to benchmark (defaults to every preferred state)
    #[arg(short, long, value_enum)]
    state: Vec<StateChoice>,

    /// Largest jump is 10^max_power steps
    #[arg(short, long, default_value_t = 7)]
    max_power: u32,
}

fn bench<S: State + Default>(max_power: u32) -> Result<()> {
    println!("{}", S::name().bold());
    println!(
        "{:>14} {:>12} {:>12} {:>12}",
        "steps", "coeffs", "jump", "discard"
    );

    for power in 0..=max_power {
        let j = 10usize.pow(power);

        let now = Instant::now();
        let coeffs = jump_coefficients::<S>(j, false)?;
        let reduce_time = now.elapsed();

        let mut jumped = S::default();
        let now = Instant::now();
        xso::jump(&mut jumped, &coeffs);
        let jump_time = now.elapsed();

        let mut stepped = S::default();
        let now = Instant::now();
        for _ in 0..j {
            stepped.step();
        }
        let discard_time = now.elapsed();

        let agree = if jumped.words() == stepped.words() {
            "ok".green()
        } else {
            "MISMATCH".red().bold()
        };

        println!(
            "{j:>14} {:>12} {:>12} {:>12} {agree}",
            format_duration(reduce_time),
            format_duration(jump_time),
            format_duration(discard_time),
        );
    }
    println!();
    Ok(())
}

fn format_duration(duration: Duration) -> String {
    format!("{duration:.1?}")
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let states = if args.state.is_empty() {
        StateChoice::ALL.to_vec()
    } else {
        args.state
    };

    for choice in states {
        for_state!(choice, S => bench::<S>(args.max_power))?;
    }
    Ok(())
}
