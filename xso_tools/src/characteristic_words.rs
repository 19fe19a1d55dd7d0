use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::info;
use xso::{State, WordArray};
use xso_tools::{for_state, gf2, hex_words, StateChoice};

/// Derives the characteristic polynomial of each state's transition matrix from scratch and
/// checks it against the table compiled into `xso`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// States to derive (defaults to every preferred state)
    #[arg(short, long, value_enum)]
    state: Vec<StateChoice>,
}

fn derive<S: State + Default>() -> Result<bool> {
    let now = Instant::now();
    let derived = gf2::characteristic_coefficients::<S>()?;
    let elapsed = now.elapsed();
    info!("Derived {} in {elapsed:.1?}", S::name());

    println!("{}", S::name().bold());
    println!("    [{}]", hex_words(derived.as_slice()));

    let stored = S::characteristic_coefficients().ok();
    let verdict = match stored {
        Some(stored) if stored == derived => "matches table".green(),
        Some(_) => "DIFFERS FROM TABLE".red().bold(),
        None => "not in table".yellow(),
    };
    println!("    {verdict} ({elapsed:.1?})");

    Ok(stored == Some(derived))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let states = if args.state.is_empty() {
        StateChoice::ALL.to_vec()
    } else {
        args.state
    };

    let mut matches = 0;
    for &choice in &states {
        if for_state!(choice, S => derive::<S>())? {
            matches += 1;
        }
    }

    println!();
    println!("{matches}/{} states match the table", states.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use xso::{Xoroshiro2x32, Xoshiro4x32};

    #[test]
    fn derived_states_match_table() {
        assert!(derive::<Xoroshiro2x32>().unwrap());
        assert!(derive::<Xoshiro4x32>().unwrap());
    }
}
