use anyhow::{Context, Result};
use clap::Parser;
use xso::{jump_coefficients, State, Word, WordArray};
use xso_tools::{for_state, hex_words, StateChoice};

/// Prints the jump coefficients that advance a state by `J` (or `2^J`) steps, ready to paste into
/// source code.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// State to jump
    #[arg(short, long, value_enum, default_value_t = StateChoice::Xoshiro4x64)]
    state: StateChoice,

    /// Number of steps to jump (or its log2, with --pow2)
    jump: String,

    /// Jump by 2^J steps instead of J steps
    #[arg(short, long)]
    pow2: bool,
}

fn print_words<S: State>(j: usize, pow2: bool) -> Result<()> {
    let coeffs = jump_coefficients::<S>(j, pow2)
        .with_context(|| format!("Failed to compute jump coefficients for {}", S::name()))?;

    let steps = if pow2 { format!("2^{j}") } else { j.to_string() };
    println!("// Jumps {} by {steps} steps", S::name());
    println!("{}", const_line::<S>(&coeffs));
    Ok(())
}

/// Formats `coeffs` as a `const JUMP` array declaration.
fn const_line<S: State>(coeffs: &S::Words) -> String {
    format!(
        "const JUMP: [u{}; {}] = [{}];",
        S::Word::BITS,
        S::WORDS,
        hex_words(coeffs.as_slice())
    )
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let j = args
        .jump
        .replace('_', "")
        .parse::<usize>()
        .with_context(|| format!("Invalid jump size {:?}", args.jump))?;

    for_state!(args.state, S => print_words::<S>(j, args.pow2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use xso::{Xoshiro4x32, Xoshiro4x64};

    #[test]
    fn const_line_is_valid_rust() {
        let coeffs = jump_coefficients::<Xoshiro4x64>(128, true).unwrap();
        assert_eq!(
            const_line::<Xoshiro4x64>(&coeffs),
            "const JUMP: [u64; 4] = [0x180ec6d33cfd0aba, 0xd5a61266f0c9392c, \
             0xa9582618e03fc9aa, 0x39abdc4529b1661c];"
        );
    }

    #[test]
    fn const_line_pads_narrow_words() {
        let line = const_line::<Xoshiro4x32>(&[1, 0, 0, 0]);
        assert_eq!(
            line,
            "const JUMP: [u32; 4] = [0x00000001, 0x00000000, 0x00000000, 0x00000000];"
        );
    }
}
