//! Builds a small function and exports it to Graphviz DOT.
//!
//! Run with:
//!   cargo run --example visualize -- and_ab.dot
//!   cargo run --example visualize -- --formula chain out.dot

use clap::{Parser, ValueEnum};
use log::info;

use robdd::bdd::Bdd;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Formula {
    /// a ∧ b
    And,
    /// ((a ∨ b) ∧ c) ∧ d
    Chain,
    /// a ⊕ b ⊕ c ⊕ d
    Parity,
}

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Output DOT file.
    #[arg(value_name = "FILE", default_value = "and_ab.dot")]
    output: String,

    /// Function to build.
    #[arg(long, value_enum, default_value = "and")]
    formula: Formula,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    info!("args = {:?}", args);

    let bdd = Bdd::default();
    let a = bdd.create_variable("a")?;
    let b = bdd.create_variable("b")?;

    let f = match args.formula {
        Formula::And => bdd.and2(a, b)?,
        Formula::Chain => {
            let c = bdd.create_variable("c")?;
            let d = bdd.create_variable("d")?;
            bdd.and2(bdd.and2(bdd.or2(a, b)?, c)?, d)?
        }
        Formula::Parity => {
            let c = bdd.create_variable("c")?;
            let d = bdd.create_variable("d")?;
            bdd.xor2(bdd.xor2(a, b)?, bdd.xor2(c, d)?)?
        }
    };

    info!("f = {}", bdd.to_bracket_string(f)?);
    info!("size(f) = {}, sat_count(f) = {}", bdd.size(f)?, bdd.sat_count(f)?);
    info!("bdd = {:?}", bdd);

    bdd.write_dot(&args.output, f)?;
    println!("Wrote {}", args.output);

    Ok(())
}
