// crates/sinlut-cli/src/main.rs

use std::io::Write;

use anyhow::Result;
use clap::Parser;

use sinlut_core::{table, validate};

/// Printed verbatim when fewer than two parameters are supplied. That path
/// exits 0: a bare invocation is a usage query, not a failure, and build
/// scripts may depend on the success code.
const USAGE: &str = "Usage: sinlut NLINES NBIT
\tNLINES: number of LUT line address, as unsigned
\tNBIT  : y bit-depth, as C2 balanced
";

#[derive(Parser, Debug)]
#[command(name = "sinlut")]
#[command(about = "Quantized SIN sample tables for VHDL LUTs", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Number of LUT line address, as unsigned
    nlines: Option<String>,

    /// Y bit-depth, as C2 balanced
    nbit: Option<String>,
}

fn main() -> Result<()> {
    let a = Args::parse();

    let (Some(nlines), Some(nbit)) = (&a.nlines, &a.nbit) else {
        print!("{USAGE}");
        return Ok(());
    };

    let req = validate::parse_request(nlines, nbit)?;

    let mut out = std::io::stdout().lock();
    table::write_table(req, &mut out)?;
    out.flush()?;

    Ok(())
}
