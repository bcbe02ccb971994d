// crates/sinlut-core/src/table.rs
//
// Table emission: drive the quantizer across [0, lines) and render the text
// block that gets pasted into a VHDL constant-array initializer.

use std::io::Write;

use crate::error::Result;
use crate::quantize::sin_sample;

/// One validated generation request. Build it through
/// `validate::parse_request`; the field bounds there are what the quantizer
/// relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LutRequest {
    /// Number of LUT line addresses (phase samples), >= 1.
    pub lines: u32,
    /// Sample width in bits, as C2 balanced, MIN_BITS..=MAX_BITS.
    pub bits: u32,
}

/// Quantized sine at one phase index. Produced one at a time, never retained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LutSample {
    pub index: u32,
    pub value: i32,
}

/// Lazy walk of the full table, indices ascending from 0, length = `lines`.
/// Restartable: every call yields the identical sequence.
pub fn samples(req: LutRequest) -> impl Iterator<Item = LutSample> {
    (0..req.lines).map(move |index| LutSample {
        index,
        value: sin_sample(index, req.lines, req.bits),
    })
}

/// Render the header block followed by one row per sample.
///
/// Row layout is `%4d => %6d ,` with a trailing comma on every row, the last
/// included: downstream HDL templates splice this block between their own
/// opening and closing tokens, so the comma is part of the contract.
pub fn write_table<W: Write>(req: LutRequest, w: &mut W) -> Result<()> {
    write_header(req, w)?;
    for s in samples(req) {
        writeln!(w, "{:>4} => {:>6} ,", s.index, s.value)?;
    }
    Ok(())
}

/// The comment block naming both declared quantities, blank-line framed
/// exactly as the consuming templates expect.
pub fn write_header<W: Write>(req: LutRequest, w: &mut W) -> Result<()> {
    writeln!(w)?;
    writeln!(w, "-- SIN samples for VHDL LUT")?;
    writeln!(w, "-- LUT lines: {:>4}", req.lines)?;
    writeln!(w, "--   number of LUT line address, as unsigned")?;
    writeln!(w, "-- bit depth: {:>4}", req.bits)?;
    writeln!(w, "--   y bit-depth, as C2 balanced")?;
    writeln!(w)?;
    Ok(())
}
