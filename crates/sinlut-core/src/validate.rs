use crate::error::{LutError, Result};
use crate::quantize::{MAX_BITS, MIN_BITS};
use crate::table::LutRequest;

/// Parse and bound-check the two external parameters.
///
/// Unparsable text is rejected here instead of being coerced to zero; the
/// coercion would yield an empty table for NLINES and turn the lsb formula
/// into a divide by zero for NBIT. Bounds are checked in i64 so
/// out-of-range text reports as a range rejection, not a wrapped value.
pub fn parse_request(nlines: &str, nbit: &str) -> Result<LutRequest> {
    let lines = parse_int("NLINES", nlines)?;
    let bits = parse_int("NBIT", nbit)?;

    if lines < 1 {
        return Err(LutError::InvalidParameter(format!(
            "NLINES must be >= 1, got {lines}"
        )));
    }
    if lines > i64::from(u32::MAX) {
        return Err(LutError::InvalidParameter(format!(
            "NLINES must be <= {}, got {lines}",
            u32::MAX
        )));
    }
    if bits < i64::from(MIN_BITS) || bits > i64::from(MAX_BITS) {
        return Err(LutError::InvalidParameter(format!(
            "NBIT must be in {MIN_BITS}..={MAX_BITS}, got {bits}"
        )));
    }

    Ok(LutRequest {
        lines: lines as u32,
        bits: bits as u32,
    })
}

fn parse_int(name: &str, raw: &str) -> Result<i64> {
    let t = raw.trim();
    t.parse::<i64>()
        .map_err(|_| LutError::InvalidParameter(format!("{name} must be an integer, got {t:?}")))
}
