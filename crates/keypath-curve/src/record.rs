//! Decoding splines from packed 16-bit keyframe records.
//!
//! A curve is a run of `(x, y, z, duration)` records closed by an all-zero
//! record. The terminator is consumed but not stored, so several curves can
//! be packed back to back in one buffer.

use keypath_core::error::{KeypathError, Result};
use keypath_core::SplineConfig;
use tracing::debug;

use crate::builder::SplineBuilder;
use crate::spline::{Spline, SplineMode};

/// Number of `i16` words in one record.
pub const RECORD_WORDS: usize = 4;

/// True iff every component of `record` is zero.
pub fn is_segment_end(record: [i16; 4]) -> bool {
    record == [0; 4]
}

/// Decode one spline from the start of `words`.
///
/// Returns the spline and the number of words consumed, terminator
/// included.
pub fn read_spline(words: &[i16], mode: SplineMode) -> Result<(Spline, usize)> {
    read_spline_with_config(words, mode, SplineConfig::default())
}

pub fn read_spline_with_config(
    words: &[i16],
    mode: SplineMode,
    config: SplineConfig,
) -> Result<(Spline, usize)> {
    let mut builder = SplineBuilder::with_config(mode, config);
    let mut cursor = 0;
    loop {
        let record: [i16; 4] = words
            .get(cursor..cursor + RECORD_WORDS)
            .and_then(|r| r.try_into().ok())
            .ok_or_else(|| {
                KeypathError::TruncatedData(format!(
                    "spline data ends at word {} of {} without a terminator",
                    cursor,
                    words.len()
                ))
            })?;
        cursor += RECORD_WORDS;

        if is_segment_end(record) {
            let spline = builder.build()?;
            debug!(words = cursor, "decoded spline");
            return Ok((spline, cursor));
        }
        builder.append_record(record)?;
    }
}

/// Decode back-to-back splines until `words` is exhausted.
pub fn read_splines(words: &[i16], mode: SplineMode) -> Result<Vec<Spline>> {
    let mut splines = Vec::new();
    let mut cursor = 0;
    while cursor < words.len() {
        let (spline, consumed) = read_spline(&words[cursor..], mode)?;
        splines.push(spline);
        cursor += consumed;
    }
    Ok(splines)
}

/// Reinterpret a little-endian byte blob as `i16` words.
pub fn words_from_le_bytes(bytes: &[u8]) -> Result<Vec<i16>> {
    if bytes.len() % 2 != 0 {
        return Err(KeypathError::TruncatedData(format!(
            "odd byte length {} for 16-bit words",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}
