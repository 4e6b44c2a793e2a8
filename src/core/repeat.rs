//! The repeat operation.
//!
//! `repeat(s, n)` is `s` concatenated with itself `n` times, so its length is
//! always `s.len() * n`. A zero count or an empty text both give `""`.

use crate::domain::model::RepeatLimits;
use crate::utils::error::{RepeatError, Result};

/// Repeats `text` `count` times.
///
/// Panics if the result length overflows `usize`; use [`try_repeat`] when
/// the count comes from user input.
pub fn repeat(text: &str, count: usize) -> String {
    text.repeat(count)
}

/// Byte length of `repeat(text, count)`, or `None` if it does not fit in `usize`.
pub fn repeated_len(text: &str, count: usize) -> Option<usize> {
    text.len().checked_mul(count)
}

/// Checked version of [`repeat`].
pub fn try_repeat(text: &str, count: usize) -> Result<String> {
    let len = repeated_len(text, count).ok_or(RepeatError::CapacityOverflow {
        text_len: text.len(),
        count,
    })?;
    if len == 0 {
        return Ok(String::new());
    }

    let mut out = String::new();
    out.try_reserve_exact(len)
        .map_err(|_| RepeatError::CapacityOverflow {
            text_len: text.len(),
            count,
        })?;
    for _ in 0..count {
        out.push_str(text);
    }
    Ok(out)
}

/// Like [`try_repeat`], but also enforces `limits` before allocating.
pub fn repeat_within(text: &str, count: usize, limits: &RepeatLimits) -> Result<String> {
    let required = repeated_len(text, count).ok_or(RepeatError::CapacityOverflow {
        text_len: text.len(),
        count,
    })?;

    if let Some(limit) = limits.max_output_bytes {
        if required > limit {
            return Err(RepeatError::OutputTooLarge { required, limit });
        }
    }

    try_repeat(text, count)
}
