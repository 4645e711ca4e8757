#[cfg(feature = "certora")]
mod certora;

/// Adds two numbers together.
/// Returns the sum of a and b, wrapping on overflow (two's-complement
/// wraparound at the i64 bounds).
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}
