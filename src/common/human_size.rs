// HumanSize trait and implementations
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::SIZE_UNITS;

/// Scaling factor between neighbouring entries in `SIZE_UNITS`.
const SCALE: f64 = 1024.0;

/// `HumanSize` trait.
///
/// Only implemented for unsigned integers, so a negative size can never
/// reach the formatter.
pub trait HumanSize {
    /// Return `self` as a human friendly size using binary scaling.
    fn human_size(&self) -> String;
}

/// `HumanSize` trait implementation for `u64`.
impl HumanSize for u64 {
    fn human_size(&self) -> String {
        scale(*self as f64)
    }
}

/// `HumanSize` trait implementation for `u128`.
///
/// Byte totals are accumulated as `u128`, this is what the report uses.
impl HumanSize for u128 {
    fn human_size(&self) -> String {
        scale(*self as f64)
    }
}

// Divide by 1024 until the value drops below 1024 or we run out of units.
// Past the last unit we stop scaling and show a number >= 1024 instead.
fn scale(mut size: f64) -> String {
    let last  = SIZE_UNITS.len() - 1;
    let mut index = 0;

    while size >= SCALE && index < last {
        size  /= SCALE;
        index += 1;
    }

    // Ties round to even, so 1.125 is shown as 1.12. f64's Display drops
    // trailing zeros, so 1.50 is shown as 1.5 and 1.00 as 1.
    let rounded = (size * 100.0).round_ties_even() / 100.0;

    format!("{} {}", rounded, SIZE_UNITS[index])
}
