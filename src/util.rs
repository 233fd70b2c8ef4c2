/// Numeric conversion helpers.
///
/// This module converts between `i64` and `f64`. Integers beyond `2^53` are
/// rounded on the way to `f64`; the way back only succeeds when it is exact.
pub mod num;
/// Spoken-number formatting.
///
/// Shortens a numeric result so it can be read aloud: the fraction is
/// truncated to three digits, and very large or practically zero values are
/// replaced by a Lithuanian phrase.
pub mod speak;
