/// The `Domain` trait.
///
/// Declares the nine base primitives every semantic domain implements.
pub mod core;
/// The numeric domain.
///
/// Computes results as numbers, faulting on division by zero, undefined roots
/// and results too large for a real.
pub mod numeric;
/// The symbolic domain.
///
/// Builds the LaTeX rendering of an expression without computing it.
pub mod symbolic;
