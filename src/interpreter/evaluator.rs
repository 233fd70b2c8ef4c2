/// The tree evaluator.
///
/// Contains `Evaluator`, the explicit-stack fold that turns a parse tree into
/// a value of one domain, and the `EvalResult` type shared by evaluation code.
pub mod core;

/// Node shapes.
///
/// Declares the closed set of shapes, the operators and magnitudes they carry,
/// and the table mapping every grammar label to its shape.
pub mod shape;

/// Structural handlers.
///
/// One handler per shape, written once against the `Domain` trait.
pub mod structural;
