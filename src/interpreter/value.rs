/// Numbers shared by the domains.
///
/// Defines `Number`, an exact integer or a real, with checked arithmetic,
/// powers, roots and the text form used for numeric results.
pub mod number;
/// Evaluation results of subtrees.
///
/// Defines `Operand`, which separates numerals from domain values and from
/// skipped connectives, and `Child`, the view a structural handler has of one
/// evaluated child.
pub mod operand;
