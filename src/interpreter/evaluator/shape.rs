use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    grammar::core::Grammar,
    interpreter::evaluator::core::EvalResult,
};

/// The literal that ends an ordinal exponent: "penktuoju *laipsniu*".
pub const POWER_WORD: &str = "laipsniu";
/// The literal that negates an exponent: "pakelti *minus* vienu".
pub const MINUS_WORD: &str = "minus";

/// The four arithmetic operators spoken between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// The magnitude a scale word stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Magnitude {
    /// 100
    Hundred,
    /// 1 000
    Thousand,
    /// 1 000 000
    Million,
}

impl Magnitude {
    /// Returns the magnitude as a number.
    #[must_use]
    pub const fn value(self) -> i64 {
        match self {
            Self::Hundred => 100,
            Self::Thousand => 1_000,
            Self::Million => 1_000_000,
        }
    }
}

/// How a node combines its children.
///
/// Every grammar label maps to exactly one shape; the structural handler of
/// the shape decides what the node evaluates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// The single child's result.
    PassThrough,
    /// The sum of numeral children, as in "dvidešimt penki".
    DigitSum,
    /// A bare scale word such as "šimtai".
    ScaleWord(Magnitude),
    /// A multiple of a magnitude plus a remainder.
    Scale(Magnitude),
    /// `whole KABLELIS part`.
    Decimal,
    /// A numerator followed by an ordinal denominator.
    Fraction,
    /// A whole part, a connective and a fraction.
    Mixed,
    /// An optional leading minus.
    Negation,
    /// A base followed by its exponent.
    Power,
    /// An exponent phrase.
    Exponent,
    /// The degree of a root.
    RootDegree,
    /// A root, optionally with a degree and a multiplier.
    Root,
    /// A parenthesized expression.
    Paren,
    /// A left-associative operator chain.
    Chain,
    /// A strict `operand operator operand` triple.
    More,
    /// An operator word.
    Operator(BinaryOperator),
    /// A connective that contributes nothing.
    Skip,
}

/// Defines the shapes of grammar labels by generating a lookup table and a
/// label list.
///
/// The macro produces:
/// - `SHAPE_TABLE` (static table for lookup),
/// - `LABELS` (public list of every label with a shape).
macro_rules! label_shapes {
    (
        $(
            $label:literal => $shape:expr
        ),* $(,)?
    ) => {
        static SHAPE_TABLE: &[(&str, Shape)] = &[
            $(
                ($label, $shape),
            )*
        ];
        /// Every label that has a shape.
        pub const LABELS: &[&str] = &[
            $($label,)*
        ];
    };
}

label_shapes! {
    "S"                 => Shape::PassThrough,
    "Israiska"          => Shape::PassThrough,
    "Israiskaplus"      => Shape::Chain,
    "Isrkart"           => Shape::Chain,
    "More"              => Shape::More,
    "Isrneig"           => Shape::Negation,
    "Isrlps"            => Shape::PassThrough,
    "Lps"               => Shape::Power,
    "Laipsnis"          => Shape::Exponent,
    "Rodiklis"          => Shape::Exponent,
    "LAIPSNISPAGRINDAS" => Shape::Skip,
    "Reiksme"           => Shape::PassThrough,
    "KairysSkl"         => Shape::Paren,
    "SklKair"           => Shape::Skip,
    "SklDes"            => Shape::Skip,
    "Saknis"            => Shape::Root,
    "SAKNIS"            => Shape::Skip,
    "SaknLps"           => Shape::RootDegree,
    "VIENETASSHAK"      => Shape::PassThrough,
    "Skaicius"          => Shape::Fraction,
    "Trupmenine"        => Shape::Fraction,
    "Realus"            => Shape::Decimal,
    "Misrus"            => Shape::Mixed,
    "SveikojiDal"       => Shape::PassThrough,
    "Sveikas"           => Shape::Scale(Magnitude::Million),
    "Tukst"             => Shape::Scale(Magnitude::Thousand),
    "Simt"              => Shape::Scale(Magnitude::Hundred),
    "Desimt"            => Shape::DigitSum,
    "Vienet"            => Shape::PassThrough,
    "SveikasVard"       => Shape::PassThrough,
    "VienetVard"        => Shape::PassThrough,
    "DesimtVard"        => Shape::DigitSum,
    "SveikasLps"        => Shape::PassThrough,
    "VienetLps"         => Shape::PassThrough,
    "DesimtLps"         => Shape::DigitSum,
    "Plius"             => Shape::Operator(BinaryOperator::Add),
    "Minus"             => Shape::Operator(BinaryOperator::Sub),
    "Daugyba"           => Shape::Operator(BinaryOperator::Mul),
    "Dalyba"            => Shape::Operator(BinaryOperator::Div),
    "MINUS"             => Shape::Skip,
    "KABLELIS"          => Shape::Skip,
    "SVEIKI"            => Shape::Skip,
    "NULIS"             => Shape::PassThrough,
    "VIENETAS"          => Shape::PassThrough,
    "DESIMT"            => Shape::PassThrough,
    "VIENUOLIKOS"       => Shape::PassThrough,
    "DESIMTYS"          => Shape::PassThrough,
    "SIMTAS"            => Shape::ScaleWord(Magnitude::Hundred),
    "TUKSTANTIS"        => Shape::ScaleWord(Magnitude::Thousand),
    "MILIJONAS"         => Shape::ScaleWord(Magnitude::Million),
    "VIENETASVARD"      => Shape::PassThrough,
    "DESIMTVARD"        => Shape::PassThrough,
    "SIMTASVARD"        => Shape::PassThrough,
    "VIENETASLPS"       => Shape::PassThrough,
    "DESIMTYSLPS"       => Shape::PassThrough,
    "VIENUOLIKOSLPS"    => Shape::PassThrough,
}

impl Shape {
    /// Looks up the shape of a label.
    ///
    /// # Example
    /// ```
    /// use sage::interpreter::evaluator::shape::{BinaryOperator, Shape};
    ///
    /// assert_eq!(Shape::for_label("Plius"), Some(Shape::Operator(BinaryOperator::Add)));
    /// assert_eq!(Shape::for_label("Nezinomas"), None);
    /// ```
    #[must_use]
    pub fn for_label(label: &str) -> Option<Self> {
        SHAPE_TABLE.iter().find(|(name, _)| *name == label).map(|(_, shape)| *shape)
    }

    /// Returns the operator of an `Operator` shape.
    #[must_use]
    pub const fn operator(self) -> Option<BinaryOperator> {
        match self {
            Self::Operator(op) => Some(op),
            _ => None,
        }
    }
}

/// The shapes of one grammar's labels, checked against the grammar when it is
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeTable {
    shapes: HashMap<String, Shape>,
}

impl ShapeTable {
    /// Looks up the shape of every label of `grammar`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownOperation` for the first label, in
    /// grammar order, that has no shape.
    ///
    /// # Example
    /// ```
    /// use sage::{grammar::core::Grammar, interpreter::evaluator::shape::ShapeTable};
    ///
    /// assert!(ShapeTable::for_grammar(&Grammar::bundled().unwrap()).is_ok());
    ///
    /// let grammar: Grammar = "S -> Nezinomas\nNezinomas -> 'du'".parse().unwrap();
    /// assert!(ShapeTable::for_grammar(&grammar).is_err());
    /// ```
    pub fn for_grammar(grammar: &Grammar) -> EvalResult<Self> {
        let shapes = grammar.non_terminals()
                            .map(|label| {
                                Shape::for_label(label).map(|shape| (label.to_string(), shape))
                                                       .ok_or_else(|| RuntimeError::UnknownOperation { label: label.to_string() })
                            })
                            .collect::<EvalResult<_>>()?;
        Ok(Self { shapes })
    }

    /// Returns the shape of `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<Shape> {
        self.shapes.get(label).copied()
    }
}
