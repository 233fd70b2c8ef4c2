use crate::{
    error::RuntimeError,
    interpreter::{
        domain::core::Domain,
        evaluator::{
            core::EvalResult,
            shape::{BinaryOperator, MINUS_WORD, Magnitude, POWER_WORD, Shape},
        },
        value::{
            number::Number,
            operand::{Child, Operand},
        },
    },
};

/// Children of one node, as handed to a structural handler.
type Children<'t, V> = Vec<Child<'t, V>>;

/// Combines the evaluated children of a node according to its shape.
///
/// Handlers only decide which primitive of `D` applies to which children, so
/// every shape behaves the same in every domain. Numeral shapes combine
/// numerals directly and never reach the domain.
///
/// # Errors
/// Returns `RuntimeError::NotImplemented` when the children do not form an
/// arrangement the shape supports, `RuntimeError::MissingValue` when a value
/// is needed where only connectives were found, and any error raised by the
/// domain primitives.
pub fn combine<D: Domain>(shape: Shape,
                          label: &str,
                          children: Children<'_, D::Value>)
                          -> EvalResult<Operand<D::Value>> {
    match shape {
        Shape::PassThrough | Shape::ScaleWord(_) => pass_through(label, children),
        Shape::RootDegree => first(label, children),
        Shape::DigitSum => digit_sum(label, &children),
        Shape::Scale(magnitude) => scale(label, &children, magnitude),
        Shape::Decimal => decimal(label, &children),
        Shape::Fraction => fraction::<D>(label, children),
        Shape::Mixed => mixed::<D>(label, children),
        Shape::Negation => negation::<D>(label, children),
        Shape::Power => power::<D>(label, children),
        Shape::Exponent => exponent::<D>(label, children),
        Shape::Root => root::<D>(label, children),
        Shape::Paren => paren::<D>(label, children),
        Shape::Chain => chain::<D>(label, children),
        Shape::More => more::<D>(label, children),
        Shape::Operator(_) | Shape::Skip => Ok(Operand::Empty),
    }
}

fn not_implemented(label: &str, arity: usize) -> RuntimeError {
    RuntimeError::NotImplemented { label: label.to_string(),
                                   arity }
}

fn pass_through<V>(label: &str, children: Children<'_, V>) -> EvalResult<Operand<V>> {
    let arity = children.len();
    match <[_; 1]>::try_from(children) {
        Ok([only]) => Ok(only.operand),
        Err(_) => Err(not_implemented(label, arity)),
    }
}

fn first<V>(label: &str, children: Children<'_, V>) -> EvalResult<Operand<V>> {
    children.into_iter()
            .next()
            .map(|child| child.operand)
            .ok_or_else(|| not_implemented(label, 0))
}

/// Drops the children that contribute nothing.
fn valued<V>(children: Children<'_, V>) -> Children<'_, V> {
    children.into_iter().filter(|child| !child.is_skipped()).collect()
}

/// Reads every child as a numeral.
fn numerals<V>(label: &str, children: &[Child<'_, V>]) -> EvalResult<Vec<Number>> {
    children.iter()
            .map(|child| match child.operand {
                Operand::Numeral(number) => Ok(number),
                Operand::Empty => Err(RuntimeError::MissingValue { label: label.to_string() }),
                Operand::Value(_) => Err(not_implemented(label, children.len())),
            })
            .collect()
}

fn digit_sum<V>(label: &str, children: &[Child<'_, V>]) -> EvalResult<Operand<V>> {
    if children.is_empty() {
        return Err(not_implemented(label, 0));
    }
    let sum = numerals(label, children)?
        .into_iter()
        .try_fold(Number::Integer(0), |sum, n| sum.apply(BinaryOperator::Add, n))?;
    Ok(Operand::Numeral(sum))
}

/// `N`, `N × S`, `S + R` or `N × S + R` for a magnitude `S`.
fn scale<V>(label: &str, children: &[Child<'_, V>], magnitude: Magnitude) -> EvalResult<Operand<V>> {
    use BinaryOperator::{Add, Mul};

    let size = Number::Integer(magnitude.value());
    let values = numerals(label, children)?;

    let number = match (values.as_slice(), children.first().and_then(|c| c.shape)) {
        ([only], _) => *only,
        ([_, rest], Some(Shape::ScaleWord(m))) if m == magnitude => size.apply(Add, *rest)?,
        ([count, _], _) => count.apply(Mul, size)?,
        ([count, _, rest], _) => count.apply(Mul, size)?.apply(Add, *rest)?,
        _ => return Err(not_implemented(label, children.len())),
    };
    Ok(Operand::Numeral(number))
}

/// `whole KABLELIS part`, read as the decimal text `whole.part`.
fn decimal<V>(label: &str, children: &[Child<'_, V>]) -> EvalResult<Operand<V>> {
    let parts: Vec<&Child<'_, V>> = children.iter().filter(|c| !c.is_skipped()).collect();
    match parts.as_slice() {
        [whole, part] => match (&whole.operand, &part.operand) {
            (Operand::Numeral(Number::Integer(w)), Operand::Numeral(Number::Integer(p))) if *p >= 0 => {
                Ok(Operand::Numeral(Number::parse_real(&format!("{w}.{p}"))?))
            },
            _ => Err(not_implemented(label, children.len())),
        },
        _ => Err(not_implemented(label, children.len())),
    }
}

fn fraction<D: Domain>(label: &str, children: Children<'_, D::Value>) -> EvalResult<Operand<D::Value>> {
    let arity = children.len();
    let mut iter = children.into_iter();
    match (iter.next(), iter.next(), iter.next()) {
        (Some(only), None, None) => Ok(only.operand),
        (Some(numerator), Some(denominator), None) => {
            let numerator = numerator.operand.into_value::<D>(label)?;
            let denominator = denominator.operand.into_value::<D>(label)?;
            Ok(Operand::Value(D::divide(numerator, denominator)?))
        },
        _ => Err(not_implemented(label, arity)),
    }
}

fn mixed<D: Domain>(label: &str, children: Children<'_, D::Value>) -> EvalResult<Operand<D::Value>> {
    let arity = children.len();
    let mut iter = valued(children).into_iter();
    match (iter.next(), iter.next(), iter.next()) {
        (Some(whole), Some(fraction), None) => {
            let whole = whole.operand.into_value::<D>(label)?;
            let fraction = fraction.operand.into_value::<D>(label)?;
            Ok(Operand::Value(D::mixed(whole, fraction)?))
        },
        _ => Err(not_implemented(label, arity)),
    }
}

fn negation<D: Domain>(label: &str, children: Children<'_, D::Value>) -> EvalResult<Operand<D::Value>> {
    let arity = children.len();
    let mut iter = children.into_iter();
    match (iter.next(), iter.next(), iter.next()) {
        (Some(only), None, None) => Ok(only.operand),
        (Some(_), Some(operand), None) => {
            let value = operand.operand.into_value::<D>(label)?;
            Ok(Operand::Value(D::negate(value)?))
        },
        _ => Err(not_implemented(label, arity)),
    }
}

fn power<D: Domain>(label: &str, children: Children<'_, D::Value>) -> EvalResult<Operand<D::Value>> {
    let arity = children.len();
    let mut iter = valued(children).into_iter();
    match (iter.next(), iter.next(), iter.next()) {
        (Some(base), Some(exponent), None) => {
            let base = base.operand.into_value::<D>(label)?;
            let exponent = exponent.operand.into_value::<D>(label)?;
            Ok(Operand::Value(D::power(base, exponent)?))
        },
        _ => Err(not_implemented(label, arity)),
    }
}

/// An exponent phrase: a trailing "laipsniu" is dropped and a leading "minus"
/// negates the last child. Otherwise the last child is the exponent.
fn exponent<D: Domain>(label: &str, mut children: Children<'_, D::Value>) -> EvalResult<Operand<D::Value>> {
    let arity = children.len();
    if arity > 1 && children.last().is_some_and(|c| c.is_word(POWER_WORD)) {
        children.pop();
    }

    let negated = children.len() > 1 && children.first().is_some_and(|c| c.is_word(MINUS_WORD));
    let last = children.pop().ok_or_else(|| not_implemented(label, arity))?;

    if negated {
        let value = last.operand.into_value::<D>(label)?;
        Ok(Operand::Value(D::negate(value)?))
    } else {
        Ok(last.operand)
    }
}

/// `[multiplier] [degree] radical radicand`
fn root<D: Domain>(label: &str, mut children: Children<'_, D::Value>) -> EvalResult<Operand<D::Value>> {
    let arity = children.len();
    let radicand = children.pop()
                           .filter(|c| !c.is_skipped())
                           .ok_or_else(|| not_implemented(label, arity))?;

    let mut degree = None;
    let mut multiplier = None;
    for child in valued(children) {
        if child.shape == Some(Shape::RootDegree) && degree.is_none() {
            degree = Some(child.operand);
        } else if multiplier.is_none() {
            multiplier = Some(child.operand);
        } else {
            return Err(not_implemented(label, arity));
        }
    }

    let degree = degree.unwrap_or(Operand::Numeral(Number::Integer(2)))
                       .into_value::<D>(label)?;
    let radicand = radicand.operand.into_value::<D>(label)?;
    let result = D::root(radicand, degree)?;

    match multiplier {
        Some(multiplier) => {
            let multiplier = multiplier.into_value::<D>(label)?;
            Ok(Operand::Value(D::multiply(multiplier, result)?))
        },
        None => Ok(Operand::Value(result)),
    }
}

/// Leaves and non-operator connectives inside parentheses carry no meaning.
fn is_connective<V>(child: &Child<'_, V>) -> bool {
    child.word.is_some() || (child.is_skipped() && child.shape.and_then(Shape::operator).is_none())
}

fn paren<D: Domain>(label: &str, children: Children<'_, D::Value>) -> EvalResult<Operand<D::Value>> {
    let arity = children.len();
    let inner: Children<'_, D::Value> = children.into_iter().filter(|c| !is_connective(c)).collect();

    let value = match inner.len() {
        1 => pass_through(label, inner)?.into_value::<D>(label)?,
        3 => triple::<D>(label, inner, arity)?,
        _ => return Err(not_implemented(label, arity)),
    };
    Ok(Operand::Value(D::parenthesize(value)?))
}

fn chain<D: Domain>(label: &str, children: Children<'_, D::Value>) -> EvalResult<Operand<D::Value>> {
    match children.len() {
        1 => pass_through(label, children),
        3 => Ok(Operand::Value(triple::<D>(label, children, 3)?)),
        arity => Err(not_implemented(label, arity)),
    }
}

fn more<D: Domain>(label: &str, children: Children<'_, D::Value>) -> EvalResult<Operand<D::Value>> {
    match children.len() {
        3 => Ok(Operand::Value(triple::<D>(label, children, 3)?)),
        arity => Err(not_implemented(label, arity)),
    }
}

/// `operand operator operand`, where the operator is a node with an
/// `Operator` shape.
fn triple<D: Domain>(label: &str, children: Children<'_, D::Value>, arity: usize) -> EvalResult<D::Value> {
    let [left, operator, right] =
        <[_; 3]>::try_from(children).map_err(|_| not_implemented(label, arity))?;
    let op = operator.shape
                     .and_then(Shape::operator)
                     .ok_or_else(|| not_implemented(label, arity))?;

    let left = left.operand.into_value::<D>(label)?;
    let right = right.operand.into_value::<D>(label)?;
    D::apply(op, left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::domain::{numeric::Numeric, symbolic::Symbolic};

    fn numeral<V>(label: &'static str, shape: Shape, n: i64) -> Child<'static, V> {
        Child::node(label, shape, Operand::Numeral(Number::Integer(n)))
    }

    fn skip<V>(label: &'static str) -> Child<'static, V> {
        Child::node(label, Shape::Skip, Operand::Empty)
    }

    fn operator<V>(op: BinaryOperator) -> Child<'static, V> {
        Child::node("Op", Shape::Operator(op), Operand::Empty)
    }

    #[test]
    fn scale_arrangements() {
        let hundred = Shape::Scale(Magnitude::Hundred);
        let unit = |n| numeral::<Number>("Vienet", Shape::PassThrough, n);
        let word = || numeral::<Number>("SIMTAS", Shape::ScaleWord(Magnitude::Hundred), 100);

        let cases: Vec<(Children<'_, Number>, i64)> = vec![(vec![unit(7)], 7),
                                                           (vec![word()], 100),
                                                           (vec![word(), unit(21)], 121),
                                                           (vec![unit(3), word()], 300),
                                                           (vec![unit(2), word(), unit(21)], 221),];
        for (children, expected) in cases {
            assert_eq!(combine::<Numeric>(hundred, "Simt", children).unwrap(),
                       Operand::Numeral(Number::Integer(expected)));
        }

        let four: Children<'_, Number> = vec![unit(1), word(), unit(2), unit(3)];
        assert_eq!(combine::<Numeric>(hundred, "Simt", four),
                   Err(RuntimeError::NotImplemented { label: "Simt".into(),
                                                      arity: 4, }));
    }

    #[test]
    fn numeral_shapes_refuse_domain_values() {
        let children = vec![Child::node("Reiksme", Shape::PassThrough, Operand::Value(Number::Integer(2))),
                            numeral("Vienet", Shape::PassThrough, 3)];
        assert_eq!(combine::<Numeric>(Shape::DigitSum, "Desimt", children),
                   Err(RuntimeError::NotImplemented { label: "Desimt".into(),
                                                      arity: 2, }));
    }

    #[test]
    fn decimal_joins_digits() {
        let children = vec![numeral::<String>("Sveikas", Shape::PassThrough, 2),
                            skip("KABLELIS"),
                            numeral("Sveikas", Shape::PassThrough, 5)];
        assert_eq!(combine::<Symbolic>(Shape::Decimal, "Realus", children).unwrap(),
                   Operand::Numeral(Number::Real(2.5)));
    }

    #[test]
    fn more_requires_exactly_three_children() {
        let children = vec![numeral::<String>("A", Shape::PassThrough, 2),
                            operator(BinaryOperator::Mul),
                            numeral("A", Shape::PassThrough, 3)];
        assert_eq!(combine::<Symbolic>(Shape::More, "More", children).unwrap(),
                   Operand::Value(r"2 \cdot 3".to_string()));

        let single = vec![numeral::<String>("A", Shape::PassThrough, 2)];
        assert_eq!(combine::<Symbolic>(Shape::More, "More", single),
                   Err(RuntimeError::NotImplemented { label: "More".into(),
                                                      arity: 1, }));
    }

    #[test]
    fn chain_needs_an_operator_in_the_middle() {
        let children = vec![numeral::<Number>("A", Shape::PassThrough, 2),
                            skip("MINUS"),
                            numeral("A", Shape::PassThrough, 3)];
        assert!(matches!(combine::<Numeric>(Shape::Chain, "Israiskaplus", children),
                         Err(RuntimeError::NotImplemented { arity: 3, .. })));
    }

    #[test]
    fn paren_around_an_operator_triple() {
        let children = vec![skip::<String>("SklKair"),
                            numeral("A", Shape::PassThrough, 2),
                            operator(BinaryOperator::Add),
                            numeral("A", Shape::PassThrough, 3),
                            skip("SklDes")];
        assert_eq!(combine::<Symbolic>(Shape::Paren, "KairysSkl", children).unwrap(),
                   Operand::Value(r"\left( 2 + 3 \right)".to_string()));
    }

    #[test]
    fn exponent_phrases() {
        let minus = || Child::<String>::leaf(MINUS_WORD, 0);
        let ordinal = || numeral::<String>("SveikasLps", Shape::PassThrough, 5);
        let power_word = || Child::<String>::leaf(POWER_WORD, 0);

        let negated = vec![minus(), ordinal(), power_word()];
        assert_eq!(combine::<Symbolic>(Shape::Exponent, "Rodiklis", negated).unwrap(),
                   Operand::Value("-5".to_string()));

        let plain = vec![ordinal(), power_word()];
        assert_eq!(combine::<Symbolic>(Shape::Exponent, "Rodiklis", plain).unwrap(),
                   Operand::Numeral(Number::Integer(5)));

        let squared = vec![Child::<String>::leaf("kvadratu", 2)];
        assert_eq!(combine::<Symbolic>(Shape::Exponent, "Laipsnis", squared).unwrap(),
                   Operand::Numeral(Number::Integer(2)));
    }

    #[test]
    fn root_with_multiplier_and_degree() {
        let children = vec![numeral::<String>("Sveikas", Shape::PassThrough, 2),
                            numeral("SaknLps", Shape::RootDegree, 3),
                            skip("SAKNIS"),
                            numeral("Reiksme", Shape::PassThrough, 8)];
        assert_eq!(combine::<Symbolic>(Shape::Root, "Saknis", children).unwrap(),
                   Operand::Value(r"2 \cdot \sqrt[3]{8}".to_string()));
    }

    #[test]
    fn operators_and_connectives_are_empty() {
        let children = vec![Child::<Number>::leaf("plius", 0)];
        assert_eq!(combine::<Numeric>(Shape::Operator(BinaryOperator::Add), "Plius", children).unwrap(),
                   Operand::Empty);
    }
}
