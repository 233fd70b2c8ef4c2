use sage::{
    calculator::Calculator,
    error::RuntimeError,
    grammar::core::Grammar,
    interpreter::{
        domain::{numeric::Numeric, symbolic::Symbolic},
        parser::core::Outcome,
    },
    tree::Tree,
};

fn calculator(text: &str) -> Calculator {
    Calculator::new(text.parse::<Grammar>().unwrap()).unwrap()
}

fn both(calculator: &Calculator, sentence: &str) -> (Result<String, RuntimeError>, Result<String, RuntimeError>) {
    let answer = calculator.evaluate(sentence).unwrap().complete().unwrap();
    (answer.numeric, answer.symbolic)
}

#[test]
fn evaluation_is_idempotent() {
    let calculator = Calculator::bundled().unwrap();
    for sentence in ["du plius trys",
                     "minus du kubu",
                     "du sveiki trys ketvirtosios",
                     "penki padalint iš nulio"]
    {
        let tree = calculator.parse(sentence).unwrap().complete().unwrap();
        let numeric = calculator.evaluator::<Numeric>();
        let symbolic = calculator.evaluator::<Symbolic>();
        assert_eq!(numeric.evaluate(&tree), numeric.evaluate(&tree), "{sentence}");
        assert_eq!(symbolic.evaluate(&tree), symbolic.evaluate(&tree), "{sentence}");
    }
}

#[test]
fn more_combines_a_single_triple() {
    let calculator = calculator("S -> More\n\
                                 More -> Sveikas Daugyba Sveikas\n\
                                 Sveikas -> VIENETAS\n\
                                 Daugyba -> 'kart'\n\
                                 VIENETAS -> 'du' | 'trys'");
    assert_eq!(both(&calculator, "du kart trys"),
               (Ok("6".to_string()), Ok(r"2 \cdot 3".to_string())));
}

#[test]
fn paren_around_a_triple() {
    let calculator = calculator("S -> KairysSkl\n\
                                 KairysSkl -> SklKair Sveikas Plius Sveikas SklDes\n\
                                 SklKair -> 'skliaustai' 'atsidaro'\n\
                                 SklDes -> 'skliaustai' 'užsidaro'\n\
                                 Plius -> 'plius'\n\
                                 Sveikas -> VIENETAS\n\
                                 VIENETAS -> 'du' | 'trys'");
    assert_eq!(both(&calculator, "skliaustai atsidaro du plius trys skliaustai užsidaro"),
               (Ok("5".to_string()), Ok(r"\left( 2 + 3 \right)".to_string())));
}

#[test]
fn large_results_continue_as_reals() {
    let calculator = Calculator::bundled().unwrap();

    let (numeric, symbolic) = both(&calculator, "milijonas kart milijonas kart milijonas");
    assert_eq!(numeric.as_deref(), Ok("1000000000000000000"));
    assert_eq!(symbolic.unwrap(), r"1000000 \cdot 1000000 \cdot 1000000");

    let (numeric, symbolic) = both(&calculator, "milijonas kart milijonas kart milijonas kart milijonas");
    assert_eq!(numeric.as_deref(), Ok("1000000000000000000000000"));
    assert_eq!(symbolic.unwrap(), r"1000000 \cdot 1000000 \cdot 1000000 \cdot 1000000");

    let (numeric, _) = both(&calculator, "milijonas kart milijonas kart milijonas padalint iš dviejų");
    assert_eq!(numeric.as_deref(), Ok("500000000000000000"));
}

#[test]
fn arithmetic_faults_leave_the_symbolic_result() {
    let calculator = Calculator::bundled().unwrap();

    let (numeric, symbolic) =
        both(&calculator, "šaknis iš skliaustai atsidaro minus keturi skliaustai užsidaro");
    assert!(matches!(numeric, Err(ref e @ RuntimeError::InvalidRoot { .. }) if e.is_arithmetic()));
    assert_eq!(symbolic.unwrap(), r"\sqrt{\left( -4 \right)}");
}

#[test]
fn unsupported_arrangements_are_reported() {
    let calculator = Calculator::bundled().unwrap();
    let tree = Tree::node("Israiskaplus",
                          vec![Tree::node("Isrkart", vec![Tree::leaf("du")]),
                               Tree::node("Isrkart", vec![Tree::leaf("trys")]),]);

    let error = calculator.evaluator::<Numeric>().evaluate(&tree).unwrap_err();
    assert_eq!(error,
               RuntimeError::NotImplemented { label: "Israiskaplus".into(),
                                              arity: 2, });
    assert!(!error.is_arithmetic());
    assert!(!error.is_configuration());
}

#[test]
fn configuration_defects_are_classified() {
    let calculator = Calculator::bundled().unwrap();
    let tree = Tree::node("S", vec![Tree::leaf("olia")]);
    let error = calculator.evaluator::<Symbolic>().evaluate(&tree).unwrap_err();
    assert!(error.is_configuration());
}

#[test]
fn long_chains_stay_left_associative() {
    let calculator = Calculator::bundled().unwrap();
    let sentence = vec!["du"; 40].join(" minus ");

    let outcome = calculator.evaluate_numeric(&sentence).unwrap();
    assert_eq!(outcome, Outcome::Complete("-76".to_string()));

    let symbolic = calculator.evaluate_symbolic(&sentence).unwrap().complete().unwrap();
    assert!(symbolic.starts_with("2 - 2 - 2"));
}
