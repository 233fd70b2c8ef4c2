use std::fs::{self};

use sage::{
    calculator::Answer,
    error::{Error, ParseError, RuntimeError},
    get_result,
    interpreter::parser::core::Outcome,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in extract_sage_lines(&content) {
            count += 1;
            let (sentence, expected) =
                line.split_once(" => ").unwrap_or_else(|| panic!("Malformed example in {path:?}: {line}"));
            let (numeric, symbolic) =
                expected.rsplit_once(" | ").unwrap_or_else(|| panic!("Malformed example in {path:?}: {line}"));

            let answer = complete(sentence);
            assert_eq!(answer.numeric.as_deref(), Ok(numeric), "numeric result of '{sentence}' in {path:?}");
            assert_eq!(answer.symbolic.as_deref(), Ok(symbolic), "symbolic result of '{sentence}' in {path:?}");
        }
    }

    assert!(count > 0, "No sage examples found in book/src");
}

fn extract_sage_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```sage") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines
}

fn complete(sentence: &str) -> Answer {
    match get_result(sentence) {
        Ok(Outcome::Complete(answer)) => answer,
        other => panic!("'{sentence}' did not parse: {other:?}"),
    }
}

fn assert_numeric(sentence: &str, expected: &str) {
    assert_eq!(complete(sentence).numeric.as_deref(), Ok(expected), "{sentence}");
}

fn assert_both(sentence: &str, numeric: &str, symbolic: &str) {
    let answer = complete(sentence);
    assert_eq!(answer.numeric.as_deref(), Ok(numeric), "{sentence}");
    assert_eq!(answer.symbolic.as_deref(), Ok(symbolic), "{sentence}");
}

#[test]
fn simple_addition() {
    assert_both("du plius trys", "5", "2 + 3");
}

#[test]
fn compound_numeral() {
    assert_numeric("dvidešimt du plius trys", "25");
}

#[test]
fn division_with_preposition() {
    assert_both("šeši padalint iš dviejų", "3", r"\frac{6}{2}");
}

#[test]
fn negated_cube() {
    assert_both("minus du kubu", "-8", "-2^{3}");
}

#[test]
fn power_binds_tighter_than_division() {
    assert_both("du dalinti iš du pakelti laipsniu penki",
                "0.0625",
                r"\frac{2}{2^{5}}");
}

#[test]
fn unknown_word_is_named() {
    assert_eq!(get_result("olia").unwrap_err(),
               Error::Parse(ParseError::UnknownWord { word:     "olia".into(),
                                                      position: 0, }));
    assert!(matches!(get_result("du plius olia"),
                     Err(Error::Parse(ParseError::UnknownWord { position: 2, .. }))));
}

#[test]
fn trailing_operator_is_incomplete() {
    assert!(matches!(get_result("du plius"), Ok(Outcome::Incomplete)));
    assert!(matches!(get_result(""), Ok(Outcome::Incomplete)));
}

#[test]
fn sentences_without_a_derivation_are_incomplete() {
    for sentence in ["du plius plius trys", "du du", "plius trys", "kart"] {
        assert!(matches!(get_result(sentence), Ok(Outcome::Incomplete)), "{sentence}");
    }
}

#[test]
fn division_by_zero_only_faults_numerically() {
    let answer = complete("penki padalint iš nulio");
    assert_eq!(answer.numeric, Err(RuntimeError::DivisionByZero));
    assert_eq!(answer.symbolic.as_deref(), Ok(r"\frac{5}{0}"));
}

#[test]
fn numerals_and_operators() {
    let cases = [("dvi ketvirtosios", "0.5"),
                 ("trys milijonai keturi šimtai tūkstančių šimtas dešimt", "3400110"),
                 ("tūkstantis", "1000"),
                 ("du tūkstančiai šimtas dešimt", "2110"),
                 ("milijonas", "1000000"),
                 ("du kablelis penki", "2.5"),
                 ("šeši padalint du", "3"),
                 ("penki plius šeši padalint iš dviejų", "8"),
                 ("penki plius šeši kart septyni", "47"),
                 ("du šimtai dvidešimt vienas kart keturi", "884"),
                 ("dešimt plius trys", "13"),
                 ("dešimt minus trys", "7")];

    for (sentence, expected) in cases {
        assert_numeric(sentence, expected);
    }
}

#[test]
fn whitespace_is_only_a_separator() {
    assert_both("  du \t plius\ntrys ", "5", "2 + 3");
}

#[test]
fn words_are_case_sensitive() {
    assert!(matches!(get_result("Du plius trys"),
                     Err(Error::Parse(ParseError::UnknownWord { position: 0, .. }))));
}
