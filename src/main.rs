use std::{
    io::{self, BufRead},
    path::PathBuf,
};

use clap::Parser;
use sage::{
    calculator::Calculator,
    error::{Error, ParseError},
    interpreter::parser::core::Outcome,
    util::speak::{fault_phrase, round_number},
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// sage evaluates spoken Lithuanian arithmetic, printing the result and its
/// LaTeX form.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads the grammar from a file instead of using the bundled one.
    #[arg(short, long, env = "SAGE_GRAMMAR")]
    grammar: Option<PathBuf>,

    /// Prints the parse tree before the results.
    #[arg(short, long)]
    tree: bool,

    /// Shortens the numeric result the way it would be read aloud.
    #[arg(short, long)]
    speak: bool,

    /// The sentence to evaluate. Sentences are read from standard input, one
    /// per line, when none is given.
    sentence: Vec<String>,
}

fn main() {
    tracing_subscriber::registry().with(EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| "info".into()))
                                  .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                                  .init();

    let args = Args::parse();

    let calculator = match &args.grammar {
        Some(path) => Calculator::load(path),
        None => Calculator::bundled(),
    };
    let calculator = calculator.unwrap_or_else(|e| {
                                   eprintln!("{e}");
                                   std::process::exit(1);
                               });

    if !args.sentence.is_empty() {
        answer(&calculator, &args, &args.sentence.join(" "));
        return;
    }

    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) if line.trim().is_empty() => {},
            Ok(line) => answer(&calculator, &args, &line),
            Err(e) => {
                eprintln!("Failed to read standard input: {e}");
                std::process::exit(1);
            },
        }
    }
}

fn answer(calculator: &Calculator, args: &Args, sentence: &str) {
    match calculator.evaluate(sentence) {
        Ok(Outcome::Complete(answer)) => {
            if args.tree {
                println!("{}", answer.tree);
            }
            match answer.numeric {
                Ok(result) if args.speak => match round_number(&result) {
                    Ok(spoken) => println!("{spoken}"),
                    Err(e) => println!("{}", fault_phrase(&e)),
                },
                Ok(result) => println!("{result}"),
                Err(e) => println!("{}", fault_phrase(&e)),
            }
            match answer.symbolic {
                Ok(latex) => println!("{latex}"),
                Err(e) => println!("{}", fault_phrase(&e)),
            }
        },
        Ok(Outcome::Incomplete) => println!("Pabaikite išraišką"),
        Err(Error::Parse(ParseError::UnknownWord { word, .. })) => println!("Nežinomas žodis: {word}"),
        Err(e) => eprintln!("{e}"),
    }
}
