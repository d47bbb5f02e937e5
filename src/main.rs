use std::{env, fs::read_to_string};

use rlox::{errors::errors::Diagnostics, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: rlox <script>");
        return;
    }

    let source = match read_to_string(&args[1]) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", args[1], err);
            return;
        }
    };

    let mut diagnostics = Diagnostics::new();
    let tokens = tokenize(&source, &mut diagnostics);
    let statements = parse(tokens, &mut diagnostics);

    for diagnostic in diagnostics.reports() {
        eprintln!("{}", diagnostic);
    }
    for statement in &statements {
        println!("{}", statement);
    }
}
