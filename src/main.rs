use rusty_monkey::frontend::{Lexer, Parser};
use rusty_monkey::interpreter::{Interpreter, Object};

use clap::Parser as ArgParser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::{fs, process};

#[derive(ArgParser)]
#[clap(name = "rusty_monkey", about = "A Monkey interpreter")]
struct Args {
    /// Script to run; omit for an interactive session.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(path) => run_file(&path),
        None => run_prompt(),
    }
}

fn run_prompt() {
    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();

    loop {
        print!(">> ");
        if io::stdout().flush().is_err() {
            return;
        }

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }

        match run(&mut interpreter, &input) {
            Ok(object) => println!("{}", object),
            Err(errors) => report_errors(&errors),
        }
    }
}

fn run_file(path: &PathBuf) {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Could not read {}: {}", path.display(), e);
            process::exit(64);
        }
    };

    let mut interpreter = Interpreter::new();
    if let Err(errors) = run(&mut interpreter, &contents) {
        report_errors(&errors);
        process::exit(1);
    }
}

fn run(interpreter: &mut Interpreter, source: &str) -> Result<Object, Vec<String>> {
    let parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program().map_err(|errors| {
        errors
            .into_iter()
            .map(|e| format!("parse error: {}", e))
            .collect::<Vec<_>>()
    })?;

    interpreter
        .eval_program(&program)
        .map_err(|e| vec![format!("runtime error: {}", e)])
}

fn report_errors(errors: &[String]) {
    for error in errors {
        eprintln!("{}", error);
    }
}
