use rusty_monkey::frontend::{Lexer, Parser};
use rusty_monkey::interpreter::Interpreter;

use regex::Regex;
use test_generator::test_resources;

#[derive(Debug, PartialEq)]
enum ExpectedOutput {
    ParseError(Vec<String>),
    Evaluated(Output),
}

#[derive(Debug, PartialEq)]
struct Output {
    output: Vec<String>,
    runtime_error: Option<String>,
}

#[test_resources("tests/monkey_test_cases/**/*.mk")]
fn test_interpreter(file: &str) {
    let source = std::fs::read_to_string(file).unwrap();

    let expected_output = get_expected_output(&source);
    let output = run_interpreter_on_source(&source);

    assert_eq!(expected_output, output);
}

fn run_interpreter_on_source(source: &str) -> ExpectedOutput {
    // Monkey has no comment syntax; the `// expect:` annotations are for
    // this harness only and get stripped before lexing.
    let comment_regexer = Regex::new(r"//[^\n]*").unwrap();
    let source = comment_regexer.replace_all(source, "");

    let parser = Parser::new(Lexer::new(&source));
    let program = match parser.parse_program() {
        Ok(program) => program,
        Err(errors) => {
            let errors = errors.into_iter().map(|e| e.to_string()).collect();
            return ExpectedOutput::ParseError(errors);
        }
    };

    let mut output = vec![];
    let mut interpreter = Interpreter::new_with_output(std::io::Cursor::new(&mut output));
    let result = interpreter.eval_program(&program);

    ExpectedOutput::Evaluated(Output {
        output: String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| l.to_owned())
            .collect(),
        runtime_error: result.err().map(|e| e.to_string()),
    })
}

fn get_expected_output(source: &str) -> ExpectedOutput {
    let output_regexer = Regex::new(r"// expect: (.*)$").unwrap();
    let runtime_error_regexer = Regex::new(r"// expect runtime error: (.*)$").unwrap();
    let parse_error_regexer = Regex::new(r"// expect parse error: (.*)$").unwrap();

    let mut parse_errors = vec![];
    let mut result = Output {
        output: vec![],
        runtime_error: None,
    };

    for line in source.lines() {
        if let Some(r) = parse_error_regexer.captures(line) {
            parse_errors.push(r.get(1).unwrap().as_str().to_owned());
            continue;
        }
        if let Some(r) = runtime_error_regexer.captures(line) {
            result
                .runtime_error
                .replace(r.get(1).unwrap().as_str().to_owned());
            continue;
        }
        if let Some(r) = output_regexer.captures(line) {
            result.output.push(r.get(1).unwrap().as_str().to_owned());
        }
    }

    if !parse_errors.is_empty() {
        ExpectedOutput::ParseError(parse_errors)
    } else {
        ExpectedOutput::Evaluated(result)
    }
}
