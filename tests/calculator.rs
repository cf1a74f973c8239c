use std::{fs, io::Cursor};

use deskcalc::{
    calculator::{
        lexer::{Symbol, Token, TokenStream},
        session::Session,
    },
    error::CalcError,
    evaluate_script,
};
use walkdir::WalkDir;

fn values(source: &str) -> Vec<f64> {
    evaluate_script(source).into_iter()
                           .map(|outcome| {
                               outcome.unwrap_or_else(|e| panic!("Script failed: {e}"))
                           })
                           .collect()
}

#[test]
fn basic_arithmetic() {
    assert_eq!(values("1 + 2;"), [3.0]);
    assert_eq!(values("8 - 5;"), [3.0]);
    assert_eq!(values("7 * 9;"), [63.0]);
    assert_eq!(values("10 / 4;"), [2.5]);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(values("2 + 3 * 4;"), [14.0]);
    assert_eq!(values("2 * 3 + 4;"), [10.0]);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(values("(2 + 3) * 4;"), [20.0]);
    assert_eq!(values("2 * (3 + 4);"), [14.0]);
}

#[test]
fn equal_precedence_chains_are_left_associative() {
    assert_eq!(values("100 / 5 / 2;"), [10.0]);
    assert_eq!(values("10 - 3 - 4;"), [3.0]);
    assert_eq!(values("2 * 3 * 4;"), [24.0]);
    assert_eq!(values("1 - 2 + 3;"), [2.0]);
}

#[test]
fn assignment_persists_across_statements() {
    assert_eq!(values("x = 5; x + 2;"), [5.0, 7.0]);
    assert_eq!(values("x = 2; x = x * 3; x;"), [2.0, 6.0, 6.0]);
}

#[test]
fn chained_assignment() {
    assert_eq!(values("x = y = 2; x + y;"), [2.0, 4.0]);
}

#[test]
fn unseen_name_defaults_to_zero() {
    assert_eq!(values("y + 1;"), [1.0]);
}

#[test]
fn unary_minus() {
    assert_eq!(values("x = 3; -x;"), [3.0, -3.0]);
    assert_eq!(values("-(2 + 3);"), [-5.0]);
    assert_eq!(values("--4;"), [4.0]);
}

#[test]
fn exponent_and_fractional_literals() {
    assert_eq!(values("1e3;"), [1000.0]);
    assert_eq!(values("2.5e-1;"), [0.25]);
    assert_eq!(values("1.5e2;"), [150.0]);
    assert_eq!(values(".5 + .25;"), [0.75]);
}

#[test]
fn empty_statements_are_skipped() {
    assert_eq!(values(";;; 1;;"), [1.0]);
}

#[test]
fn final_statement_without_separator_is_accepted() {
    assert_eq!(values("2 + 2"), [4.0]);
}

#[test]
fn statements_may_span_lines() {
    assert_eq!(values("1 +\n2;"), [3.0]);
    assert_eq!(values("width = 6;\nwidth * 2;"), [6.0, 12.0]);
}

#[test]
fn division_by_zero_is_reported_and_session_continues() {
    let outcomes = evaluate_script("1 / 0; 2 + 2;");
    assert_eq!(outcomes.len(), 2);
    assert!(matches!(outcomes[0], Err(CalcError::Runtime(_))));
    assert!(matches!(outcomes[1], Ok(v) if v == 4.0));
}

#[test]
fn division_by_zero_reports_the_right_line() {
    let outcomes = evaluate_script("x = 0;\n5 / x;");
    let error = outcomes[1].as_ref().unwrap_err();
    assert!(error.to_string().contains("line 2"), "got: {error}");
    assert!(error.to_string().contains("Division by zero"), "got: {error}");
}

#[test]
fn malformed_numeral_recovers_at_the_next_separator() {
    let outcomes = evaluate_script("1.2.3; 2;");
    assert_eq!(outcomes.len(), 2);
    assert!(matches!(outcomes[0], Err(CalcError::Lex(_))));
    assert!(matches!(outcomes[1], Ok(v) if v == 2.0));
}

#[test]
fn recovery_discards_the_rest_of_a_bad_statement() {
    let outcomes = evaluate_script("x = 1; 1.2.3 4; 2;");
    assert_eq!(outcomes.len(), 3);
    assert!(matches!(outcomes[0], Ok(v) if v == 1.0));
    assert!(matches!(outcomes[1], Err(CalcError::Lex(_))));
    assert!(matches!(outcomes[2], Ok(v) if v == 2.0));
}

#[test]
fn unrecognized_character_recovers_at_the_next_separator() {
    let outcomes = evaluate_script("2 # 3; 4;");
    assert_eq!(outcomes.len(), 2);
    assert!(matches!(outcomes[0], Err(CalcError::Lex(_))));
    assert!(matches!(outcomes[1], Ok(v) if v == 4.0));
}

#[test]
fn missing_closing_paren_is_a_syntax_error() {
    let outcomes = evaluate_script("(1 + 2; 8;");
    assert_eq!(outcomes.len(), 2);
    assert!(matches!(outcomes[0], Err(CalcError::Syntax(_))));
    assert!(matches!(outcomes[1], Ok(v) if v == 8.0));

    let message = outcomes[0].as_ref().unwrap_err().to_string();
    assert!(message.contains("')' expected"), "got: {message}");
}

#[test]
fn missing_primary_is_a_syntax_error() {
    let outcomes = evaluate_script("* 2; 3;");
    assert_eq!(outcomes.len(), 2);
    assert!(matches!(outcomes[0], Err(CalcError::Syntax(_))));
    assert!(matches!(outcomes[1], Ok(v) if v == 3.0));

    let message = outcomes[0].as_ref().unwrap_err().to_string();
    assert!(message.contains("primary expected"), "got: {message}");
}

#[test]
fn trailing_tokens_are_a_syntax_error() {
    let outcomes = evaluate_script("2 3; 5;");
    assert_eq!(outcomes.len(), 2);
    assert!(matches!(outcomes[0], Err(CalcError::Syntax(_))));
    assert!(matches!(outcomes[1], Ok(v) if v == 5.0));
}

#[test]
fn assignments_survive_a_failed_statement() {
    assert_eq!(values("x = 7; x;").len(), 2);

    let outcomes = evaluate_script("x = 7; 1 / 0; x + 1;");
    assert!(matches!(outcomes[2], Ok(v) if v == 8.0));
}

#[test]
fn current_token_reads_are_idempotent() {
    let mut stream = TokenStream::from_source("7 + 1;");

    assert_eq!(stream.next_token().unwrap(), Token::Number(7.0));
    assert_eq!(stream.current(), &Token::Number(7.0));
    assert_eq!(stream.current(), &Token::Number(7.0));

    assert_eq!(stream.next_token().unwrap(), Token::Operator(Symbol::Plus));
    assert_eq!(stream.current(), &Token::Operator(Symbol::Plus));
}

#[test]
fn end_of_input_is_terminal() {
    let mut stream = TokenStream::from_source("");
    assert_eq!(stream.next_token().unwrap(), Token::EndOfInput);
    assert_eq!(stream.next_token().unwrap(), Token::EndOfInput);
    assert_eq!(stream.next_token().unwrap(), Token::EndOfInput);
}

#[test]
fn exponent_marker_without_exponent_is_a_name() {
    let mut stream = TokenStream::from_source("2e;");
    assert_eq!(stream.next_token().unwrap(), Token::Number(2.0));
    assert_eq!(stream.next_token().unwrap(), Token::Name("e".to_string()));
}

#[test]
fn borrowed_and_owned_sources_behave_alike() {
    let mut backing = Cursor::new(b"2 * 8;".to_vec());
    let mut borrowed = Session::new(&mut backing);
    assert!(matches!(borrowed.evaluate_next(), Some(Ok(v)) if v == 16.0));
    assert!(borrowed.evaluate_next().is_none());

    let mut owned = Session::from_reader(Box::new(Cursor::new(b"2 * 8;".to_vec())));
    assert!(matches!(owned.evaluate_next(), Some(Ok(v)) if v == 16.0));
    assert!(owned.evaluate_next().is_none());
}

#[test]
fn run_writes_results_and_diagnostics_separately() {
    let mut out = Vec::new();
    let mut err = Vec::new();

    Session::from_source("1 + 1; 1 / 0; 2 * 3;").run(&mut out, &mut err)
                                                .expect("no fatal error expected");

    assert_eq!(String::from_utf8(out).unwrap(), "2\n6\n");
    assert!(String::from_utf8(err).unwrap().contains("Division by zero"));
}

#[test]
fn symbol_table_is_visible_on_the_session() {
    let mut session = Session::from_source("rate = 4; rate * 2;");
    while session.evaluate_next().is_some() {}

    assert_eq!(session.symbols().get("rate"), Some(4.0));
    assert_eq!(session.symbols().len(), 1);
}

#[test]
fn calculator_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, outcome) in evaluate_script(&source).into_iter().enumerate() {
            count += 1;
            if let Err(e) = outcome {
                panic!("Statement {} in {:?} failed: {}", i + 1, path, e);
            }
        }
    }

    assert!(count > 0, "No calculator scripts found in tests/scripts");
}
