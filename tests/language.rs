use std::{fs, thread};

use commacalc::{
    error::{CalcError, RuntimeError},
    evaluate_expression,
    interpreter::value::core::Value,
    try_evaluate,
};
use walkdir::WalkDir;

#[test]
fn case_files_evaluate_as_listed() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (expression, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            let actual = evaluate_expression(expression);
            assert_eq!(actual,
                       expected,
                       "case {} in {:?} failed: `{}`",
                       i + 1,
                       path,
                       expression);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(&str, &str)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .filter_map(|line| line.split_once(" => "))
           .map(|(expression, expected)| (expression.trim(), expected.trim()))
           .collect()
}

fn assert_result(src: &str, expected: &str) {
    assert_eq!(evaluate_expression(src), expected, "expression: `{src}`");
}

fn assert_invalid(src: &str) {
    assert!(matches!(try_evaluate(src), Err(CalcError::Parse(_))),
            "expression `{src}` was accepted but should be invalid");
    assert_result(src, "invalid expression");
}

fn assert_runtime(src: &str, error: RuntimeError) {
    assert_eq!(try_evaluate(src), Err(CalcError::Runtime(error)), "expression: `{src}`");
}

#[test]
fn documented_examples() {
    assert_result("1 - (2 + 3)", "-4");
    assert_result("sin (pi / 2) + (5 log_base 25 + 3 mod 2)", "2,5");
    assert_result("arcsin (-2,5)", "asin value out of [-1, 1]");
    assert_invalid("1,");
    assert_invalid("arcsin");
    assert_invalid("(3) + 4(sin cos (e^((3)- 5 mod 6) + 3 log_base (pi)))");
}

#[test]
fn blank_input_is_zero() {
    assert_result("", "0");
    assert_result("   \t ", "0");
    assert_eq!(try_evaluate(""), Ok(Value::Integer(0)));
}

#[test]
fn integer_tag_is_preserved() {
    assert_eq!(try_evaluate("2 + 3 * 4"), Ok(Value::Integer(14)));
    assert_eq!(try_evaluate("abs (-3)"), Ok(Value::Integer(3)));
    assert_eq!(try_evaluate("2 ^ 10"), Ok(Value::Integer(1024)));
    assert_eq!(try_evaluate("7 mod 4"), Ok(Value::Integer(3)));
    assert!(try_evaluate("2 * 3").is_ok_and(Value::is_integer));
    assert!(!try_evaluate("2 * 1,5").is_ok_and(Value::is_integer));
}

#[test]
fn real_results_always_show_a_fraction() {
    assert_eq!(try_evaluate("6 / 3"), Ok(Value::Real(2.0)));
    assert_result("6 / 3", "2,0");
    assert_result("2 + 0,5", "2,5");
    assert_result("pi", "3,141592653589793");
    assert_result("e", "2,718281828459045");
}

#[test]
fn non_finite_results_are_printed() {
    assert_result("8 log_base 1", "inf");
    assert_result("8 log_base (-2)", "nan");
}

#[test]
fn mod_takes_the_sign_of_the_divisor() {
    assert_result("(-7) mod 3", "2");
    assert_result("7 mod (-3)", "-2");
    assert_result("(-7) mod (-3)", "-1");
    assert_runtime("7 mod 0", RuntimeError::DivisionByZero);
}

#[test]
fn arctan_domain_is_narrow() {
    assert_result("arctan 1,5", "0,982793723247329");
    assert_runtime("arctan 1,6", RuntimeError::AtanOutOfRange);
    assert_runtime("arctan (-1,6)", RuntimeError::AtanOutOfRange);
}

#[test]
fn first_error_wins() {
    assert_runtime("(1 / 0) + ln 0", RuntimeError::DivisionByZero);
    assert_runtime("ln 0 + (1 / 0)", RuntimeError::NonPositiveLn);
    assert_runtime("sroot (arcsin 2)", RuntimeError::AsinOutOfRange);
}

#[test]
fn evaluation_is_idempotent() {
    let expression = "sin (cos 5) + cos 6";
    let first = evaluate_expression(expression);
    assert_eq!(evaluate_expression(expression), first);
    assert_eq!(evaluate_expression(expression), first);
}

#[test]
fn evaluation_is_reentrant_across_threads() {
    let handles: Vec<_> = (0..8).map(|i| {
                                    thread::spawn(move || {
                                        let expression = format!("{i} * 2 ^ 3 - 1");
                                        (i, evaluate_expression(&expression))
                                    })
                                })
                                .collect();

    for handle in handles {
        let (i, result) = handle.join().unwrap();
        assert_eq!(result, (i * 8 - 1).to_string());
    }
}

#[test]
fn deep_nesting_is_evaluated() {
    let depth = 200;
    let expression = format!("{}1{}", "(".repeat(depth), " + 1)".repeat(depth));
    assert_result(&expression, &(depth + 1).to_string());
}
