use std::fs::{self};

use aplish::{ErrorKind, Session, Value, run_script};
use num::BigInt;
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

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run_script(&code, Some(0)) {
                panic!("DSL example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```aplish") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Runs `src` line by line and checks the rendering of the last value.
fn assert_result(src: &str, expected: &str) {
    match run_script(src, Some(0)) {
        Ok(Some(value)) => assert_eq!(value.to_text(), expected, "script: {src}"),
        Ok(None) => panic!("Script produced no value: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match run_script(src, Some(0)) {
        Ok(_) => panic!("Script succeeded but was expected to fail: {src}"),
        Err(e) => assert_eq!(e.kind(), kind, "script: {src}, error: {e}"),
    }
}

#[test]
fn operators_associate_to_the_right() {
    assert_result("5 - 3 - 1", "3");
    assert_result("2 * 3 + 4", "14");
    assert_result("(2 * 3) + 4", "10");
    assert_result("2 ** 3 ** 2", "512");
    assert_result("10 - 2 * 3 - 1", "6");
}

#[test]
fn scalar_arithmetic() {
    assert_result("3 + 4", "7");
    assert_result("3 - 10", "-7");
    assert_result("6 * 7", "42");
    assert_result("2 ** 10", "1024");
    assert_result("0 ** 0", "1");
    assert_result("  7   *   6  ", "42");
    assert_result("7\t+\t1", "8");
}

#[test]
fn integers_have_arbitrary_precision() {
    assert_result("2 ** 100", "1267650600228229401496703205376");
    assert_result("99999999999999999999 + 1", "100000000000000000000");
    assert_result("1 ** 99999999999", "1");
    assert_result("(-1) ** 99999999999", "-1");
    assert_result("0 ** 99999999999", "0");
}

#[test]
fn unary_negation() {
    assert_result("-5", "-5");
    assert_result("--5", "5");
    assert_result("-1 2 3", "-1 -2 -3");
    assert_result("-2 + 3", "-5");
    assert_result("(-2) + 3", "1");
}

#[test]
fn vectors_broadcast_elementwise() {
    assert_result("1 2 3", "1 2 3");
    assert_result("1 2 3 * 2", "2 4 6");
    assert_result("2 * 1 2 3", "2 4 6");
    assert_result("1 2 3 + 10 20 30", "11 22 33");
    assert_result("10 20 30 - 1 2 3", "9 18 27");
    assert_result("2 ** 0 1 2 3", "1 2 4 8");
    assert_result("(5) + (1 2)", "6 7");
}

#[test]
fn single_element_results_shrink_to_scalars() {
    let mut session = Session::with_seed(0);

    let value = session.execute("3 + 4").unwrap();
    assert!(value.is_scalar());
    assert_eq!(value, Value::from(7));

    let value = session.execute("1 2 3[2] + 1").unwrap();
    assert!(value.is_scalar());
    assert_eq!(value, Value::from(3));
}

#[test]
fn dot_product() {
    assert_result("1 2 3 +.* 4 5 6", "32");
    assert_result("3 +.* 4", "12");
    assert_result("1 2 +.* 3 4 + 1", "14");
    assert_result("(1 2 +.* 3 4) + 1", "12");
}

#[test]
fn dot_product_requires_equal_lengths() {
    assert_failure("1 2 3 +.* 4 5", ErrorKind::ShapeMismatch);
    assert_failure("2 +.* 1 2 3", ErrorKind::ShapeMismatch);
}

#[test]
fn shape_mismatch_is_error() {
    assert_failure("1 2 * 3 4 5", ErrorKind::ShapeMismatch);
    assert_failure("1 2 3 + 1 2", ErrorKind::ShapeMismatch);
}

#[test]
fn assignment_persists() {
    assert_result("x = 5\nx + 1", "6");
    assert_result("x = 1 2 3\nx * x", "1 4 9");
    assert_result("x = 5", "5");
    assert_result("y = 1 + z = 2\ny * z", "6");
    assert_result("a = b = 4\na + b", "8");
}

#[test]
fn ans_holds_the_last_result() {
    assert_result("2 + 2\nans * 10", "40");
    assert_result("1 2 3\nans +.* ans", "14");
}

#[test]
fn indexing_selects_elements() {
    assert_result("10 20 30[1]", "10");
    assert_result("10 20 30[3 1]", "30 10");
    assert_result("x = 5 6 7\nx[2 + 1]", "7");
    assert_result("x = 5 6 7\nx[3 2][1]", "7");
    assert_result("9[1]", "9");
    assert_failure("10 20 30[4]", ErrorKind::Domain);
    assert_failure("10 20 30[0]", ErrorKind::Domain);
    assert_failure("10 20 30[2", ErrorKind::Syntax);
}

#[test]
fn roll_stays_in_range() {
    let mut session = Session::with_seed(42);

    for _ in 0..100 {
        let value = session.execute("?6").unwrap();
        let Value::Scalar(n) = value else {
            panic!("Roll of a scalar must be a scalar");
        };
        assert!(n >= BigInt::from(1) && n <= BigInt::from(6), "rolled {n}");
    }

    let value = session.execute("?1 1 1").unwrap();
    assert_eq!(value, Value::from(vec![1, 1, 1]));
}

#[test]
fn roll_is_reproducible_with_a_seed() {
    let mut first = Session::with_seed(7);
    let mut second = Session::with_seed(7);

    for _ in 0..10 {
        assert_eq!(first.execute("?1000 1000 1000").unwrap(),
                   second.execute("?1000 1000 1000").unwrap());
    }
}

#[test]
fn domain_errors() {
    assert_failure("2 ** -1", ErrorKind::Domain);
    assert_failure("2 ** 99999999999", ErrorKind::Domain);
    assert_failure("?0", ErrorKind::Domain);
    assert_failure("?-3", ErrorKind::Domain);
    assert_failure("?3 0 2", ErrorKind::Domain);
}

#[test]
fn syntax_errors() {
    assert_failure("(1 + 2", ErrorKind::Syntax);
    assert_failure("1 + 2)", ErrorKind::Syntax);
    assert_failure("1 +", ErrorKind::Syntax);
    assert_failure("3 = 4", ErrorKind::Syntax);
    assert_failure("x = 1\n(x) = 4", ErrorKind::Syntax);
    assert_failure("x = 1\nx 2", ErrorKind::Syntax);
    assert_failure("* 2", ErrorKind::Syntax);
    assert_failure("1 ? 2", ErrorKind::Syntax);
    assert_failure("1 ; 2", ErrorKind::Syntax);
}

#[test]
fn empty_statement_is_error() {
    let mut session = Session::with_seed(0);

    assert_eq!(session.execute("").unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!(session.execute("   ").unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!(session.execute("\n").unwrap_err().kind(), ErrorKind::Syntax);
}

#[test]
fn trailing_newline_is_accepted() {
    let mut session = Session::with_seed(0);

    assert_eq!(session.execute("1 + 1\n").unwrap(), Value::from(2));
    assert_eq!(session.execute("1 + 1\r\n").unwrap(), Value::from(2));
    assert_eq!(session.execute("1\n2").unwrap_err().kind(), ErrorKind::Syntax);
}

#[test]
fn failed_statement_leaves_variables_untouched() {
    let mut session = Session::with_seed(0);

    session.execute("x = 5").unwrap();
    assert_eq!(session.execute("x = y").unwrap_err().kind(),
               ErrorKind::UndefinedVariable);
    assert_eq!(session.execute("x + 1").unwrap(), Value::from(6));

    assert!(session.execute("(z = 1) + y").is_err());
    assert_eq!(session.variable("z"), None);
    assert_eq!(session.execute("z").unwrap_err().kind(),
               ErrorKind::UndefinedVariable);

    assert!(session.execute("x = 1 2 * 3 4 5").is_err());
    assert_eq!(session.variable("x"), Some(&Value::from(5)));
    assert_eq!(session.variable("ans"), Some(&Value::from(6)));
}

#[test]
fn lex_errors() {
    assert_failure("1 / 2", ErrorKind::Lex);
    assert_failure("1 +. 2", ErrorKind::Lex);
    assert_failure("x_1 = 2", ErrorKind::Lex);
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("foo + 1", ErrorKind::UndefinedVariable);
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.apl").expect("missing file");
    let value = run_script(&script, Some(3)).unwrap().unwrap();
    assert_eq!(value.to_text(), "-1490");
}
