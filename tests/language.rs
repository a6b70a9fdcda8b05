use std::fs;

use fracta::{eval_source, get_result, interpreter::value::core::Value};

fn eval_ok(src: &str) -> Value {
    eval_source(src).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"))
}

fn eval_err(src: &str) -> String {
    match eval_source(src) {
        Ok(value) => panic!("Script produced {value:?} but was expected to fail:\n{src}"),
        Err(e) => e.to_string(),
    }
}

fn assert_fraction(src: &str, num: i64, den: i64) {
    match eval_ok(src) {
        Value::Fraction(f) => {
            assert_eq!((f.numerator(), f.denominator()), (num, den), "wrong value for {src}");
        },
        other => panic!("Expected a fraction from {src}, got {other:?}"),
    }
}

#[test]
fn example_script_works() {
    let source = fs::read_to_string("tests/example.fracta").unwrap_or_else(|e| {
                     panic!("Failed to read tests/example.fracta: {e}")
                 });
    if let Err(e) = get_result(&source, false) {
        panic!("Example script failed: {e}");
    }
}

#[test]
fn integer_arithmetic() {
    assert_eq!(eval_ok("1 + 2 * 3;"), Value::Integer(7));
    assert_eq!(eval_ok("8 - 5;"), Value::Integer(3));
    assert_eq!(eval_ok("7 // 2;"), Value::Integer(3));
    assert_eq!(eval_ok("-7 // 2;"), Value::Integer(-3));
    assert_eq!(eval_ok("7 % 3;"), Value::Integer(1));
    assert_eq!(eval_ok("6 ^ 3;"), Value::Integer(5));
    assert_eq!(eval_ok("6 & 3;"), Value::Integer(2));
}

#[test]
fn division_always_builds_fractions() {
    assert_fraction("10 / 2;", 5, 1);
    assert_fraction("6 / -8;", -3, 4);
    assert_fraction("1 / 3;", 1, 3);
}

#[test]
fn fraction_arithmetic_is_exact() {
    assert_fraction("1/3 + 1/6;", 1, 2);
    assert_fraction("1/2 - 1/3;", 1, 6);
    assert_fraction("2/3 * 3/4;", 1, 2);
    assert_fraction("(1/2) / (1/4);", 2, 1);
    assert_eq!(eval_ok("2/4 == 1/2;"), Value::Boolean(true));
    assert_eq!(eval_ok("1/3 < 1/2;"), Value::Boolean(true));
    assert_eq!(eval_ok("-1/2 < 1/3;"), Value::Boolean(true));
}

#[test]
fn decimal_join_operator() {
    assert_fraction("1.5;", 3, 2);
    assert_fraction("2.25;", 9, 4);
    assert_fraction("-1.5;", -3, 2);
    assert_fraction("1.5 + 1.5;", 3, 1);
    assert_eq!(eval_ok("1.5;").to_string(), "1(1/2)");
}

#[test]
fn integers_promote_next_to_fractions() {
    assert_fraction("5 + 1/2;", 11, 2);
    assert_fraction("1/2 + 5;", 11, 2);
    assert_fraction("true + 1/2;", 3, 2);
}

#[test]
fn booleans_coerce_in_integer_arithmetic() {
    assert_eq!(eval_ok("true + true;"), Value::Integer(2));
    assert_eq!(eval_ok("false * 10;"), Value::Integer(0));
    assert_eq!(eval_ok("-true;"), Value::Boolean(false));
    assert_eq!(eval_ok("!false;"), Value::Boolean(true));
}

#[test]
fn string_operations() {
    assert_eq!(eval_ok("\"foo\" + \"bar\";"), Value::Str("foobar".to_string()));
    assert_eq!(eval_ok("\"ab\" * 3;"), Value::Str("ababab".to_string()));
    assert_eq!(eval_ok("\"ab\" * -1;"), Value::Str(String::new()));
    assert_eq!(eval_ok("\"abc\" . 1;"), Value::Str("b".to_string()));
    assert_eq!(eval_ok("\"a\" == \"a\";"), Value::Boolean(true));

    // A repetition that cannot fit in memory must fail, not abort.
    assert!(eval_err("\"abc\" * 9223372036854775807;").contains("overflow"));

    assert!(eval_err("\"abc\" . 5;").contains("out of bounds"));
    assert!(eval_err("\"abc\" . (0 - 1);").contains("out of bounds"));
    assert!(eval_err("\"a\" + 1/2;").contains("Type error"));
}

#[test]
fn assignment_and_variables() {
    assert_eq!(eval_ok("x = 1; y = x + 2; y;"), Value::Integer(3));
    assert_eq!(eval_ok("x = (y = 2) + 1; x;"), Value::Integer(3));
    assert!(eval_err("1 = 2;").contains("not an identifier"));
    assert!(eval_err("y + 1;").contains("not found"));
}

#[test]
fn call_scopes_copy_the_caller() {
    // The callee sees the caller's bindings at call time...
    assert_eq!(eval_ok("x = 1; fn bump() { x = x + 9; return x; } bump();"),
               Value::Integer(10));
    // ...but its writes never leak back out.
    assert_eq!(eval_ok("x = 1; fn bump() { x = x + 9; } bump(); x;"),
               Value::Integer(1));
    // Copies chain through nested calls.
    assert_eq!(eval_ok("x = 1; fn g() { return x; } fn h() { x = 9; return g(); } h();"),
               Value::Integer(9));
}

#[test]
fn function_calls_and_returns() {
    assert_eq!(eval_ok("fn add(a, b) { return a + b; } add(2, 3);"), Value::Integer(5));
    assert_eq!(eval_ok("fn f() { return 7; 99; } f();"), Value::Integer(7));
    assert_eq!(eval_ok("fn f() { 42; } f();"), Value::Null);
    assert_eq!(eval_ok("fn f() { while (true) { return 5; } } f();"), Value::Integer(5));

    assert!(eval_err("fn add(a, b) { return a + b; } add(1);").contains("takes 2 argument"));
    assert!(eval_err("nope();").contains("Unknown function"));
}

#[test]
fn recursion_is_bounded() {
    assert!(eval_err("fn f(n) { return f(n + 1); } f(0);").contains("Recursion limit"));
}

#[test]
fn while_loops_and_signals() {
    assert_eq!(eval_ok("i = 0; s = 0; while (i < 10) { i = i + 1; if (i == 3) { break; } s = s + i; } s;"),
               Value::Integer(3));
    assert_eq!(eval_ok("i = 0; s = 0; while (i < 5) { i = i + 1; if (i % 2 == 0) { continue; } s = s + i; } s;"),
               Value::Integer(9));
}

#[test]
fn conditionals_follow_truthiness() {
    assert_eq!(eval_ok("if (0) { 1; } else { 2; }"), Value::Integer(2));
    assert_eq!(eval_ok("if (\"\") { 1; } else { 2; }"), Value::Integer(2));
    assert_eq!(eval_ok("if (1/2) { 1; } else { 2; }"), Value::Integer(1));
    assert_eq!(eval_ok("x = 3; if (x == 1) { 10; } else if (x == 3) { 30; } else { 0; }"),
               Value::Integer(30));
    // A call with no return yields null, and null is falsy.
    assert_eq!(eval_ok("fn f() { } if (f()) { 1; } else { 2; }"), Value::Integer(2));
}

#[test]
fn print_yields_null() {
    assert_eq!(eval_ok("print(\"hi\");"), Value::Null);
    assert_eq!(eval_ok("print(7 / 2);"), Value::Null);
}

#[test]
fn eval_runs_complete_fragments_in_the_caller_scope() {
    assert_eq!(eval_ok("x = 1; eval(\"x = x + 1;\"); x;"), Value::Integer(2));
    assert_eq!(eval_ok("eval(\"1 + 2;\");"), Value::Integer(3));
}

#[test]
fn eval_ignores_incomplete_fragments() {
    // No trailing terminator.
    assert_eq!(eval_ok("x = 1; eval(\"x = 5\"); x;"), Value::Integer(1));
    // Unbalanced brackets.
    assert_eq!(eval_ok("eval(\"while (true) { break;\");"), Value::Null);
    // A bare integer stringifies to an incomplete fragment.
    assert_eq!(eval_ok("eval(3);"), Value::Null);
    // Unlexable input without a terminator is still a no-op...
    assert_eq!(eval_ok("eval(\"@\");"), Value::Null);

    // ...but a complete fragment reports what is wrong with it.
    assert!(eval_err("eval(\"@;\");").contains("eval failed"));
    assert!(eval_err("eval(\"1 + ;\");").contains("eval failed"));
    assert!(eval_err("eval();").contains("takes 1 argument"));
}

#[test]
fn arithmetic_failure_modes() {
    assert!(eval_err("5 / 0;").contains("Division by zero"));
    assert!(eval_err("5 // 0;").contains("Division by zero"));
    assert!(eval_err("5 % 0;").contains("Division by zero"));
    assert!(eval_err("(1/2) / (0/3);").contains("Division by zero"));
    assert!(eval_err("9223372036854775807 + 1;").contains("overflow"));
    // The left operand's error wins.
    assert!(eval_err("(1/0) + nope();").contains("Division by zero"));
}

#[test]
fn fraction_display_forms() {
    assert_eq!(eval_ok("1 / 2;").to_string(), "1/2");
    assert_eq!(eval_ok("6 / 2;").to_string(), "3");
    assert_eq!(eval_ok("7 / 2;").to_string(), "3(1/2)");
    assert_eq!(eval_ok("-7 / 2;").to_string(), "-3(-1/2)");
}
