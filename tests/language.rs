use std::{fs, path::Path};

use pretty_assertions::assert_eq;
use walkdir::WalkDir;
use while_lang::{
    error::{Error, ErrorKind, RuntimeError},
    parse, run,
};

#[test]
fn program_corpus_matches_expected_output() {
    let mut count = 0;
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/programs");

    for entry in WalkDir::new(&root).sort_by_file_name()
                                    .into_iter()
                                    .filter_map(Result::ok)
                                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "while"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        match run(&source) {
            Ok(result) => assert_eq!(result.output, expected, "program {path:?}"),
            Err(e) => panic!("Program {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No programs found in {root:?}");
}

fn assert_output(src: &str, expected: &str) {
    match run(src) {
        Ok(result) => assert_eq!(result.output, expected, "script {src:?}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) -> Error {
    match run(src) {
        Ok(result) => panic!("Script succeeded but was expected to fail: {:?}", result.output),
        Err(e) => {
            assert_eq!(e.kind(), kind, "script {src:?}");
            e
        },
    }
}

#[test]
fn printing_arithmetic() {
    assert_output("print 1+2", "3.0\n");
    assert_output("print 7/0", "nan\n");
    assert_output("print 0.1+0.2", "0.30000000000000004\n");
    assert_output("print 2*3-4/8", "5.5\n");
    assert_output("print 10^20", "1e+20\n");
}

#[test]
fn comparisons_print_as_numbers() {
    assert_output("print 1<2; print 2<1; print 3>2; print 2=2", "1.0\n0.0\n1.0\n1.0\n");
}

#[test]
fn negative_base_with_fractional_exponent_is_nan() {
    assert_output("x := 0-8; print x^(1/3)", "nan\n");
}

#[test]
fn assignment_and_lookup() {
    assert_output("x := 5; print x", "5.0\n");
    assert_output("x := 5; x := x * x; print x", "25.0\n");
}

#[test]
fn assignment_chains_bind_every_name() {
    assert_output("a := b := 4; print a; print b", "4.0\n4.0\n");
}

#[test]
fn assignment_is_an_expression() {
    assert_output("print (x := 3) + x", "6.0\n");
}

#[test]
fn while_loop_counts() {
    assert_output("x := 0; while (x < 3) { print x; x := x+1 }", "0.0\n1.0\n2.0\n");
    assert_output("while 0 { print 1 }; print 2", "2.0\n");
}

#[test]
fn if_requires_both_arms() {
    assert_output("if 1 { print 1 } else { print 2 }", "1.0\n");
    assert_failure("if 1 { print 1 }", ErrorKind::Parse);
}

#[test]
fn procedure_calls() {
    assert_output("proc f(a,b){ print a+b }; f(2,3)", "5.0\n");
    assert_output("proc one() { 1 }; print one() + one()", "2.0\n");
}

#[test]
fn wrong_arity_is_fatal() {
    let error = assert_failure("proc f(a,b){ print a+b }; f(2)", ErrorKind::ArityOrKind);
    assert_eq!(error,
               Error::Runtime { error:  RuntimeError::ArityMismatch { name:     "f".to_string(),
                                                                     expected: 2,
                                                                     found:    1,
                                                                     line:     1, },
                                output: String::new(), });
}

#[test]
fn calling_a_number_is_fatal() {
    assert_failure("f := 1; f(1)", ErrorKind::ArityOrKind);
}

#[test]
fn undefined_procedure_stops_the_run() {
    let error = assert_failure("print 1; g(1); print 2", ErrorKind::UnboundIdentifier);
    assert_eq!(error.partial_output(), Some("1.0\n"));
}

#[test]
fn unbound_variable_is_fatal() {
    let error = assert_failure("print y", ErrorKind::UnboundIdentifier);
    assert_eq!(error.to_string(), "Error on line 1: Unbound identifier 'y'.");
}

#[test]
fn runtime_errors_report_their_line() {
    let error = assert_failure("x := 1;\nprint x;\nprint f(x)", ErrorKind::UnboundIdentifier);
    let Error::Runtime { error, .. } = error else {
        panic!("expected a runtime error");
    };
    assert_eq!(error.line(), 3);
}

#[test]
fn arity_is_checked_before_arguments_run() {
    let error = assert_failure("proc f(a) { a }; f(print_me(), 2)", ErrorKind::ArityOrKind);
    assert_eq!(error.partial_output(), Some(""));
}

#[test]
fn procedure_bodies_see_only_their_parameters() {
    assert_failure("g := 1; proc f(a) { a + g }; f(1)", ErrorKind::UnboundIdentifier);
    assert_failure("proc f(n) { if n > 0 { f(n - 1) } else { 0 } }; f(3)",
                   ErrorKind::UnboundIdentifier);
}

#[test]
fn procedure_cannot_call_other_procedures() {
    assert_failure("proc g() { 1 }; proc f() { g() }; f()", ErrorKind::UnboundIdentifier);
}

// The caller keeps the environment it had before evaluating the arguments:
// assignments inside arguments and inside the body are discarded, output is
// kept.
#[test]
fn call_discards_environment_changes() {
    assert_output("x := 1; proc f(a) { x := 99; a }; print f(x := 5); print x",
                  "5.0\n1.0\n");
}

#[test]
fn call_keeps_output_from_arguments_and_body() {
    assert_output("proc p(v) { print v; v }; proc add(a, b) { print a + b }; add(p(1), p(2))",
                  "1.0\n2.0\n3.0\n");
}

#[test]
fn arguments_see_earlier_arguments_assignments() {
    assert_output("proc f(a, b) { print b }; x := 1; f(x := 10, x + 1); print x",
                  "11.0\n1.0\n");
}

#[test]
fn procedure_definition_is_visible_after_its_statement_only() {
    assert_failure("f(); proc f() { 1 }", ErrorKind::UnboundIdentifier);
}

#[test]
fn redefining_a_procedure_replaces_it() {
    assert_output("proc f() { 1 }; proc f() { 2 }; print f()", "2.0\n");
}

#[test]
fn parse_errors_are_values() {
    for src in ["print", "x :=", "1 +", "proc (a) { a }", "while 1 { }", "x := 1;", "1abc",
                "1 < 2 < 3", "(1"]
    {
        assert_failure(src, ErrorKind::Parse);
    }
}

#[test]
fn parse_error_reports_position() {
    let Err(Error::Parse(error)) = run("x := 1;\nprint )") else {
        panic!("expected a parse error");
    };
    assert_eq!(error.position.line, 2);
    assert_eq!(error.found, "')'");
    assert_eq!(error.expected, "an expression");
}

#[test]
fn evaluation_is_deterministic() {
    let src = "proc f(a) { a * 2 }; x := 1; y := f(x) + f(3); print y; print y / 7";
    let first = run(src).unwrap();
    let second = run(src).unwrap();
    assert_eq!(first, second);
}

const SAMPLE_PROGRAMS: [&str; 6] = [
    "print 1+2*3^2^0.5",
    "x := 0; while (x < 3) { print x; x := x+1 }",
    "proc f(a,b){ print a+b }; f(2,3); f(1, f(0, 0))",
    "a := b := 4; if a = b { print a > 3 } else { print 0 }",
    "proc g() { 0.125 }; print g() - 1 - 2 / 3",
    "n := 10; t := 0; while n { t := t + n; n := n - 1 }; print t",
];

#[test]
fn rendering_parses_again() {
    for src in SAMPLE_PROGRAMS {
        let rendering = parse(src).unwrap().to_string();
        let reparsed = parse(&rendering).unwrap_or_else(|e| panic!("{rendering:?}: {e}"));
        assert_eq!(reparsed.to_string(), rendering);
    }
}

#[test]
fn rendering_evaluates_identically() {
    for src in SAMPLE_PROGRAMS {
        let original = run(src).unwrap();
        let rerun = run(&original.ast_rendering).unwrap();
        assert_eq!(rerun.output, original.output, "program {src:?}");
    }
}

#[test]
fn token_strings() {
    assert_eq!(while_lang::tokenize("proc f(a){a^2}"),
               ["proc", "f", "(", "a", ")", "{", "a", "^", "2", "}"]);
}

#[test]
fn long_programs_run_render_and_drop() {
    let statements = vec!["x := 1"; 200_000];
    let result = run(&statements.join("; ")).unwrap();

    assert_eq!(result.output, "");
    assert_eq!(result.ast_rendering, vec!["(x := 1.0)"; 200_000].join("; "));
}

#[test]
fn long_loop_bodies_run_render_and_drop() {
    let body = vec!["x := x + 1"; 100_000].join("; ");
    let result = run(&format!("i := 0; x := 0; while i < 2 {{ {body}; i := i + 1 }}; print x")).unwrap();

    assert_eq!(result.output, "200000.0\n");
    assert!(result.ast_rendering.starts_with("(i := 0.0); (x := 0.0); while (i<2.0) { (x := (x+1.0)); "));
}
