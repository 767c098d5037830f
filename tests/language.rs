use std::{fs, path::PathBuf};

use bna::{
    error::{
        CompileError, EXIT_COMPILE_ERROR, EXIT_NOT_IMPLEMENTED, EXIT_RUNTIME_ERROR,
        EXIT_USER_ERROR, Error, RuntimeError,
    },
    run_with_io,
};
use walkdir::WalkDir;

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "bna"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out"))
            .unwrap_or_else(|e| panic!("Missing expected output for {path:?}: {e}"));
        let input = fs::read_to_string(path.with_extension("in")).unwrap_or_default();

        count += 1;
        match run(&source, &input) {
            Ok(output) => assert_eq!(output, expected, "Output of {path:?} differs"),
            Err(e) => panic!("Program {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn run(src: &str, input: &str) -> Result<String, Error> {
    let mut out = Vec::new();
    run_with_io(src, input.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).expect("output is UTF-8"))
}

fn assert_output(src: &str, expected: &str) {
    assert_input_output(src, "", expected);
}

fn assert_input_output(src: &str, input: &str, expected: &str) {
    match run(src, input) {
        Ok(output) => assert_eq!(output, expected),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match run(src, "") {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

fn runtime_error(src: &str) -> (usize, RuntimeError) {
    match assert_failure(src) {
        Error::Runtime { line, error, .. } => (line, error),
        other => panic!("Expected a runtime error, got: {other}"),
    }
}

fn compile_error(src: &str) -> (usize, CompileError) {
    match assert_failure(src) {
        Error::Compile { line, error, .. } => (line, error),
        other => panic!("Expected a compile error, got: {other}"),
    }
}

fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("bna-{}-{name}", std::process::id()));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_output("SET x TO 1\nADD 1 TO x\nPRINT x", "2\n");
    assert_output("SET x TO 10\nSUBTRACT 4 FROM x\nPRINT x", "6\n");
    assert_output("SET x TO 7\nMULTIPLY x BY 9\nPRINT x", "63\n");
    assert_output("SET x TO 7\nDIVIDE x BY 2\nPRINT x", "3\n");
    assert_output("SET x TO 7.0\nDIVIDE x BY 2\nPRINT x", "3.5\n");
    assert_output("SET x TO 1\nADD 0.5 TO x\nPRINT x", "1.5\n");
}

#[test]
fn integer_only_operations() {
    assert_output("SET x TO 7\nMOD 3 OF x\nPRINT x", "1\n");
    assert_output("SET x TO 12\nAND x WITH 10\nPRINT x", "8\n");
    assert_output("SET x TO 12\nOR x WITH 3\nPRINT x", "15\n");
    assert_output("SET x TO 12\nXOR x WITH 10\nPRINT x", "6\n");
    assert_output("SET x TO 0\nNEGATE x\nPRINT x", "-1\n");

    let (_, error) = runtime_error("SET x TO 1.5\nMOD 2 OF x");
    assert!(matches!(error, RuntimeError::UndefinedOperation { .. }));
}

#[test]
fn powers_and_rounding() {
    assert_output("SET x TO 2\nRAISE x TO 10\nPRINT x", "1024\n");
    assert_output("SET x TO 2\nRAISE x TO -1\nPRINT x", "0.5\n");
    assert_output("SET x TO 2.5\nROUND x\nPRINT x", "2\n");
    assert_output("SET x TO 3.5\nROUND x\nPRINT x", "4\n");
    assert_output("SET x TO 1024\nLOG 2 OF x\nTYPE t OF x\nPRINT t", "FLOAT\n");
}

#[test]
fn keywords_and_variables_ignore_case() {
    assert_output("set X to 3\nprint x", "3\n");
    assert_output("SeT total To 1\nAdd 2 tO TOTAL\nPrInT Total", "3\n");
}

#[test]
fn comments_and_blank_lines() {
    assert_output("# leading comment\n\nPRINT 1 # trailing comment\n\n", "1\n");
}

#[test]
fn strings_and_escapes() {
    assert_output("SET s TO \"ab\"\nAPPEND 1.5 TO s\nPRINT s", "ab1.5\n");
    assert_output("PRINT \"a\\tb\"", "a\tb\n");
    assert_output("PRINT \"say \\\"hi\\\"\"", "say \"hi\"\n");
    assert_output("SET s TO \"hello\"\nSIZE n OF s\nPRINT n\nPRINT s@1", "5\ne\n");
}

#[test]
fn lists_and_indexing() {
    assert_output("LIST l SIZE 3\nSET l@1 TO \"b\"\nAPPEND 4 TO l\nSIZE n OF l\nPRINT l\nPRINT n",
                  "( null, b, null, 4 )\n4\n");
    assert_output("SET m TO ((1, 2), (3, 4))\nSET i TO 1\nPRINT m@i@0", "3\n");
    assert_output("SET m TO ((1, 2), (3, 4))\nSET m@0@1 TO 9\nPRINT m", "( ( 1, 9 ), ( 3, 4 ) )\n");
    assert_output("SET l TO ()\nPRINT l", "(  )\n");
    assert_output("SET l TO (1, ())\nPRINT l", "( 1, (  ) )\n");
}

#[test]
fn lists_are_copied_on_assignment() {
    assert_output("SET a TO (1, 2)\nSET b TO a\nSET b@0 TO 5\nPRINT a\nPRINT b",
                  "( 1, 2 )\n( 5, 2 )\n");
}

#[test]
fn tests_store_their_outcome_in_result() {
    assert_output("SET x TO 3\nTEST x > 2\nPRINT result", "1\n");
    assert_output("SET x TO 3\nTEST x < 2\nPRINT result", "0\n");
    assert_output("SET x TO (1, 2)\nTEST x = (1, 2.0)\nPRINT result", "1\n");
    assert_output("SET x TO \"a\"\nTEST x ! \"b\"\nPRINT result", "1\n");
    assert_output("SET x TO 1\nTEST x = \"1\"\nPRINT result", "0\n");
}

#[test]
fn ordering_mismatched_types_fails() {
    let (line, error) = runtime_error("SET x TO 1\nTEST x > \"a\"");
    assert_eq!(line, 2);
    assert!(matches!(error,
                     RuntimeError::CouldNotCompare { left: "INTEGER",
                                                     right: "STRING", }));
}

#[test]
fn type_names() {
    assert_output("TYPE t OF 1\nPRINT t", "INTEGER\n");
    assert_output("TYPE t OF 1.5\nPRINT t", "FLOAT\n");
    assert_output("TYPE t OF \"s\"\nPRINT t", "STRING\n");
    assert_output("TYPE t OF (1)\nPRINT t", "LIST\n");
    assert_output("TYPE t OF nothing\nPRINT t", "NULL\n");
}

#[test]
fn goto_loops_until_condition_is_zero() {
    let src = "SET i TO 0\n^loop:\nADD 1 TO i\nTEST i < 3\nGOTO loop IF result\nPRINT i";
    assert_output(src, "3\n");

    assert_output("^skip:\nGOTO skip IF 0\nPRINT \"after\"", "after\n");
}

#[test]
fn goto_with_a_bad_target_fails() {
    let (line, error) = runtime_error("SET target TO -1\nGOTO target IF 1");
    assert_eq!(line, 2);
    assert!(matches!(error, RuntimeError::ValueOutOfRange { .. }));

    let (_, error) = runtime_error("SET target TO \"start\"\nGOTO target IF 1");
    assert!(matches!(error, RuntimeError::IncorrectOperandType { .. }));
}

#[test]
fn goto_past_the_end_stops_the_program() {
    assert_output("SET end TO 100\nGOTO end IF 1\nPRINT 1", "");
}

#[test]
fn scopes_carry_argument_and_return() {
    let src = "SET argument TO 5\nSCOPE OPEN\nMULTIPLY argument BY 2\nSET return TO \
               argument\nSCOPE CLOSE\nPRINT return";
    assert_output(src, "10\n");
}

#[test]
fn outer_variables_are_invisible_in_a_scope() {
    assert_output("SET x TO 1\nSCOPE OPEN\nPRINT x\nSCOPE CLOSE\nPRINT x", "null\n1\n");
}

#[test]
fn closing_the_root_scope_fails() {
    let (line, error) = runtime_error("PRINT 1\nSCOPE CLOSE");
    assert_eq!(line, 2);
    assert!(matches!(error, RuntimeError::CloseFinalScope));
}

#[test]
fn exit_stops_execution() {
    assert_output("PRINT 1\nEXIT\nPRINT 2", "1\n");
}

#[test]
fn error_statement_reports_its_message() {
    let error = assert_failure("SET m TO \"boom\"\nERROR m");
    assert_eq!(error.exit_code(), EXIT_USER_ERROR);
    match error {
        Error::Runtime { line,
                         error: RuntimeError::UserError { message },
                         .. } => {
            assert_eq!(line, 2);
            assert_eq!(message, "boom");
        },
        other => panic!("Unexpected error: {other}"),
    }
}

#[test]
fn input_parses_numbers_and_lists() {
    assert_input_output("INPUT x WITH \"n? \"\nADD 1 TO x\nPRINT x", "42\n", "n? 43\n");
    assert_input_output("INPUT x WITH \"? \"\nTYPE t OF x\nPRINT t", "2.5\n", "? FLOAT\n");
    assert_input_output("INPUT x WITH \"? \"\nPRINT x@1", "(1, 2)\n", "? 2\n");
    assert_input_output("INPUT x WITH \"? \"\nTYPE t OF x\nPRINT x\nPRINT t",
                        "hello world\n",
                        "? hello world\nSTRING\n");
}

#[test]
fn random_stays_below_its_bound() {
    assert_output("RANDOM r MAX 10\nTEST r < 10\nPRINT result", "1\n");
    assert_output("RANDOM r MAX 0\nPRINT r", "0\n");
    assert_output("RANDOM r MAX 1.5\nTYPE t OF r\nPRINT t", "FLOAT\n");

    let (_, error) = runtime_error("RANDOM r MAX -5");
    assert!(matches!(error, RuntimeError::ValueOutOfRange { .. }));
}

#[test]
fn wait_accepts_only_non_negative_durations() {
    assert_output("WAIT 0\nPRINT 1", "1\n");

    let (_, error) = runtime_error("WAIT -1");
    assert!(matches!(error, RuntimeError::ValueOutOfRange { .. }));
}

#[test]
fn runtime_errors() {
    let (_, error) = runtime_error("SET x TO 1\nDIVIDE x BY 0");
    assert!(matches!(error, RuntimeError::DivisionByZero));

    let (_, error) = runtime_error("SET l TO (1)\nPRINT l@5");
    assert!(matches!(error, RuntimeError::ValueOutOfRange { .. }));

    let (_, error) = runtime_error("SET x TO 1\nPRINT x@0");
    assert!(matches!(error, RuntimeError::NonIndexable { .. }));

    let (_, error) = runtime_error("LIST l SIZE -1");
    assert!(matches!(error, RuntimeError::ValueOutOfRange { .. }));

    let (_, error) = runtime_error("LIST l SIZE 9223372036854775807");
    assert!(matches!(error,
                     RuntimeError::ValueOutOfRange { range: "a list size that fits in memory", .. }));

    let (_, error) = runtime_error("SET x TO \"a\"\nADD 1 TO x");
    assert!(matches!(error, RuntimeError::UndefinedOperation { operation: "+", .. }));

    assert_eq!(assert_failure("ADD 1 TO y").exit_code(), EXIT_RUNTIME_ERROR);
}

#[test]
fn assigning_into_a_string_is_not_implemented() {
    let error = assert_failure("SET s TO \"abc\"\nSET s@0 TO \"x\"");
    assert_eq!(error.exit_code(), EXIT_NOT_IMPLEMENTED);
}

#[test]
fn compile_errors_report_their_line() {
    let (line, error) = compile_error("PRINT 1\nSET x TO");
    assert_eq!(line, 2);
    assert!(matches!(error, CompileError::MissingToken { .. }));

    let (_, error) = compile_error("PRINT \"abc");
    assert!(matches!(error, CompileError::MissingTerminator { terminator: '"' }));

    let (_, error) = compile_error("foo x");
    assert!(matches!(error, CompileError::InvalidStatementStart { .. }));

    let (_, error) = compile_error("ADD 1 TO 2");
    assert!(matches!(error, CompileError::UnexpectedToken { .. }));

    assert_eq!(assert_failure("PRINT 1 2").exit_code(), EXIT_COMPILE_ERROR);
}

#[test]
fn compile_errors_stop_before_anything_runs() {
    let mut out = Vec::new();
    assert!(run_with_io("PRINT 1\nPRINT (1 2)", &b""[..], &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn duplicate_labels_are_rejected() {
    let (line, error) = compile_error("^a:\nPRINT 1\n^A:");
    assert_eq!(line, 3);
    assert!(matches!(error, CompileError::DuplicateLabel { first: 1, .. }));
}

#[test]
fn files_round_trip() {
    let path = temp_path("round-trip.txt");
    let path = path.display();
    let src = format!("OPEN \"{path}\" AS WRITE f\nWRITE 12 TO f\nWRITE \"hello\" TO f\nWRITE 2.5 \
                       TO f\nCLOSE f\nOPEN \"{path}\" AS READ f\nREAD a FROM f\nREAD b FROM \
                       f\nREAD c FROM f\nREAD d FROM f\nTYPE ta OF a\nTYPE tb OF b\nTYPE tc OF \
                       c\nPRINT ta\nPRINT tb\nPRINT tc\nPRINT d\nPRINT f");
    assert_output(&src, "INTEGER\nSTRING\nFLOAT\nnull\nnull\n");
}

#[test]
fn files_left_open_are_flushed_at_exit() {
    let path = temp_path("left-open.txt");
    let src = format!("OPEN \"{}\" AS WRITE f\nWRITE (1, 2) TO f", path.display());
    assert_output(&src, "");
    assert_eq!(fs::read_to_string(&path).unwrap(), "( 1, 2 )\n");
}

#[test]
fn files_nested_in_lists_are_flushed_when_the_program_fails() {
    let path = temp_path("nested.txt");
    let src = format!("OPEN \"{}\" AS WRITE f\nWRITE 7 TO f\nLIST l SIZE 1\nSET l@0 TO f\n\
                       SET f TO 0\nSCOPE OPEN\nERROR \"x\"",
                      path.display());
    assert_eq!(assert_failure(&src).exit_code(), EXIT_USER_ERROR);
    assert_eq!(fs::read_to_string(&path).unwrap(), "7\n");
}

#[test]
fn names_may_use_unicode_letters() {
    assert_output("SET zähler TO 2\nADD 1 TO ZÄHLER\nPRINT Zähler", "3\n");
}

#[test]
fn opening_a_missing_file_fails() {
    let path = temp_path("does-not-exist.txt");
    let (line, error) = runtime_error(&format!("OPEN \"{}\" AS READ f", path.display()));
    assert_eq!(line, 1);
    assert!(matches!(error, RuntimeError::File { .. }));
}

#[test]
fn file_operations_check_their_operands() {
    let (_, error) = runtime_error("SET f TO 1\nCLOSE f");
    assert!(matches!(error, RuntimeError::IncorrectOperandType { .. }));

    let (_, error) = runtime_error("SET f TO 1\nWRITE 2 TO f");
    assert!(matches!(error, RuntimeError::IncorrectOperandType { .. }));

    let (_, error) = runtime_error("SET name TO 5\nOPEN name AS READ f");
    assert!(matches!(error, RuntimeError::IncorrectOperandType { .. }));
}
