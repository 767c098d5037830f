use bna::{
    ast::Operation,
    error::{CompileError, Error},
    interpreter::{
        compiler::{compile, compile_line},
        lexer::{Lexer, read_single_token},
        token::{Keyword, Token, TokenKind},
    },
};

fn kinds(line: &str) -> Vec<TokenKind> {
    Lexer::new(line).read_tokens()
                    .unwrap_or_else(|e| panic!("Failed to lex {line:?}: {e}"))
                    .into_iter()
                    .map(|token| token.kind)
                    .collect()
}

fn lex_error(line: &str) -> CompileError {
    match Lexer::new(line).read_tokens() {
        Ok(tokens) => panic!("Lexing {line:?} succeeded with {} tokens", tokens.len()),
        Err(e) => e,
    }
}

fn parse_error(line: &str) -> CompileError {
    match compile_line(line) {
        Ok(statement) => panic!("Parsing {line:?} succeeded: {statement}"),
        Err(e) => e,
    }
}

#[test]
fn lexes_every_token_kind() {
    assert_eq!(kinds("SET x TO 1.5"),
               [TokenKind::Keyword, TokenKind::Variable, TokenKind::Keyword, TokenKind::Number]);
    assert_eq!(kinds("PRINT \"a b\" # note"),
               [TokenKind::Keyword, TokenKind::String, TokenKind::Comment]);
    assert_eq!(kinds("^start:"),
               [TokenKind::Symbol, TokenKind::Variable, TokenKind::Symbol]);
    assert_eq!(kinds("TEST x ! (1, (2, 3))"),
               [TokenKind::Keyword, TokenKind::Variable, TokenKind::Symbol, TokenKind::List]);
    assert!(kinds("   ").is_empty());
}

#[test]
fn numbers_must_parse() {
    assert_eq!(read_single_token("-7").unwrap().kind, TokenKind::Number);
    assert_eq!(read_single_token("1e3").unwrap().kind, TokenKind::Number);
    assert!(matches!(lex_error("SET x TO 1.2.3"), CompileError::InvalidToken { .. }));
    assert!(matches!(lex_error("SET x TO 12abc"), CompileError::InvalidToken { .. }));
}

#[test]
fn accessors_need_names_on_both_sides() {
    assert_eq!(read_single_token("a@i@0").unwrap().kind, TokenKind::Variable);
    assert!(matches!(lex_error("PRINT a@@b"), CompileError::InvalidToken { .. }));
    assert!(matches!(lex_error("PRINT a@"), CompileError::InvalidToken { .. }));
}

#[test]
fn names_accept_unicode_letters() {
    assert_eq!(read_single_token("zähler").unwrap().kind, TokenKind::Variable);
    assert_eq!(read_single_token("größe@i@0").unwrap().kind, TokenKind::Variable);
    assert_eq!(kinds("SET ñame TO 1"),
               [TokenKind::Keyword, TokenKind::Variable, TokenKind::Keyword, TokenKind::Number]);
}

#[test]
fn unterminated_literals() {
    assert!(matches!(lex_error("PRINT \"abc"),
                     CompileError::MissingTerminator { terminator: '"' }));
    assert!(matches!(lex_error("PRINT \"abc\\\""),
                     CompileError::MissingTerminator { terminator: '"' }));
    assert!(matches!(lex_error("PRINT (1, 2"),
                     CompileError::MissingTerminator { terminator: ')' }));
}

#[test]
fn lists_need_separators_and_values() {
    assert!(matches!(lex_error("PRINT (1 2)"), CompileError::IllegalToken { .. }));
    assert!(matches!(lex_error("PRINT (1, , 2)"), CompileError::IllegalToken { .. }));
    assert!(matches!(lex_error("PRINT (1, SET)"), CompileError::IllegalToken { .. }));
    assert!(matches!(lex_error("PRINT (1,)"), CompileError::IllegalToken { .. }));
    assert_eq!(kinds("PRINT ()"), [TokenKind::Keyword, TokenKind::List]);
}

#[test]
fn stray_characters_are_unexpected() {
    assert!(matches!(lex_error("PRINT 1 $"), CompileError::UnexpectedSymbol { symbol: '$' }));
}

#[test]
fn token_matching_ignores_case() {
    let lower = Token::new(TokenKind::Keyword, "goto");
    assert!(lower.matches(&Token::keyword(Keyword::Goto)));
    assert!(!lower.matches(&Token::new(TokenKind::Variable, "goto")));
    assert!(Token::null().matches(&Token::null()));
}

#[test]
fn reversed_statements_act_on_their_variable() {
    let add = compile_line("ADD 2 TO total").unwrap();
    assert_eq!(add.operation, Operation::Add);
    assert_eq!(add.primary().unwrap().text, "total");
    assert_eq!(add.secondary().unwrap().text, "2");

    let write = compile_line("WRITE \"line\" TO out").unwrap();
    assert_eq!(write.primary().unwrap().text, "out");

    let open = compile_line("OPEN \"data.txt\" AS WRITE out").unwrap();
    assert_eq!(open.operation, Operation::OpenWrite);
    assert_eq!(open.operand1.unwrap().text, "out");
    assert_eq!(open.operand2.unwrap().text, "\"data.txt\"");
}

#[test]
fn every_statement_form_parses() {
    let forms = [("SET x TO (1, 2)", Operation::Set),
                 ("SUBTRACT y FROM x", Operation::Subtract),
                 ("MULTIPLY x BY 2", Operation::Multiply),
                 ("DIVIDE x BY y", Operation::Divide),
                 ("RANDOM x MAX 10", Operation::Random),
                 ("OR x WITH 1", Operation::BitwiseOr),
                 ("AND x WITH 1", Operation::BitwiseAnd),
                 ("XOR x WITH 1", Operation::BitwiseXor),
                 ("NEGATE x", Operation::BitwiseNegate),
                 ("RAISE x TO 2", Operation::Power),
                 ("MOD 2 OF x", Operation::Modulus),
                 ("LOG 2 OF x", Operation::Logarithm),
                 ("ROUND x", Operation::Round),
                 ("LIST x SIZE 4", Operation::List),
                 ("APPEND (1) TO x", Operation::Append),
                 ("SIZE n OF \"abc\"", Operation::Size),
                 ("OPEN name AS READ f", Operation::OpenRead),
                 ("CLOSE f", Operation::Close),
                 ("READ x FROM f", Operation::Read),
                 ("INPUT x WITH \"? \"", Operation::Input),
                 ("PRINT x@0", Operation::Print),
                 ("TEST x > 1", Operation::TestGreaterThan),
                 ("TEST x < \"b\"", Operation::TestLessThan),
                 ("TEST x = (1)", Operation::TestEqual),
                 ("TEST x ! null", Operation::TestNotEqual),
                 ("SCOPE OPEN", Operation::ScopeOpen),
                 ("SCOPE CLOSE", Operation::ScopeClose),
                 ("WAIT 0.5", Operation::Wait),
                 ("GOTO start IF result", Operation::Goto),
                 ("TYPE t OF x", Operation::Type),
                 ("EXIT", Operation::Exit),
                 ("ERROR \"bad\"", Operation::Error),
                 ("^start:", Operation::Label),
                 ("# only a comment", Operation::Null),
                 ("", Operation::Null)];

    for (line, operation) in forms {
        match compile_line(line) {
            Ok(statement) => assert_eq!(statement.operation, operation, "{line}"),
            Err(e) => panic!("Failed to parse {line:?}: {e}"),
        }
    }
}

#[test]
fn grammar_violations() {
    assert!(matches!(parse_error("SET x"), CompileError::MissingToken { .. }));
    assert!(matches!(parse_error("SET 1 TO x"), CompileError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("MULTIPLY x BY \"s\""), CompileError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("TEST x > (1)"), CompileError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("EXIT now"), CompileError::StatementNotEnded { .. }));
    assert!(matches!(parse_error("TO x"), CompileError::InvalidStatementStart { .. }));
    assert!(matches!(parse_error("42"), CompileError::InvalidStatementStart { .. }));
    assert!(matches!(parse_error("^start"), CompileError::MissingToken { .. }));
}

#[test]
fn statement_indices_match_line_numbers() {
    let program = compile("PRINT 1\n\n^here:\nEXIT").unwrap();
    assert_eq!(program.len(), 5);
    assert!(!program.is_empty());
    assert_eq!(program.statement(0).unwrap().operation, Operation::Null);
    assert_eq!(program.statement(1).unwrap().operation, Operation::Print);
    assert_eq!(program.statement(3).unwrap().operation, Operation::Label);
    assert_eq!(program.label("here"), Some(3));
    assert_eq!(program.label("HERE"), Some(3));
}

#[test]
fn compile_errors_carry_the_raw_line() {
    match compile("PRINT 1\nPRINT \"open") {
        Err(Error::Compile { line, text, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(text, "PRINT \"open");
        },
        Err(other) => panic!("Unexpected error: {other}"),
        Ok(_) => panic!("Compiled an unterminated string"),
    }
}
