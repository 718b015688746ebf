use aplish::{
    error::{EvalError, ParseError},
    interpreter::lexer::{Scanner, Token, scan},
};

fn tokens(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(source);
    let mut out = Vec::new();
    loop {
        let (token, _) = scanner.advance().unwrap();
        if token == Token::EndOfInput {
            return out;
        }
        out.push(token);
    }
}

#[test]
fn overlapping_operators() {
    assert_eq!(tokens("* ** +.* + - ?"),
               vec![Token::Star,
                    Token::DoubleStar,
                    Token::PlusDotStar,
                    Token::Plus,
                    Token::Minus,
                    Token::Question]);
    assert_eq!(tokens("2**3"),
               vec![Token::Number("2".into()), Token::DoubleStar, Token::Number("3".into())]);
    assert_eq!(tokens("***"), vec![Token::DoubleStar, Token::Star]);
}

#[test]
fn numbers_and_identifiers_keep_their_text() {
    assert_eq!(tokens("x1 = 007 abc"),
               vec![Token::Identifier("x1".into()),
                    Token::Equals,
                    Token::Number("007".into()),
                    Token::Identifier("abc".into())]);
    assert_eq!(tokens("12ab"),
               vec![Token::Number("12".into()), Token::Identifier("ab".into())]);
}

#[test]
fn structural_tokens() {
    assert_eq!(tokens("( ) [ ] ;\n"),
               vec![Token::LParen,
                    Token::RParen,
                    Token::LBracket,
                    Token::RBracket,
                    Token::Semicolon,
                    Token::NewLine]);
}

#[test]
fn whitespace_runs_collapse_to_one_token() {
    assert_eq!(scan("  \t  1", 0).unwrap(), (Token::Whitespace, 5));
    assert_eq!(scan("  \t  1", 5).unwrap(), (Token::Number("1".into()), 6));
}

#[test]
fn end_of_input_is_repeatable() {
    assert_eq!(scan("1", 1).unwrap(), (Token::EndOfInput, 1));
    assert_eq!(scan("1", 7).unwrap(), (Token::EndOfInput, 1));
    assert_eq!(scan("", 0).unwrap(), (Token::EndOfInput, 0));

    let mut scanner = Scanner::new("1 ");
    scanner.advance().unwrap();
    for _ in 0..3 {
        assert_eq!(scanner.advance().unwrap(), (Token::EndOfInput, 2));
    }
}

#[test]
fn peek_does_not_consume() {
    let mut scanner = Scanner::new("  a  +");
    assert_eq!(scanner.peek().unwrap(), (Token::Identifier("a".into()), 2));
    assert_eq!(scanner.peek().unwrap(), (Token::Identifier("a".into()), 2));
    assert_eq!(scanner.advance().unwrap(), (Token::Identifier("a".into()), 2));
    assert_eq!(scanner.advance().unwrap(), (Token::Plus, 5));
}

#[test]
fn unrecognized_characters_are_reported_with_position() {
    assert_eq!(scan("1 % 2", 2).unwrap_err(),
               ParseError::UnrecognizedCharacter { character: '%',
                                                   position:  2, });

    let mut scanner = Scanner::new("1 é");
    scanner.advance().unwrap();
    let err = scanner.peek().unwrap_err();
    assert_eq!(err,
               ParseError::UnrecognizedCharacter { character: 'é',
                                                   position:  2, });
    assert_eq!(EvalError::from(err).kind(), aplish::ErrorKind::Lex);
}
