use super::*;

fn tokens(s: &str) -> Vec<Token> {
    lex(s, 1).collect::<Result<Vec<Token>, Error>>().unwrap()
}

fn error(s: &str) -> Error {
    match lex(s, 4).find_map(|r| r.err()) {
        Some(e) => e,
        None => panic!("{:?} lexed without error", s),
    }
}

#[test]
fn test_keywords_and_identifiers() {
    let t = tokens("LET Let LETTER");
    assert_eq!(*t[0].kind(), Kind::Word(Word::Let));
    assert_eq!(*t[1].kind(), Kind::Ident);
    assert_eq!(*t[2].kind(), Kind::Ident);
    assert_eq!(t[2].text(), "LETTER");
}

#[test]
fn test_string_literal_keeps_quotes_in_text() {
    let t = tokens(r#"PRINT "Hello Boo!""#);
    assert_eq!(t[1].text(), r#""Hello Boo!""#);
    assert_eq!(
        *t[1].kind(),
        Kind::Literal(Literal::String("Hello Boo!".to_string()))
    );
    assert_eq!(t[1].column(), 7);
}

#[test]
fn test_numbers() {
    let t = tokens("12 -7 3.25 -0.5 8.");
    assert_eq!(*t[0].kind(), Kind::Literal(Literal::Integer(12)));
    assert_eq!(*t[1].kind(), Kind::Literal(Literal::Integer(-7)));
    assert_eq!(*t[2].kind(), Kind::Literal(Literal::Float(3.25)));
    assert_eq!(*t[3].kind(), Kind::Literal(Literal::Float(-0.5)));
    assert_eq!(*t[4].kind(), Kind::Literal(Literal::Float(8.0)));
    assert_eq!(t[4].text(), "8.");
}

#[test]
fn test_relational_operators() {
    let t = tokens("< <= <> > >= =");
    let ops: Vec<String> = t.iter().map(|t| t.text().to_string()).collect();
    assert_eq!(ops, vec!["<", "<=", "<>", ">", ">=", "="]);
    assert_eq!(*t[2].kind(), Kind::Operator(Operator::NotEqual));
    assert_eq!(*t[4].kind(), Kind::Operator(Operator::GreaterEqual));
}

#[test]
fn test_label_and_dot() {
    let t = tokens("CHUNK: RETURN");
    assert_eq!(*t[0].kind(), Kind::Ident);
    assert_eq!(*t[1].kind(), Kind::Colon);
    assert_eq!(*tokens(".")[0].kind(), Kind::Dot);
}

#[test]
fn test_unterminated_string() {
    let e = error(r#"PRINT "oops"#);
    assert_eq!(e.code(), ErrorCode::UnterminatedString as u16);
    assert_eq!(e.line_number(), Some(4));
    assert_eq!(e.column(), Some(12));
}

#[test]
fn test_bare_minus() {
    let e = error("LET A -");
    assert_eq!(e.code(), ErrorCode::MissingDigits as u16);
    assert_eq!(e.column(), Some(8));
    let e = error("LET A -B");
    assert_eq!(e.code(), ErrorCode::MissingDigits as u16);
}

#[test]
fn test_invalid_character() {
    let e = error("LET A 5 + 3");
    assert_eq!(e.code(), ErrorCode::InvalidCharacter as u16);
    assert_eq!(e.column(), Some(9));
    assert_eq!(
        e.to_string(),
        "Error during lexing: Line 4 Column 9: Invalid character"
    );
}

#[test]
fn test_integer_out_of_range() {
    let e = error("LET A 99999999999999999999");
    assert_eq!(e.code(), ErrorCode::LiteralOverflow as u16);
    assert_eq!(e.column(), Some(7));
}
