use crate::lexing::{Lexer, Token};
use crate::traits::Taggable;

macro_rules! tok {
    ($x:expr, $tok:expr) => {{
        let res = $x;
        assert_eq!(res.as_ref().map(|r| &r.1), Some(&$tok));
        res.unwrap().0
    }};
}

macro_rules! stop {
    ($x:ident) => {
        assert!($x.next_token().is_none())
    };
}

fn name(s: &'static str) -> Token<'static> {
    Token::Name(s)
}

fn int(s: &'static str) -> Token<'static> {
    Token::Integer(s)
}

fn open() -> Token<'static> {
    Token::OpenParen
}

fn close() -> Token<'static> {
    Token::CloseParen
}

#[test]
fn whitespace() {
    let mut lex = Lexer::new("add");
    lex = tok!(lex.next_token(), name("add").tag(0..3));
    stop!(lex);

    let mut lex = Lexer::new("  add  ");
    lex = tok!(lex.next_token(), name("add").tag(2..5));
    stop!(lex);

    let mut lex = Lexer::new("\n\tadd");
    lex = tok!(lex.next_token(), name("add").tag(2..5));
    stop!(lex);

    let lex = Lexer::new("   ");
    stop!(lex);

    let lex = Lexer::new("");
    stop!(lex);
}

#[test]
fn integers() {
    let mut lex = Lexer::new("1");
    lex = tok!(lex.next_token(), int("1").tag(0..1));
    stop!(lex);

    let mut lex = Lexer::new("123");
    lex = tok!(lex.next_token(), int("123").tag(0..3));
    stop!(lex);

    let mut lex = Lexer::new("-12");
    lex = tok!(lex.next_token(), int("-12").tag(0..3));
    stop!(lex);

    let mut lex = Lexer::new("+7");
    lex = tok!(lex.next_token(), int("+7").tag(0..2));
    stop!(lex);

    let mut lex = Lexer::new("9223372036854775808");
    lex = tok!(lex.next_token(), int("9223372036854775808").tag(0..19));
    stop!(lex);
}

#[test]
fn names() {
    let mut lex = Lexer::new("multiply");
    lex = tok!(lex.next_token(), name("multiply").tag(0..8));
    stop!(lex);

    let mut lex = Lexer::new("12a");
    lex = tok!(lex.next_token(), name("12a").tag(0..3));
    stop!(lex);

    let mut lex = Lexer::new("-");
    lex = tok!(lex.next_token(), name("-").tag(0..1));
    stop!(lex);

    let mut lex = Lexer::new("foo-bar");
    lex = tok!(lex.next_token(), name("foo-bar").tag(0..7));
    stop!(lex);

    let mut lex = Lexer::new("1.5");
    lex = tok!(lex.next_token(), name("1.5").tag(0..3));
    stop!(lex);
}

#[test]
fn parens() {
    let mut lex = Lexer::new("(add 1)");
    lex = tok!(lex.next_token(), open().tag(0));
    lex = tok!(lex.next_token(), name("add").tag(1..4));
    lex = tok!(lex.next_token(), int("1").tag(5..6));
    lex = tok!(lex.next_token(), close().tag(6));
    stop!(lex);

    let mut lex = Lexer::new("1(2");
    lex = tok!(lex.next_token(), int("1").tag(0..1));
    lex = tok!(lex.next_token(), open().tag(1));
    lex = tok!(lex.next_token(), int("2").tag(2..3));
    stop!(lex);

    let mut lex = Lexer::new("add(multiply)2");
    lex = tok!(lex.next_token(), name("add").tag(0..3));
    lex = tok!(lex.next_token(), open().tag(3));
    lex = tok!(lex.next_token(), name("multiply").tag(4..12));
    lex = tok!(lex.next_token(), close().tag(12));
    lex = tok!(lex.next_token(), int("2").tag(13..14));
    stop!(lex);
}
