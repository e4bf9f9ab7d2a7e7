use regex::Regex;

use crate::error::{Location, Tagged};
use crate::traits::Taggable;

/// Enumerates all the lexemes of the expression language: the two
/// parentheses, integer literals and names. Any word that does not look like
/// an integer is a name, so lexing cannot fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Token<'a> {
    OpenParen,
    CloseParen,

    Integer(&'a str),
    Name(&'a str),
}

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"^\s*").unwrap();
    static ref WORD: Regex = Regex::new(r"^[^\s()]+").unwrap();
    static ref INTEGER: Regex = Regex::new(r"^[+-]?[[:digit:]]+$").unwrap();
}

#[derive(Clone, Copy)]
pub(crate) struct Lexer<'a> {
    code: &'a str,
    offset: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(code: &'a str) -> Lexer<'a> {
        Lexer { code, offset: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.code.chars().next()
    }

    fn skip(self, offset: usize) -> Self {
        Lexer {
            code: &self.code[offset..],
            offset: self.offset + offset,
        }
    }

    fn skip_tag<T>(
        self,
        offset: usize,
        mapper: impl FnOnce(&'a str) -> T,
    ) -> (Lexer<'a>, Tagged<T>) {
        let ret = self.code[..offset]
            .tag(Location::new(self.offset, offset))
            .map(mapper);

        (self.skip(offset), ret)
    }

    fn skip_whitespace(self) -> Self {
        // The WHITESPACE regex cannot fail to match, so unwrapping is safe
        let m = WHITESPACE.find(self.code).unwrap();
        self.skip(m.end())
    }

    fn next_word(self) -> (Lexer<'a>, Tagged<Token<'a>>) {
        // Any character that is neither whitespace nor a parenthesis starts
        // a word, so the WORD regex cannot fail to match here
        let m = WORD.find(self.code).unwrap();
        self.skip_tag(m.end(), |word| {
            if INTEGER.is_match(word) {
                Token::Integer(word)
            } else {
                Token::Name(word)
            }
        })
    }

    pub fn next_token(mut self) -> Option<(Lexer<'a>, Tagged<Token<'a>>)> {
        self = self.skip_whitespace();

        match self.peek() {
            Some('(') => Some(self.skip_tag(1, |_| Token::OpenParen)),
            Some(')') => Some(self.skip_tag(1, |_| Token::CloseParen)),
            Some(_) => Some(self.next_word()),
            None => None,
        }
    }
}
