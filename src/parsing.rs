use std::mem::{replace, take};
use std::str::FromStr;

use crate::error::{Error, Location, Syntax};
use crate::lexing::{Lexer, Token};
use crate::object::{IntVariant, Object};
use crate::types::{List, Registry};

/// Parse the source text of an expression and return its list form.
///
/// Grouping is resolved with an explicit stack of in-progress lists. A group
/// that closes into a non-empty enclosing list becomes a nested element of
/// it; a group that closes into an empty one is transparent, and its
/// elements continue in place. The leading element of the result must be an
/// integer or a name bound in the registry.
pub fn parse(input: &str, registry: &Registry) -> Result<Object, Error> {
    let mut stack: Vec<(List, Option<Location>)> = Vec::new();
    let mut current = List::new();
    let mut head: Option<Location> = None;
    let mut balance: i64 = 0;

    let mut lex = Lexer::new(input);
    while let Some((next, lexeme)) = lex.next_token() {
        lex = next;
        let loc = lexeme.location();

        match lexeme.unwrap() {
            Token::OpenParen => {
                balance += 1;
                stack.push((take(&mut current), head.take()));
            }

            Token::CloseParen => {
                balance -= 1;
                if let Some((prior, prior_head)) = stack.pop() {
                    if !prior.is_empty() {
                        if current.is_empty() {
                            return Err(Error::new(Syntax::EmptyGroup).tag(loc));
                        }
                        let group = replace(&mut current, prior);
                        current.push(Object::List(group));
                        head = prior_head;
                    }
                    // An empty enclosing list marks a transparent group: the
                    // current list continues unwrapped
                }
            }

            Token::Integer(word) => {
                if current.is_empty() {
                    head = Some(loc);
                }
                // The word fully matched the integer format, so this cannot fail
                current.push(Object::Integer(IntVariant::from_str(word).unwrap()));
            }

            Token::Name(word) => {
                if current.is_empty() {
                    head = Some(loc);
                }
                current.push(Object::symbol(word));
            }
        }
    }

    if balance != 0 {
        return Err(Error::new(Syntax::UnbalancedParens));
    }

    match current.first() {
        Some(Object::Integer(_)) => {}
        Some(Object::Symbol(key)) if registry.contains_key(key) => {}
        Some(Object::Symbol(key)) => {
            let mut err = Error::new(Syntax::UnknownHead(*key));
            if let Some(loc) = head {
                err = err.tag(loc);
            }
            return Err(err);
        }
        _ => {
            return Err(Error::new(Syntax::MissingHead));
        }
    }

    Ok(Object::List(current))
}
