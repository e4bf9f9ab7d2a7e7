use crate::builtins::standard;
use crate::error::{Error, Syntax};
use crate::object::Object;
use crate::parsing::parse;
use crate::types::Key;

fn parse_std(input: &str) -> Result<Object, Error> {
    parse(input, &standard())
}

fn sym(x: &str) -> Object {
    Object::symbol(x)
}

fn int(x: i64) -> Object {
    Object::from(x)
}

#[test]
fn flat_expressions() {
    assert_eq!(parse_std("1"), Ok(Object::list(vec![int(1)])));
    assert_eq!(parse_std("add"), Ok(Object::list(vec![sym("add")])));

    assert_eq!(
        parse_std("(add 1 2)"),
        Ok(Object::list(vec![sym("add"), int(1), int(2)])),
    );

    assert_eq!(
        parse_std("add 1 2"),
        Ok(Object::list(vec![sym("add"), int(1), int(2)])),
    );
}

#[test]
fn nested_expressions() {
    assert_eq!(
        parse_std("(add 1 (multiply 2 3))"),
        Ok(Object::list(vec![
            sym("add"),
            int(1),
            Object::list(vec![sym("multiply"), int(2), int(3)]),
        ])),
    );

    assert_eq!(
        parse_std("(multiply (add 1 2) (add 3 4))"),
        Ok(Object::list(vec![
            sym("multiply"),
            Object::list(vec![sym("add"), int(1), int(2)]),
            Object::list(vec![sym("add"), int(3), int(4)]),
        ])),
    );
}

#[test]
fn transparent_groups() {
    // A group that closes into an empty list continues unwrapped
    assert_eq!(
        parse_std("((add 1) 2)"),
        Ok(Object::list(vec![sym("add"), int(1), int(2)])),
    );

    assert_eq!(
        parse_std("((multiply 2) 3)"),
        Ok(Object::list(vec![sym("multiply"), int(2), int(3)])),
    );

    assert_eq!(
        parse_std("(((add 1 2)))"),
        Ok(Object::list(vec![sym("add"), int(1), int(2)])),
    );
}

#[test]
fn unbalanced_parens() {
    assert_eq!(
        parse_std("(add 1"),
        Err(Error::new(Syntax::UnbalancedParens)),
    );

    assert_eq!(
        parse_std("add 1)"),
        Err(Error::new(Syntax::UnbalancedParens)),
    );

    assert_eq!(
        parse_std("((add 1 2)"),
        Err(Error::new(Syntax::UnbalancedParens)),
    );
}

#[test]
fn empty_groups() {
    assert_eq!(
        parse_std("(add () 2)"),
        Err(Error::new(Syntax::EmptyGroup).tag(6..7)),
    );

    assert_eq!(
        parse_std("(add 1 ())"),
        Err(Error::new(Syntax::EmptyGroup).tag(8..9)),
    );

    assert_eq!(parse_std("()"), Err(Error::new(Syntax::MissingHead)));
    assert_eq!(parse_std(""), Err(Error::new(Syntax::MissingHead)));
}

#[test]
fn head_validation() {
    assert_eq!(
        parse_std("(subtract 5 1)"),
        Err(Error::new(Syntax::UnknownHead(Key::new("subtract"))).tag(1..9)),
    );

    assert_eq!(
        parse_std("subtract 5 1"),
        Err(Error::new(Syntax::UnknownHead(Key::new("subtract"))).tag(0..8)),
    );

    // Only the leading element is validated against the registry
    assert_eq!(
        parse_std("(add 1 (subtract 5 1))"),
        Ok(Object::list(vec![
            sym("add"),
            int(1),
            Object::list(vec![sym("subtract"), int(5), int(1)]),
        ])),
    );

    // An integer head passes validation
    assert_eq!(parse_std("(1 2)"), Ok(Object::list(vec![int(1), int(2)])));
}

#[test]
fn custom_registries() {
    let mut registry = standard();
    registry.insert(Key::new("subtract"), Object::from(0));

    assert_eq!(
        parse("(subtract 5 1)", &registry),
        Ok(Object::list(vec![sym("subtract"), int(5), int(1)])),
    );

    assert_eq!(
        parse("(add 1)", &Default::default()),
        Err(Error::new(Syntax::UnknownHead(Key::new("add"))).tag(1..4)),
    );
}
