//! A value is represented by the [`Object`] type: the parser produces
//! objects, the evaluator consumes and produces objects, and registries map
//! handler names to objects.

mod integer;

use std::fmt::Display;

use crate::types::{Handler, Key, List, Type};

pub use integer::IntVariant;

/// Enumerates all possible values.
#[derive(Clone, Debug)]
pub enum Object {
    /// Integers
    Integer(IntVariant),

    /// Names: handler names and uninterpreted words
    Symbol(Key),

    /// Expression lists
    List(List),

    /// Callable handlers
    Handler(Handler),
}

impl Object {
    /// Construct an integer object.
    pub fn int<T>(x: T) -> Object
    where
        IntVariant: From<T>,
    {
        Object::Integer(IntVariant::from(x))
    }

    /// Construct a symbol object by interning a string.
    pub fn symbol(x: impl AsRef<str>) -> Object {
        Object::Symbol(Key::new(x))
    }

    /// Construct a list object.
    pub fn list(x: impl Into<List>) -> Object {
        Object::List(x.into())
    }

    /// Extract the integer variant if this object is an integer.
    pub fn get_int(&self) -> Option<&IntVariant> {
        match self {
            Self::Integer(x) => Some(x),
            _ => None,
        }
    }

    /// The type of this object.
    pub fn type_of(&self) -> Type {
        match self {
            Self::Integer(_) => Type::Integer,
            Self::Symbol(_) => Type::Symbol,
            Self::List(_) => Type::List,
            Self::Handler(_) => Type::Handler,
        }
    }
}

impl From<IntVariant> for Object {
    fn from(value: IntVariant) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Self::Integer(IntVariant::from(value))
    }
}

impl From<i32> for Object {
    fn from(value: i32) -> Self {
        Self::Integer(IntVariant::from(value))
    }
}

impl From<Handler> for Object {
    fn from(value: Handler) -> Self {
        Self::Handler(value)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(x), Self::Integer(y)) => x.user_eq(y),
            (Self::Symbol(x), Self::Symbol(y)) => x == y,
            (Self::List(x), Self::List(y)) => x == y,
            _ => false,
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(x) => x.fmt(f),
            Self::Symbol(x) => f.write_str(x.as_str()),
            Self::List(elements) => {
                f.write_str("(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    element.fmt(f)?;
                }
                f.write_str(")")
            }
            Self::Handler(x) => f.write_str(x.name().as_str()),
        }
    }
}
