use std::collections::HashMap;
use std::fmt::{Debug, Display};

use symbol_table::GlobalSymbol;

use crate::error::Error;
use crate::object::Object;

/// Type used for all interned strings: handler names and symbols.
pub type Key = GlobalSymbol;

/// Type used for lists.
pub type List = Vec<Object>;

/// Type used for mapping handler names to the objects bound to them.
///
/// A registry is caller data: nothing prevents binding a name to a
/// non-handler object, which the evaluator detects at call time.
pub type Registry = HashMap<Key, Object>;

/// Signature of native handler implementations.
pub type NativeFunction = fn(&List) -> Result<Object, Error>;

/// A named handler: a native function that folds a sequence of evaluated
/// arguments into a single result.
#[derive(Copy, Clone)]
pub struct Handler {
    func: NativeFunction,
    name: Key,
}

impl Handler {
    pub fn new(func: NativeFunction, name: Key) -> Handler {
        Handler { func, name }
    }

    pub fn call(&self, args: &List) -> Result<Object, Error> {
        (self.func)(args)
    }

    pub fn name(&self) -> Key {
        self.name
    }
}

impl Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler").field("name", &self.name).finish()
    }
}

/// Enumeration of all the different types an object can have.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Type {
    /// IntVariant
    Integer,

    /// Key
    Symbol,

    /// Vec<Object>
    List,

    /// Handler
    Handler,
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => f.write_str("integer"),
            Self::Symbol => f.write_str("symbol"),
            Self::List => f.write_str("list"),
            Self::Handler => f.write_str("handler"),
        }
    }
}
