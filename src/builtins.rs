use std::collections::HashMap;

use crate::error::{Error, TypeMismatch};
use crate::object::{IntVariant, Object};
use crate::types::{Handler, Key, List, Registry};

macro_rules! builtin {
    ($m: ident, $e: ident) => {
        $m.insert(stringify!($e), Handler::new($e, Key::new(stringify!($e))))
    };
}

lazy_static! {
    pub(crate) static ref BUILTINS: HashMap<&'static str, Handler> = {
        let mut m = HashMap::new();
        builtin!(m, add);
        builtin!(m, multiply);
        m
    };
}

/// Construct a registry with all the standard handlers bound to their names.
///
/// The result is owned by the caller, who is free to add to it or shadow
/// entries before handing it to the parser and evaluator.
pub fn standard() -> Registry {
    BUILTINS
        .values()
        .map(|handler| (handler.name(), Object::Handler(*handler)))
        .collect()
}

fn integers(args: &List) -> Result<Vec<&IntVariant>, Error> {
    args.iter()
        .enumerate()
        .map(|(index, arg)| {
            arg.get_int().ok_or_else(|| {
                Error::new(TypeMismatch::ExpectedArg {
                    index,
                    received: arg.type_of(),
                })
            })
        })
        .collect()
}

/// Sum of the arguments. The empty sum is zero.
pub fn add(args: &List) -> Result<Object, Error> {
    let mut sum = IntVariant::from(0);
    for x in integers(args)? {
        sum = sum.add(x);
    }
    Ok(Object::Integer(sum))
}

/// Product of the arguments. The empty product is one.
pub fn multiply(args: &List) -> Result<Object, Error> {
    let mut product = IntVariant::from(1);
    for x in integers(args)? {
        product = product.mul(x);
    }
    Ok(Object::Integer(product))
}
