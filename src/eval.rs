use crate::error::{Error, Internal, Reason};
use crate::object::Object;
use crate::types::{Key, Registry};

/// Evaluate a node against a registry of handlers.
///
/// A list consisting of a single integer evaluates to that integer. Any
/// other list is a handler call: the leading element is evaluated and its
/// text resolved in the registry, the remaining elements are evaluated left
/// to right, and the handler is applied to the results. Values that are not
/// lists evaluate to themselves.
pub fn eval(node: &Object, registry: &Registry) -> Result<Object, Error> {
    match node {
        Object::List(elements) => {
            if let [Object::Integer(x)] = &elements[..] {
                return Ok(Object::Integer(x.clone()));
            }

            let first = elements
                .first()
                .ok_or_else(|| Error::new(Internal::EmptyList))?;
            let head = eval(first, registry)?;

            let name = match &head {
                Object::Symbol(key) => *key,
                other => Key::new(other.to_string()),
            };

            match registry.get(&name) {
                None => Err(Error::new(Reason::NotRegistered(name))),

                Some(Object::Handler(handler)) => {
                    let mut args = Vec::with_capacity(elements.len() - 1);
                    for element in &elements[1..] {
                        args.push(eval(element, registry)?);
                    }
                    handler.call(&args)
                }

                Some(other) => Err(Error::new(Reason::NotAHandler(other.type_of()))),
            }
        }

        _ => Ok(node.clone()),
    }
}
