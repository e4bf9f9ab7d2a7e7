use std::cmp::min;
use std::fmt::{Debug, Display, Write};
use std::ops::{Deref, Range};

use crate::types::{Key, Type};

/// Marks an interval of text in a source buffer by offset and length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    offset: usize,
    length: usize,
}

impl Location {
    /// Construct a new location from a zero-indexed offset and a length.
    pub fn new(offset: usize, length: usize) -> Location {
        Location { offset, length }
    }

    /// Return the zero-indexed offset into the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Return the length of the interval.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl From<Range<usize>> for Location {
    fn from(value: Range<usize>) -> Self {
        Location {
            offset: value.start,
            length: value.end - value.start,
        }
    }
}

impl From<usize> for Location {
    /// Convert an offset to a location with length one.
    fn from(value: usize) -> Self {
        Location {
            offset: value,
            length: 1,
        }
    }
}

impl<T> From<&Tagged<T>> for Location {
    fn from(value: &Tagged<T>) -> Self {
        value.location()
    }
}

/// A wrapper for marking any object with a location pointing to its origin
/// in the source text.
///
/// Lexemes and error reasons are tagged, so that errors can be accurately
/// reported.
#[derive(Clone, Copy, PartialEq)]
pub struct Tagged<T> {
    location: Location,
    contents: T,
}

impl<T> Tagged<T> {
    /// Construct a new Tagged wrapper.
    pub fn new(location: Location, contents: T) -> Tagged<T> {
        Tagged::<T> { location, contents }
    }

    /// Return the location.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Destroy the wrapper and return its contents.
    pub fn unwrap(self) -> T {
        self.contents
    }

    /// Map the wrapped object and return a new tagged wrapper.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Tagged<U> {
        Tagged::<U> {
            location: self.location,
            contents: f(self.contents),
        }
    }
}

impl<T: Debug> Debug for Tagged<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.contents.fmt(f)?;
        let loc = self.location;
        f.write_fmt(format_args!(
            ".tag({}..{})",
            loc.offset(),
            loc.offset() + loc.length()
        ))
    }
}

impl<T> Deref for Tagged<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.contents
    }
}

impl<T> AsRef<T> for Tagged<T> {
    fn as_ref(&self) -> &T {
        &self.contents
    }
}

/// Enumerates all the possible reasons for a syntax error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Syntax {
    /// The numbers of opening and closing parentheses disagree.
    UnbalancedParens,

    /// A parenthesized group closed without any elements.
    EmptyGroup,

    /// The expression has no leading element to dispatch on.
    MissingHead,

    /// The leading element is a name with no handler bound to it.
    UnknownHead(Key),
}

/// Enumerates possible reasons for internal errors (which shouldn't happen).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Internal {
    /// An empty expression list reached the evaluator. (001)
    /// This should be prevented by the parser.
    EmptyList,
}

impl Internal {
    fn error_code(&self) -> usize {
        match self {
            Self::EmptyList => 1,
        }
    }
}

/// Enumerates different type mismatch reasons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TypeMismatch {
    /// Expected a positional handler argument to have a certain type, but it
    /// didn't.
    ExpectedArg {
        /// The zero-based index of the argument.
        index: usize,

        /// Actual type received in the handler call.
        received: Type,
    },
}

/// Grand enumeration of all possible error reasons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Reason {
    /// Syntax error.
    Syntax(Syntax),

    /// A name was looked up in the registry but nothing was bound to it.
    NotRegistered(Key),

    /// A name resolved to an object that cannot be called.
    NotAHandler(Type),

    /// Type mismatch errors.
    TypeMismatch(TypeMismatch),

    /// Internal error - should never happen.
    Internal(Internal),
}

impl From<Syntax> for Reason {
    fn from(value: Syntax) -> Self {
        Self::Syntax(value)
    }
}

impl From<TypeMismatch> for Reason {
    fn from(value: TypeMismatch) -> Self {
        Self::TypeMismatch(value)
    }
}

impl From<Internal> for Reason {
    fn from(value: Internal) -> Self {
        Self::Internal(value)
    }
}

/// The general error type of this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// Location in the source text where the error happened, if known.
    location: Option<Location>,

    /// Reason for the error.
    reason: Reason,
}

impl Error {
    /// Construct a new error without a location.
    pub(crate) fn new<T>(reason: T) -> Self
    where
        Reason: From<T>,
    {
        Self {
            location: None,
            reason: Reason::from(reason),
        }
    }

    /// Attach a location. Takes ownership and returns the same object, for
    /// ease of use with `Result::map_err`. An already attached location is
    /// left alone, so the innermost one wins.
    pub(crate) fn tag<T>(mut self, loc: T) -> Self
    where
        Location: From<T>,
    {
        if self.location.is_none() {
            self.location = Some(Location::from(loc));
        }
        self
    }

    /// Return the location, if any.
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Render a human-friendly report against the source text the error
    /// originated from.
    pub fn rendered(&self, code: &str) -> String {
        format!("{}", ErrorRenderer(self, code))
    }
}

impl Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(Syntax::UnbalancedParens) => f.write_str("unbalanced parentheses"),
            Self::Syntax(Syntax::EmptyGroup) => f.write_str("empty group"),
            Self::Syntax(Syntax::MissingHead) => {
                f.write_str("expected an integer or a handler name")
            }
            Self::Syntax(Syntax::UnknownHead(key)) => {
                f.write_fmt(format_args!("unknown handler '{}'", key))
            }

            Self::NotRegistered(key) => {
                f.write_fmt(format_args!("handler '{}' is not registered", key))
            }

            Self::NotAHandler(t) => {
                f.write_fmt(format_args!("unsuitable type for handler call: {}", t))
            }

            Self::TypeMismatch(TypeMismatch::ExpectedArg { index, received }) => f.write_fmt(
                format_args!(
                    "unsuitable type for argument {} - expected integer, got {}",
                    index + 1,
                    received
                ),
            ),

            Self::Internal(reason) => f.write_fmt(format_args!(
                "internal error {:03} - this should not happen, please file a bug report",
                reason.error_code()
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.reason, f)
    }
}

/// Utility struct for facilitating error rendering.
///
/// Has access to both the error and the code, so that it can just implement
/// the Display trait.
struct ErrorRenderer<'a>(&'a Error, &'a str);

impl<'a> Display for ErrorRenderer<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ErrorRenderer(err, code) = self;

        f.write_fmt(format_args!("Error: {}", err.reason))?;

        if let Some(loc) = err.location {
            // Offset of the beginning of the line
            let bol = code[..loc.offset()].rfind('\n').map(|x| x + 1).unwrap_or(0);

            // Offset of the end of the line
            let eol = code[loc.offset()..]
                .find('\n')
                .map(|x| x + loc.offset())
                .unwrap_or(code.len());

            // Offset of the end of the span to be displayed: either the end
            // of the line (if longer than a line), or the end of the span
            let span_end = min(loc.offset() + loc.length(), eol) - loc.offset();

            f.write_char('\n')?;
            f.write_str(&code[bol..eol])?;
            f.write_char('\n')?;
            for _ in 0..loc.offset() - bol {
                f.write_char(' ')?;
            }
            for _ in 0..span_end {
                f.write_char('^')?;
            }
        }

        Ok(())
    }
}
