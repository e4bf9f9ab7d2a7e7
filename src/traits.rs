use crate::error::{Location, Tagged};

// Taggable
// ------------------------------------------------------------------------------------------------

/// This trait provides the `tag` method, for wrapping a value in a [`Tagged`]
/// wrapper, which containts information about where in the source code this
/// object originated. This is used to report error messages.
///
/// There's no need to implement this trait beyond the blanket implementation.
pub trait Taggable: Sized {
    /// Wrap this object in a tagged wrapper.
    fn tag<T>(self, loc: T) -> Tagged<Self>
    where
        Location: From<T>;
}

impl<T> Taggable for T
where
    T: Sized,
{
    fn tag<U>(self, loc: U) -> Tagged<Self>
    where
        Location: From<U>,
    {
        Tagged::new(Location::from(loc), self)
    }
}
