use std::error::Error;

/// A value reacting to events broadcast by an [`Observable`](crate::Observable).
///
/// An observer may implement this trait for a single event type, for several,
/// or generically for every `E` when it only cares that something happened.
pub trait Observer<E: ?Sized> {
    fn update(&mut self, event: &E);
}

/// Fallible counterpart of [`Observer`], used by
/// [`Observable::try_notify`](crate::Observable::try_notify).
pub trait TryObserver<E: ?Sized> {
    type Error: Into<Box<dyn Error + Send + Sync>>;

    fn try_update(&mut self, event: &E) -> Result<(), Self::Error>;
}
