use std::io::{self, Write};
use std::net::{Shutdown, TcpStream};
use std::process::Child;

/// A resource with a single cleanup action.
///
/// [`scoped`](crate::scoped) calls [`release`](Release::release) exactly once
/// per scope. Implementations should tolerate being released more than once
/// across separate scopes, but a single scope never does so.
///
/// # Example
///
/// ```ignore
/// use hostkit_core::Release;
///
/// struct Lease { returned: bool }
///
/// impl Release for Lease {
///     type Error = std::convert::Infallible;
///
///     fn release(&mut self) -> Result<(), Self::Error> {
///         self.returned = true;
///         Ok(())
///     }
/// }
/// ```
pub trait Release {
    /// The error a failed release reports.
    type Error;

    /// Run the cleanup action.
    fn release(&mut self) -> Result<(), Self::Error>;
}

impl<T: Release + ?Sized> Release for &mut T {
    type Error = T::Error;

    #[inline]
    fn release(&mut self) -> Result<(), Self::Error> {
        (**self).release()
    }
}

impl<T: Release + ?Sized> Release for Box<T> {
    type Error = T::Error;

    #[inline]
    fn release(&mut self) -> Result<(), Self::Error> {
        (**self).release()
    }
}

/// Releases and drops the held value, leaving `None` behind.
///
/// Releasing an empty slot is a no-op, so an `Option` models a handle that
/// is "closed" once released.
impl<T: Release> Release for Option<T> {
    type Error = T::Error;

    fn release(&mut self) -> Result<(), Self::Error> {
        match self.take() {
            Some(mut inner) => inner.release(),
            None => Ok(()),
        }
    }
}

impl<W: Write> Release for io::BufWriter<W> {
    type Error = io::Error;

    fn release(&mut self) -> Result<(), Self::Error> {
        self.flush()
    }
}

impl Release for TcpStream {
    type Error = io::Error;

    fn release(&mut self) -> Result<(), Self::Error> {
        self.shutdown(Shutdown::Both)
    }
}

/// Waits for the child to exit.
impl Release for Child {
    type Error = io::Error;

    fn release(&mut self) -> Result<(), Self::Error> {
        self.wait().map(|_| ())
    }
}
