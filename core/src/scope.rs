//! Guaranteed-release execution of a callback against a resource.
//!
//! [`scoped`] runs a callback with the resource as its receiver and then
//! releases the resource exactly once, whether the callback returns a value,
//! returns an error, or panics. Errors resolve with cleanup taking priority:
//!
//! | callback | release | result |
//! |----------|---------|--------|
//! | `Ok(v)`  | `Ok`    | `Ok(v)` |
//! | `Ok(_)`  | `Err(r)` | [`ScopeError::Release`] with `masked: None` |
//! | `Err(e)` | `Ok`    | [`ScopeError::Callback`] |
//! | `Err(e)` | `Err(r)` | [`ScopeError::Release`] with `masked: Some(e)` |
//!
//! Scopes nest; inner resources are released before outer ones.
//!
//! # Example
//!
//! ```ignore
//! use hostkit_core::scoped;
//!
//! let mut out = std::io::BufWriter::new(Vec::new());
//! scoped(&mut out, |out| hostkit_core::io::write(out, "%d bytes", &[5.into()]))?;
//! assert_eq!(out.get_ref().as_slice(), b"5 bytes");
//! ```

use crate::{Release, ScopeError, ScopeTypeError};

/// Releases the resource on drop unless the normal path already did.
struct ReleaseGuard<'r, R: Release + ?Sized> {
    resource: &'r mut R,
    armed: bool,
}

impl<'r, R: Release + ?Sized> ReleaseGuard<'r, R> {
    #[inline]
    fn arm(resource: &'r mut R) -> Self {
        Self {
            resource,
            armed: true,
        }
    }

    #[inline]
    fn resource_mut(&mut self) -> &mut R {
        &mut *self.resource
    }

    fn release(mut self) -> Result<(), R::Error> {
        self.armed = false;
        self.resource.release()
    }
}

impl<R: Release + ?Sized> Drop for ReleaseGuard<'_, R> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        self.armed = false;
        // Only reached while unwinding out of the callback.
        if self.resource.release().is_err() {
            tracing::error!("scoped resource release failed during panic unwind");
        }
    }
}

/// Runs `callback` against `resource`, then releases it.
pub fn scoped<R, T, E, F>(resource: &mut R, callback: F) -> Result<T, ScopeError<E, R::Error>>
where
    R: Release + ?Sized,
    F: FnOnce(&mut R) -> Result<T, E>,
{
    scoped_with(resource, (), |this, ()| callback(this))
}

/// Runs `callback` against `resource` with `extra` forwarded, then releases
/// the resource.
pub fn scoped_with<R, A, T, E, F>(
    resource: &mut R,
    extra: A,
    callback: F,
) -> Result<T, ScopeError<E, R::Error>>
where
    R: Release + ?Sized,
    F: FnOnce(&mut R, A) -> Result<T, E>,
{
    let mut guard = ReleaseGuard::arm(resource);
    let outcome = callback(guard.resource_mut(), extra);
    let released = guard.release();
    settle(outcome, released)
}

/// [`scoped_with`] for values arriving from a dynamic host, where the
/// resource or the callback may be missing.
///
/// A missing resource or callback fails with [`ScopeError::Type`] before
/// the callback runs; nothing is released in that case.
pub fn try_scoped<R, A, T, E, F>(
    resource: Option<&mut R>,
    callback: Option<F>,
    extra: A,
) -> Result<T, ScopeError<E, R::Error>>
where
    R: Release + ?Sized,
    F: FnOnce(&mut R, A) -> Result<T, E>,
{
    let Some(resource) = resource else {
        return Err(ScopeTypeError::NullResource.into());
    };
    let Some(callback) = callback else {
        return Err(ScopeTypeError::NotCallable.into());
    };
    scoped_with(resource, extra, callback)
}

fn settle<T, E, R>(outcome: Result<T, E>, released: Result<(), R>) -> Result<T, ScopeError<E, R>> {
    match (outcome, released) {
        (Ok(value), Ok(())) => Ok(value),
        (Err(error), Ok(())) => Err(ScopeError::Callback(error)),
        (Ok(_), Err(error)) => Err(ScopeError::Release {
            error,
            masked: None,
        }),
        (Err(masked), Err(error)) => {
            tracing::warn!("scoped resource release failed; callback error superseded");
            Err(ScopeError::Release {
                error,
                masked: Some(masked),
            })
        }
    }
}
