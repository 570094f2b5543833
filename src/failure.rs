//! Failure signalling for the fallible variants.
//!
//! Fallible variants are generic over their failure type `E`, and this crate
//! never inspects, wraps or annotates it: whatever a closure returns in its
//! `Err` slot is what the caller of a composition receives. [`Failure`] is the
//! ready-made default for callers that only need "a message, and maybe a
//! cause".
//!
//! The only place a failure changes representation is a `must()` conversion,
//! where it becomes a panic. All such conversions funnel through one routine
//! so that the abort message has a single, predictable shape:
//!
//! ```text
//! <Variant>::must: <failure>
//! ```

use std::error::Error;
use std::fmt;

/// A generic failure carrying a descriptive message and an optional cause.
///
/// # Examples
///
/// ```rust
/// use fnlattice::Failure;
///
/// let failure = Failure::new("stock exhausted");
/// assert_eq!(failure.message(), "stock exhausted");
/// assert_eq!(failure.to_string(), "stock exhausted");
/// ```
///
/// Attaching a cause:
///
/// ```rust
/// use std::error::Error;
/// use fnlattice::Failure;
///
/// let cause = "abc".parse::<i32>().unwrap_err();
/// let failure = Failure::with_source("quantity is not a number", cause);
/// assert!(failure.source().is_some());
/// ```
#[derive(Debug)]
pub struct Failure {
    message: String,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl Failure {
    /// Creates a failure with the given message and no cause.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a failure with the given message, caused by `source`.
    #[must_use]
    pub fn with_source<S>(message: impl Into<String>, source: S) -> Self
    where
        S: Error + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the descriptive message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn Error + 'static))
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Converts a failure that reached a `must()` boundary into a panic.
#[cold]
#[inline(never)]
pub(crate) fn abort<E>(variant: &'static str, failure: &E) -> !
where
    E: fmt::Display + ?Sized,
{
    #[cfg(feature = "tracing")]
    tracing::error!(variant, failure = %failure, "failure reached a must boundary");

    panic!("{variant}::must: {failure}")
}

static_assertions::assert_impl_all!(Failure: Send, Sync, Error);
