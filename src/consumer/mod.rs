//! Consumers: operations that accept input and produce no value.
//!
//! A consumer observes its input (it receives a reference), may update the
//! propagated context, and may fail. The family comes in four variants laid
//! out on two axes:
//!
//! | | fallible | infallible |
//! |---|---|---|
//! | **with context** | [`Consumer`] | [`MustConsumer`] |
//! | **pure** | [`PureConsumer`] | [`PureMustConsumer`] |
//!
//! and the same four again for two inputs ([`BiConsumer`] and friends).
//!
//! # Conversions
//!
//! Conversions only ever move down the lattice:
//!
//! ```text
//! Consumer ──must()──▶ MustConsumer
//!    │                     │
//!  pure()                pure()
//!    ▼                     ▼
//! PureConsumer ─must()─▶ PureMustConsumer
//! ```
//!
//! - `must()` turns a returned failure into a panic at that call.
//! - `pure()` runs the consumer on a fresh `C::default()` context and drops
//!   whatever context comes back.
//!
//! # Sequencing
//!
//! `a.then(b)` runs `a`, then `b` on the same input. For fallible variants a
//! failure from `a` is returned as-is and `b` never runs. For context
//! variants `b` starts from the context `a` returned.
//!
//! # Examples
//!
//! ```rust
//! use fnlattice::{Context, Consumer, Failure};
//!
//! fn bump(context: Context) -> Context {
//!     let count = context.value::<_, u32>(&"count").copied().unwrap_or(0);
//!     context.with_value("count", count + 1)
//! }
//!
//! let audit: Consumer<String> = Consumer::new(|context, _line: &String| (bump(context), Ok(())));
//! let reject_empty: Consumer<String> = Consumer::new(|context, line: &String| {
//!     if line.is_empty() {
//!         (context, Err(Failure::new("empty line")))
//!     } else {
//!         (bump(context), Ok(()))
//!     }
//! });
//!
//! let pipeline = audit.then(reject_empty);
//!
//! let (context, result) = pipeline.run(Context::new(), &String::from("hello"));
//! assert!(result.is_ok());
//! assert_eq!(context.value::<_, u32>(&"count"), Some(&2));
//!
//! let (context, result) = pipeline.run(Context::new(), &String::new());
//! assert_eq!(result.unwrap_err().message(), "empty line");
//! assert_eq!(context.value::<_, u32>(&"count"), Some(&1));
//! ```
//!
//! # Missing conversions
//!
//! Every consumer variant only offers the conversions that remove
//! something it still has:
//!
//! ```rust
//! use fnlattice::{Context, MustConsumer, PureConsumer, PureMustConsumer};
//!
//! let must: MustConsumer<String> = MustConsumer::new(|context: Context, _: &String| context);
//! let pure: PureConsumer<String> = PureConsumer::new(|_: &String| Ok(()));
//!
//! let _: PureMustConsumer<String> = must.pure();
//! let _: PureMustConsumer<String> = pure.must();
//! ```
//!
//! [`MustConsumer`] has no failure channel left to remove:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::{Context, MustConsumer};
//!
//! let must: MustConsumer<String> = MustConsumer::new(|context: Context, _: &String| context);
//! let _ = must.must();
//! ```
//!
//! [`PureConsumer`] has no context left to remove:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureConsumer;
//!
//! let pure: PureConsumer<String> = PureConsumer::new(|_: &String| Ok(()));
//! let _ = pure.pure();
//! ```
//!
//! [`PureMustConsumer`] has neither:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureMustConsumer;
//!
//! let plain: PureMustConsumer<String> = PureMustConsumer::new(|_: &String| {});
//! let _ = plain.must();
//! ```
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureMustConsumer;
//!
//! let plain: PureMustConsumer<String> = PureMustConsumer::new(|_: &String| {});
//! let _ = plain.pure();
//! ```

mod bi;

pub use bi::{BiConsumer, MustBiConsumer, PureBiConsumer, PureMustBiConsumer};

use std::fmt::Display;

use crate::context::Context;
use crate::failure::{Failure, abort};
use crate::variant::function_variant;

function_variant! {
    /// A consumer of one input that threads a context and may fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnlattice::{Context, Consumer, Failure};
    ///
    /// let remember: Consumer<i32> =
    ///     Consumer::new(|context: Context, value: &i32| (context.with_value("last", *value), Ok(())));
    ///
    /// let (context, result) = remember.run(Context::new(), &42);
    /// assert!(result.is_ok());
    /// assert_eq!(context.value::<_, i32>(&"last"), Some(&42));
    /// ```
    Consumer<T, C = Context, E = Failure>
    (context: C, input: &T) -> (C, Result<(), E>)
}

function_variant! {
    /// A consumer of one input that threads a context and never fails.
    MustConsumer<T, C = Context>
    (context: C, input: &T) -> C
}

function_variant! {
    /// A consumer of one input without context that may fail.
    PureConsumer<T, E = Failure>
    (input: &T) -> Result<(), E>
}

function_variant! {
    /// A consumer of one input without context that never fails.
    PureMustConsumer<T>
    (input: &T) -> ()
}

impl<T, C, E> Consumer<T, C, E>
where
    T: 'static,
    C: 'static,
    E: 'static,
{
    /// Converts into a [`MustConsumer`] that panics where this one would fail.
    ///
    /// The caller's context is passed through, and the updated context is
    /// returned unchanged on success.
    ///
    /// # Panics
    ///
    /// The returned consumer panics with `Consumer::must: <failure>` when the
    /// underlying consumer fails.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use fnlattice::{Context, Consumer, Failure};
    ///
    /// let refuse: Consumer<()> = Consumer::new(|context, _: &()| (context, Err(Failure::new("no"))));
    /// refuse.must().run(Context::new(), &());
    /// ```
    #[must_use]
    pub fn must(self) -> MustConsumer<T, C>
    where
        E: Display,
    {
        MustConsumer::new(move |context, input| {
            let (context, result) = self.run(context, input);
            if let Err(failure) = result {
                abort("Consumer", &failure);
            }
            context
        })
    }

    /// Converts into a [`PureConsumer`] that runs on a fresh context.
    ///
    /// The context returned by the underlying consumer is discarded.
    #[must_use]
    pub fn pure(self) -> PureConsumer<T, E>
    where
        C: Default,
    {
        PureConsumer::new(move |input| self.run(C::default(), input).1)
    }

    /// Runs this consumer, then `after` on the same input and the updated
    /// context. If this consumer fails, `after` is skipped.
    #[must_use]
    pub fn then(self, after: Self) -> Self {
        Self::new(move |context, input| match self.run(context, input) {
            (context, Ok(())) => after.run(context, input),
            failed => failed,
        })
    }
}

impl<T, C> MustConsumer<T, C>
where
    T: 'static,
    C: 'static,
{
    /// Converts into a [`PureMustConsumer`] that runs on a fresh context.
    #[must_use]
    pub fn pure(self) -> PureMustConsumer<T>
    where
        C: Default,
    {
        PureMustConsumer::new(move |input| {
            let _ = self.run(C::default(), input);
        })
    }

    /// Runs this consumer, then `after` on the same input and the updated
    /// context.
    #[must_use]
    pub fn then(self, after: Self) -> Self {
        Self::new(move |context, input| after.run(self.run(context, input), input))
    }
}

impl<T, E> PureConsumer<T, E>
where
    T: 'static,
    E: 'static,
{
    /// Converts into a [`PureMustConsumer`] that panics where this one would
    /// fail.
    ///
    /// # Panics
    ///
    /// The returned consumer panics with `PureConsumer::must: <failure>` when
    /// the underlying consumer fails.
    #[must_use]
    pub fn must(self) -> PureMustConsumer<T>
    where
        E: Display,
    {
        PureMustConsumer::new(move |input| {
            if let Err(failure) = self.run(input) {
                abort("PureConsumer", &failure);
            }
        })
    }

    /// Runs this consumer, then `after` on the same input. If this consumer
    /// fails, `after` is skipped.
    #[must_use]
    pub fn then(self, after: Self) -> Self {
        Self::new(move |input| self.run(input).and_then(|()| after.run(input)))
    }
}

impl<T> PureMustConsumer<T>
where
    T: 'static,
{
    /// Runs this consumer, then `after` on the same input.
    #[must_use]
    pub fn then(self, after: Self) -> Self {
        Self::new(move |input| {
            self.run(input);
            after.run(input);
        })
    }
}

static_assertions::assert_impl_all!(Consumer<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(PureMustConsumer<String>: Send, Sync, Clone);
