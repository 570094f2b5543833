//! Functions: operations that map input to a produced value.
//!
//! A function takes ownership of its input, may update the propagated
//! context, may fail, and otherwise produces a value of its result type.
//!
//! | | fallible | infallible |
//! |---|---|---|
//! | **with context** | [`Function`] | [`MustFunction`] |
//! | **pure** | [`PureFunction`] | [`PureMustFunction`] |
//!
//! [`Unary`] (and its siblings) is the specialization whose result type is
//! its input type; it is a type alias, so everything below applies to it.
//! [`BiFunction`] and friends take two inputs.
//!
//! # Conversions
//!
//! ```text
//! Function ──must()──▶ MustFunction
//!    │                     │
//!  pure()                pure()
//!    ▼                     ▼
//! PureFunction ─must()─▶ PureMustFunction
//! ```
//!
//! # Sequencing
//!
//! `f.then(g)` feeds the value produced by `f` into `g`. The continuation may
//! change the result type, so `Function<T, R>::then(Function<R, S>)` is a
//! `Function<T, S>`. For fallible variants a failure from `f` is returned
//! as-is and `g` never runs.
//!
//! # Laws
//!
//! For functions without failures, sequencing is associative:
//!
//! - `f.then(g).then(h) == f.then(g.then(h))`
//!
//! # Examples
//!
//! ```rust
//! use fnlattice::{Context, Failure, Function, Unary};
//!
//! let parse: Function<String, i64> = Function::new(|context: Context, text: String| {
//!     match text.trim().parse::<i64>() {
//!         Ok(number) => (context.with_value("parsed", true), Ok(number)),
//!         Err(error) => (context, Err(Failure::with_source("not a number", error))),
//!     }
//! });
//! let double: Unary<i64> = Unary::new(|context, number| (context, Ok(number * 2)));
//!
//! let parse_and_double = parse.then(double);
//!
//! let (context, result) = parse_and_double.run(Context::new(), String::from(" 21 "));
//! assert_eq!(result.ok(), Some(42));
//! assert_eq!(context.value::<_, bool>(&"parsed"), Some(&true));
//!
//! let pure = parse_and_double.pure();
//! assert_eq!(pure.run(String::from("x")).unwrap_err().message(), "not a number");
//! ```
//!
//! # Missing conversions
//!
//! Every function variant only offers the conversions that remove
//! something it still has:
//!
//! ```rust
//! use fnlattice::{Context, MustFunction, PureFunction, PureMustFunction};
//!
//! let must: MustFunction<String, usize> = MustFunction::new(|context: Context, text: String| (context, text.len()));
//! let pure: PureFunction<String, usize> = PureFunction::new(|text: String| Ok(text.len()));
//!
//! let _: PureMustFunction<String, usize> = must.pure();
//! let _: PureMustFunction<String, usize> = pure.must();
//! ```
//!
//! [`MustFunction`] has no failure channel left to remove:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::{Context, MustFunction};
//!
//! let must: MustFunction<String, usize> = MustFunction::new(|context: Context, text: String| (context, text.len()));
//! let _ = must.must();
//! ```
//!
//! [`PureFunction`] has no context left to remove:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureFunction;
//!
//! let pure: PureFunction<String, usize> = PureFunction::new(|text: String| Ok(text.len()));
//! let _ = pure.pure();
//! ```
//!
//! [`PureMustFunction`] has neither:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureMustFunction;
//!
//! let plain: PureMustFunction<String, usize> = PureMustFunction::new(|text: String| text.len());
//! let _ = plain.must();
//! ```
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureMustFunction;
//!
//! let plain: PureMustFunction<String, usize> = PureMustFunction::new(|text: String| text.len());
//! let _ = plain.pure();
//! ```

mod bi;

pub use bi::{BiFunction, MustBiFunction, PureBiFunction, PureMustBiFunction};

use std::fmt::Display;

use crate::context::Context;
use crate::failure::{Failure, abort};
use crate::variant::function_variant;

function_variant! {
    /// A function of one input that threads a context and may fail.
    Function<T, R, C = Context, E = Failure>
    (context: C, input: T) -> (C, Result<R, E>)
}

function_variant! {
    /// A function of one input that threads a context and never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnlattice::{Context, Function};
    ///
    /// let describe: Function<i32, String> = Function::new(|context: Context, number: i32| {
    ///     (context.with_value("k", number), Ok(number.to_string()))
    /// });
    /// let describe = describe.must();
    ///
    /// let (context, text) = describe.run(Context::new(), 1);
    /// assert_eq!(context.value::<_, i32>(&"k"), Some(&1));
    /// assert_eq!(text, "1");
    ///
    /// assert_eq!(describe.pure().run(2), "2");
    /// ```
    MustFunction<T, R, C = Context>
    (context: C, input: T) -> (C, R)
}

function_variant! {
    /// A function of one input without context that may fail.
    PureFunction<T, R, E = Failure>
    (input: T) -> Result<R, E>
}

function_variant! {
    /// A function of one input without context that never fails.
    PureMustFunction<T, R>
    (input: T) -> R
}

/// A [`Function`] whose result type is its input type.
pub type Unary<T, C = Context, E = Failure> = Function<T, T, C, E>;

/// A [`MustFunction`] whose result type is its input type.
pub type MustUnary<T, C = Context> = MustFunction<T, T, C>;

/// A [`PureFunction`] whose result type is its input type.
pub type PureUnary<T, E = Failure> = PureFunction<T, T, E>;

/// A [`PureMustFunction`] whose result type is its input type.
pub type PureMustUnary<T> = PureMustFunction<T, T>;

impl<T, R, C, E> Function<T, R, C, E>
where
    T: 'static,
    R: 'static,
    C: 'static,
    E: 'static,
{
    /// Converts into a [`MustFunction`] that panics where this one would fail.
    ///
    /// # Panics
    ///
    /// The returned function panics with `Function::must: <failure>` when the
    /// underlying function fails.
    #[must_use]
    pub fn must(self) -> MustFunction<T, R, C>
    where
        E: Display,
    {
        MustFunction::new(move |context, input| match self.run(context, input) {
            (context, Ok(value)) => (context, value),
            (_, Err(failure)) => abort("Function", &failure),
        })
    }

    /// Converts into a [`PureFunction`] that runs on a fresh context.
    #[must_use]
    pub fn pure(self) -> PureFunction<T, R, E>
    where
        C: Default,
    {
        PureFunction::new(move |input| self.run(C::default(), input).1)
    }

    /// Feeds the value produced by this function into `after`, together with
    /// the updated context. If this function fails, `after` is skipped.
    #[must_use]
    pub fn then<S>(self, after: Function<R, S, C, E>) -> Function<T, S, C, E>
    where
        S: 'static,
    {
        Function::new(move |context, input| match self.run(context, input) {
            (context, Ok(value)) => after.run(context, value),
            (context, Err(failure)) => (context, Err(failure)),
        })
    }
}

impl<T, R, C> MustFunction<T, R, C>
where
    T: 'static,
    R: 'static,
    C: 'static,
{
    /// Converts into a [`PureMustFunction`] that runs on a fresh context.
    #[must_use]
    pub fn pure(self) -> PureMustFunction<T, R>
    where
        C: Default,
    {
        PureMustFunction::new(move |input| self.run(C::default(), input).1)
    }

    /// Feeds the value produced by this function into `after`, together with
    /// the updated context.
    #[must_use]
    pub fn then<S>(self, after: MustFunction<R, S, C>) -> MustFunction<T, S, C>
    where
        S: 'static,
    {
        MustFunction::new(move |context, input| {
            let (context, value) = self.run(context, input);
            after.run(context, value)
        })
    }
}

impl<T, R, E> PureFunction<T, R, E>
where
    T: 'static,
    R: 'static,
    E: 'static,
{
    /// Converts into a [`PureMustFunction`] that panics where this one would
    /// fail.
    ///
    /// # Panics
    ///
    /// The returned function panics with `PureFunction::must: <failure>` when
    /// the underlying function fails.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use fnlattice::{Failure, PureFunction};
    ///
    /// let broken: PureFunction<i32, i32> = PureFunction::new(|_| Err(Failure::new("broken")));
    /// broken.must().run(1);
    /// ```
    ///
    /// A pure function has no context to discard, so it offers no `pure()`:
    ///
    /// ```rust,compile_fail,E0599
    /// use fnlattice::{Failure, PureFunction};
    ///
    /// let broken: PureFunction<i32, i32> = PureFunction::new(|_| Err(Failure::new("broken")));
    /// let _ = broken.pure();
    /// ```
    #[must_use]
    pub fn must(self) -> PureMustFunction<T, R>
    where
        E: Display,
    {
        PureMustFunction::new(move |input| match self.run(input) {
            Ok(value) => value,
            Err(failure) => abort("PureFunction", &failure),
        })
    }

    /// Feeds the value produced by this function into `after`. If this
    /// function fails, `after` is skipped.
    #[must_use]
    pub fn then<S>(self, after: PureFunction<R, S, E>) -> PureFunction<T, S, E>
    where
        S: 'static,
    {
        PureFunction::new(move |input| self.run(input).and_then(|value| after.run(value)))
    }
}

impl<T, R> PureMustFunction<T, R>
where
    T: 'static,
    R: 'static,
{
    /// Feeds the value produced by this function into `after`.
    #[must_use]
    pub fn then<S>(self, after: PureMustFunction<R, S>) -> PureMustFunction<T, S>
    where
        S: 'static,
    {
        PureMustFunction::new(move |input| after.run(self.run(input)))
    }
}

static_assertions::assert_impl_all!(Function<String, usize>: Send, Sync, Clone);
static_assertions::assert_impl_all!(PureMustUnary<String>: Send, Sync, Clone);
