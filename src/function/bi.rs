//! Two-input functions.
//!
//! Sequencing a two-input function continues with a one-input function of
//! the matching variant: `BiFunction<T, U, R>::then(Function<R, S>)` is a
//! `BiFunction<T, U, S>`.
//!
//! # Missing conversions
//!
//! Every two-input function variant only offers the conversions that remove
//! something it still has:
//!
//! ```rust
//! use fnlattice::{Context, MustBiFunction, PureBiFunction, PureMustBiFunction};
//!
//! let must: MustBiFunction<i32, i32, i32> = MustBiFunction::new(|context: Context, left: i32, right: i32| (context, left + right));
//! let pure: PureBiFunction<i32, i32, i32> = PureBiFunction::new(|left: i32, right: i32| Ok(left + right));
//!
//! let _: PureMustBiFunction<i32, i32, i32> = must.pure();
//! let _: PureMustBiFunction<i32, i32, i32> = pure.must();
//! ```
//!
//! [`MustBiFunction`] has no failure channel left to remove:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::{Context, MustBiFunction};
//!
//! let must: MustBiFunction<i32, i32, i32> = MustBiFunction::new(|context: Context, left: i32, right: i32| (context, left + right));
//! let _ = must.must();
//! ```
//!
//! [`PureBiFunction`] has no context left to remove:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureBiFunction;
//!
//! let pure: PureBiFunction<i32, i32, i32> = PureBiFunction::new(|left: i32, right: i32| Ok(left + right));
//! let _ = pure.pure();
//! ```
//!
//! [`PureMustBiFunction`] has neither:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureMustBiFunction;
//!
//! let plain: PureMustBiFunction<i32, i32, i32> = PureMustBiFunction::new(|left: i32, right: i32| left + right);
//! let _ = plain.must();
//! ```
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureMustBiFunction;
//!
//! let plain: PureMustBiFunction<i32, i32, i32> = PureMustBiFunction::new(|left: i32, right: i32| left + right);
//! let _ = plain.pure();
//! ```

use std::fmt::Display;

use super::{Function, MustFunction, PureFunction, PureMustFunction};
use crate::context::Context;
use crate::failure::{Failure, abort};
use crate::variant::function_variant;

function_variant! {
    /// A function of two inputs that threads a context and may fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnlattice::{BiFunction, Context};
    ///
    /// let sum: BiFunction<i32, i32, String> = BiFunction::new(|context: Context, left: i32, right: i32| {
    ///     (context.with_value("k", left + right), Ok((left + right).to_string()))
    /// });
    /// let sum = sum.must();
    ///
    /// let (context, text) = sum.run(Context::new(), 1, 3);
    /// assert_eq!(context.value::<_, i32>(&"k"), Some(&4));
    /// assert_eq!(text, "4");
    ///
    /// assert_eq!(sum.pure().run(2, 4), "6");
    /// ```
    BiFunction<T, U, R, C = Context, E = Failure>
    (context: C, first: T, second: U) -> (C, Result<R, E>)
}

function_variant! {
    /// A function of two inputs that threads a context and never fails.
    MustBiFunction<T, U, R, C = Context>
    (context: C, first: T, second: U) -> (C, R)
}

function_variant! {
    /// A function of two inputs without context that may fail.
    PureBiFunction<T, U, R, E = Failure>
    (first: T, second: U) -> Result<R, E>
}

function_variant! {
    /// A function of two inputs without context that never fails.
    PureMustBiFunction<T, U, R>
    (first: T, second: U) -> R
}

impl<T, U, R, C, E> BiFunction<T, U, R, C, E>
where
    T: 'static,
    U: 'static,
    R: 'static,
    C: 'static,
    E: 'static,
{
    /// Converts into a [`MustBiFunction`] that panics where this one would
    /// fail.
    ///
    /// # Panics
    ///
    /// The returned function panics with `BiFunction::must: <failure>` when
    /// the underlying function fails.
    #[must_use]
    pub fn must(self) -> MustBiFunction<T, U, R, C>
    where
        E: Display,
    {
        MustBiFunction::new(
            move |context, first, second| match self.run(context, first, second) {
                (context, Ok(value)) => (context, value),
                (_, Err(failure)) => abort("BiFunction", &failure),
            },
        )
    }

    /// Converts into a [`PureBiFunction`] that runs on a fresh context.
    #[must_use]
    pub fn pure(self) -> PureBiFunction<T, U, R, E>
    where
        C: Default,
    {
        PureBiFunction::new(move |first, second| self.run(C::default(), first, second).1)
    }

    /// Feeds the value produced by this function into `after`, together with
    /// the updated context. If this function fails, `after` is skipped.
    #[must_use]
    pub fn then<S>(self, after: Function<R, S, C, E>) -> BiFunction<T, U, S, C, E>
    where
        S: 'static,
    {
        BiFunction::new(
            move |context, first, second| match self.run(context, first, second) {
                (context, Ok(value)) => after.run(context, value),
                (context, Err(failure)) => (context, Err(failure)),
            },
        )
    }
}

impl<T, U, R, C> MustBiFunction<T, U, R, C>
where
    T: 'static,
    U: 'static,
    R: 'static,
    C: 'static,
{
    /// Converts into a [`PureMustBiFunction`] that runs on a fresh context.
    #[must_use]
    pub fn pure(self) -> PureMustBiFunction<T, U, R>
    where
        C: Default,
    {
        PureMustBiFunction::new(move |first, second| self.run(C::default(), first, second).1)
    }

    /// Feeds the value produced by this function into `after`, together with
    /// the updated context.
    #[must_use]
    pub fn then<S>(self, after: MustFunction<R, S, C>) -> MustBiFunction<T, U, S, C>
    where
        S: 'static,
    {
        MustBiFunction::new(move |context, first, second| {
            let (context, value) = self.run(context, first, second);
            after.run(context, value)
        })
    }
}

impl<T, U, R, E> PureBiFunction<T, U, R, E>
where
    T: 'static,
    U: 'static,
    R: 'static,
    E: 'static,
{
    /// Converts into a [`PureMustBiFunction`] that panics where this one
    /// would fail.
    ///
    /// # Panics
    ///
    /// The returned function panics with `PureBiFunction::must: <failure>`
    /// when the underlying function fails.
    #[must_use]
    pub fn must(self) -> PureMustBiFunction<T, U, R>
    where
        E: Display,
    {
        PureMustBiFunction::new(move |first, second| match self.run(first, second) {
            Ok(value) => value,
            Err(failure) => abort("PureBiFunction", &failure),
        })
    }

    /// Feeds the value produced by this function into `after`. If this
    /// function fails, `after` is skipped.
    #[must_use]
    pub fn then<S>(self, after: PureFunction<R, S, E>) -> PureBiFunction<T, U, S, E>
    where
        S: 'static,
    {
        PureBiFunction::new(move |first, second| {
            self.run(first, second).and_then(|value| after.run(value))
        })
    }
}

impl<T, U, R> PureMustBiFunction<T, U, R>
where
    T: 'static,
    U: 'static,
    R: 'static,
{
    /// Feeds the value produced by this function into `after`.
    #[must_use]
    pub fn then<S>(self, after: PureMustFunction<R, S>) -> PureMustBiFunction<T, U, S>
    where
        S: 'static,
    {
        PureMustBiFunction::new(move |first, second| after.run(self.run(first, second)))
    }
}
