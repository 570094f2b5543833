//! Two-input predicates.
//!
//! # Missing conversions
//!
//! Every two-input predicate variant only offers the conversions that remove
//! something it still has:
//!
//! ```rust
//! use fnlattice::{Context, MustBiPredicate, PureBiPredicate, PureMustBiPredicate};
//!
//! let must: MustBiPredicate<i32, i32> = MustBiPredicate::new(|context: Context, low: &i32, high: &i32| (context, low < high));
//! let pure: PureBiPredicate<i32, i32> = PureBiPredicate::new(|low: &i32, high: &i32| Ok(low < high));
//!
//! let _: PureMustBiPredicate<i32, i32> = must.pure();
//! let _: PureMustBiPredicate<i32, i32> = pure.must();
//! ```
//!
//! [`MustBiPredicate`] has no failure channel left to remove:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::{Context, MustBiPredicate};
//!
//! let must: MustBiPredicate<i32, i32> = MustBiPredicate::new(|context: Context, low: &i32, high: &i32| (context, low < high));
//! let _ = must.must();
//! ```
//!
//! [`PureBiPredicate`] has no context left to remove:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureBiPredicate;
//!
//! let pure: PureBiPredicate<i32, i32> = PureBiPredicate::new(|low: &i32, high: &i32| Ok(low < high));
//! let _ = pure.pure();
//! ```
//!
//! [`PureMustBiPredicate`] has neither:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureMustBiPredicate;
//!
//! let plain: PureMustBiPredicate<i32, i32> = PureMustBiPredicate::new(|low: &i32, high: &i32| low < high);
//! let _ = plain.must();
//! ```
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureMustBiPredicate;
//!
//! let plain: PureMustBiPredicate<i32, i32> = PureMustBiPredicate::new(|low: &i32, high: &i32| low < high);
//! let _ = plain.pure();
//! ```

use std::fmt::Display;
use std::ops::Not;

use super::impl_not;
use crate::context::Context;
use crate::failure::{Failure, abort};
use crate::variant::function_variant;

function_variant! {
    /// A predicate of two inputs that threads a context and may fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnlattice::{BiPredicate, Context};
    ///
    /// let within: BiPredicate<f64, f64> =
    ///     BiPredicate::new(|context, value: &f64, limit: &f64| (context, Ok(value <= limit)));
    ///
    /// assert_eq!(within.run(Context::new(), &0.5, &1.0).1.ok(), Some(true));
    /// assert_eq!(within.not().run(Context::new(), &0.5, &1.0).1.ok(), Some(false));
    /// ```
    BiPredicate<T, U, C = Context, E = Failure>
    (context: C, first: &T, second: &U) -> (C, Result<bool, E>)
}

function_variant! {
    /// A predicate of two inputs that threads a context and never fails.
    MustBiPredicate<T, U, C = Context>
    (context: C, first: &T, second: &U) -> (C, bool)
}

function_variant! {
    /// A predicate of two inputs without context that may fail.
    PureBiPredicate<T, U, E = Failure>
    (first: &T, second: &U) -> Result<bool, E>
}

function_variant! {
    /// A predicate of two inputs without context that never fails.
    PureMustBiPredicate<T, U>
    (first: &T, second: &U) -> bool
}

impl<T, U, C, E> BiPredicate<T, U, C, E>
where
    T: 'static,
    U: 'static,
    C: 'static,
    E: 'static,
{
    /// Converts into a [`MustBiPredicate`] that panics where this one would
    /// fail.
    ///
    /// # Panics
    ///
    /// The returned predicate panics with `BiPredicate::must: <failure>` when
    /// the underlying predicate fails.
    #[must_use]
    pub fn must(self) -> MustBiPredicate<T, U, C>
    where
        E: Display,
    {
        MustBiPredicate::new(
            move |context, first, second| match self.run(context, first, second) {
                (context, Ok(verdict)) => (context, verdict),
                (_, Err(failure)) => abort("BiPredicate", &failure),
            },
        )
    }

    /// Converts into a [`PureBiPredicate`] that runs on a fresh context.
    #[must_use]
    pub fn pure(self) -> PureBiPredicate<T, U, E>
    where
        C: Default,
    {
        PureBiPredicate::new(move |first, second| self.run(C::default(), first, second).1)
    }

    /// Short-circuiting logical AND: `other` runs only if this predicate
    /// succeeds with `true`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(
            move |context, first, second| match self.run(context, first, second) {
                (context, Ok(true)) => other.run(context, first, second),
                decided => decided,
            },
        )
    }

    /// Short-circuiting logical OR: `other` runs only if this predicate
    /// succeeds with `false`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::new(
            move |context, first, second| match self.run(context, first, second) {
                (context, Ok(false)) => other.run(context, first, second),
                decided => decided,
            },
        )
    }

    /// Logical negation of a successful outcome. Failures pass through.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(self) -> Self {
        Self::new(move |context, first, second| {
            let (context, result) = self.run(context, first, second);
            (context, result.map(bool::not))
        })
    }
}

impl<T, U, C> MustBiPredicate<T, U, C>
where
    T: 'static,
    U: 'static,
    C: 'static,
{
    /// Converts into a [`PureMustBiPredicate`] that runs on a fresh context.
    #[must_use]
    pub fn pure(self) -> PureMustBiPredicate<T, U>
    where
        C: Default,
    {
        PureMustBiPredicate::new(move |first, second| self.run(C::default(), first, second).1)
    }

    /// Short-circuiting logical AND: `other` runs only if this predicate
    /// yields `true`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(
            move |context, first, second| match self.run(context, first, second) {
                (context, true) => other.run(context, first, second),
                decided => decided,
            },
        )
    }

    /// Short-circuiting logical OR: `other` runs only if this predicate
    /// yields `false`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::new(
            move |context, first, second| match self.run(context, first, second) {
                (context, false) => other.run(context, first, second),
                decided => decided,
            },
        )
    }

    /// Logical negation.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(self) -> Self {
        Self::new(move |context, first, second| {
            let (context, verdict) = self.run(context, first, second);
            (context, !verdict)
        })
    }
}

impl<T, U, E> PureBiPredicate<T, U, E>
where
    T: 'static,
    U: 'static,
    E: 'static,
{
    /// Converts into a [`PureMustBiPredicate`] that panics where this one
    /// would fail.
    ///
    /// # Panics
    ///
    /// The returned predicate panics with `PureBiPredicate::must: <failure>`
    /// when the underlying predicate fails.
    #[must_use]
    pub fn must(self) -> PureMustBiPredicate<T, U>
    where
        E: Display,
    {
        PureMustBiPredicate::new(move |first, second| match self.run(first, second) {
            Ok(verdict) => verdict,
            Err(failure) => abort("PureBiPredicate", &failure),
        })
    }

    /// Short-circuiting logical AND: `other` runs only if this predicate
    /// succeeds with `true`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(move |first, second| match self.run(first, second) {
            Ok(true) => other.run(first, second),
            decided => decided,
        })
    }

    /// Short-circuiting logical OR: `other` runs only if this predicate
    /// succeeds with `false`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::new(move |first, second| match self.run(first, second) {
            Ok(false) => other.run(first, second),
            decided => decided,
        })
    }

    /// Logical negation of a successful outcome. Failures pass through.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(self) -> Self {
        Self::new(move |first, second| self.run(first, second).map(bool::not))
    }
}

impl<T, U> PureMustBiPredicate<T, U>
where
    T: 'static,
    U: 'static,
{
    /// Logical AND, `&&`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(move |first, second| self.run(first, second) && other.run(first, second))
    }

    /// Logical OR, `||`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::new(move |first, second| self.run(first, second) || other.run(first, second))
    }

    /// Logical negation, `!`.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(self) -> Self {
        Self::new(move |first, second| !self.run(first, second))
    }
}

impl_not!(
    BiPredicate<T, U, C, E>,
    MustBiPredicate<T, U, C>,
    PureBiPredicate<T, U, E>,
    PureMustBiPredicate<T, U>,
);
