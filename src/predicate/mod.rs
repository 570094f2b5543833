//! Predicates: boolean-valued operations with logical composition.
//!
//! | | fallible | infallible |
//! |---|---|---|
//! | **with context** | [`Predicate`] | [`MustPredicate`] |
//! | **pure** | [`PurePredicate`] | [`PureMustPredicate`] |
//!
//! and the same four again for two inputs ([`BiPredicate`] and friends).
//! Predicates borrow their inputs.
//!
//! # Logical composition
//!
//! Every variant offers `and`, `or` and `not` (the latter also through
//! [`std::ops::Not`]).
//!
//! - `a.and(b)` runs `b` only when `a` succeeded with `true`.
//! - `a.or(b)` runs `b` only when `a` succeeded with `false`.
//! - `a.not()` negates a successful outcome and forwards a failure unchanged.
//!
//! Whenever `b` is skipped the composed predicate returns `a`'s context and
//! outcome. Whenever `b` runs it starts from `a`'s context and decides the
//! result on its own. For [`PureMustPredicate`] this is exactly `&&`, `||`
//! and `!`.
//!
//! # Laws
//!
//! For infallible predicates:
//!
//! - `p.not().not()` agrees with `p`
//! - `p.and(q).not()` agrees with `p.not().or(q.not())` (De Morgan)
//! - `p.or(q).not()` agrees with `p.not().and(q.not())`
//!
//! # Examples
//!
//! ```rust
//! use fnlattice::{Context, MustPredicate, Predicate, PureMustPredicate};
//!
//! fn step(context: Context, label: i32) -> Context {
//!     context.with_value("k", label)
//! }
//!
//! let predicate = Predicate::<i32>::new(|context, _: &i32| (step(context, 1), Ok(true)))
//!     .must()
//!     .and(MustPredicate::new(|context, _: &i32| (step(context, 2), false)))
//!     .and(MustPredicate::new(|context, _: &i32| (step(context, 3), false)))
//!     .or(MustPredicate::new(|context, _: &i32| (step(context, 4), true)));
//!
//! let (context, verdict) = predicate.run(Context::new(), &0);
//! assert!(verdict);
//! assert_eq!(context.value::<_, i32>(&"k"), Some(&4));
//!
//! let inverted = predicate.pure().or(PureMustPredicate::new(|_: &i32| false)).not();
//! assert!(!inverted.run(&0));
//! ```
//!
//! # Missing conversions
//!
//! Every predicate variant only offers the conversions that remove
//! something it still has:
//!
//! ```rust
//! use fnlattice::{Context, MustPredicate, PureMustPredicate, PurePredicate};
//!
//! let must: MustPredicate<i32> = MustPredicate::new(|context: Context, value: &i32| (context, *value > 0));
//! let pure: PurePredicate<i32> = PurePredicate::new(|value: &i32| Ok(*value > 0));
//!
//! let _: PureMustPredicate<i32> = must.pure();
//! let _: PureMustPredicate<i32> = pure.must();
//! ```
//!
//! [`MustPredicate`] has no failure channel left to remove:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::{Context, MustPredicate};
//!
//! let must: MustPredicate<i32> = MustPredicate::new(|context: Context, value: &i32| (context, *value > 0));
//! let _ = must.must();
//! ```
//!
//! [`PurePredicate`] has no context left to remove:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PurePredicate;
//!
//! let pure: PurePredicate<i32> = PurePredicate::new(|value: &i32| Ok(*value > 0));
//! let _ = pure.pure();
//! ```
//!
//! [`PureMustPredicate`] has neither:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureMustPredicate;
//!
//! let plain: PureMustPredicate<i32> = PureMustPredicate::new(|value: &i32| *value > 0);
//! let _ = plain.must();
//! ```
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureMustPredicate;
//!
//! let plain: PureMustPredicate<i32> = PureMustPredicate::new(|value: &i32| *value > 0);
//! let _ = plain.pure();
//! ```

mod bi;

pub use bi::{BiPredicate, MustBiPredicate, PureBiPredicate, PureMustBiPredicate};

use std::fmt::Display;
use std::ops::Not;

use crate::context::Context;
use crate::failure::{Failure, abort};
use crate::variant::function_variant;

function_variant! {
    /// A predicate of one input that threads a context and may fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnlattice::{Context, Failure, Predicate};
    ///
    /// let in_stock: Predicate<u32> = Predicate::new(|context, quantity: &u32| (context, Ok(*quantity > 0)));
    /// let affordable: Predicate<u32> = Predicate::new(|context, quantity: &u32| {
    ///     if *quantity > 1_000 {
    ///         (context, Err(Failure::new("quantity out of range")))
    ///     } else {
    ///         (context, Ok(*quantity * 5 <= 100))
    ///     }
    /// });
    ///
    /// let orderable = in_stock.and(affordable);
    ///
    /// assert_eq!(orderable.run(Context::new(), &10).1.ok(), Some(true));
    /// assert_eq!(orderable.run(Context::new(), &0).1.ok(), Some(false));
    /// assert!(orderable.run(Context::new(), &5_000).1.is_err());
    /// ```
    Predicate<T, C = Context, E = Failure>
    (context: C, input: &T) -> (C, Result<bool, E>)
}

function_variant! {
    /// A predicate of one input that threads a context and never fails.
    MustPredicate<T, C = Context>
    (context: C, input: &T) -> (C, bool)
}

function_variant! {
    /// A predicate of one input without context that may fail.
    PurePredicate<T, E = Failure>
    (input: &T) -> Result<bool, E>
}

function_variant! {
    /// A predicate of one input without context that never fails.
    PureMustPredicate<T>
    (input: &T) -> bool
}

impl<T, C, E> Predicate<T, C, E>
where
    T: 'static,
    C: 'static,
    E: 'static,
{
    /// Converts into a [`MustPredicate`] that panics where this one would
    /// fail.
    ///
    /// # Panics
    ///
    /// The returned predicate panics with `Predicate::must: <failure>` when
    /// the underlying predicate fails.
    #[must_use]
    pub fn must(self) -> MustPredicate<T, C>
    where
        E: Display,
    {
        MustPredicate::new(move |context, input| match self.run(context, input) {
            (context, Ok(verdict)) => (context, verdict),
            (_, Err(failure)) => abort("Predicate", &failure),
        })
    }

    /// Converts into a [`PurePredicate`] that runs on a fresh context.
    #[must_use]
    pub fn pure(self) -> PurePredicate<T, E>
    where
        C: Default,
    {
        PurePredicate::new(move |input| self.run(C::default(), input).1)
    }

    /// Short-circuiting logical AND: `other` runs only if this predicate
    /// succeeds with `true`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(move |context, input| match self.run(context, input) {
            (context, Ok(true)) => other.run(context, input),
            decided => decided,
        })
    }

    /// Short-circuiting logical OR: `other` runs only if this predicate
    /// succeeds with `false`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::new(move |context, input| match self.run(context, input) {
            (context, Ok(false)) => other.run(context, input),
            decided => decided,
        })
    }

    /// Logical negation of a successful outcome. Failures pass through.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(self) -> Self {
        Self::new(move |context, input| {
            let (context, result) = self.run(context, input);
            (context, result.map(bool::not))
        })
    }
}

impl<T, C> MustPredicate<T, C>
where
    T: 'static,
    C: 'static,
{
    /// Converts into a [`PureMustPredicate`] that runs on a fresh context.
    #[must_use]
    pub fn pure(self) -> PureMustPredicate<T>
    where
        C: Default,
    {
        PureMustPredicate::new(move |input| self.run(C::default(), input).1)
    }

    /// Short-circuiting logical AND: `other` runs only if this predicate
    /// yields `true`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(move |context, input| match self.run(context, input) {
            (context, true) => other.run(context, input),
            decided => decided,
        })
    }

    /// Short-circuiting logical OR: `other` runs only if this predicate
    /// yields `false`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::new(move |context, input| match self.run(context, input) {
            (context, false) => other.run(context, input),
            decided => decided,
        })
    }

    /// Logical negation.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(self) -> Self {
        Self::new(move |context, input| {
            let (context, verdict) = self.run(context, input);
            (context, !verdict)
        })
    }
}

impl<T, E> PurePredicate<T, E>
where
    T: 'static,
    E: 'static,
{
    /// Converts into a [`PureMustPredicate`] that panics where this one would
    /// fail.
    ///
    /// # Panics
    ///
    /// The returned predicate panics with `PurePredicate::must: <failure>`
    /// when the underlying predicate fails.
    #[must_use]
    pub fn must(self) -> PureMustPredicate<T>
    where
        E: Display,
    {
        PureMustPredicate::new(move |input| match self.run(input) {
            Ok(verdict) => verdict,
            Err(failure) => abort("PurePredicate", &failure),
        })
    }

    /// Short-circuiting logical AND: `other` runs only if this predicate
    /// succeeds with `true`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(move |input| match self.run(input) {
            Ok(true) => other.run(input),
            decided => decided,
        })
    }

    /// Short-circuiting logical OR: `other` runs only if this predicate
    /// succeeds with `false`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::new(move |input| match self.run(input) {
            Ok(false) => other.run(input),
            decided => decided,
        })
    }

    /// Logical negation of a successful outcome. Failures pass through.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(self) -> Self {
        Self::new(move |input| self.run(input).map(bool::not))
    }
}

impl<T> PureMustPredicate<T>
where
    T: 'static,
{
    /// Logical AND, `&&`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(move |input| self.run(input) && other.run(input))
    }

    /// Logical OR, `||`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::new(move |input| self.run(input) || other.run(input))
    }

    /// Logical negation, `!`.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(self) -> Self {
        Self::new(move |input| !self.run(input))
    }
}

/// Implements [`std::ops::Not`] for predicate variants by delegating to
/// their inherent `not`.
macro_rules! impl_not {
    ($($name:ident<$($param:ident),+>),+ $(,)?) => {
        $(
            impl<$($param),+> std::ops::Not for $name<$($param),+>
            where
                $($param: 'static),+
            {
                type Output = Self;

                fn not(self) -> Self {
                    $name::not(self)
                }
            }
        )+
    };
}

pub(crate) use impl_not;

impl_not!(
    Predicate<T, C, E>,
    MustPredicate<T, C>,
    PurePredicate<T, E>,
    PureMustPredicate<T>,
);

static_assertions::assert_impl_all!(Predicate<String>: Send, Sync, Clone, Not);
static_assertions::assert_impl_all!(PureMustPredicate<String>: Send, Sync, Clone, Not);
