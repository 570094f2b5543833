//! Two-input consumers.
//!
//! # Missing conversions
//!
//! Every two-input consumer variant only offers the conversions that remove
//! something it still has:
//!
//! ```rust
//! use fnlattice::{Context, MustBiConsumer, PureBiConsumer, PureMustBiConsumer};
//!
//! let must: MustBiConsumer<String, u8> = MustBiConsumer::new(|context: Context, _: &String, _: &u8| context);
//! let pure: PureBiConsumer<String, u8> = PureBiConsumer::new(|_: &String, _: &u8| Ok(()));
//!
//! let _: PureMustBiConsumer<String, u8> = must.pure();
//! let _: PureMustBiConsumer<String, u8> = pure.must();
//! ```
//!
//! [`MustBiConsumer`] has no failure channel left to remove:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::{Context, MustBiConsumer};
//!
//! let must: MustBiConsumer<String, u8> = MustBiConsumer::new(|context: Context, _: &String, _: &u8| context);
//! let _ = must.must();
//! ```
//!
//! [`PureBiConsumer`] has no context left to remove:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureBiConsumer;
//!
//! let pure: PureBiConsumer<String, u8> = PureBiConsumer::new(|_: &String, _: &u8| Ok(()));
//! let _ = pure.pure();
//! ```
//!
//! [`PureMustBiConsumer`] has neither:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureMustBiConsumer;
//!
//! let plain: PureMustBiConsumer<String, u8> = PureMustBiConsumer::new(|_: &String, _: &u8| {});
//! let _ = plain.must();
//! ```
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureMustBiConsumer;
//!
//! let plain: PureMustBiConsumer<String, u8> = PureMustBiConsumer::new(|_: &String, _: &u8| {});
//! let _ = plain.pure();
//! ```

use std::fmt::Display;

use crate::context::Context;
use crate::failure::{Failure, abort};
use crate::variant::function_variant;

function_variant! {
    /// A consumer of two inputs that threads a context and may fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnlattice::{BiConsumer, Context};
    ///
    /// let record: BiConsumer<String, u32> = BiConsumer::new(|context: Context, name: &String, age: &u32| {
    ///     (context.with_value(name.clone(), *age), Ok(()))
    /// });
    ///
    /// let (context, result) = record.run(Context::new(), &String::from("ada"), &36);
    /// assert!(result.is_ok());
    /// assert_eq!(context.value::<_, u32>(&String::from("ada")), Some(&36));
    /// ```
    BiConsumer<T, U, C = Context, E = Failure>
    (context: C, first: &T, second: &U) -> (C, Result<(), E>)
}

function_variant! {
    /// A consumer of two inputs that threads a context and never fails.
    MustBiConsumer<T, U, C = Context>
    (context: C, first: &T, second: &U) -> C
}

function_variant! {
    /// A consumer of two inputs without context that may fail.
    PureBiConsumer<T, U, E = Failure>
    (first: &T, second: &U) -> Result<(), E>
}

function_variant! {
    /// A consumer of two inputs without context that never fails.
    PureMustBiConsumer<T, U>
    (first: &T, second: &U) -> ()
}

impl<T, U, C, E> BiConsumer<T, U, C, E>
where
    T: 'static,
    U: 'static,
    C: 'static,
    E: 'static,
{
    /// Converts into a [`MustBiConsumer`] that panics where this one would
    /// fail.
    ///
    /// # Panics
    ///
    /// The returned consumer panics with `BiConsumer::must: <failure>` when
    /// the underlying consumer fails.
    #[must_use]
    pub fn must(self) -> MustBiConsumer<T, U, C>
    where
        E: Display,
    {
        MustBiConsumer::new(move |context, first, second| {
            let (context, result) = self.run(context, first, second);
            if let Err(failure) = result {
                abort("BiConsumer", &failure);
            }
            context
        })
    }

    /// Converts into a [`PureBiConsumer`] that runs on a fresh context.
    #[must_use]
    pub fn pure(self) -> PureBiConsumer<T, U, E>
    where
        C: Default,
    {
        PureBiConsumer::new(move |first, second| self.run(C::default(), first, second).1)
    }

    /// Runs this consumer, then `after` on the same inputs and the updated
    /// context. If this consumer fails, `after` is skipped.
    #[must_use]
    pub fn then(self, after: Self) -> Self {
        Self::new(
            move |context, first, second| match self.run(context, first, second) {
                (context, Ok(())) => after.run(context, first, second),
                failed => failed,
            },
        )
    }
}

impl<T, U, C> MustBiConsumer<T, U, C>
where
    T: 'static,
    U: 'static,
    C: 'static,
{
    /// Converts into a [`PureMustBiConsumer`] that runs on a fresh context.
    #[must_use]
    pub fn pure(self) -> PureMustBiConsumer<T, U>
    where
        C: Default,
    {
        PureMustBiConsumer::new(move |first, second| {
            let _ = self.run(C::default(), first, second);
        })
    }

    /// Runs this consumer, then `after` on the same inputs and the updated
    /// context.
    #[must_use]
    pub fn then(self, after: Self) -> Self {
        Self::new(move |context, first, second| {
            after.run(self.run(context, first, second), first, second)
        })
    }
}

impl<T, U, E> PureBiConsumer<T, U, E>
where
    T: 'static,
    U: 'static,
    E: 'static,
{
    /// Converts into a [`PureMustBiConsumer`] that panics where this one
    /// would fail.
    ///
    /// # Panics
    ///
    /// The returned consumer panics with `PureBiConsumer::must: <failure>`
    /// when the underlying consumer fails.
    #[must_use]
    pub fn must(self) -> PureMustBiConsumer<T, U>
    where
        E: Display,
    {
        PureMustBiConsumer::new(move |first, second| {
            if let Err(failure) = self.run(first, second) {
                abort("PureBiConsumer", &failure);
            }
        })
    }

    /// Runs this consumer, then `after` on the same inputs. If this consumer
    /// fails, `after` is skipped.
    #[must_use]
    pub fn then(self, after: Self) -> Self {
        Self::new(move |first, second| {
            self.run(first, second)
                .and_then(|()| after.run(first, second))
        })
    }
}

impl<T, U> PureMustBiConsumer<T, U>
where
    T: 'static,
    U: 'static,
{
    /// Runs this consumer, then `after` on the same inputs.
    #[must_use]
    pub fn then(self, after: Self) -> Self {
        Self::new(move |first, second| {
            self.run(first, second);
            after.run(first, second);
        })
    }
}
