//! Suppliers: operations that produce a value from no domain input.
//!
//! | | fallible | infallible |
//! |---|---|---|
//! | **with context** | [`Supplier`] | [`MustSupplier`] |
//! | **pure** | [`PureSupplier`] | [`PureMustSupplier`] |
//!
//! Suppliers only convert; they have no composition operators.
//!
//! ```text
//! Supplier ──must()──▶ MustSupplier
//!    │                     │
//!  pure()                pure()
//!    ▼                     ▼
//! PureSupplier ─must()─▶ PureMustSupplier
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fnlattice::{Context, Supplier};
//!
//! let greeting: Supplier<String> =
//!     Supplier::new(|context: Context| (context.with_value("k", 1), Ok(String::from("1"))));
//! let greeting = greeting.must();
//!
//! let (context, value) = greeting.run(Context::new());
//! assert_eq!(context.value::<_, i32>(&"k"), Some(&1));
//! assert_eq!(value, "1");
//!
//! assert_eq!(greeting.pure().run(), "1");
//! ```
//!
//! # Missing conversions
//!
//! Every supplier variant only offers the conversions that remove
//! something it still has:
//!
//! ```rust
//! use fnlattice::{Context, MustSupplier, PureMustSupplier, PureSupplier};
//!
//! let must: MustSupplier<u8> = MustSupplier::new(|context: Context| (context, 1));
//! let pure: PureSupplier<u8> = PureSupplier::new(|| Ok(1));
//!
//! let _: PureMustSupplier<u8> = must.pure();
//! let _: PureMustSupplier<u8> = pure.must();
//! ```
//!
//! [`MustSupplier`] has no failure channel left to remove:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::{Context, MustSupplier};
//!
//! let must: MustSupplier<u8> = MustSupplier::new(|context: Context| (context, 1));
//! let _ = must.must();
//! ```
//!
//! [`PureSupplier`] has no context left to remove:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureSupplier;
//!
//! let pure: PureSupplier<u8> = PureSupplier::new(|| Ok(1));
//! let _ = pure.pure();
//! ```
//!
//! [`PureMustSupplier`] has neither:
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureMustSupplier;
//!
//! let plain: PureMustSupplier<u8> = PureMustSupplier::new(|| 1);
//! let _ = plain.must();
//! ```
//!
//! ```rust,compile_fail,E0599
//! use fnlattice::PureMustSupplier;
//!
//! let plain: PureMustSupplier<u8> = PureMustSupplier::new(|| 1);
//! let _ = plain.pure();
//! ```

use std::fmt::Display;

use crate::context::Context;
use crate::failure::{Failure, abort};
use crate::variant::function_variant;

function_variant! {
    /// A supplier that threads a context and may fail.
    Supplier<T, C = Context, E = Failure>
    (context: C) -> (C, Result<T, E>)
}

function_variant! {
    /// A supplier that threads a context and never fails.
    MustSupplier<T, C = Context>
    (context: C) -> (C, T)
}

function_variant! {
    /// A supplier without context that may fail.
    PureSupplier<T, E = Failure>
    () -> Result<T, E>
}

function_variant! {
    /// A supplier without context that never fails.
    PureMustSupplier<T>
    () -> T
}

impl<T, C, E> Supplier<T, C, E>
where
    T: 'static,
    C: 'static,
    E: 'static,
{
    /// Converts into a [`MustSupplier`] that panics where this one would fail.
    ///
    /// # Panics
    ///
    /// The returned supplier panics with `Supplier::must: <failure>` when the
    /// underlying supplier fails.
    #[must_use]
    pub fn must(self) -> MustSupplier<T, C>
    where
        E: Display,
    {
        MustSupplier::new(move |context| match self.run(context) {
            (context, Ok(value)) => (context, value),
            (_, Err(failure)) => abort("Supplier", &failure),
        })
    }

    /// Converts into a [`PureSupplier`] that runs on a fresh context.
    #[must_use]
    pub fn pure(self) -> PureSupplier<T, E>
    where
        C: Default,
    {
        PureSupplier::new(move || self.run(C::default()).1)
    }
}

impl<T, C> MustSupplier<T, C>
where
    T: 'static,
    C: 'static,
{
    /// Converts into a [`PureMustSupplier`] that runs on a fresh context.
    #[must_use]
    pub fn pure(self) -> PureMustSupplier<T>
    where
        C: Default,
    {
        PureMustSupplier::new(move || self.run(C::default()).1)
    }
}

impl<T, E> PureSupplier<T, E>
where
    T: 'static,
    E: 'static,
{
    /// Converts into a [`PureMustSupplier`] that panics where this one would
    /// fail.
    ///
    /// # Panics
    ///
    /// The returned supplier panics with `PureSupplier::must: <failure>` when
    /// the underlying supplier fails.
    #[must_use]
    pub fn must(self) -> PureMustSupplier<T>
    where
        E: Display,
    {
        PureMustSupplier::new(move || match self.run() {
            Ok(value) => value,
            Err(failure) => abort("PureSupplier", &failure),
        })
    }
}

static_assertions::assert_impl_all!(Supplier<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(PureMustSupplier<String>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn next_ticket() -> Supplier<u64> {
        Supplier::new(|context: Context| {
            let issued = context.value::<_, u64>(&"issued").copied().unwrap_or(0);
            (context.with_value("issued", issued + 1), Ok(issued + 1))
        })
    }

    #[rstest]
    fn run_threads_the_callers_context() {
        let seeded = Context::new().with_value("issued", 41_u64);
        let (context, ticket) = next_ticket().run(seeded);

        assert_eq!(ticket.ok(), Some(42));
        assert_eq!(context.value::<_, u64>(&"issued"), Some(&42));
    }

    #[rstest]
    fn must_forwards_value_and_context() {
        let seeded = Context::new().with_value("issued", 9_u64);
        let (context, ticket) = next_ticket().must().run(seeded);

        assert_eq!(ticket, 10);
        assert_eq!(context.value::<_, u64>(&"issued"), Some(&10));
    }

    #[rstest]
    fn pure_always_starts_from_an_empty_context() {
        let pure = next_ticket().pure();
        assert_eq!(pure.run().ok(), Some(1));
        assert_eq!(pure.run().ok(), Some(1));
        assert_eq!(next_ticket().must().pure().run(), 1);
    }

    #[rstest]
    #[should_panic(expected = "PureSupplier::must: sold out")]
    fn pure_must_panics_on_failure() {
        let sold_out: PureSupplier<u64> = PureSupplier::new(|| Err(Failure::new("sold out")));
        let _ = sold_out.must().run();
    }

    #[rstest]
    fn custom_context_and_failure_types_are_supported() {
        #[derive(Clone, Debug, Default, PartialEq)]
        struct Attempts(u8);

        let flaky: Supplier<&'static str, Attempts, String> = Supplier::new(|Attempts(count)| {
            if count < 2 {
                (Attempts(count + 1), Err(format!("attempt {count} failed")))
            } else {
                (Attempts(count + 1), Ok("ready"))
            }
        });

        assert_eq!(flaky.run(Attempts(0)), (Attempts(1), Err(String::from("attempt 0 failed"))));
        assert_eq!(flaky.run(Attempts(2)), (Attempts(3), Ok("ready")));
        assert_eq!(flaky.pure().run(), Err(String::from("attempt 0 failed")));
    }
}
