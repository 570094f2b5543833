//! # fnlattice
//!
//! Function shapes that differ only in whether they carry a propagated
//! context and whether they may fail, together with the conversions and
//! compositions between them.
//!
//! ## Overview
//!
//! Every family comes in four variants laid out on two axes:
//!
//! | | fallible | infallible |
//! |---|---|---|
//! | **with context** | `X` | `MustX` |
//! | **pure** | `PureX` | `PureMustX` |
//!
//! where `X` is one of:
//!
//! - **Consumers** ([`Consumer`], [`BiConsumer`]): accept input, produce nothing
//! - **Functions** ([`Function`], [`Unary`], [`BiFunction`]): map input to a value
//! - **Predicates** ([`Predicate`], [`BiPredicate`]): map input to a `bool`
//! - **Suppliers** ([`Supplier`]): produce a value from nothing
//!
//! A context-carrying variant receives a context value and hands back the
//! (possibly updated) context with its outcome. By default the context is
//! [`Context`], a persistent key/value carrier, and failures are
//! [`Failure`]; both are type parameters and can be replaced.
//!
//! ## Conversions
//!
//! - `must()`: fallible to infallible. A failure becomes a panic at the call.
//! - `pure()`: context-carrying to pure. Runs on `C::default()` and discards
//!   the returned context.
//!
//! Conversions only move down the lattice. Nothing adds a context or a
//! failure channel back, and a variant that already lacks one does not offer
//! the conversion that would remove it.
//!
//! ## Composition
//!
//! - `then`: sequencing for consumers and functions
//! - `and`, `or`, `not`: short-circuiting logic for predicates
//!
//! Compositions never recover from a failure. They return it unchanged and
//! skip every later step.
//!
//! ## Feature Flags
//!
//! - `consumer`: consumer variants
//! - `function`: function and unary variants
//! - `predicate`: predicate variants
//! - `supplier`: supplier variants
//! - `tracing`: emit a `tracing` error event when a `must()` boundary aborts
//! - `full`: enable everything
//!
//! ## Example
//!
//! ```rust
//! use fnlattice::prelude::*;
//!
//! let visits: Consumer<String> = Consumer::new(|context: Context, _page: &String| {
//!     let count = context.value::<_, u32>(&"visits").copied().unwrap_or(0);
//!     (context.with_value("visits", count + 1), Ok(()))
//! });
//!
//! let (context, result) = visits.clone().then(visits).run(Context::new(), &String::from("/"));
//! assert!(result.is_ok());
//! assert_eq!(context.value::<_, u32>(&"visits"), Some(&2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every variant, the [`Context`] carrier and [`Failure`].
///
/// # Usage
///
/// ```rust
/// use fnlattice::prelude::*;
/// ```
pub mod prelude {
    pub use crate::context::Context;
    pub use crate::failure::Failure;

    #[cfg(feature = "consumer")]
    pub use crate::consumer::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    #[cfg(feature = "supplier")]
    pub use crate::supplier::*;
}

mod variant;

pub mod context;
pub mod failure;

#[cfg(feature = "consumer")]
pub mod consumer;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "supplier")]
pub mod supplier;

pub use context::Context;
pub use failure::Failure;

#[cfg(feature = "consumer")]
pub use consumer::{
    BiConsumer, Consumer, MustBiConsumer, MustConsumer, PureBiConsumer, PureConsumer,
    PureMustBiConsumer, PureMustConsumer,
};

#[cfg(feature = "function")]
pub use function::{
    BiFunction, Function, MustBiFunction, MustFunction, MustUnary, PureBiFunction, PureFunction,
    PureMustBiFunction, PureMustFunction, PureMustUnary, PureUnary, Unary,
};

#[cfg(feature = "predicate")]
pub use predicate::{
    BiPredicate, MustBiPredicate, MustPredicate, PureBiPredicate, PureMustBiPredicate,
    PureMustPredicate, PurePredicate, Predicate,
};

#[cfg(feature = "supplier")]
pub use supplier::{MustSupplier, PureMustSupplier, PureSupplier, Supplier};
