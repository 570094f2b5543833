//! Shared scaffolding for the function-shape variants.
//!
//! Every variant in this crate is a newtype around a reference-counted,
//! thread-safe closure. The [`function_variant!`] macro stamps out that
//! newtype together with its constructor, its invocation method, and the
//! `Clone` and `Debug` implementations, so that the family modules only
//! contain the conversion and composition operators.
//!
//! # Generated items
//!
//! For an invocation such as
//!
//! ```text
//! function_variant! {
//!     /// Docs.
//!     Consumer<T, C = Context, E = Failure>
//!     (context: C, input: &T) -> (C, Result<(), E>)
//! }
//! ```
//!
//! the macro produces:
//!
//! - `pub struct Consumer<T, C = Context, E = Failure>` holding an
//!   `Arc<dyn Fn(C, &T) -> (C, Result<(), E>) + Send + Sync>`
//! - `Consumer::new(closure)` and `Consumer::run(&self, context, input)`
//! - `Clone` (shares the closure) and an opaque `Debug`

/// Declares a function-shape variant. See the module documentation.
macro_rules! function_variant {
    (
        $(#[$meta:meta])*
        $name:ident<$($param:ident $(= $default:ty)?),+>
        ($($argument:ident: $argument_type:ty),*) -> $output:ty
    ) => {
        $(#[$meta])*
        pub struct $name<$($param $(= $default)?),+>
        where
            $($param: 'static),+
        {
            run_function: std::sync::Arc<dyn Fn($($argument_type),*) -> $output + Send + Sync>,
        }

        impl<$($param),+> $name<$($param),+>
        where
            $($param: 'static),+
        {
            #[doc = concat!("Wraps a closure as a [`", stringify!($name), "`].")]
            ///
            /// The closure must be `Send + Sync + 'static` so that the resulting
            /// value can be shared and invoked from any thread.
            #[inline]
            pub fn new<F>(function: F) -> Self
            where
                F: Fn($($argument_type),*) -> $output + Send + Sync + 'static,
            {
                Self {
                    run_function: std::sync::Arc::new(function),
                }
            }

            #[doc = concat!("Invokes the wrapped closure of this [`", stringify!($name), "`].")]
            #[inline]
            pub fn run(&self, $($argument: $argument_type),*) -> $output {
                (self.run_function)($($argument),*)
            }
        }

        impl<$($param),+> Clone for $name<$($param),+>
        where
            $($param: 'static),+
        {
            fn clone(&self) -> Self {
                Self {
                    run_function: std::sync::Arc::clone(&self.run_function),
                }
            }
        }

        impl<$($param),+> std::fmt::Debug for $name<$($param),+>
        where
            $($param: 'static),+
        {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter
                    .debug_struct(stringify!($name))
                    .finish_non_exhaustive()
            }
        }
    };
}

pub(crate) use function_variant;
