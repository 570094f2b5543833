//! The propagated-state carrier threaded through context-carrying variants.
//!
//! [`Context`] is an immutable associative carrier built as a persistent
//! singly-linked chain of bindings. Binding a value never touches the
//! receiver: it allocates one node in front of the existing chain and shares
//! everything behind it.
//!
//! ```text
//! base:                       ("b", 2) -> ("a", 1) -> nil
//! base.with_value("a", 10):   ("a", 10) -> [("b", 2) -> ("a", 1) -> nil]   // shares the tail with base
//! ```
//!
//! Lookups walk from the newest binding towards the oldest, so a newer
//! binding of an equal key shadows every older one.
//!
//! Keys and values are type-erased. A key matches when it has the same type
//! *and* compares equal, so two crates using `&'static str` keys should prefer
//! a private key type to avoid collisions.
//!
//! # Examples
//!
//! ```rust
//! use fnlattice::Context;
//!
//! let base = Context::new().with_value("attempt", 1_u32);
//! let retried = base.with_value("attempt", 2_u32);
//!
//! assert_eq!(base.value::<_, u32>(&"attempt"), Some(&1));
//! assert_eq!(retried.value::<_, u32>(&"attempt"), Some(&2));
//! ```
//!
//! Using a dedicated key type:
//!
//! ```rust
//! use fnlattice::Context;
//!
//! #[derive(PartialEq)]
//! struct TraceId;
//!
//! let context = Context::new().with_value(TraceId, String::from("4bf92f35"));
//! assert_eq!(context.value::<_, String>(&TraceId).map(String::as_str), Some("4bf92f35"));
//! assert_eq!(context.value::<_, String>(&"TraceId"), None);
//! ```

use std::any::Any;
use std::fmt;
use std::iter;
use std::sync::Arc;

/// A single binding, linked to the older bindings behind it.
struct Node {
    key: Box<dyn Any + Send + Sync>,
    value: Box<dyn Any + Send + Sync>,
    next: Option<Arc<Self>>,
}

/// An immutable, persistent key/value carrier.
///
/// Cloning a `Context` is O(1) and clones share all of their bindings.
///
/// # Time Complexity
///
/// | Operation     | Complexity |
/// |---------------|------------|
/// | `new`         | O(1)       |
/// | `with_value`  | O(1)       |
/// | `value`       | O(n)       |
/// | `len`         | O(1)       |
///
/// Contexts are expected to hold a handful of request-scoped entries, which
/// is why lookups are linear.
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Node>>,
    length: usize,
}

impl Context {
    /// Creates an empty context.
    ///
    /// This is the fresh instance used whenever a `pure()` conversion runs a
    /// context-carrying variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnlattice::Context;
    ///
    /// assert!(Context::new().is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Returns a new context in which `key` is bound to `value`.
    ///
    /// The receiver is left untouched. An existing binding of an equal key is
    /// shadowed, not removed, so it still counts towards [`len`](Self::len).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnlattice::Context;
    ///
    /// let empty = Context::new();
    /// let bound = empty.with_value("user", "ada");
    ///
    /// assert!(empty.is_empty());
    /// assert_eq!(bound.value::<_, &str>(&"user"), Some(&"ada"));
    /// ```
    #[must_use]
    pub fn with_value<K, V>(&self, key: K, value: V) -> Self
    where
        K: Any + PartialEq + Send + Sync,
        V: Any + Send + Sync,
    {
        Self {
            head: Some(Arc::new(Node {
                key: Box::new(key),
                value: Box::new(value),
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Looks up the newest binding of `key` and returns its value as a `V`.
    ///
    /// Returns `None` when no binding of `key` exists, or when the newest one
    /// holds a value of another type. Older bindings are never consulted once
    /// a matching key is found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnlattice::Context;
    ///
    /// let context = Context::new().with_value("count", 3_i64);
    ///
    /// assert_eq!(context.value::<_, i64>(&"count"), Some(&3));
    /// assert_eq!(context.value::<_, i32>(&"count"), None);
    /// assert_eq!(context.value::<_, i64>(&"missing"), None);
    /// ```
    #[must_use]
    pub fn value<K, V>(&self, key: &K) -> Option<&V>
    where
        K: Any + PartialEq,
        V: Any,
    {
        self.find(key).and_then(|node| node.value.downcast_ref::<V>())
    }

    /// Returns `true` if some binding of `key` exists.
    #[must_use]
    pub fn contains_key<K>(&self, key: &K) -> bool
    where
        K: Any + PartialEq,
    {
        self.find(key).is_some()
    }

    /// Returns the number of bindings, shadowed ones included.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the context holds no bindings.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    fn nodes(&self) -> impl Iterator<Item = &Node> {
        iter::successors(self.head.as_deref(), |node| node.next.as_deref())
    }

    fn find<K>(&self, key: &K) -> Option<&Node>
    where
        K: Any + PartialEq,
    {
        self.nodes().find(|node| {
            node.key
                .downcast_ref::<K>()
                .is_some_and(|stored| stored == key)
        })
    }
}

// Unlinks uniquely owned nodes one by one so that dropping a long chain does
// not recurse once per binding.
impl Drop for Context {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Context")
            .field("bindings", &self.length)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Context: Send, Sync, Clone, Default);
