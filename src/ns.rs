use alloc::{collections::BTreeMap, string::String};
use core::{any::Any, fmt};

use crate::{ScopeGuard, Value};

/// A set of named variable bindings.
#[derive(Clone, Default)]
pub struct Namespace {
    bindings: BTreeMap<String, Value>,
}

impl Namespace {
    /// Create an empty namespace.
    pub const fn new() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Bind `name` to `val`, returning the previous value if any.
    pub fn insert<T: Any + Send + Sync>(&mut self, name: impl Into<String>, val: T) -> Option<Value> {
        self.insert_value(name, Value::new(val))
    }

    /// Bind `name` to an existing value.
    ///
    /// The namespace shares the object with `val`.
    pub fn insert_value(&mut self, name: impl Into<String>, val: Value) -> Option<Value> {
        self.bindings.insert(name.into(), val)
    }

    /// Get a reference to the object bound to `name`, if it is of type `T`.
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.bindings.get(name)?.downcast_ref()
    }

    /// Get a mutable reference to the object bound to `name`.
    ///
    /// Returns `None` if the object is not of type `T` or is shared, e.g. by
    /// the snapshot of an active [`ScopeGuard`]. Rebind it with
    /// [`insert`](Self::insert) instead.
    pub fn get_mut<T: Any>(&mut self, name: &str) -> Option<&mut T> {
        self.bindings.get_mut(name)?.get_mut()
    }

    /// Get the value bound to `name`.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Unbind `name`.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.bindings.remove(name)
    }

    /// Returns true if `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Iterate over the bound names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Take a shallow copy of the current bindings.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            bindings: self.bindings.clone(),
        }
    }

    /// Enter a scope that resets every binding of this namespace on exit.
    ///
    /// See [`Scope`](crate::Scope) for filtered resets.
    pub fn scope(&mut self) -> ScopeGuard<'_> {
        ScopeGuard::enter(self)
    }

    pub(crate) fn bindings_mut(&mut self) -> &mut BTreeMap<String, Value> {
        &mut self.bindings
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(&self.bindings).finish()
    }
}

/// An immutable copy of a namespace taken at some point in time.
///
/// Created by [`Namespace::snapshot`].
#[derive(Clone)]
pub struct Snapshot {
    bindings: BTreeMap<String, Value>,
}

impl Snapshot {
    /// Get a reference to the object bound to `name`, if it is of type `T`.
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.bindings.get(name)?.downcast_ref()
    }

    /// Get the value bound to `name`.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Returns true if `name` was bound.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Iterate over the captured names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Iterate over the captured bindings in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(name, val)| (name.as_str(), val))
    }

    /// Number of captured bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if nothing was bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(&self.bindings).finish()
    }
}

/// Build a [`Namespace`] from a list of bindings.
///
/// # Example
///
/// ```
/// # use scope_reset::namespace;
/// let ns = namespace! { a = 7, b = "nine" };
/// assert_eq!(ns.get::<i32>("a"), Some(&7));
/// assert_eq!(ns.get::<&str>("b"), Some(&"nine"));
/// ```
#[macro_export]
macro_rules! namespace {
    ( $( $name:ident = $val:expr ),* $(,)? ) => {{
        #[allow(unused_mut)]
        let mut ns = $crate::Namespace::new();
        $( ns.insert(stringify!($name), $val); )*
        ns
    }};
}
