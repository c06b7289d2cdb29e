use alloc::{collections::BTreeSet, string::String, vec::Vec};
use core::any::Any;

use crate::{Error, Filter, Namespace, Result, ScopeGuard, Value};

/// Configuration of a reset scope that has not been entered yet.
///
/// With no options, everything done inside the scope is undone on exit.
///
/// # Example
///
/// ```
/// # use scope_reset::{Scope, namespace};
/// let mut ns = namespace! { a = 7, b = 9 };
///
/// Scope::new()
///     .except(["c"])
///     .bind("a", 3)
///     .bind("b", 5)
///     .run(&mut ns, |ns| {
///         let c = ns.get::<i32>("a").unwrap() + ns.get::<i32>("b").unwrap();
///         ns.insert("c", c);
///     })
///     .unwrap();
///
/// assert_eq!(ns.get::<i32>("a"), Some(&7));
/// assert_eq!(ns.get::<i32>("b"), Some(&9));
/// assert_eq!(ns.get::<i32>("c"), Some(&8));
/// ```
#[derive(Debug, Default)]
pub struct Scope {
    only: Option<BTreeSet<String>>,
    except: Option<BTreeSet<String>>,
    bindings: Vec<(String, Value)>,
}

impl Scope {
    /// Create a scope that resets every name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scope that binds `name` to `val` and resets only `name`.
    ///
    /// More names can be added with [`bind`](Self::bind) or
    /// [`only`](Self::only); each of them is reset as well, and nothing else
    /// is. This is an `only` scope, so adding [`except`](Self::except) makes
    /// it fail with [`Error::ConflictingFilters`].
    pub fn with<T: Any + Send + Sync>(name: impl Into<String>, val: T) -> Self {
        Self::new()
            .only(core::iter::empty::<String>())
            .bind(name, val)
    }

    /// Reset only the given names.
    ///
    /// Names passed to [`bind`](Self::bind) are reset too.
    pub fn only<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only
            .get_or_insert_with(BTreeSet::new)
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Reset every name except the given ones.
    pub fn except<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.except
            .get_or_insert_with(BTreeSet::new)
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Bind `name` to `val` when the scope is entered.
    ///
    /// The binding is made after the snapshot is taken, so the previous value
    /// (or absence) of `name` is what gets restored.
    pub fn bind<T: Any + Send + Sync>(mut self, name: impl Into<String>, val: T) -> Self {
        self.bindings.push((name.into(), Value::new(val)));
        self
    }

    /// Check the options and compute the filter applied on exit.
    pub fn filter(&self) -> Result<Filter> {
        let mut seen = BTreeSet::new();
        for (name, _) in &self.bindings {
            if !seen.insert(name.as_str()) {
                return Err(Error::DuplicateBinding(name.clone()));
            }
        }

        Ok(match (&self.only, &self.except) {
            (Some(_), Some(_)) => return Err(Error::ConflictingFilters),
            (Some(only), None) => {
                let mut names = only.clone();
                names.extend(self.bindings.iter().map(|(name, _)| name.clone()));
                Filter::Only(names)
            }
            (None, Some(except)) => Filter::Except(except.clone()),
            (None, None) => Filter::All,
        })
    }

    /// Enter the scope on `ns`.
    ///
    /// Fails without touching `ns` if the options are invalid.
    pub fn enter(self, ns: &mut Namespace) -> Result<ScopeGuard<'_>> {
        let filter = self.filter()?;
        Ok(ScopeGuard::with_filter(ns, filter, self.bindings))
    }

    /// Run `f` inside the scope, resetting `ns` afterwards.
    ///
    /// Whatever `f` returns, errors included, is passed through unchanged.
    pub fn run<R>(self, ns: &mut Namespace, f: impl FnOnce(&mut Namespace) -> R) -> Result<R> {
        let mut guard = self.enter(ns)?;
        Ok(f(&mut *guard))
    }
}
