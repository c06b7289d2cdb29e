use alloc::{string::String, vec::Vec};
use core::{
    fmt,
    ops::{Deref, DerefMut},
};

use crate::{Filter, Namespace, Snapshot, Value};

/// An active reset scope.
///
/// Holds a snapshot of the namespace taken on entry and reconciles the
/// namespace against it when dropped:
///
/// - names bound inside the scope are removed;
/// - names rebound or removed inside the scope get their snapshot value back;
///
/// restricted to the names selected by the [`Filter`]. Names the filter does
/// not select keep whatever value the scope left them with. Under
/// [`Filter::Except`], an exempt name the scope unbound is still restored.
///
/// The guard dereferences to the namespace, which is how the scope body
/// works with it. Nested scopes are entered through the outer guard and so
/// are always exited first.
///
/// Created by [`Namespace::scope`] or [`Scope::enter`](crate::Scope::enter).
pub struct ScopeGuard<'ns> {
    ns: &'ns mut Namespace,
    snapshot: Snapshot,
    filter: Filter,
}

impl<'ns> ScopeGuard<'ns> {
    /// Enter a scope that resets every name of `ns`.
    pub fn enter(ns: &'ns mut Namespace) -> Self {
        Self::with_filter(ns, Filter::All, Vec::new())
    }

    pub(crate) fn with_filter(
        ns: &'ns mut Namespace,
        filter: Filter,
        bindings: Vec<(String, Value)>,
    ) -> Self {
        let snapshot = ns.snapshot();
        log::debug!(
            "enter scope: {} bindings captured, {} initial values, filter {:?}",
            snapshot.len(),
            bindings.len(),
            filter
        );
        for (name, val) in bindings {
            ns.insert_value(name, val);
        }
        Self {
            ns,
            snapshot,
            filter,
        }
    }

    /// The bindings captured on entry.
    ///
    /// Not to be confused with [`Namespace::snapshot`], which copies the
    /// current bindings.
    #[inline]
    pub fn entry_snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The filter applied on exit.
    #[inline]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Reset the namespace now, without leaving the scope.
    ///
    /// Calling this more than once has no further effect unless the namespace
    /// is changed in between.
    pub fn restore(&mut self) {
        let snapshot = &self.snapshot;
        let filter = &self.filter;

        let mut removed = 0;
        self.ns.bindings_mut().retain(|name, _| {
            if snapshot.contains(name) || !filter.resets(name) {
                return true;
            }
            log::trace!("remove `{name}`");
            removed += 1;
            false
        });

        let mut restored = 0;
        for (name, old) in snapshot.iter() {
            let unchanged = match self.ns.value(name) {
                Some(cur) => !filter.resets(name) || Value::ptr_eq(cur, old),
                // Names exempted by `Except` still come back if the scope unbound them.
                None => matches!(filter, Filter::Only(_)) && !filter.resets(name),
            };
            if !unchanged {
                log::trace!("restore `{name}`");
                self.ns.insert_value(name, old.clone());
                restored += 1;
            }
        }

        log::debug!("reset scope: {restored} restored, {removed} removed");
    }

    /// Leave the scope, resetting the namespace.
    ///
    /// Same as dropping the guard.
    pub fn exit(self) {}
}

impl Deref for ScopeGuard<'_> {
    type Target = Namespace;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &*self.ns
    }
}

impl DerefMut for ScopeGuard<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.ns
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.restore();
    }
}

impl fmt::Debug for ScopeGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeGuard")
            .field("snapshot", &self.snapshot)
            .field("filter", &self.filter)
            .finish()
    }
}
