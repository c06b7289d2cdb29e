use alloc::{collections::BTreeSet, string::String};

/// Which names a [`ScopeGuard`](crate::ScopeGuard) resets on exit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// Reset every name.
    #[default]
    All,
    /// Reset only these names.
    Only(BTreeSet<String>),
    /// Reset every name except these.
    Except(BTreeSet<String>),
}

impl Filter {
    /// Returns true if `name` is reset on exit.
    pub fn resets(&self, name: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(names) => names.contains(name),
            Filter::Except(names) => !names.contains(name),
        }
    }
}
