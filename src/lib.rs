#![doc = include_str!("../README.md")]
#![no_std]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod error;
pub use error::{Error, Result};

mod filter;
pub use filter::Filter;

mod guard;
pub use guard::ScopeGuard;

mod ns;
pub use ns::{Namespace, Snapshot};

mod scope;
pub use scope::Scope;

mod value;
pub use value::Value;

use spin::{Lazy, Mutex};

/// Get a static reference to the session namespace.
///
/// This is the namespace shared by everything running in the current
/// interactive session. Lock it and enter a scope on the guard:
///
/// ```
/// # use scope_reset::session_ns;
/// let mut ns = session_ns().lock();
/// ns.insert("answer", 42);
/// {
///     let mut scope = ns.scope();
///     scope.insert("answer", 0);
/// }
/// assert_eq!(ns.get::<i32>("answer"), Some(&42));
/// ```
pub fn session_ns() -> &'static Mutex<Namespace> {
    static NS: Lazy<Mutex<Namespace>> = Lazy::new(|| Mutex::new(Namespace::new()));
    &NS
}
