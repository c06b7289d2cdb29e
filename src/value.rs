use alloc::sync::Arc;
use core::{any::Any, fmt};

/// A shared reference to a bound object.
///
/// Cloning a `Value` is a shallow copy: both clones refer to the same object.
#[derive(Clone)]
pub struct Value {
    obj: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Value {
    /// Wraps `val` into a new value.
    pub fn new<T: Any + Send + Sync>(val: T) -> Self {
        Self {
            obj: Arc::new(val),
            type_name: core::any::type_name::<T>(),
        }
    }

    /// Returns true if the object is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.obj.is::<T>()
    }

    /// Returns a reference to the object if it is of type `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.obj.downcast_ref()
    }

    /// Returns a mutable reference to the object if it is of type `T` and no
    /// other `Value` refers to it.
    pub fn get_mut<T: Any>(&mut self) -> Option<&mut T> {
        Arc::get_mut(&mut self.obj)?.downcast_mut()
    }

    /// Name of the type this value was created from.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns true if both values refer to the same object.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.obj, &other.obj)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("type", &self.type_name)
            .field("refs", &Arc::strong_count(&self.obj))
            .finish()
    }
}
