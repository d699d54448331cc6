use std::{
    any::Any,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::value::Value;

/// A field value kept as its original Rust type.
///
/// Produced for fields marked `#[extract(any)]`, whose type has no [`Value`]
/// variant of its own (nested structs, foreign types). The value is recovered
/// with [`AnyValue::downcast_ref`]. Two `AnyValue`s are equal only when they
/// share the same allocation, i.e. one is a clone of the other.
#[derive(Clone)]
pub struct AnyValue {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl AnyValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            inner: Arc::new(value),
        }
    }

    /// Rust type name of the wrapped value.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    fn addr(&self) -> usize {
        Arc::as_ptr(&self.inner) as *const () as usize
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyValue").field(&self.type_name).finish()
    }
}

impl PartialEq for AnyValue {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for AnyValue {}

impl Hash for AnyValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl PartialOrd for AnyValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AnyValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.type_name
            .cmp(other.type_name)
            .then_with(|| self.addr().cmp(&other.addr()))
    }
}

/// Reads a field of any cloneable type into [`Value::Any`].
///
/// Used by `#[extract(any)]` fields; the clone is moved into the returned
/// value so it outlives the record.
pub trait ToAnyValue {
    fn to_any_value(&self) -> Value;
}

impl<T: Any + Clone + Send + Sync> ToAnyValue for T {
    fn to_any_value(&self) -> Value {
        Value::Any(AnyValue::new(self.clone()))
    }
}
