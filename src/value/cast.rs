use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::Arc,
};

use crate::value::Value;

/// Reads a field's current value into a [`Value`].
///
/// Implemented for the scalar, string and sequence types a record field is
/// usually declared with. A field declared as [`Value`] is passed through
/// unchanged, which keeps whatever variant the caller stored in it.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

macro_rules! impl_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ToValue for $ty {
                #[inline]
                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }
            }

            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_scalar!(
    bool => Boolean,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    i128 => Int128,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    u128 => UInt128,
    f32 => Float32,
    f64 => Float64,
    char => Char,
);

// isize/usize widen to the 64-bit variants; wider targets are not supported.
impl ToValue for isize {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Int64(*self as i64)
    }
}

impl ToValue for usize {
    #[inline]
    fn to_value(&self) -> Value {
        Value::UInt64(*self as u64)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Value {
        Value::String(self.as_ref().to_owned())
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for VecDeque<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<K: ToValue, V: ToValue, S> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.to_value(), value.to_value()))
                .collect(),
        )
    }
}

impl<K: ToValue, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.to_value(), value.to_value()))
                .collect(),
        )
    }
}

impl<T: ToValue, S> ToValue for HashSet<T, S> {
    fn to_value(&self) -> Value {
        let sorted: BTreeSet<Value> = self.iter().map(ToValue::to_value).collect();
        Value::List(sorted.into_iter().collect())
    }
}

impl<T: ToValue> ToValue for BTreeSet<T> {
    fn to_value(&self) -> Value {
        let sorted: BTreeSet<Value> = self.iter().map(ToValue::to_value).collect();
        Value::List(sorted.into_iter().collect())
    }
}

macro_rules! impl_tuple {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name: ToValue),+> ToValue for ($($name,)+) {
                #[allow(non_snake_case)]
                fn to_value(&self) -> Value {
                    let ($($name,)+) = self;
                    Value::Tuple(vec![$($name.to_value()),+])
                }
            }
        )*
    };
}

impl_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
);

macro_rules! impl_deref {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: ToValue + ?Sized> ToValue for $ptr {
                #[inline]
                fn to_value(&self) -> Value {
                    (**self).to_value()
                }
            }
        )*
    };
}

impl_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
