//! `Record` impls for types that are not record-shaped, plus forwarding impls
//! for smart pointers around a record.
//!
//! Scalars, strings and collections report no descriptor table, so an
//! extractor built over them fails every accessor with `InvalidRecordKind`.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::Arc,
};

use super::{Field, Record};
use crate::value::Value;

macro_rules! not_a_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                #[inline]
                fn fields(&self) -> Option<Vec<Field<'_>>> {
                    None
                }
            }
        )*
    };
}

not_a_record!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
    Cow<'_, str>,
    Value,
);

macro_rules! not_a_record_generic {
    ($(impl<$($param:ident),+> $ty:ty),* $(,)?) => {
        $(
            impl<$($param),+> Record for $ty {
                #[inline]
                fn fields(&self) -> Option<Vec<Field<'_>>> {
                    None
                }
            }
        )*
    };
}

not_a_record_generic!(
    impl<T> [T],
    impl<T> Vec<T>,
    impl<T> VecDeque<T>,
    impl<T> Option<T>,
    impl<T> HashSet<T>,
    impl<T> BTreeSet<T>,
    impl<K, V> HashMap<K, V>,
    impl<K, V> BTreeMap<K, V>,
);

macro_rules! not_a_record_tuple {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name),+> Record for ($($name,)+) {
                #[inline]
                fn fields(&self) -> Option<Vec<Field<'_>>> {
                    None
                }
            }
        )*
    };
}

not_a_record_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
);

impl<T, const N: usize> Record for [T; N] {
    #[inline]
    fn fields(&self) -> Option<Vec<Field<'_>>> {
        None
    }
}

macro_rules! forward_record {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: Record + ?Sized> Record for $ptr {
                #[inline]
                fn fields(&self) -> Option<Vec<Field<'_>>> {
                    (**self).fields()
                }
            }
        )*
    };
}

forward_record!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);
