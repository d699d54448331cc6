mod ext_macros;

use std::fmt;

use crate::value::{ToAnyValue, ToValue, Value};

/// A `key = "value"` metadata tag attached to a field declaration.
pub type Tag = (&'static str, &'static str);

/// Types that can describe their own fields.
///
/// A record-shaped type returns its descriptor table: one [`Field`] per
/// declared field, in declaration order. Every other type returns `None`,
/// which makes the accessors of an [`Extractor`](crate::Extractor) fail with
/// [`ExtractError::InvalidRecordKind`](crate::ExtractError::InvalidRecordKind).
///
/// The table is usually generated with `#[derive(Record)]`:
///
/// ```
/// use structextract::{Record, Value};
///
/// #[derive(Record)]
/// struct User {
///     #[extract(json = "user_name", db = "name")]
///     name: String,
///     #[extract(json = "age")]
///     age: u8,
/// }
///
/// let user = User { name: "cat".to_string(), age: 3 };
/// let fields = user.fields().unwrap();
/// assert_eq!(fields[0].name(), "name");
/// assert_eq!(fields[0].tag("db"), Some("name"));
/// assert_eq!(fields[1].value(), Value::UInt8(3));
/// ```
pub trait Record {
    fn fields(&self) -> Option<Vec<Field<'_>>>;
}

/// One entry of a record's descriptor table, borrowing the field it reads.
#[derive(Clone, Copy)]
pub struct Field<'r> {
    name: &'static str,
    tags: &'static [Tag],
    value: FieldValue<'r>,
}

#[derive(Clone, Copy)]
enum FieldValue<'r> {
    Convert(&'r dyn ToValue),
    Any(&'r dyn ToAnyValue),
}

impl<'r> Field<'r> {
    pub fn new(name: &'static str, tags: &'static [Tag], value: &'r dyn ToValue) -> Self {
        Self {
            name,
            tags,
            value: FieldValue::Convert(value),
        }
    }

    /// A field read as [`Value::Any`], for types without a [`ToValue`] impl.
    pub fn new_any(name: &'static str, tags: &'static [Tag], value: &'r dyn ToAnyValue) -> Self {
        Self {
            name,
            tags,
            value: FieldValue::Any(value),
        }
    }

    /// Declared name of the field.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn tags(&self) -> &'static [Tag] {
        self.tags
    }

    /// Value of the tag under `key`. Tags declared with an empty value are
    /// reported as absent.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(tag_key, _)| *tag_key == key)
            .map(|(_, tag_value)| *tag_value)
            .filter(|tag_value| !tag_value.is_empty())
    }

    /// Current value of the field.
    pub fn value(&self) -> Value {
        match self.value {
            FieldValue::Convert(value) => value.to_value(),
            FieldValue::Any(value) => value.to_any_value(),
        }
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .field("value", &self.value())
            .finish()
    }
}
