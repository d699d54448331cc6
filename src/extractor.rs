use std::collections::{BTreeSet, HashMap};

use log::Level;

use crate::{
    error::ExtractError,
    logging::extract_log,
    record::{Field, Record},
    value::Value,
};

/// Read-only view over a record's fields, names, values and tag aliases.
///
/// Every accessor re-reads the record's descriptor table, so values always
/// reflect the record as it is at the time of the call. The only state the
/// extractor keeps is the set of declared field names to leave out.
///
/// ```
/// use structextract::{Extractor, Record, Value};
///
/// #[derive(Record)]
/// #[allow(non_snake_case)]
/// struct Event {
///     #[extract(json = "field_1")]
///     Field1: String,
///     #[extract(json = "field_2")]
///     Field2: bool,
/// }
///
/// let event = Event { Field1: "hello".to_string(), Field2: true };
/// let extractor = Extractor::new(&event).ignore_field(["Field2"]);
///
/// assert_eq!(extractor.names().unwrap(), vec!["Field1"]);
/// assert_eq!(
///     extractor.names_from_tag_with_prefix("json", "default_").unwrap(),
///     vec!["default_field_1".to_string()]
/// );
/// assert_eq!(extractor.values().unwrap(), vec![Value::from("hello")]);
/// ```
#[derive(Debug)]
pub struct Extractor<'r, R: ?Sized> {
    record: &'r R,
    /// `None` once the record turned out not to be record-shaped.
    ignored: Option<BTreeSet<&'static str>>,
}

impl<'r, R> Extractor<'r, R>
where
    R: Record + ?Sized,
{
    /// Wraps `record`. Never fails: if `R` is not record-shaped, the ignore
    /// set is disabled and every accessor returns
    /// [`ExtractError::InvalidRecordKind`].
    pub fn new(record: &'r R) -> Self {
        let ignored = record.fields().map(|fields| {
            extract_log!(
                Level::Trace,
                "extractor_created",
                "record={} fields={}",
                std::any::type_name::<R>(),
                fields.len()
            );
            BTreeSet::new()
        });

        Self { record, ignored }
    }

    /// Like [`Extractor::new`], but rejects a value that is not record-shaped
    /// up front.
    pub fn try_new(record: &'r R) -> Result<Self, ExtractError> {
        let extractor = Self::new(record);
        if extractor.is_valid() {
            Ok(extractor)
        } else {
            Err(ExtractError::invalid_record_kind::<R>())
        }
    }

    /// Whether the wrapped value was record-shaped at construction.
    pub fn is_valid(&self) -> bool {
        self.ignored.is_some()
    }

    /// Leaves the named fields out of every accessor result.
    ///
    /// Names are matched against declared field names, not tag aliases.
    /// Unknown names are dropped silently, and nothing happens when the
    /// record is not record-shaped.
    pub fn ignore_field<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignore(names);
        self
    }

    /// In-place form of [`Extractor::ignore_field`].
    pub fn ignore<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let (Some(fields), Some(ignored)) = (self.record.fields(), self.ignored.as_mut()) {
            for name in names {
                let name = name.as_ref();
                let Some(field) = fields.iter().find(|field| field.name() == name) else {
                    continue;
                };
                if ignored.insert(field.name()) {
                    extract_log!(
                        Level::Trace,
                        "ignore_field",
                        "record={} field={}",
                        std::any::type_name::<R>(),
                        field.name()
                    );
                }
            }
        }
        self
    }

    /// Declared names currently left out, or `None` when the ignore set is
    /// disabled.
    pub fn ignored_fields(&self) -> Option<&BTreeSet<&'static str>> {
        self.ignored.as_ref()
    }

    /// Declared field names in declaration order.
    pub fn names(&self) -> Result<Vec<&'static str>, ExtractError> {
        Ok(self.fields()?.iter().map(Field::name).collect())
    }

    /// Tag values under `tag_key`, in declaration order. Fields without a
    /// non-empty `tag_key` tag are skipped; an empty `tag_key` yields an
    /// empty list.
    pub fn names_from_tag(&self, tag_key: &str) -> Result<Vec<&'static str>, ExtractError> {
        let fields = self.fields()?;
        if tag_key.is_empty() {
            return Ok(Vec::new());
        }
        Ok(fields
            .iter()
            .filter_map(|field| field.tag(tag_key))
            .collect())
    }

    /// [`Extractor::names_from_tag`] with `prefix` prepended to every name.
    pub fn names_from_tag_with_prefix(
        &self,
        tag_key: &str,
        prefix: &str,
    ) -> Result<Vec<String>, ExtractError> {
        Ok(self
            .names_from_tag(tag_key)?
            .into_iter()
            .map(|name| format!("{prefix}{name}"))
            .collect())
    }

    /// Current field values, index-aligned with [`Extractor::names`].
    pub fn values(&self) -> Result<Vec<Value>, ExtractError> {
        Ok(self.fields()?.iter().map(Field::value).collect())
    }

    /// Current values of the fields carrying a non-empty `tag_key` tag,
    /// index-aligned with [`Extractor::names_from_tag`].
    pub fn values_from_tag(&self, tag_key: &str) -> Result<Vec<Value>, ExtractError> {
        let fields = self.fields()?;
        if tag_key.is_empty() {
            return Ok(Vec::new());
        }
        Ok(fields
            .iter()
            .filter(|field| field.tag(tag_key).is_some())
            .map(Field::value)
            .collect())
    }

    /// Declared field name to current value.
    pub fn field_value_map(&self) -> Result<HashMap<&'static str, Value>, ExtractError> {
        Ok(self
            .fields()?
            .iter()
            .map(|field| (field.name(), field.value()))
            .collect())
    }

    /// Tag value under `tag_key` to current value. Fields without the tag
    /// are absent; an unknown `tag_key` yields an empty map.
    pub fn field_value_from_tag_map(
        &self,
        tag_key: &str,
    ) -> Result<HashMap<&'static str, Value>, ExtractError> {
        Ok(self
            .fields()?
            .iter()
            .filter_map(|field| field.tag(tag_key).map(|tag| (tag, field.value())))
            .collect())
    }

    /// Descriptor table minus ignored fields, in declaration order.
    fn fields(&self) -> Result<Vec<Field<'r>>, ExtractError> {
        let (Some(mut fields), Some(ignored)) = (self.record.fields(), self.ignored.as_ref())
        else {
            return Err(ExtractError::invalid_record_kind::<R>());
        };
        fields.retain(|field| !ignored.contains(field.name()));
        Ok(fields)
    }
}
