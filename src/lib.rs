//! Field names, current values and tag aliases read out of Rust structs.
//!
//! A struct opts in with `#[derive(Record)]`, which generates its descriptor
//! table: the declared field names in declaration order, the metadata tags
//! attached with `#[extract(key = "value")]`, and a borrow of each field. An
//! [`Extractor`] wraps a reference to such a value and answers queries over
//! that table, optionally leaving some fields out.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use structextract::{Extractor, Record, Value};
//!
//! #[derive(Record)]
//! struct Article {
//!     #[extract(json = "title", db = "title")]
//!     title: String,
//!     #[extract(json = "published")]
//!     published: bool,
//!     #[extract(json = "date")]
//!     date: Value,
//! }
//!
//! let article = Article {
//!     title: "hello".to_string(),
//!     published: true,
//!     date: Value::from("2016-10-10"),
//! };
//!
//! let extractor = Extractor::new(&article).ignore_field(["date"]);
//! assert_eq!(extractor.names().unwrap(), vec!["title", "published"]);
//! assert_eq!(extractor.names_from_tag("db").unwrap(), vec!["title"]);
//! assert_eq!(
//!     extractor.field_value_from_tag_map("json").unwrap(),
//!     HashMap::from([
//!         ("title", Value::from("hello")),
//!         ("published", Value::Boolean(true)),
//!     ])
//! );
//! ```
//!
//! Values that are not structs with named fields (scalars, strings,
//! collections) can still be wrapped, but every accessor then fails with
//! [`ExtractError::InvalidRecordKind`].

mod error;
mod extractor;
mod logging;
mod record;
mod value;

pub use crate::{
    error::ExtractError,
    extractor::Extractor,
    record::{Field, Record, Tag},
    value::{AnyValue, ToAnyValue, ToValue, Value},
};
/// Derives [`Record`] for a struct with named fields.
///
/// Field attributes:
/// - `#[extract(json = "field_1", db = "field1")]` declares metadata tags; any identifier can be
///   used as the tag key.
/// - `#[extract(skip)]` leaves the field out of the descriptor table.
/// - `#[extract(any)]` reads the field as [`Value::Any`] through [`ToAnyValue`], for field types
///   without a [`ToValue`] impl such as nested structs. The type must be `Clone + Send + Sync`.
///
/// Container attribute:
/// - `#[extract(crate = "path::to::structextract")]` for when the runtime crate is re-exported
///   under another path.
pub use structextract_macros::Record;
