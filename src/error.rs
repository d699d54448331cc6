use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The wrapped value has no field descriptor table (a scalar, string or
    /// sequence rather than a struct with named fields).
    #[error("invalid record kind: `{type_name}` is not a struct with named fields")]
    InvalidRecordKind { type_name: &'static str },
}

impl ExtractError {
    pub(crate) fn invalid_record_kind<R: ?Sized>() -> Self {
        ExtractError::InvalidRecordKind {
            type_name: std::any::type_name::<R>(),
        }
    }
}
