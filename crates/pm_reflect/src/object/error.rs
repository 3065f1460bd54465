use thiserror::Error;

use crate::info::TypeRef;

/// Failure to build a typed value from a [`DynamicObject`](super::DynamicObject).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FromObjectError {
    #[error("expected an object of type `{expected}`, found `{found}`")]
    TypeMismatch { expected: TypeRef, found: TypeRef },

    #[error("missing field `{field}` on `{ty}`")]
    MissingField { ty: TypeRef, field: &'static str },

    #[error("field `{field}` on `{ty}` is not a valid {expected}")]
    InvalidField {
        ty: TypeRef,
        field: &'static str,
        expected: &'static str,
    },
}
