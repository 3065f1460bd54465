use thiserror::Error;

use crate::info::TypeRef;
use crate::inherit::ResolveError;
use crate::object::FromObjectError;

/// A failure of the [`Mapper`](super::Mapper).
///
/// Errors of the [`Registry`](crate::inherit::Registry) and of
/// [`FromObject`](crate::object::FromObject) implementations are carried unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MapError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("deserializing an instance of `{ty}` can only work with an object, but {found} given")]
    ObjectExpected { ty: TypeRef, found: &'static str },

    #[error("deserializing an array of `{ty}` can only work with an array of objects, but {found} given")]
    ArrayExpected { ty: TypeRef, found: &'static str },

    #[error("type `{ty}` has no `TypeTraitFromObject` to be constructed")]
    NotConstructible { ty: TypeRef },

    #[error(transparent)]
    FromObject(#[from] FromObjectError),
}
