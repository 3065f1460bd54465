use alloc::string::String;

use thiserror::Error;

use crate::info::TypeRef;

// -----------------------------------------------------------------------------
// Error

/// A [`Registration`](super::Registration) rejected by [`Registry::add`](super::Registry::add).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegisterError {
    #[error("type `{parent}` needs parent options to be registered")]
    MissingDiscriminatorConfig { parent: TypeRef },

    #[error("type `{parent}` cannot be registered among its children")]
    SelfRegistrationNotAllowed { parent: TypeRef },

    #[error("type `{child}` needs to extend `{parent}` to be registered as a child")]
    InvalidChild { child: TypeRef, parent: TypeRef },
}

/// A failure of [`Registry::resolve`](super::Registry::resolve).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveError {
    #[error("missing attribute `{field}` to discriminate the subclass of `{parent}`")]
    MissingDiscriminator { parent: TypeRef, field: String },

    #[error("no matching subclass for parent type `{parent}` with discriminator value `{value}`")]
    NoMatchingSubclass { parent: TypeRef, value: String },

    #[error("discriminator `{field}` of `{parent}` must be a string or a number, found {found}")]
    InvalidDiscriminatorType {
        parent: TypeRef,
        field: String,
        found: &'static str,
    },

    #[error("resolving `{parent}` exceeded the maximum inheritance depth of {max_depth}")]
    DepthExceeded { parent: TypeRef, max_depth: usize },
}
