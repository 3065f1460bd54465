use alloc::borrow::Cow;
use core::fmt;

use crate::info::TypeRef;

// -----------------------------------------------------------------------------
// TypeHint

/// The target of a deserialization: one object or an array of objects.
///
/// Used both as the argument of [`Mapper::deserialize`] and as the nested
/// type hint of a field.
///
/// [`Mapper::deserialize`]: crate::mapper::Mapper::deserialize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeHint {
    /// A single object of the given (possibly polymorphic) type.
    Object(TypeRef),
    /// An array whose elements are objects of the given type.
    Array(TypeRef),
}

impl TypeHint {
    /// Shortcut for `TypeHint::Object(TypeRef::of::<T>())`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::Object(TypeRef::of::<T>())
    }

    /// Shortcut for `TypeHint::Array(TypeRef::of::<T>())`.
    #[inline]
    pub fn array_of<T: ?Sized + 'static>() -> Self {
        Self::Array(TypeRef::of::<T>())
    }

    /// Returns the object (or element) type.
    #[inline]
    pub const fn ty(&self) -> TypeRef {
        match self {
            Self::Object(ty) | Self::Array(ty) => *ty,
        }
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(ty) => write!(f, "{ty}"),
            Self::Array(ty) => write!(f, "[{ty}]"),
        }
    }
}

// -----------------------------------------------------------------------------
// FieldMeta

/// Static facts about one field of a type.
///
/// - `deserialize_name`: the data key this field is read from.
/// - `serialize_name`: the data key this field is written to.
/// - `transient`: the field is never written by [`Mapper::serialize`].
/// - `hint`: the field holds a nested object (or array of objects) that is
///   deserialized as the given type, resolving subtypes if it is polymorphic.
///
/// # Examples
///
/// ```
/// use pm_reflect::info::{FieldMeta, TypeHint};
///
/// struct Wheel;
///
/// let field = FieldMeta::new("wheels")
///     .with_deserialize_name("wheel_list")
///     .with_hint(TypeHint::array_of::<Wheel>());
///
/// assert_eq!(field.name(), "wheels");
/// assert_eq!(field.deserialize_name(), "wheel_list");
/// assert_eq!(field.serialize_name(), "wheels");
/// assert!(!field.is_transient());
/// ```
///
/// [`Mapper::serialize`]: crate::mapper::Mapper::serialize
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMeta {
    name: &'static str,
    deserialize_name: Option<Cow<'static, str>>,
    serialize_name: Option<Cow<'static, str>>,
    transient: bool,
    hint: Option<TypeHint>,
}

impl FieldMeta {
    /// Creates metadata for the field with the given name, without renaming.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            deserialize_name: None,
            serialize_name: None,
            transient: false,
            hint: None,
        }
    }

    /// Reads and writes the field under another data key.
    pub fn with_name(self, name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        self.with_deserialize_name(name.clone())
            .with_serialize_name(name)
    }

    /// Reads the field from another data key.
    #[inline]
    pub fn with_deserialize_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.deserialize_name = Some(name.into());
        self
    }

    /// Writes the field to another data key.
    #[inline]
    pub fn with_serialize_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.serialize_name = Some(name.into());
        self
    }

    /// Marks the field as transient: it is omitted on serialization.
    #[inline]
    pub const fn transient(mut self) -> Self {
        self.transient = true;
        self
    }

    /// Deserializes the field's value as the given type.
    #[inline]
    pub const fn with_hint(mut self, hint: TypeHint) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Returns the field name.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the data key read on deserialization.
    pub fn deserialize_name(&self) -> &str {
        self.deserialize_name.as_deref().unwrap_or(self.name)
    }

    /// Returns `true` if the field is read from a key other than its own name.
    pub fn is_renamed_on_deserialize(&self) -> bool {
        self.deserialize_name
            .as_deref()
            .is_some_and(|key| key != self.name)
    }

    /// Returns the data key written on serialization.
    pub fn serialize_name(&self) -> &str {
        self.serialize_name.as_deref().unwrap_or(self.name)
    }

    /// Returns `true` if the field is omitted on serialization.
    #[inline(always)]
    pub const fn is_transient(&self) -> bool {
        self.transient
    }

    /// Returns the nested type hint, if any.
    #[inline(always)]
    pub const fn hint(&self) -> Option<TypeHint> {
        self.hint
    }
}

// -----------------------------------------------------------------------------
// Tests
