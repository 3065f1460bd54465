use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::info::TypeRef;
use crate::object::{FieldValue, FromObject, FromObjectError};
use crate::value::Value;

// -----------------------------------------------------------------------------
// DynamicObject

/// An instance of a resolved type, holding named [`FieldValue`]s.
///
/// # Examples
///
/// ```
/// use pm_reflect::info::TypeRef;
/// use pm_reflect::object::DynamicObject;
///
/// struct Car;
///
/// let mut car = DynamicObject::new(TypeRef::of::<Car>());
/// car.insert_value("color", "red");
/// car.insert_value("wheels", 4);
///
/// assert!(car.is::<Car>());
/// assert_eq!(car.str_field("color").unwrap(), "red");
/// assert_eq!(car.i64_field("wheels").unwrap(), 4);
/// assert!(car.bool_field("electric").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicObject {
    ty: TypeRef,
    fields: BTreeMap<String, FieldValue>,
}

impl DynamicObject {
    /// Creates an object of the given type without fields.
    #[inline]
    pub const fn new(ty: TypeRef) -> Self {
        Self {
            ty,
            fields: BTreeMap::new(),
        }
    }

    /// Returns the type of this object.
    #[inline(always)]
    pub const fn ty(&self) -> TypeRef {
        self.ty
    }

    /// Returns `true` if this object is of type `T`.
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.ty.is::<T>()
    }

    /// Fails with [`FromObjectError::TypeMismatch`] unless this object is of type `T`.
    pub fn expect_type<T: ?Sized + 'static>(&self) -> Result<(), FromObjectError> {
        if self.is::<T>() {
            Ok(())
        } else {
            Err(FromObjectError::TypeMismatch {
                expected: TypeRef::of::<T>(),
                found: self.ty,
            })
        }
    }

    /// Binds a field, returning the previous value if there was one.
    #[inline]
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        self.fields.insert(name.into(), value)
    }

    /// Binds a field to a raw value.
    #[inline]
    pub fn insert_value(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<FieldValue> {
        self.insert(name, FieldValue::Value(value.into()))
    }

    /// Removes a field, returning its value if it was bound.
    #[inline]
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    /// Returns the value bound to the field.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the number of bound fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the bound fields, ordered by name.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    // -------------------------------------------------------------------------
    // Typed accessors

    fn require(&self, field: &'static str) -> Result<&FieldValue, FromObjectError> {
        self.fields
            .get(field)
            .ok_or(FromObjectError::MissingField { ty: self.ty, field })
    }

    #[inline]
    fn invalid(&self, field: &'static str, expected: &'static str) -> FromObjectError {
        FromObjectError::InvalidField {
            ty: self.ty,
            field,
            expected,
        }
    }

    /// Returns the raw value of a field copied verbatim.
    pub fn value_field(&self, field: &'static str) -> Result<&Value, FromObjectError> {
        self.require(field)?
            .as_value()
            .ok_or_else(|| self.invalid(field, "value"))
    }

    pub fn str_field(&self, field: &'static str) -> Result<&str, FromObjectError> {
        self.value_field(field)?
            .as_str()
            .ok_or_else(|| self.invalid(field, "string"))
    }

    pub fn bool_field(&self, field: &'static str) -> Result<bool, FromObjectError> {
        self.value_field(field)?
            .as_bool()
            .ok_or_else(|| self.invalid(field, "boolean"))
    }

    pub fn i64_field(&self, field: &'static str) -> Result<i64, FromObjectError> {
        self.value_field(field)?
            .as_i64()
            .ok_or_else(|| self.invalid(field, "integer"))
    }

    pub fn u64_field(&self, field: &'static str) -> Result<u64, FromObjectError> {
        self.value_field(field)?
            .as_u64()
            .ok_or_else(|| self.invalid(field, "unsigned integer"))
    }

    pub fn f64_field(&self, field: &'static str) -> Result<f64, FromObjectError> {
        self.value_field(field)?
            .as_f64()
            .ok_or_else(|| self.invalid(field, "number"))
    }

    /// Builds `T` from a nested object field.
    pub fn object_field<T: FromObject>(&self, field: &'static str) -> Result<T, FromObjectError> {
        let object = self
            .require(field)?
            .as_object()
            .ok_or_else(|| self.invalid(field, "object"))?;
        T::from_object(object)
    }

    /// Builds a `T` from every element of a nested array field.
    pub fn array_field<T: FromObject>(
        &self,
        field: &'static str,
    ) -> Result<Vec<T>, FromObjectError> {
        self.require(field)?
            .as_array()
            .ok_or_else(|| self.invalid(field, "array"))?
            .iter()
            .map(|item| match item {
                FieldValue::Object(object) => T::from_object(object),
                _ => Err(self.invalid(field, "array of objects")),
            })
            .collect()
    }
}

// -----------------------------------------------------------------------------
// Tests
