use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::info::TypeRef;

/// One parent type and the children its discriminator values select.
///
/// Several registrations may target the same parent; the [`Registry`]
/// merges them at resolution time.
///
/// # Examples
///
/// ```
/// use pm_reflect::inherit::Registration;
///
/// struct Vehicle;
/// struct Car;
/// struct Bike;
///
/// let registration = Registration::of::<Vehicle>()
///     .with_child::<Car>("car")
///     .with_child::<Bike>("bike")
///     .with_child::<Car>("auto");
///
/// assert!(registration.parent().is::<Vehicle>());
/// assert_eq!(registration.len(), 3);
/// assert!(registration.get("auto").unwrap().is::<Car>());
/// ```
///
/// [`Registry`]: super::Registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    parent: TypeRef,
    children: Vec<(Cow<'static, str>, TypeRef)>,
}

impl Registration {
    /// Creates a registration for `parent` without children.
    #[inline]
    pub const fn new(parent: TypeRef) -> Self {
        Self {
            parent,
            children: Vec::new(),
        }
    }

    /// Creates a registration for `P` without children.
    #[inline]
    pub fn of<P: ?Sized + 'static>() -> Self {
        Self::new(TypeRef::of::<P>())
    }

    /// Maps a discriminator value to `C`.
    #[inline]
    pub fn with_child<C: ?Sized + 'static>(self, value: impl Into<Cow<'static, str>>) -> Self {
        self.with_child_type(value, TypeRef::of::<C>())
    }

    /// Maps a discriminator value to `child`.
    ///
    /// Reusing a value within one registration replaces its child in place.
    pub fn with_child_type(mut self, value: impl Into<Cow<'static, str>>, child: TypeRef) -> Self {
        let value = value.into();
        match self.children.iter_mut().find(|(key, _)| *key == value) {
            Some(entry) => entry.1 = child,
            None => self.children.push((value, child)),
        }
        self
    }

    /// Returns the parent type.
    #[inline(always)]
    pub const fn parent(&self) -> TypeRef {
        self.parent
    }

    /// Returns the child registered under the discriminator value.
    pub fn get(&self, value: &str) -> Option<TypeRef> {
        self.children
            .iter()
            .find(|(key, _)| key == value)
            .map(|(_, child)| *child)
    }

    /// Iterates over `(discriminator value, child)` pairs in insertion order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = (&str, TypeRef)> {
        self.children.iter().map(|(key, child)| (key.as_ref(), *child))
    }

    /// Returns `true` if the parent is listed among its own children.
    pub fn has_self(&self) -> bool {
        self.children.iter().any(|(_, child)| *child == self.parent)
    }

    /// Returns the number of children.
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
