use core::any::TypeId;
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// TypeRef

/// A cheap, copyable handle naming a Rust type.
///
/// Equality and hashing only consider the [`TypeId`]; the stored path is
/// used for lookups by name and for error messages.
///
/// # Examples
///
/// ```
/// use pm_reflect::info::TypeRef;
///
/// struct Vehicle;
///
/// let ty = TypeRef::of::<Vehicle>();
/// assert_eq!(ty.name(), "Vehicle");
/// assert!(ty.is::<Vehicle>());
/// assert!(ty.path().ends_with("::Vehicle"));
/// ```
#[derive(Clone, Copy)]
pub struct TypeRef {
    id: TypeId,
    path: &'static str,
}

impl TypeRef {
    /// Returns the [`TypeRef`] of `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: core::any::type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`].
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type path, e.g. `my_crate::vehicle::Car`.
    #[inline(always)]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Returns the short type name, e.g. `Car`.
    ///
    /// Generic arguments are not part of the short name.
    pub fn name(&self) -> &'static str {
        short_name(self.path)
    }

    /// Returns `true` if this is the [`TypeRef`] of `T`.
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

fn short_name(path: &'static str) -> &'static str {
    let path = match path.find('<') {
        Some(index) => &path[..index],
        None => path,
    };
    match path.rfind("::") {
        Some(index) => &path[index + 2..],
        None => path,
    }
}

impl PartialEq for TypeRef {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use super::{TypeRef, short_name};

    struct Car;

    #[test]
    fn short_names() {
        assert_eq!(short_name("a::b::Car"), "Car");
        assert_eq!(short_name("Car"), "Car");
        assert_eq!(short_name("alloc::vec::Vec<a::b::Car>"), "Vec");
        assert_eq!(TypeRef::of::<Vec<Car>>().name(), "Vec");
    }

    #[test]
    fn identity_ignores_path() {
        let a = TypeRef::of::<Car>();
        let b = TypeRef::of::<Car>();
        assert_eq!(a, b);
        assert_ne!(a, TypeRef::of::<u8>());
        assert_eq!(format!("{a}"), "Car");
        assert!(format!("{a:?}").ends_with("tests::Car"));
    }
}
