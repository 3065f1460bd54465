use alloc::boxed::Box;
use core::any::Any;

/// A capability attached to a [`TypeMeta`], looked up by its own type.
///
/// Any `Clone + Send + Sync + 'static` type is a `TypeTrait`.
///
/// [`TypeMeta`]: crate::registry::TypeMeta
pub trait TypeTrait: Any + Send + Sync {
    /// Clones the trait object.
    fn clone_type_trait(&self) -> Box<dyn TypeTrait>;
}

impl<T: Clone + Any + Send + Sync> TypeTrait for T {
    fn clone_type_trait(&self) -> Box<dyn TypeTrait> {
        Box::new(self.clone())
    }
}
