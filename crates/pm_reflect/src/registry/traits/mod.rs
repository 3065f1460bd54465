mod from_object;

pub use from_object::TypeTraitFromObject;
