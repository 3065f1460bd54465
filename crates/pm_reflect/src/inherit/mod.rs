//! Polymorphic type resolution.
//!
//! A [`Registration`] declares, for one polymorphic parent type, which child
//! type each discriminator value selects. The [`Registry`] accumulates
//! registrations and resolves, for a parent type and a data object, the
//! concrete type to instantiate, descending one level of inheritance at a time.
//!
//! ## Resolution rules
//!
//! - A type without [`ParentOptions`] resolves to itself.
//! - The children of a parent are the union of every registration for it;
//!   a discriminator value registered twice selects the latest child.
//! - A missing or `null` discriminator resolves to the parent only if it
//!   allows itself *and* was never registered among its own children.
//! - An unknown discriminator value resolves to the parent if it allows itself.
//! - A child with its own, different discriminator field is resolved again
//!   against the same data; a child reusing its parent's field is final.
//!
//! [`ParentOptions`]: crate::info::ParentOptions

// -----------------------------------------------------------------------------
// Modules

mod config;
mod error;
mod registration;
mod registry;

// -----------------------------------------------------------------------------
// Exports

pub use config::RegistryConfig;
pub use error::{RegisterError, ResolveError};
pub use registration::Registration;
pub use registry::Registry;
