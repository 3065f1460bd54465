#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    /// Expands its input only with the `std` feature.
    #[cfg(feature = "std")]
    macro_rules! std {
        ($($tt:tt)*) => { $($tt)* };
    }

    #[cfg(not(feature = "std"))]
    macro_rules! std {
        ($($tt:tt)*) => {};
    }

    /// Expands its input only with the `debug` feature and `debug_assertions`.
    #[cfg(all(debug_assertions, feature = "debug"))]
    macro_rules! debug {
        ($($tt:tt)*) => { $($tt)* };
    }

    #[cfg(not(all(debug_assertions, feature = "debug")))]
    macro_rules! debug {
        ($($tt:tt)*) => {};
    }

    pub(crate) use {debug, std};
}

// -----------------------------------------------------------------------------
// no_std support

crate::cfg::std! {
    extern crate std;
}

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod info;
pub mod inherit;
pub mod mapper;
pub mod object;
pub mod registry;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use inherit::{Registration, Registry, RegistryConfig};
pub use mapper::{MapError, Mapper};
pub use object::{DynamicObject, FieldValue, FromObject};
pub use value::{Map, Value};
