#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Derived code refers to `::fw_meta`; this keeps the path valid inside the
// crate itself, for the built-in markers and the unit tests.
extern crate self as fw_meta;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod construct;
pub mod error;
pub mod impls;
pub mod info;
pub mod resolve;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use construct::default_constructor;
pub use error::MetaError;
pub use fw_meta_derive as derive;
pub use reflection::{Enum, Reflect, ReflectRef, Struct};
pub use resolve::{find_field, find_field_optional, resolve_fields};
pub use value::{FieldValue, extract_value};
