//! Items referenced by code that `#[derive(Reflect)]` generates.
//!
//! Not part of the public API.

use crate::info::{StructInfo, TypeInfo};

#[cfg(feature = "auto_register")]
pub mod auto_register;

/// Unwraps the struct info a derived `Typed` impl produced.
#[inline]
pub fn struct_info_of(info: &'static TypeInfo) -> &'static StructInfo {
    match info {
        TypeInfo::Struct(info) => info,
        _ => unreachable!("`{}` derives `Struct` without struct info", info.type_path()),
    }
}
