//! Reflection for foreign types, and the helpers used to write such impls.
//!
//! - Numbers, `bool`, `char` and `String` are opaque, see [`impl_opaque!`](crate::impl_opaque).
//! - `Vec<T>` is opaque for any `T: Serialize`.
//! - `Option<T>` is nullable.

mod cell;
mod opaque;
mod option;
mod vec;

pub use cell::{GenericTypeCell, GenericTypeInfoCell, GenericTypePathCell};
pub use cell::{NonGenericTypeCell, NonGenericTypeInfoCell};

/// Concatenates string slices into one owned `String`.
///
/// ```
/// assert_eq!(fw_meta::impls::concat(&["Option<", "u8", ">"]), "Option<u8>");
/// ```
pub fn concat(parts: &[&str]) -> String {
    let mut out = String::with_capacity(parts.iter().map(|s| s.len()).sum());
    parts.iter().for_each(|s| out.push_str(s));
    out
}

/// Returns the last `::` segment of a type path.
///
/// ```
/// use fw_meta::impls::last_segment;
///
/// assert_eq!(last_segment("alloc::string::String"), "String");
/// assert_eq!(last_segment("u8"), "u8");
/// ```
#[inline]
pub fn last_segment(path: &'static str) -> &'static str {
    path.rsplit_once("::").map_or(path, |(_, name)| name)
}
