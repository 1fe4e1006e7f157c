use crate::Struct;
use crate::error::FieldNotFoundError;
use crate::info::{FieldInfo, StructInfo};

/// Finds the declared field `name` of `T`, or of the bases `T` opts into.
///
/// The type's own declared fields are searched first, excluded ones
/// included. The search only moves on to the base while the type being
/// searched carries [`IncludeBase`](crate::info::IncludeBase), so a field of
/// a grandparent is found only if both links in the chain opt in.
///
/// # Errors
///
/// [`FieldNotFoundError`] if no such field is reachable.
///
/// # Examples
///
/// ```
/// use fw_meta::{derive::Reflect, find_field};
///
/// #[derive(Reflect)]
/// struct Account {
///     #[reflect(skip)]
///     password: String,
/// }
///
/// // Lookup ignores the serialization policy.
/// assert_eq!(find_field::<Account>("password").unwrap().name(), "password");
/// assert!(find_field::<Account>("email").is_err());
/// ```
#[inline]
pub fn find_field<T: Struct>(name: &str) -> Result<&'static FieldInfo, FieldNotFoundError> {
    find_struct_field(T::struct_info(), name)
}

/// Like [`find_field`], but signals absence with `None`.
#[inline]
pub fn find_field_optional<T: Struct>(name: &str) -> Option<&'static FieldInfo> {
    find_struct_field_optional(T::struct_info(), name)
}

/// [`find_field`] for a struct known only through its info.
///
/// # Errors
///
/// [`FieldNotFoundError`] if no such field is reachable.
pub fn find_struct_field(
    info: &'static StructInfo,
    name: &str,
) -> Result<&'static FieldInfo, FieldNotFoundError> {
    find_struct_field_optional(info, name).ok_or_else(|| FieldNotFoundError {
        type_path: info.type_path(),
        name: name.into(),
    })
}

/// [`find_field_optional`] for a struct known only through its info.
pub fn find_struct_field_optional(
    info: &'static StructInfo,
    name: &str,
) -> Option<&'static FieldInfo> {
    let mut current = info;
    loop {
        if let Some(field) = current.field(name) {
            return Some(field);
        }
        if !current.includes_base() {
            return None;
        }
        current = current.base()?.struct_info();
    }
}
