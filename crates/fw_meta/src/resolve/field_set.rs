use core::fmt;
use core::ops::Deref;

use crate::info::{FieldInfo, Type};

// -----------------------------------------------------------------------------
// FieldSet

/// The ordered serializable fields of one struct.
///
/// The type's own fields come first in declaration order, followed by the
/// base's whole field set when the type opts in with `include_base`.
///
/// Field sets are built by [`FieldCache`](crate::resolve::FieldCache) and
/// handed out as `Arc<FieldSet>`; they never change afterwards.
///
/// # Examples
///
/// ```
/// use fw_meta::{derive::Reflect, resolve_fields};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: i32,
///     y: i32,
///     #[reflect(skip)]
///     dirty: bool,
/// }
///
/// let fields = resolve_fields::<Point>();
/// assert_eq!(fields.field_names().collect::<Vec<_>>(), ["x", "y"]);
/// assert!(fields.get("dirty").is_none());
/// ```
#[derive(Clone)]
pub struct FieldSet {
    ty: Type,
    fields: Box<[&'static FieldInfo]>,
}

impl FieldSet {
    /// Creates a field set for `ty` from already filtered fields.
    #[inline]
    pub fn new(ty: Type, fields: impl Into<Box<[&'static FieldInfo]>>) -> Self {
        Self {
            ty,
            fields: fields.into(),
        }
    }

    /// Returns the type the set was resolved for.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the fields as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[&'static FieldInfo] {
        &self.fields
    }

    /// Iterates over the fields in order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static FieldInfo> + '_ {
        self.fields.iter().copied()
    }

    /// Returns the first field named `name`.
    ///
    /// A derived field shadows a base field of the same name.
    pub fn get(&self, name: &str) -> Option<&'static FieldInfo> {
        self.iter().find(|field| field.name() == name)
    }

    /// Returns the field names in order.
    #[inline]
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.iter().map(FieldInfo::name)
    }

    /// Returns `true` if `other` holds the same field infos in the same order.
    ///
    /// Field infos are compared by address; they all live in static type tables.
    pub fn same_fields(&self, other: &FieldSet) -> bool {
        self.ty == other.ty
            && self.fields.len() == other.fields.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| core::ptr::eq(a, b))
    }
}

impl Deref for FieldSet {
    type Target = [&'static FieldInfo];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.fields
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'static FieldInfo;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, &'static FieldInfo>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter().copied()
    }
}

impl fmt::Debug for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSet")
            .field("ty", &self.ty)
            .field("fields", &self.field_names().collect::<Vec<_>>())
            .finish()
    }
}
