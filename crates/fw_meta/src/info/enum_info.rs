use std::sync::Arc;

use crate::construct::Constructor;
use crate::info::{CustomAttributes, Type, TypePath};
use crate::info::{impl_custom_attributes_fn, impl_type_fn, impl_with_custom_attributes};
use crate::Enum;

// -----------------------------------------------------------------------------
// VariantInfo

/// A fieldless enum member: its name and numeric discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantInfo {
    name: &'static str,
    discriminant: i64,
}

impl VariantInfo {
    /// Creates a new [`VariantInfo`].
    #[inline]
    pub const fn new(name: &'static str, discriminant: i64) -> Self {
        Self { name, discriminant }
    }

    /// Returns the member name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the member's discriminant, cast to `i64`.
    #[inline]
    pub const fn discriminant(&self) -> i64 {
        self.discriminant
    }
}

// -----------------------------------------------------------------------------
// EnumInfo

/// A container for compile-time fieldless enum info.
///
/// # Examples
///
/// ```
/// use fw_meta::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// enum Color {
///     Green = 1,
///     Red = 2,
/// }
///
/// let info = Color::type_info().as_enum().unwrap();
///
/// assert_eq!(info.variant("Red").unwrap().discriminant(), 2);
/// assert_eq!(info.variant_by_discriminant(1).unwrap().name(), "Green");
/// assert_eq!(info.variant_names().collect::<Vec<_>>(), ["Green", "Red"]);
/// ```
#[derive(Clone, Debug)]
pub struct EnumInfo {
    ty: Type,
    variants: Box<[VariantInfo]>,
    constructor: Option<Constructor>,
    // Use `Option` to reduce unnecessary heap requests (when empty content).
    custom_attributes: Option<Arc<CustomAttributes>>,
}

impl EnumInfo {
    impl_type_fn!(ty);
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    /// Create a new [`EnumInfo`], variants keep the input order.
    pub fn new<T: Enum + TypePath>(variants: &[VariantInfo]) -> Self {
        Self {
            ty: Type::of::<T>(),
            variants: variants.into(),
            constructor: None,
            custom_attributes: None,
        }
    }

    /// Sets the zero-argument constructor.
    #[inline]
    pub fn with_constructor(self, constructor: Constructor) -> Self {
        Self {
            constructor: Some(constructor),
            ..self
        }
    }

    /// Returns the member named `name`, if present.
    pub fn variant(&self, name: &str) -> Option<&VariantInfo> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Returns the first member whose discriminant is `discriminant`.
    pub fn variant_by_discriminant(&self, discriminant: i64) -> Option<&VariantInfo> {
        self.variants.iter().find(|v| v.discriminant == discriminant)
    }

    /// Returns the member at the given index, if present.
    #[inline]
    pub fn variant_at(&self, index: usize) -> Option<&VariantInfo> {
        self.variants.get(index)
    }

    /// Returns the members in declaration order.
    #[inline]
    pub fn variants(&self) -> &[VariantInfo] {
        &self.variants
    }

    /// Returns the member names in declaration order.
    #[inline]
    pub fn variant_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.variants.iter().map(VariantInfo::name)
    }

    /// Returns the number of members.
    #[inline]
    pub fn variant_len(&self) -> usize {
        self.variants.len()
    }

    /// Returns the zero-argument constructor, if any.
    #[inline]
    pub const fn constructor(&self) -> Option<&Constructor> {
        self.constructor.as_ref()
    }
}
