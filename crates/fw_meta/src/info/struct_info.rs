use core::any::Any;
use std::sync::Arc;

use fw_utils::hash::HashMap;

use crate::construct::Constructor;
use crate::info::{CustomAttributes, FieldGetter, FieldInfo, IncludeBase, Type, TypePath};
use crate::info::{impl_custom_attributes_fn, impl_type_fn, impl_with_custom_attributes};
use crate::{Reflect, Struct};

// -----------------------------------------------------------------------------
// BaseInfo

/// The link from a struct to the base value it embeds.
///
/// Written by a `#[reflect(base)]` field. The field itself is not part of
/// the declared fields; it is only reachable through this link.
#[derive(Clone, Copy)]
pub struct BaseInfo {
    ty: Type,
    field_name: &'static str,
    struct_info: fn() -> &'static StructInfo,
    getter: FieldGetter,
}

impl BaseInfo {
    impl_type_fn!(ty);

    /// Creates a link to base type `B`, embedded in field `field_name`.
    #[inline]
    pub const fn new<B: Struct>(field_name: &'static str, getter: FieldGetter) -> Self {
        Self {
            ty: Type::of::<B>(),
            field_name,
            struct_info: B::struct_info,
            getter,
        }
    }

    /// Returns the name of the field embedding the base value.
    #[inline]
    pub const fn field_name(&self) -> &'static str {
        self.field_name
    }

    /// Returns the base type's [`StructInfo`].
    #[inline]
    pub fn struct_info(&self) -> &'static StructInfo {
        (self.struct_info)()
    }

    /// Reads the embedded base value out of an instance of the derived type.
    #[inline]
    pub fn get<'a>(&self, instance: &'a dyn Any) -> Option<&'a dyn Reflect> {
        (self.getter)(instance)
    }
}

impl core::fmt::Debug for BaseInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BaseInfo")
            .field("ty", &self.ty)
            .field("field_name", &self.field_name)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// StructInfo

/// A container for compile-time named struct info.
///
/// Holds every declared field in declaration order, excluded ones included;
/// the serialization policy is applied later by the resolver.
///
/// # Examples
///
/// ```rust
/// use fw_meta::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Shape {
///     sides: u32,
/// }
///
/// #[derive(Reflect)]
/// #[reflect(include_base)]
/// struct Square {
///     #[reflect(base)]
///     shape: Shape,
///     side: f32,
///     #[reflect(skip)]
///     area: f32,
/// }
///
/// let info = <Square as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_names().collect::<Vec<_>>(), ["side", "area"]);
/// assert_eq!(info.index_of("area"), Some(1));
/// assert!(info.base().unwrap().type_is::<Shape>());
/// assert!(info.includes_base());
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[FieldInfo]>,
    field_indices: HashMap<&'static str, usize>,
    base: Option<BaseInfo>,
    constructor: Option<Constructor>,
    // Use `Option` to reduce unnecessary heap requests (when empty content).
    custom_attributes: Option<Arc<CustomAttributes>>,
}

impl StructInfo {
    impl_type_fn!(ty);
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    /// Create a new [`StructInfo`].
    ///
    /// The order of fields is the input order.
    pub fn new<T: TypePath>(fields: &[FieldInfo]) -> Self {
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            field_indices,
            base: None,
            constructor: None,
            custom_attributes: None,
        }
    }

    /// Sets the base link.
    #[inline]
    pub fn with_base(self, base: BaseInfo) -> Self {
        Self {
            base: Some(base),
            ..self
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

    /// Returns the declared fields in declaration order.
    #[inline]
    pub fn fields(&self) -> &[FieldInfo] {
        &self.fields
    }

    /// Returns the declared field named `name`, if present.
    ///
    /// Fields of the base are not searched.
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.get(*self.field_indices.get(name)?)
    }

    /// Returns the declared field at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&FieldInfo> {
        self.fields.get(index)
    }

    /// Returns the index of the declared field named `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Returns the declared field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(FieldInfo::name)
    }

    /// Returns the number of declared fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the base link, if the struct embeds a base.
    #[inline]
    pub const fn base(&self) -> Option<&BaseInfo> {
        self.base.as_ref()
    }

    /// Returns `true` if the struct carries the [`IncludeBase`] marker.
    #[inline]
    pub fn includes_base(&self) -> bool {
        self.has_attribute::<IncludeBase>()
    }

    /// Returns the zero-argument constructor, if any.
    #[inline]
    pub const fn constructor(&self) -> Option<&Constructor> {
        self.constructor.as_ref()
    }
}
