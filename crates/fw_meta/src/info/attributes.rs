use core::any::TypeId;

use fw_utils::TypeIdMap;

use crate::Reflect;
use crate::derive::Reflect;

// -----------------------------------------------------------------------------
// Markers

/// Marks a field as excluded from serialization.
///
/// Written by `#[reflect(skip)]`. The field keeps its place in the declared
/// field list of [`StructInfo`](crate::info::StructInfo), but the resolver
/// leaves it out of every [`FieldSet`](crate::resolve::FieldSet).
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[reflect(type_path = "fw_meta::info::NonSerialized")]
pub struct NonSerialized;

/// Marks a struct whose field set also carries the fields of its base.
///
/// Written by `#[reflect(include_base)]`. Only meaningful on structs that
/// have a `#[reflect(base)]` field.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[reflect(type_path = "fw_meta::info::IncludeBase")]
pub struct IncludeBase;

// -----------------------------------------------------------------------------
// CustomAttributes

/// Typed values attached to a type or a field with `#[reflect(@expr)]`.
///
/// At most one value per type: a later value of the same type replaces the
/// earlier one. The `skip` and `include_base` markers live here as well.
///
/// ```
/// # use fw_meta::{derive::Reflect, info::{NonSerialized, Typed}};
/// #[derive(Reflect)]
/// #[reflect(@7_u32)]
/// struct Slider {
///     #[reflect(@10.0f32)]
///     value: f32,
///     #[reflect(skip)]
///     hovered: bool,
/// }
///
/// let info = <Slider as Typed>::type_info().as_struct().unwrap();
/// assert_eq!(info.get_attribute::<u32>(), Some(&7));
///
/// let field = info.field("value").unwrap();
/// assert_eq!(field.get_attribute::<f32>(), Some(&10.0));
///
/// let field = info.field("hovered").unwrap();
/// assert!(field.has_attribute::<NonSerialized>());
/// ```
#[derive(Default)]
pub struct CustomAttributes {
    values: TypeIdMap<Box<dyn Reflect>>,
}

impl CustomAttributes {
    /// Returned by info structs that carry no attributes.
    pub(crate) const EMPTY: &'static Self = &Self::new();

    #[inline]
    pub const fn new() -> Self {
        Self {
            values: TypeIdMap::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: TypeIdMap::with_capacity(capacity),
        }
    }

    /// Stores `value`, replacing any earlier value of type `T`.
    #[inline]
    pub fn with_attribute<T: Reflect>(mut self, value: T) -> Self {
        self.values.insert(TypeId::of::<T>(), Box::new(value));
        self
    }

    #[inline]
    pub fn contains<T: Reflect>(&self) -> bool {
        self.values.contains_type::<T>()
    }

    #[inline]
    pub fn get<T: Reflect>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| <dyn Reflect>::downcast_ref(&**value))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl core::fmt::Debug for CustomAttributes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set()
            .entries(self.values.values().map(|value| value.reflect_type_path()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{CustomAttributes, IncludeBase, NonSerialized};

    #[test]
    fn later_value_of_same_type_wins() {
        let attrs = CustomAttributes::new()
            .with_attribute(NonSerialized)
            .with_attribute(3_u8)
            .with_attribute(9_u8);

        assert!(attrs.contains::<NonSerialized>());
        assert!(!attrs.contains::<IncludeBase>());
        assert_eq!(attrs.get::<u8>(), Some(&9));
        assert_eq!(attrs.get::<u16>(), None);
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Adds attribute accessors to an info struct that stores
/// `Option<Arc<CustomAttributes>>` in `$field`.
macro_rules! impl_custom_attributes_fn {
    ($field:ident) => {
        /// Returns the custom attributes.
        #[inline]
        pub fn custom_attributes(&self) -> &$crate::info::CustomAttributes {
            match &self.$field {
                Some(ptr) => &**ptr,
                None => $crate::info::CustomAttributes::EMPTY,
            }
        }

        $crate::info::impl_custom_attributes_fn!();
    };
    () => {
        pub fn get_attribute<T: $crate::Reflect>(&self) -> Option<&T> {
            self.custom_attributes().get::<T>()
        }

        pub fn has_attribute<T: $crate::Reflect>(&self) -> bool {
            self.custom_attributes().contains::<T>()
        }
    };
}

/// Adds the `with_custom_attributes` builder.
macro_rules! impl_with_custom_attributes {
    ($field:ident) => {
        /// Replaces the stored attributes. Written by the derive.
        pub fn with_custom_attributes(self, attributes: $crate::info::CustomAttributes) -> Self {
            let $field = (!attributes.is_empty()).then(|| ::std::sync::Arc::new(attributes));
            Self { $field, ..self }
        }
    };
}

pub(crate) use impl_custom_attributes_fn;
pub(crate) use impl_with_custom_attributes;
