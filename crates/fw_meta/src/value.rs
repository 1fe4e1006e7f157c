//! Reading field values for an encoder.
//!
//! [`extract_value`] reads one field out of an instance and normalizes it:
//! enum members leave as their integral discriminant, never as their name,
//! and an empty `Option` leaves as [`FieldValue::Absent`].

use core::any::Any;

use serde_core::ser::{Error as _, Serialize, Serializer};

use crate::error::ExtractError;
use crate::info::FieldInfo;
use crate::{Enum, Reflect, ReflectRef};

// -----------------------------------------------------------------------------
// FieldValue

/// A normalized field value.
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    /// An `Option` slot holding no value.
    Absent,
    /// An enum member, as its discriminant.
    Integral(i64),
    /// Any other value, as it is stored.
    ///
    /// For an `Option<T>` holding a value this is the wrapped `T`.
    Value(&'a dyn Reflect),
}

impl<'a> FieldValue<'a> {
    /// Returns `true` for [`FieldValue::Absent`].
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the discriminant of a normalized enum member.
    #[inline]
    pub const fn as_integral(&self) -> Option<i64> {
        match self {
            Self::Integral(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the raw value, if it was not normalized away.
    #[inline]
    pub fn as_reflect(&self) -> Option<&'a dyn Reflect> {
        match self {
            Self::Value(value) => Some(*value),
            _ => None,
        }
    }

    /// Downcasts the raw value to `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        self.as_reflect()?.downcast_ref::<T>()
    }

    /// Unwraps one `Option` level. Enums stay raw: only enum-typed fields
    /// are normalized, see [`extract_value`].
    fn from_raw(raw: &'a dyn Reflect) -> Self {
        match raw.reflect_ref() {
            ReflectRef::Nullable(None) => Self::Absent,
            ReflectRef::Nullable(Some(inner)) => Self::Value(inner),
            _ => Self::Value(raw),
        }
    }
}

/// Absent values serialize as `none`, integral ones as `i64` and opaque
/// ones through their own implementation. A nested `Option` serializes as
/// `none` or `some` around its content.
///
/// Struct values return an error: the encoder resolves their field set and
/// recurses instead. So do enums that reach here raw, inside a nested
/// `Option`: they have no representation outside an enum-typed field.
impl Serialize for FieldValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Integral(value) => serializer.serialize_i64(*value),
            Self::Value(value) => match value.reflect_ref() {
                ReflectRef::Opaque(value) => erased_serde::serialize(value, serializer),
                ReflectRef::Nullable(None) => serializer.serialize_none(),
                ReflectRef::Nullable(Some(inner)) => {
                    serializer.serialize_some(&FieldValue::Value(inner))
                }
                ReflectRef::Struct(_) | ReflectRef::Enum(_) => Err(S::Error::custom(format_args!(
                    "`{}` must be encoded through its own field set",
                    value.reflect_type_path()
                ))),
            },
        }
    }
}

impl core::fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Integral(value) => f.debug_tuple("Integral").field(value).finish(),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

// -----------------------------------------------------------------------------
// extract_value

/// Reads `field` out of `instance` and normalizes it.
///
/// `instance` is either a value of the field's declaring type or a value
/// that embeds it through a chain of `#[reflect(base)]` fields.
///
/// - An enum field yields [`FieldValue::Integral`].
/// - An `Option<E>` field with `E` an enum yields [`FieldValue::Integral`]
///   when it holds a member.
/// - An empty `Option` yields [`FieldValue::Absent`].
/// - Anything else yields [`FieldValue::Value`].
///
/// # Errors
///
/// [`ExtractError::InstanceMismatch`] if `instance` neither is nor embeds
/// the declaring type.
///
/// # Examples
///
/// ```
/// use fw_meta::{derive::Reflect, extract_value, find_field};
///
/// #[derive(Reflect)]
/// enum Color { Green = 1, Red = 2 }
///
/// #[derive(Reflect)]
/// struct Pixel {
///     color: Color,
///     tint: Option<Color>,
/// }
///
/// let pixel = Pixel { color: Color::Red, tint: None };
///
/// let color = find_field::<Pixel>("color").unwrap();
/// assert_eq!(extract_value(color, &pixel).unwrap().as_integral(), Some(2));
///
/// let tint = find_field::<Pixel>("tint").unwrap();
/// assert!(extract_value(tint, &pixel).unwrap().is_absent());
/// ```
pub fn extract_value<'a>(
    field: &FieldInfo,
    instance: &'a dyn Reflect,
) -> Result<FieldValue<'a>, ExtractError> {
    let mismatch = || ExtractError::InstanceMismatch {
        expect: field.declaring_type().path(),
        actual: instance.reflect_type_path(),
    };

    let owner = locate_declaring(field, instance).ok_or_else(mismatch)?;
    let raw = field.get(owner).ok_or_else(mismatch)?;

    if (field.is_enum() || field.nullable_enum().is_some())
        && let Some(member) = enum_member(raw)
    {
        return Ok(FieldValue::Integral(member.discriminant()));
    }

    Ok(FieldValue::from_raw(raw))
}

/// Walks the base chain of `instance` down to the field's declaring type.
fn locate_declaring<'a>(field: &FieldInfo, instance: &'a dyn Reflect) -> Option<&'a dyn Any> {
    let declaring = field.declaring_type().id();
    let mut current = instance;
    while current.ty_id() != declaring {
        let base = current.reflect_type_info().as_struct()?.base()?;
        current = base.get(current)?;
    }
    Some(current as &dyn Any)
}

fn enum_member(raw: &dyn Reflect) -> Option<&dyn Enum> {
    match raw.reflect_ref() {
        ReflectRef::Enum(member) => Some(member),
        ReflectRef::Nullable(Some(inner)) => inner.reflect_ref().as_enum(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldValue, extract_value};
    use crate::derive::Reflect;
    use crate::error::ExtractError;
    use crate::info::DynamicTypePath;
    use crate::{Enum, find_field, resolve_fields};

    #[derive(Reflect, Clone, Copy)]
    enum Color {
        Green = 1,
        Red = 2,
        Blue = 7,
    }

    // Members combine like bit flags; each one is still a single value.
    #[derive(Reflect, Clone, Copy)]
    #[repr(u8)]
    enum Access {
        Read = 0b001,
        Write = 0b100,
        Admin = 0b1000_0000,
    }

    #[derive(Reflect, Clone, Copy)]
    #[repr(u64)]
    enum Wide {
        Max = u64::MAX,
    }

    #[derive(Reflect)]
    struct Palette {
        main: Color,
        accent: Option<Color>,
        access: Access,
        wide: Wide,
        name: Option<String>,
        size: u32,
    }

    #[derive(Reflect)]
    struct Base {
        color: Color,
    }

    #[derive(Reflect)]
    #[reflect(include_base)]
    struct Middle {
        #[reflect(base)]
        base: Base,
        level: u8,
    }

    #[derive(Reflect)]
    #[reflect(include_base)]
    struct Top {
        #[reflect(base)]
        middle: Middle,
        title: String,
    }

    #[derive(Reflect)]
    struct Nested {
        twice: Option<Option<Color>>,
        counts: Option<Option<u8>>,
    }

    fn palette() -> Palette {
        Palette {
            main: Color::Red,
            accent: Some(Color::Blue),
            access: Access::Write,
            wide: Wide::Max,
            name: None,
            size: 12,
        }
    }

    #[test]
    fn enum_becomes_discriminant() {
        let palette = palette();
        let value = extract_value(find_field::<Palette>("main").unwrap(), &palette).unwrap();
        assert_eq!(value.as_integral(), Some(2));
        assert_eq!(Color::Green.discriminant(), 1);
    }

    #[test]
    fn nullable_enum_becomes_discriminant_or_absent() {
        let mut palette = palette();
        let accent = find_field::<Palette>("accent").unwrap();
        assert!(accent.nullable_enum().is_some());

        let value = extract_value(accent, &palette).unwrap();
        assert_eq!(value.as_integral(), Some(7));

        palette.accent = None;
        let value = extract_value(accent, &palette).unwrap();
        assert!(value.is_absent());
    }

    #[test]
    fn bitmask_members_match_direct_cast() {
        let palette = palette();
        let access = find_field::<Palette>("access").unwrap();
        let value = extract_value(access, &palette).unwrap();
        assert_eq!(value.as_integral(), Some(Access::Write as i64));

        for member in [Access::Read, Access::Write, Access::Admin] {
            assert_eq!(member.discriminant(), member as u8 as i64);
        }
    }

    #[test]
    fn wide_discriminants_wrap() {
        let palette = palette();
        let wide = find_field::<Palette>("wide").unwrap();
        let value = extract_value(wide, &palette).unwrap();
        assert_eq!(value.as_integral(), Some(Wide::Max as i64));
        assert_eq!(value.as_integral(), Some(-1));
    }

    #[test]
    fn other_values_pass_through() {
        let mut palette = palette();
        let size = extract_value(find_field::<Palette>("size").unwrap(), &palette).unwrap();
        assert_eq!(size.downcast_ref::<u32>(), Some(&12));

        let name = find_field::<Palette>("name").unwrap();
        assert!(extract_value(name, &palette).unwrap().is_absent());

        palette.name = Some(String::from("warm"));
        let value = extract_value(name, &palette).unwrap();
        assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("warm"));
    }

    #[test]
    fn nested_options_unwrap_one_level() {
        let mut nested = Nested {
            twice: Some(Some(Color::Red)),
            counts: Some(None),
        };

        let twice = find_field::<Nested>("twice").unwrap();
        assert!(!twice.is_enum());
        assert!(twice.nullable_enum().is_none());

        let value = extract_value(twice, &nested).unwrap();
        assert_eq!(value.as_integral(), None);
        assert!(matches!(
            value.downcast_ref::<Option<Color>>(),
            Some(Some(Color::Red))
        ));
        assert!(serde_json::to_string(&value).is_err());

        let counts = find_field::<Nested>("counts").unwrap();
        let value = extract_value(counts, &nested).unwrap();
        assert!(!value.is_absent());
        assert_eq!(value.downcast_ref::<Option<u8>>(), Some(&None));
        assert_eq!(serde_json::to_string(&value).unwrap(), "null");

        nested.counts = Some(Some(5));
        let value = extract_value(counts, &nested).unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), "5");

        nested.counts = None;
        assert!(extract_value(counts, &nested).unwrap().is_absent());
    }

    #[test]
    fn base_fields_read_through_embedding() {
        let top = Top {
            middle: Middle {
                base: Base { color: Color::Green },
                level: 3,
            },
            title: String::from("t"),
        };

        let values: Vec<String> = resolve_fields::<Top>()
            .iter()
            .map(|field| {
                let value = extract_value(field, &top).unwrap();
                serde_json::to_string(&value).unwrap()
            })
            .collect();
        assert_eq!(values, ["\"t\"", "3", "1"]);

        // The embedded value itself is a valid instance too.
        let color = find_field::<Top>("color").unwrap();
        let value = extract_value(color, &top.middle.base).unwrap();
        assert_eq!(value.as_integral(), Some(1));
    }

    #[test]
    fn unrelated_instance_is_rejected() {
        let base = Base { color: Color::Red };
        let level = find_field::<Middle>("level").unwrap();
        assert_eq!(
            extract_value(level, &base).unwrap_err(),
            ExtractError::InstanceMismatch {
                expect: level.declaring_type().path(),
                actual: base.reflect_type_path(),
            }
        );

        assert!(extract_value(level, &5_u8).is_err());
    }

    #[test]
    fn serialize_normalized_values() {
        let palette = palette();
        let json = |name: &str| {
            let value = extract_value(find_field::<Palette>(name).unwrap(), &palette).unwrap();
            serde_json::to_string(&value).unwrap()
        };
        assert_eq!(json("main"), "2");
        assert_eq!(json("accent"), "7");
        assert_eq!(json("name"), "null");
        assert_eq!(json("size"), "12");
    }

    #[test]
    fn struct_values_are_not_serialized_directly() {
        let top = Top {
            middle: Middle {
                base: Base { color: Color::Red },
                level: 0,
            },
            title: String::new(),
        };
        let value = FieldValue::Value(&top.middle);
        assert!(serde_json::to_string(&value).is_err());
    }
}
