/// Implements [`TypePath`], [`Typed`] and [`Reflect`] for a leaf type.
///
/// The type must implement `serde::Serialize + Send + Sync`; encoders
/// receive it through its own `serde` implementation. Append `, default`
/// to give it a zero-argument constructor through `Default`.
///
/// ```
/// use fw_meta::{construct::default_constructor_of, impl_opaque, info::Typed};
///
/// #[derive(serde::Serialize, Default)]
/// struct Money(i64);
///
/// impl_opaque!(Money as "my_crate::Money", default);
///
/// let info = Money::type_info();
/// assert_eq!(info.type_name(), "Money");
/// assert!(default_constructor_of(info).is_ok());
/// ```
///
/// [`TypePath`]: crate::info::TypePath
/// [`Typed`]: crate::info::Typed
/// [`Reflect`]: crate::Reflect
#[macro_export]
macro_rules! impl_opaque {
    (@impl $ty:ty, $path:literal, $constructor:expr) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }
            #[inline]
            fn type_name() -> &'static str {
                $crate::impls::last_segment($path)
            }
        }

        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    let info = $crate::info::OpaqueInfo::new::<$ty>();
                    $crate::info::TypeInfo::Opaque(match $constructor {
                        ::core::option::Option::Some(constructor) => {
                            info.with_constructor(constructor)
                        }
                        ::core::option::Option::None => info,
                    })
                })
            }
        }

        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> $crate::ReflectRef<'_> {
                $crate::ReflectRef::Opaque(self)
            }
        }
    };
    ($ty:ty as $path:literal, default) => {
        $crate::impl_opaque!(
            @impl $ty,
            $path,
            ::core::option::Option::Some($crate::construct::Constructor::of_default::<$ty>())
        );
    };
    ($ty:ty as $path:literal) => {
        $crate::impl_opaque!(
            @impl $ty,
            $path,
            ::core::option::Option::<$crate::construct::Constructor>::None
        );
    };
}

crate::impl_opaque!(bool as "bool", default);
crate::impl_opaque!(char as "char", default);
crate::impl_opaque!(u8 as "u8", default);
crate::impl_opaque!(u16 as "u16", default);
crate::impl_opaque!(u32 as "u32", default);
crate::impl_opaque!(u64 as "u64", default);
crate::impl_opaque!(u128 as "u128", default);
crate::impl_opaque!(usize as "usize", default);
crate::impl_opaque!(i8 as "i8", default);
crate::impl_opaque!(i16 as "i16", default);
crate::impl_opaque!(i32 as "i32", default);
crate::impl_opaque!(i64 as "i64", default);
crate::impl_opaque!(i128 as "i128", default);
crate::impl_opaque!(isize as "isize", default);
crate::impl_opaque!(f32 as "f32", default);
crate::impl_opaque!(f64 as "f64", default);
crate::impl_opaque!(String as "alloc::string::String", default);

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};

    #[test]
    fn primitive_paths_are_bare() {
        assert_eq!(u32::type_path(), "u32");
        assert_eq!(u32::type_name(), "u32");
        assert_eq!(String::type_path(), "alloc::string::String");
        assert_eq!(String::type_name(), "String");
    }

    #[test]
    fn primitives_are_opaque_and_constructible() {
        let info = f64::type_info();
        assert_eq!(info.kind(), ReflectKind::Opaque);

        let value = info.constructor().unwrap().construct();
        assert_eq!(value.take::<f64>().unwrap(), 0.0);
    }

    #[test]
    fn opaque_values_serialize_through_serde() {
        let value: &dyn Reflect = &String::from("abc");
        let crate::ReflectRef::Opaque(value) = value.reflect_ref() else {
            panic!("String is opaque");
        };
        assert_eq!(serde_json::to_string(value).unwrap(), "\"abc\"");
    }
}
