//! Zero-argument constructors, looked up before a decoder instantiates a type.
//!
//! A type is constructible when its [`TypeInfo`] carries a [`Constructor`]:
//!
//! - `#[reflect(default)]` uses `Default::default`;
//! - `#[reflect(constructor = path)]` uses any `fn() -> Self`, private or not;
//! - leaf types and `Option<T>` always have one.
//!
//! Lookups are not cached, the descriptor is copied out of the type table.

use core::fmt;

use crate::Reflect;
use crate::error::MissingConstructorError;
use crate::info::{Type, TypeInfo, TypePath, Typed};

// -----------------------------------------------------------------------------
// Constructor

/// A zero-argument constructor for one type.
///
/// # Examples
///
/// ```
/// use fw_meta::{derive::Reflect, default_constructor};
///
/// #[derive(Reflect)]
/// #[reflect(constructor = Session::empty)]
/// struct Session {
///     id: u64,
/// }
///
/// impl Session {
///     fn empty() -> Self {
///         Self { id: 7 }
///     }
/// }
///
/// let constructor = default_constructor::<Session>().unwrap();
/// let session = constructor.construct().take::<Session>().unwrap();
/// assert_eq!(session.id, 7);
/// ```
#[derive(Clone, Copy)]
pub struct Constructor {
    ty: Type,
    func: fn() -> Box<dyn Reflect>,
}

impl Constructor {
    /// Creates a constructor for `T` from a function producing a boxed `T`.
    #[inline]
    pub const fn new<T: TypePath>(func: fn() -> Box<dyn Reflect>) -> Self {
        Self {
            ty: Type::of::<T>(),
            func,
        }
    }

    /// Creates a constructor for `T` from its `Default` implementation.
    #[inline]
    pub fn of_default<T: Default + Reflect + TypePath>() -> Self {
        Self::new::<T>(|| -> Box<dyn Reflect> { Box::new(T::default()) })
    }

    /// Returns the constructed type.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Builds a new value.
    pub fn construct(&self) -> Box<dyn Reflect> {
        let value = (self.func)();
        debug_assert_eq!(
            value.ty_id(),
            self.ty.id(),
            "constructor of `{}` produced a `{}`",
            self.ty.path(),
            value.reflect_type_path(),
        );
        value
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Constructor").field(&self.ty).finish()
    }
}

// -----------------------------------------------------------------------------
// Lookup

/// Returns the zero-argument constructor of `T`.
///
/// # Errors
///
/// [`MissingConstructorError`] if `T` has none.
#[inline]
pub fn default_constructor<T: Typed>() -> Result<Constructor, MissingConstructorError> {
    default_constructor_of(T::type_info())
}

/// Returns the zero-argument constructor of the type described by `info`.
///
/// # Errors
///
/// [`MissingConstructorError`] if the type has none.
pub fn default_constructor_of(info: &TypeInfo) -> Result<Constructor, MissingConstructorError> {
    info.constructor()
        .copied()
        .ok_or_else(|| MissingConstructorError {
            type_path: info.type_path(),
        })
}

#[cfg(test)]
mod tests {
    use super::{default_constructor, default_constructor_of};
    use crate::derive::Reflect;
    use crate::error::MissingConstructorError;
    use crate::info::Typed;

    #[derive(Reflect)]
    struct NeedsArgs {
        code: u32,
    }

    impl NeedsArgs {
        #[expect(dead_code, reason = "only a parameterized constructor exists")]
        fn new(code: u32) -> Self {
            Self { code }
        }
    }

    #[derive(Reflect)]
    #[reflect(constructor = Hidden::blank)]
    struct Hidden {
        label: String,
    }

    impl Hidden {
        fn blank() -> Self {
            Self {
                label: String::from("blank"),
            }
        }
    }

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(default)]
    struct Plain {
        count: i32,
    }

    #[derive(Reflect, Default, Clone, Copy, Debug, PartialEq)]
    #[reflect(default)]
    enum Mode {
        #[default]
        Off,
        On,
    }

    #[test]
    fn parameterized_only_is_missing() {
        let err = default_constructor::<NeedsArgs>().unwrap_err();
        assert_eq!(
            err,
            MissingConstructorError {
                type_path: NeedsArgs::type_info().type_path()
            }
        );
        assert!(err.to_string().contains("NeedsArgs"));
    }

    #[test]
    fn private_zero_arg_constructor_is_usable() {
        let constructor = default_constructor::<Hidden>().unwrap();
        assert!(constructor.ty().is::<Hidden>());

        let value = constructor.construct().take::<Hidden>().unwrap();
        assert_eq!(value.label, "blank");
    }

    #[test]
    fn default_constructors() {
        let plain = default_constructor::<Plain>().unwrap().construct();
        assert_eq!(plain.take::<Plain>().unwrap(), Plain::default());

        let mode = default_constructor_of(Mode::type_info()).unwrap().construct();
        assert_eq!(mode.take::<Mode>().unwrap(), Mode::Off);
    }

    #[test]
    fn nullable_is_always_constructible() {
        assert!(default_constructor::<Option<NeedsArgs>>().is_ok());
    }
}
