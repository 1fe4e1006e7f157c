use core::any::{Any, TypeId};

// -----------------------------------------------------------------------------
// TypePath

/// Stable names of a type, independent of [`core::any::type_name`].
///
/// The derive builds them from `module_path!()`, or takes them from
/// `#[reflect(type_path = "...")]` so that moving a definition keeps its
/// name. Paths never start with `::`.
///
/// ```
/// use fw_meta::info::TypePath;
///
/// struct Foo;
///
/// impl TypePath for Foo {
///     fn type_path() -> &'static str { "my_crate::foo::Foo" }
///     fn type_name() -> &'static str { "Foo" }
/// }
///
/// assert_eq!(Foo::type_name(), "Foo");
/// ```
pub trait TypePath: 'static {
    /// Fully qualified path, generics included.
    ///
    /// `"core::option::Option<alloc::string::String>"` for `Option<String>`.
    fn type_path() -> &'static str;

    /// Short name, generics included. Not unique.
    ///
    /// `"Option<String>"` for `Option<String>`.
    fn type_name() -> &'static str;
}

/// [`TypePath`] through a value, for `dyn Reflect`.
///
/// ```
/// use fw_meta::{info::DynamicTypePath, Reflect};
///
/// let x: &dyn Reflect = &String::new();
/// assert_eq!(x.reflect_type_path(), "alloc::string::String");
/// assert_eq!(x.reflect_type_name(), "String");
/// ```
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        T::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        T::type_name()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The identity of a type: its [`TypeId`], which keys every cache, and its
/// stable names for diagnostics.
///
/// Two `Type`s compare equal exactly when their `TypeId`s do.
///
/// ```
/// # use core::any::TypeId;
/// use fw_meta::info::Type;
///
/// let ty = Type::of::<String>();
/// assert!(ty.is::<String>());
/// assert_eq!(ty.id(), TypeId::of::<String>());
/// assert_eq!(ty.path(), "alloc::string::String");
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: fn() -> &'static str,
    name: fn() -> &'static str,
}

impl Type {
    /// The identity of `T`.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: T::type_path,
            name: T::type_name,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns `true` if this is the identity of `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        (self.path)()
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        (self.name)()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl core::fmt::Debug for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// impl_type_fn

/// Adds `Type` accessors to an info struct that stores its `Type` in `$field`.
macro_rules! impl_type_fn {
    ($field:ident) => {
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }
        $crate::info::impl_type_fn!();
    };
    () => {
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        /// Returns `true` if the described type is `T`.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().is::<T>()
        }

        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }
    };
}

pub(crate) use impl_type_fn;

#[cfg(test)]
mod tests {
    use core::hash::BuildHasher;

    use fw_utils::hash::FixedHashState;

    use super::Type;

    #[test]
    fn identity_is_the_type_id() {
        assert_eq!(Type::of::<u32>(), Type::of::<u32>());
        assert_ne!(Type::of::<u32>(), Type::of::<i32>());

        let state = FixedHashState;
        assert_eq!(
            state.hash_one(Type::of::<Option<u8>>()),
            state.hash_one(Type::of::<Option<u8>>())
        );
    }

    #[test]
    fn names_come_from_type_path() {
        let ty = Type::of::<Vec<String>>();
        assert_eq!(ty.path(), "alloc::vec::Vec<alloc::string::String>");
        assert_eq!(ty.name(), "Vec<String>");
        assert_eq!(format!("{ty:?}"), ty.path());
    }
}
