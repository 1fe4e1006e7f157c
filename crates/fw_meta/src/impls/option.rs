use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{NullableInfo, TypeInfo, TypePath, Typed};
use crate::{Reflect, ReflectRef};

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Option<", T::type_name(), ">"]))
    }
}

impl<T: Typed + Reflect> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Nullable(NullableInfo::new::<T>()))
    }
}

impl<T: Typed + Reflect> Reflect for Option<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Nullable(self.as_ref().map(Reflect::as_reflect))
    }
}

#[cfg(test)]
mod tests {
    use crate::info::{TypePath, Typed};
    use crate::{Reflect, ReflectRef};

    #[test]
    fn generic_paths_are_cached_per_type() {
        assert_eq!(<Option<u8>>::type_path(), "core::option::Option<u8>");
        assert_eq!(<Option<String>>::type_name(), "Option<String>");
        assert_eq!(<Option<u8>>::type_path(), "core::option::Option<u8>");
        assert!(core::ptr::eq(<Option<u8>>::type_info(), <Option<u8>>::type_info()));
    }

    #[test]
    fn constructor_builds_none() {
        let value = <Option<u32>>::type_info().constructor().unwrap().construct();
        assert_eq!(value.take::<Option<u32>>().unwrap(), None);
    }

    #[test]
    fn reflect_ref_exposes_content() {
        let some: &dyn Reflect = &Some(3_i32);
        assert!(matches!(some.reflect_ref(), ReflectRef::Nullable(Some(v)) if v.is::<i32>()));

        let none: &dyn Reflect = &None::<i32>;
        assert!(matches!(none.reflect_ref(), ReflectRef::Nullable(None)));
    }
}
