use serde_core::Serialize;

use crate::construct::Constructor;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::{Reflect, ReflectRef};

impl<T: TypePath> TypePath for Vec<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::vec::Vec<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Vec<", T::type_name(), ">"]))
    }
}

impl<T: TypePath + Serialize + Send + Sync> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Opaque(OpaqueInfo::new::<Self>().with_constructor(Constructor::new::<Self>(
                || -> Box<dyn Reflect> { Box::new(Vec::<T>::new()) },
            )))
        })
    }
}

impl<T: TypePath + Serialize + Send + Sync> Reflect for Vec<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Opaque(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::info::{ReflectKind, TypePath, Typed};

    #[test]
    fn vec_is_opaque() {
        assert_eq!(<Vec<u8>>::type_path(), "alloc::vec::Vec<u8>");
        assert_eq!(<Vec<Vec<u8>>>::type_name(), "Vec<Vec<u8>>");
        assert_eq!(<Vec<u8>>::type_info().kind(), ReflectKind::Opaque);
    }

    #[test]
    fn constructor_builds_empty() {
        let value = <Vec<String>>::type_info().constructor().unwrap().construct();
        assert!(value.take::<Vec<String>>().unwrap().is_empty());
    }
}
