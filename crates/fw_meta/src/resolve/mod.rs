//! Discovery of the serializable fields of a struct.
//!
//! - [`should_serialize`]: the exclusion policy for one declared field.
//! - [`FieldSet`]: the ordered result for one struct.
//! - [`FieldCache`]: the append-only store of results, see [`FieldCache::global`].
//! - [`resolve_fields`]: resolution through the global cache.
//! - [`find_field`] / [`find_field_optional`]: lookup by name across opted-in bases.

mod cache;
mod field_set;
mod lookup;

use std::sync::Arc;

use crate::Struct;
use crate::info::{FieldInfo, NonSerialized};

pub use cache::FieldCache;
pub use field_set::FieldSet;
pub use lookup::{find_field, find_field_optional, find_struct_field, find_struct_field_optional};

#[cfg(feature = "auto_register")]
pub use crate::__macro_exports::auto_register::registered_types;

/// Returns `false` if `field` is excluded from serialization.
///
/// A field is excluded when it carries the [`NonSerialized`] marker, or
/// when it has the [`TRANSIENT`](crate::info::FieldFlags::TRANSIENT) flag.
/// Either signal is enough.
#[inline]
pub fn should_serialize(field: &FieldInfo) -> bool {
    !(field.has_attribute::<NonSerialized>() || field.is_transient())
}

/// Resolves the serializable fields of `T` through [`FieldCache::global`].
///
/// # Examples
///
/// ```
/// use fw_meta::{derive::Reflect, resolve_fields};
///
/// #[derive(Reflect)]
/// struct Entity {
///     id: u64,
/// }
///
/// #[derive(Reflect)]
/// #[reflect(include_base)]
/// struct Player {
///     #[reflect(base)]
///     entity: Entity,
///     name: String,
///     #[reflect(transient)]
///     session: u32,
/// }
///
/// let fields = resolve_fields::<Player>();
/// assert_eq!(fields.field_names().collect::<Vec<_>>(), ["name", "id"]);
/// ```
#[inline]
pub fn resolve_fields<T: Struct>() -> Arc<FieldSet> {
    FieldCache::global().resolve::<T>()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{FieldCache, find_field, find_field_optional, resolve_fields, should_serialize};
    use crate::derive::Reflect;
    use crate::error::{FieldNotFoundError, ResolveError};
    use crate::info::{FieldFlags, ReflectKind, Typed};
    use crate::{Reflect as _, Struct};

    #[derive(Reflect)]
    struct Plain {
        c: u8,
        pub a: u8,
        b: u8,
    }

    #[derive(Reflect)]
    struct Excluded {
        kept: u32,
        #[reflect(skip)]
        marked: u32,
        #[reflect(transient)]
        runtime: u32,
        #[reflect(skip, transient)]
        both: u32,
    }

    #[derive(Reflect)]
    struct Grand {
        g: i32,
        #[reflect(skip)]
        g_hidden: i32,
    }

    #[derive(Reflect)]
    #[reflect(include_base)]
    struct Parent {
        #[reflect(base)]
        grand: Grand,
        p: i32,
    }

    #[derive(Reflect)]
    struct ClosedParent {
        #[reflect(base)]
        grand: Grand,
        p: i32,
    }

    #[derive(Reflect)]
    #[reflect(include_base)]
    struct Child {
        d: i32,
        #[reflect(base)]
        parent: Parent,
    }

    #[derive(Reflect)]
    struct Sealed {
        #[reflect(base)]
        parent: Parent,
        s: i32,
    }

    #[derive(Reflect)]
    #[reflect(include_base)]
    struct ChildOfClosed {
        #[reflect(base)]
        parent: ClosedParent,
        d: i32,
    }

    #[derive(Reflect)]
    #[reflect(include_base)]
    struct Orphan {
        o: i32,
    }

    fn names(set: &super::FieldSet) -> Vec<&'static str> {
        set.field_names().collect()
    }

    #[test]
    fn declaration_order_any_visibility() {
        let set = FieldCache::new().resolve::<Plain>();
        assert_eq!(names(&set), ["c", "a", "b"]);
        assert!(set.iter().all(|f| f.declaring_type().is::<Plain>()));
        assert!(set.get("c").unwrap().flags().contains(FieldFlags::PRIVATE));
        assert!(!set.get("a").unwrap().flags().contains(FieldFlags::PRIVATE));
    }

    #[test]
    fn resolution_is_cached() {
        let cache = FieldCache::new();
        assert!(cache.is_empty());

        let first = cache.resolve::<Plain>();
        let second = cache.resolve::<Plain>();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(first.same_fields(&second));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(Plain::type_info().ty_id()));

        assert!(Arc::ptr_eq(&resolve_fields::<Plain>(), &resolve_fields::<Plain>()));
    }

    #[test]
    fn excluded_by_marker_or_flag() {
        let info = Excluded::struct_info();
        let verdicts: Vec<_> = info
            .fields()
            .iter()
            .map(|f| (f.name(), should_serialize(f)))
            .collect();
        assert_eq!(
            verdicts,
            [("kept", true), ("marked", false), ("runtime", false), ("both", false)]
        );

        let set = FieldCache::new().resolve::<Excluded>();
        assert_eq!(names(&set), ["kept"]);
    }

    #[test]
    fn base_fields_follow_own_fields() {
        let cache = FieldCache::new();
        let parent = cache.resolve::<Parent>();
        assert_eq!(names(&parent), ["p", "g"]);

        // Child: own fields, then all of Parent's set (which itself ends with Grand's).
        let child = cache.resolve::<Child>();
        assert_eq!(names(&child), ["d", "p", "g"]);
        assert!(child[1..].iter().zip(parent.iter()).all(|(a, b)| core::ptr::eq(*a, b)));
        assert!(child.get("g").unwrap().declaring_type().is::<Grand>());

        // Base sets were committed on the way.
        assert!(cache.contains(Grand::type_info().ty_id()));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn base_fields_do_not_leak_without_opt_in() {
        let cache = FieldCache::new();
        assert_eq!(names(&cache.resolve::<Sealed>()), ["s"]);
        assert_eq!(names(&cache.resolve::<ClosedParent>()), ["p"]);
        assert_eq!(names(&cache.resolve::<ChildOfClosed>()), ["d", "p"]);
        assert!(!cache.contains(Grand::type_info().ty_id()));
    }

    #[test]
    fn include_base_without_base() {
        assert_eq!(names(&FieldCache::new().resolve::<Orphan>()), ["o"]);
    }

    #[test]
    fn lookup_walks_opted_in_bases() {
        let field = find_field::<Child>("g").unwrap();
        assert!(field.declaring_type().is::<Grand>());

        // Lookup ignores the exclusion policy.
        assert_eq!(find_field::<Child>("g_hidden").unwrap().name(), "g_hidden");
        assert_eq!(find_field::<Child>("d").unwrap().name(), "d");
    }

    #[test]
    fn lookup_stops_at_first_closed_link() {
        // Sealed lacks the marker itself.
        assert_eq!(
            find_field::<Sealed>("g").unwrap_err(),
            FieldNotFoundError {
                type_path: Sealed::type_info().type_path(),
                name: "g".into(),
            }
        );
        assert!(find_field_optional::<Sealed>("p").is_none());

        // ChildOfClosed opts in, its immediate base does not.
        assert!(find_field_optional::<ChildOfClosed>("p").is_some());
        assert!(find_field_optional::<ChildOfClosed>("g").is_none());
        assert!(find_field::<ChildOfClosed>("g").is_err());
    }

    #[test]
    fn non_structs_do_not_resolve() {
        let err = FieldCache::new()
            .resolve_type_info(<Option<u8>>::type_info())
            .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::NotAStruct {
                kind: ReflectKind::Nullable,
                ..
            }
        ));

        let set = FieldCache::new().resolve_type_info(Plain::type_info()).unwrap();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn concurrent_first_resolution_agrees() {
        let cache = FieldCache::new();
        let sets: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8).map(|_| s.spawn(|| cache.resolve::<Child>())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let committed = cache.get(Child::type_info().ty_id()).unwrap();
        assert!(sets.iter().all(|set| Arc::ptr_eq(set, &committed)));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn put_keeps_first_entry() {
        let cache = FieldCache::new();
        let first = cache.resolve::<Plain>();
        let again = cache.put(super::FieldSet::new(
            *Plain::type_info().ty(),
            Plain::struct_info().fields().iter().collect::<Vec<_>>(),
        ));
        assert!(Arc::ptr_eq(&first, &again));
    }

    #[test]
    fn put_drops_a_disagreeing_set() {
        let cache = FieldCache::new();
        let first = cache.resolve::<Plain>();

        let partial = &Plain::struct_info().fields()[..1];
        let kept = cache.put(super::FieldSet::new(
            *Plain::type_info().ty(),
            partial.iter().collect::<Vec<_>>(),
        ));

        assert!(Arc::ptr_eq(&first, &kept));
        assert_eq!(kept.len(), 3);
        assert_eq!(cache.resolve::<Plain>().len(), 3);
    }

    #[test]
    fn values_reachable_through_resolved_fields() {
        let value = Plain { c: 3, a: 1, b: 2 };
        let set = FieldCache::new().resolve::<Plain>();
        let read: Vec<u8> = set
            .iter()
            .map(|f| *f.get(&value).unwrap().downcast_ref::<u8>().unwrap())
            .collect();
        assert_eq!(read, [3, 1, 2]);
        assert_eq!(value.ty_id(), Plain::type_info().ty_id());
    }
}
