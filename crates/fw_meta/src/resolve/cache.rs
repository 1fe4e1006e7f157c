use core::any::TypeId;
use std::sync::{Arc, PoisonError, RwLock};

use fw_utils::TypeIdMap;

use crate::Struct;
use crate::error::ResolveError;
use crate::info::{FieldInfo, StructInfo, TypeInfo};
use crate::resolve::{FieldSet, should_serialize};

// -----------------------------------------------------------------------------
// FieldCache

/// An append-only store of resolved [`FieldSet`]s, keyed by [`TypeId`].
///
/// Entries are created on first resolution and then live as long as the
/// cache; they are never evicted or changed. Reads only take the shared
/// lock. Two threads resolving the same type for the first time may both
/// compute it; whichever commits first is handed to both.
///
/// Most callers want the process-wide [`FieldCache::global`], which backs
/// [`resolve_fields`](crate::resolve_fields).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use fw_meta::{derive::Reflect, resolve::FieldCache};
///
/// #[derive(Reflect)]
/// struct Point { x: i32, y: i32 }
///
/// let cache = FieldCache::new();
/// let a = cache.resolve::<Point>();
/// let b = cache.resolve::<Point>();
///
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(cache.len(), 1);
/// ```
pub struct FieldCache {
    sets: RwLock<TypeIdMap<Arc<FieldSet>>>,
}

impl FieldCache {
    /// Creates an empty cache.
    #[inline]
    pub const fn new() -> Self {
        Self {
            sets: RwLock::new(TypeIdMap::new()),
        }
    }

    /// Returns the process-wide cache.
    #[inline]
    pub fn global() -> &'static FieldCache {
        static GLOBAL: FieldCache = FieldCache::new();
        &GLOBAL
    }

    /// Returns the committed field set for `type_id`, if any.
    pub fn get(&self, type_id: TypeId) -> Option<Arc<FieldSet>> {
        self.sets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned()
    }

    /// Commits `set` under its type, unless an entry already exists.
    ///
    /// Returns the committed entry, which is `set` itself only if this call
    /// won. A later `set` is dropped whatever its contents.
    #[inline]
    pub fn put(&self, set: FieldSet) -> Arc<FieldSet> {
        self.commit(set).0
    }

    /// Like [`put`](Self::put), but also hands back the losing set.
    fn commit(&self, set: FieldSet) -> (Arc<FieldSet>, Option<FieldSet>) {
        let type_id = set.ty().id();
        let mut sets = self.sets.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = sets.get(&type_id) {
            log::trace!("discarded duplicate field set of `{}`", set.ty().path());
            return (existing.clone(), Some(set));
        }

        let set = Arc::new(set);
        sets.insert(type_id, set.clone());
        log::debug!(
            "resolved {} serializable fields of `{}`",
            set.len(),
            set.ty().path()
        );
        (set, None)
    }

    /// Returns `true` if a field set for `type_id` has been committed.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.sets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&type_id)
    }

    /// Returns the number of committed field sets.
    #[inline]
    pub fn len(&self) -> usize {
        self.sets.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` if nothing has been committed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves the serializable fields of `T`.
    #[inline]
    pub fn resolve<T: Struct>(&self) -> Arc<FieldSet> {
        self.resolve_struct(T::struct_info())
    }

    /// Resolves the serializable fields of the struct described by `info`.
    ///
    /// 1. A committed entry is returned as is.
    /// 2. Otherwise the declared fields that pass [`should_serialize`] are
    ///    kept in declaration order.
    /// 3. If the struct carries [`IncludeBase`](crate::info::IncludeBase) and
    ///    has a base, the base's whole field set is appended.
    /// 4. The result is committed and returned.
    pub fn resolve_struct(&self, info: &'static StructInfo) -> Arc<FieldSet> {
        if let Some(set) = self.get(info.ty_id()) {
            log::trace!("field set cache hit for `{}`", info.type_path());
            return set;
        }

        let mut fields: Vec<&'static FieldInfo> = info
            .fields()
            .iter()
            .filter(|field| should_serialize(field))
            .collect();

        if info.includes_base() {
            match info.base() {
                Some(base) => fields.extend(self.resolve_struct(base.struct_info()).iter()),
                None => log::warn!(
                    "`{}` asks to include its base, but has no `#[reflect(base)]` field",
                    info.type_path()
                ),
            }
        }

        let (committed, lost) = self.commit(FieldSet::new(*info.ty(), fields));
        if cfg!(all(debug_assertions, feature = "debug"))
            && let Some(lost) = lost
        {
            assert!(
                committed.same_fields(&lost),
                "racing resolutions of `{}` disagree: {committed:?} vs {lost:?}",
                info.type_path(),
            );
        }
        committed
    }

    /// Resolves the serializable fields of the type described by `info`.
    ///
    /// # Errors
    ///
    /// [`ResolveError::NotAStruct`] if `info` does not describe a struct.
    pub fn resolve_type_info(&self, info: &'static TypeInfo) -> Result<Arc<FieldSet>, ResolveError> {
        match info.as_struct() {
            Some(info) => Ok(self.resolve_struct(info)),
            None => Err(ResolveError::NotAStruct {
                type_path: info.type_path(),
                kind: info.kind(),
            }),
        }
    }

    /// Resolves every struct registered with `#[reflect(auto_register)]`.
    ///
    /// Returns the number of struct types resolved.
    #[cfg(feature = "auto_register")]
    pub fn prewarm(&self) -> usize {
        crate::resolve::registered_types()
            .filter_map(TypeInfo::as_struct)
            .map(|info| self.resolve_struct(info))
            .count()
    }
}

impl Default for FieldCache {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FieldCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sets = self.sets.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_set().entries(sets.values()).finish()
    }
}
