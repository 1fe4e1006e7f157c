use crate::info::TypeInfo;

pub use inventory;

/// One type submitted by `#[reflect(auto_register)]`.
pub struct __AutoRegisterFunc(pub fn() -> &'static TypeInfo);

inventory::collect!(__AutoRegisterFunc);

/// Lists every type submitted with `#[reflect(auto_register)]`, in no
/// particular order.
///
/// ```
/// use fw_meta::{derive::Reflect, resolve::{registered_types, FieldCache}};
///
/// #[derive(Reflect)]
/// #[reflect(auto_register)]
/// struct Config {
///     retries: u8,
/// }
///
/// assert!(registered_types().any(|info| info.type_name() == "Config"));
///
/// let cache = FieldCache::new();
/// assert!(cache.prewarm() >= 1);
/// assert!(cache.contains(core::any::TypeId::of::<Config>()));
/// ```
pub fn registered_types() -> impl Iterator<Item = &'static TypeInfo> {
    inventory::iter::<__AutoRegisterFunc>
        .into_iter()
        .map(|func| (func.0)())
}
