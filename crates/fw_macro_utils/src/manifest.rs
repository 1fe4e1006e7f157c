use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use toml_edit::{Document, Item, Table};

/// The caller's parsed `Cargo.toml`, used to find how a `fieldwise` crate is
/// reachable from the crate that invoked a derive.
///
/// # Example
///
/// ```rust
/// # use fw_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("fw_meta"));
/// ```
///
/// # Resolution rules
///
/// 1. The requested crate is listed in `dependencies`: `::crate_name`.
/// 2. The requested crate starts with `fw_` and `fieldwise` is listed:
///    `::fieldwise::short_name` (e.g. `fw_meta` -> `::fieldwise::meta`).
/// 3. Steps 1-2 again over `dev-dependencies`.
/// 4. Otherwise `::crate_name`.
///
/// A crate that derives on its own types should declare
/// `extern crate self as fw_meta;` so the absolute path also works inside it.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "fieldwise";
const MEMBER_PREFIX: &str = "fw_";

impl Manifest {
    fn manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        Some(path)
    }

    fn load(path: &PathBuf) -> Option<Self> {
        let modified_time = std::fs::metadata(path).and_then(|m| m.modified()).ok()?;
        let text = std::fs::read_to_string(path).ok()?.into_boxed_str();
        let manifest = Document::parse(text).ok()?;
        Some(Self {
            manifest,
            modified_time,
        })
    }

    fn absolute(name: &str) -> syn::Path {
        let ident = syn::Ident::new(name, proc_macro2_span());
        let mut path = syn::Path::from(ident);
        path.leading_colon = Some(Default::default());
        path
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute(name));
        }

        let short = name.strip_prefix(MEMBER_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            let mut path = Self::absolute(FACADE_NAME);
            path.segments.push(syn::Ident::new(short, proc_macro2_span()).into());
            return Some(path);
        }
        None
    }

    /// Returns the path under which `name` is reachable from the caller.
    ///
    /// See the type-level documentation for the resolution order.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .find_map(|section| match self.manifest.get(section) {
                Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                _ => None,
            })
            .unwrap_or_else(|| Self::absolute(name))
    }

    /// Runs `func` with the caller's manifest.
    ///
    /// Manifests are cached per path and re-read only when the file's
    /// modification time changes. If the manifest cannot be located or
    /// parsed, an empty manifest is used, so every lookup falls back to
    /// `::crate_name`.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(path) = Self::manifest_path() else {
            return func(&Self::empty());
        };

        let current = std::fs::metadata(&path).and_then(|m| m.modified()).ok();

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&path)
            && Some(manifest.modified_time) == current
        {
            return func(manifest);
        }
        drop(manifests);

        let Some(manifest) = Self::load(&path) else {
            return func(&Self::empty());
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }

    fn empty() -> Self {
        Self {
            manifest: Document::parse(Box::<str>::default())
                .expect("an empty manifest is valid TOML"),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }
}

#[inline]
fn proc_macro2_span() -> Span {
    Span::call_site()
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use quote::ToTokens;
    use std::time::SystemTime;
    use toml_edit::Document;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(Box::from(text)).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    fn path_str(p: syn::Path) -> String {
        p.to_token_stream().to_string().replace(' ', "")
    }

    #[test]
    fn direct_dependency_wins() {
        let m = manifest("[dependencies]\nfw_meta = \"0.0.1\"\nfieldwise = \"0.0.1\"\n");
        assert_eq!(path_str(m.get_crate_path("fw_meta")), "::fw_meta");
    }

    #[test]
    fn facade_dependency_is_used() {
        let m = manifest("[dependencies]\nfieldwise = \"0.0.1\"\n");
        assert_eq!(path_str(m.get_crate_path("fw_meta")), "::fieldwise::meta");
    }

    #[test]
    fn dev_dependencies_are_searched() {
        let m = manifest("[dev-dependencies]\nfieldwise = \"0.0.1\"\n");
        assert_eq!(path_str(m.get_crate_path("fw_meta")), "::fieldwise::meta");
    }

    #[test]
    fn unknown_falls_back_to_absolute() {
        let m = manifest("[package]\nname = \"x\"\n");
        assert_eq!(path_str(m.get_crate_path("fw_meta")), "::fw_meta");
    }
}
