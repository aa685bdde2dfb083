use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Crates that re-export the `vc_*` crates as `::facade::short_name`.
///
/// Searched after a direct dependency on the requested crate.
const FACADES: &[&str] = &["vc_persist"];

const CRATE_PREFIX: &str = "vc_";

/// The caller's `Cargo.toml`, parsed once and cached per manifest path.
///
/// Emitted code must name the runtime crate the way the *invoking* crate
/// sees it, which may be a direct dependency or a re-export through a
/// facade crate.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_marshal"));
/// ```
///
/// # Resolution rules
///
/// 1. `name` is listed in `dependencies`: `::name`.
/// 2. `name` starts with `vc_` and the `vc_persist` facade is listed:
///    `::vc_persist::short_name` (e.g. `vc_marshal` -> `::vc_persist::marshal`).
/// 3. Repeat 1-2 in `dev-dependencies`.
/// 4. Otherwise `::name`.
///
/// A crate that needs to name itself from its own tests should declare
/// `extern crate self as name;` so the fallback resolves.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn read(path: &Path) -> Document<Box<str>> {
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(text)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    fn parse_path(text: &str) -> syn::Path {
        syn::parse_str(text).unwrap_or_else(|_| panic!("`{text}` is not a valid path"))
    }

    fn resolve_in(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }
        let short = name.strip_prefix(CRATE_PREFIX)?;
        FACADES
            .iter()
            .find(|facade| deps.contains_key(facade))
            .map(|facade| Self::parse_path(&format!("::{facade}::{short}")))
    }

    /// Returns the [`syn::Path`] under which the invoking crate can reach `name`.
    ///
    /// See the type-level documentation for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .find_map(|section| match self.manifest.get(section) {
                Some(Item::Table(deps)) => Self::resolve_in(deps, name),
                _ => None,
            })
            .unwrap_or_else(|| Self::parse_path(&format!("::{name}")))
    }

    /// Runs `func` against the caller's cached [`Manifest`].
    ///
    /// The cache entry is refreshed when the file's modified time changes.
    /// Callers should resolve paths once per macro invocation.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = Self::manifest_path();
        let modified_time = std::fs::metadata(&path)
            .and_then(|metadata| metadata.modified())
            .expect("The Cargo.toml should have a modified time.");

        {
            let cache = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = cache.get(&path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Manifest {
            manifest: Self::read(&path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use toml_edit::Document;

    use super::Manifest;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(Box::from(text)).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    fn segments(path: &syn::Path) -> Vec<String> {
        assert!(path.leading_colon.is_some());
        path.segments.iter().map(|s| s.ident.to_string()).collect()
    }

    #[test]
    fn direct_dependency_wins() {
        let m = manifest("[dependencies]\nvc_marshal = \"0.1\"\nvc_persist = \"0.1\"\n");
        assert_eq!(segments(&m.get_crate_path("vc_marshal")), ["vc_marshal"]);
    }

    #[test]
    fn facade_reexport() {
        let m = manifest("[dev-dependencies]\nvc_persist = \"0.1\"\n");
        assert_eq!(
            segments(&m.get_crate_path("vc_marshal")),
            ["vc_persist", "marshal"],
        );
    }

    #[test]
    fn unrelated_crate_named_vc_is_not_a_facade() {
        let m = manifest("[dependencies]\nvc = \"0.1\"\n");
        assert_eq!(segments(&m.get_crate_path("vc_marshal")), ["vc_marshal"]);
    }
}
