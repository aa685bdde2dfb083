use alloc::string::String;
use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;
use std::sync::OnceLock;

use hashbrown::HashMap;

use crate::info::{TypeInfo, Typed};

/// A registry of [`TypeInfo`], keyed by [`TypeId`] and by type path.
///
/// Registering a type also registers the value types of its members and the
/// item types of its containers.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use vc_marshal::{derive::Marshal, registry::TypeRegistry};
///
/// #[derive(Marshal)]
/// struct Track {
///     title: String,
///     samples: Vec<i16>,
/// }
///
/// let mut registry = TypeRegistry::empty();
/// registry.register::<Track>();
///
/// assert!(registry.contains(TypeId::of::<Track>()));
/// assert!(registry.contains(TypeId::of::<Vec<i16>>()));
/// assert!(registry.contains(TypeId::of::<i16>()));
/// assert!(registry.get_with_type_path("alloc::string::String").is_some());
/// ```
#[derive(Default)]
pub struct TypeRegistry {
    type_info_table: HashMap<TypeId, &'static TypeInfo>,
    type_path_to_id: HashMap<&'static str, TypeId>,
}

impl TypeRegistry {
    /// Create a registry without any types.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a registry holding the primitive types.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<String>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<isize>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<usize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry
    }

    /// Registers `T` and the types it reaches.
    ///
    /// Registering a type twice does nothing.
    #[inline]
    pub fn register<T: Typed>(&mut self) {
        self.register_info(T::type_info());
    }

    /// Registers a [`TypeInfo`] and the types it reaches.
    ///
    /// Returns `false` if the type was already registered.
    pub fn register_info(&mut self, info: &'static TypeInfo) -> bool {
        let type_id = info.type_id();
        if self.type_info_table.contains_key(&type_id) {
            return false;
        }
        self.type_info_table.insert(type_id, info);
        self.type_path_to_id.insert(info.type_path(), type_id);

        match info {
            TypeInfo::Primitive(_) => {}
            TypeInfo::Object(object) => {
                for member in object {
                    self.register_info(member.value_info());
                }
            }
            TypeInfo::Sequence(sequence) => {
                self.register_info(sequence.item_info());
            }
            TypeInfo::Array(array) => {
                self.register_info(array.item_info());
            }
        }
        true
    }

    /// Registers every non-generic type annotated with `#[marshal(auto_register)]`.
    ///
    /// This is equivalent to calling [`register`](Self::register) for each of
    /// them. Repeated calls do not insert duplicates.
    ///
    /// Returns `false` if the `auto_register` feature is disabled, in which
    /// case nothing is registered.
    ///
    /// # Examples
    ///
    /// ```
    /// # use core::any::TypeId;
    /// # use vc_marshal::{derive::Marshal, registry::TypeRegistry};
    /// #[derive(Marshal)]
    /// #[marshal(auto_register)]
    /// struct Window {
    ///     width: u32,
    ///     height: u32,
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// if registry.auto_register() {
    ///     assert!(registry.contains(TypeId::of::<Window>()));
    ///     assert!(registry.contains(TypeId::of::<u32>()));
    /// }
    /// ```
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        crate::__macro_exports::auto_register::register_all(self);

        cfg!(feature = "auto_register")
    }

    /// Returns `true` if the type with the given [`TypeId`] is registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_info_table.contains_key(&type_id)
    }

    /// Returns the [`TypeInfo`] of the type with the given [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.type_info_table.get(&type_id).copied()
    }

    /// Returns the [`TypeInfo`] of the type with the given path,
    /// as produced by [`core::any::type_name`].
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&'static TypeInfo> {
        let type_id = self.type_path_to_id.get(type_path)?;
        self.get(*type_id)
    }

    /// Returns an iterator over the registered types, in no particular order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static TypeInfo> + '_ {
        self.type_info_table.values().copied()
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.type_info_table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_info_table.is_empty()
    }

    /// Returns the process-wide registry.
    ///
    /// It is populated once, on first access, with the primitive types and
    /// the auto-registered types, and is read-only afterwards. Use
    /// [`set_global`](Self::set_global) before the first access to install a
    /// custom one.
    pub fn global() -> &'static TypeRegistry {
        GLOBAL.get_or_init(|| {
            let mut registry = TypeRegistry::new();
            registry.auto_register();
            log::debug!("global type registry initialized with {} types", registry.len());
            registry
        })
    }

    /// Installs `self` as the process-wide registry.
    ///
    /// Fails and returns `self` if the global registry is already set.
    pub fn set_global(self) -> Result<(), Self> {
        GLOBAL.set(self)
    }
}

static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut paths: Vec<_> = self.type_path_to_id.keys().collect();
        paths.sort_unstable();
        f.debug_set().entries(paths).finish()
    }
}
