use crate::Reflect;
use crate::info::ObjectInfo;

/// A value encoded as a document object, one key per member.
///
/// The member table is static: every instance of a type shares the same
/// [`ObjectInfo`], and the members are reached through their
/// [`ValueAccessor`](crate::access::ValueAccessor).
///
/// # Deriving
///
/// `#[derive(Marshal)]` implements it for structs with named fields. Member
/// names must be unique after renaming, including the ones declared with
/// `property(..)` and `shared(..)`.
///
/// ```
/// use std::sync::RwLock;
/// use vc_marshal::derive::Marshal;
///
/// static LAUNCHES: RwLock<u32> = RwLock::new(0);
///
/// #[derive(Marshal, Default)]
/// #[marshal(shared(name = "launches", storage = LAUNCHES))]
/// struct Window {
///     #[marshal(rename = "w")]
///     width: u32,
///     height: u32,
/// }
/// ```
///
/// Two fields renamed to the same key:
///
/// ```compile_fail
/// use vc_marshal::derive::Marshal;
///
/// #[derive(Marshal, Default)]
/// struct Window {
///     #[marshal(rename = "height")]
///     width: u32,
///     height: u32,
/// }
/// ```
///
/// A field named like a shared member:
///
/// ```compile_fail
/// use std::sync::RwLock;
/// use vc_marshal::derive::Marshal;
///
/// static LAUNCHES: RwLock<u32> = RwLock::new(0);
///
/// #[derive(Marshal, Default)]
/// #[marshal(shared(name = "launches", storage = LAUNCHES))]
/// struct Window {
///     launches: u32,
/// }
/// ```
///
/// A field named like a property:
///
/// ```compile_fail
/// use vc_marshal::derive::Marshal;
///
/// #[derive(Marshal, Default)]
/// #[marshal(property(name = "title", get = title, set = set_title))]
/// struct Window {
///     title: String,
/// }
///
/// impl Window {
///     fn title(&self) -> String {
///         self.title.clone()
///     }
///
///     fn set_title(&mut self, title: String) {
///         self.title = title;
///     }
/// }
/// ```
///
/// Tuple structs have no member names:
///
/// ```compile_fail
/// use vc_marshal::derive::Marshal;
///
/// #[derive(Marshal, Default)]
/// struct Size(u32, u32);
/// ```
pub trait Object: Reflect {
    /// Returns the member table of this type.
    fn object_info(&self) -> &'static ObjectInfo;
}
