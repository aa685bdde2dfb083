use alloc::boxed::Box;

use hashbrown::HashMap;

use crate::info::{MemberInfo, Type, Typed};

/// The ordered member table of an object type.
///
/// Built once per type and never mutated. The order of members is fixed by
/// the input order, and is the order the codecs visit them in.
///
/// # Panics
///
/// [`ObjectInfo::new`] panics if two members share a display name, since a
/// document object can hold each key only once.
///
/// # Examples
///
/// ```rust
/// use vc_marshal::{derive::Marshal, info::Typed};
///
/// #[derive(Marshal)]
/// struct Point {
///     x: f32,
///     #[marshal(rename = "Y")]
///     y: f32,
/// }
///
/// let info = Point::type_info().as_object().unwrap();
///
/// assert_eq!(info.len(), 2);
/// assert_eq!(info.member_names(), ["x", "Y"]);
/// assert_eq!(info.index_of("Y"), Some(1));
/// ```
#[derive(Debug)]
pub struct ObjectInfo {
    ty: Type,
    members: Box<[MemberInfo]>,
    member_names: Box<[&'static str]>,
    member_indices: HashMap<&'static str, usize>,
}

impl ObjectInfo {
    /// Create a new [`ObjectInfo`] for `T`.
    pub fn new<T: Typed>(members: impl IntoIterator<Item = MemberInfo>) -> Self {
        let ty = Type::of::<T>();
        let members: Box<[MemberInfo]> = members.into_iter().collect();

        let member_names: Box<[&'static str]> = members.iter().map(MemberInfo::name).collect();
        let mut member_indices = HashMap::with_capacity(members.len());
        for (index, name) in member_names.iter().enumerate() {
            if member_indices.insert(*name, index).is_some() {
                panic!("duplicate member `{name}` in `{}`", ty.path());
            }
        }

        Self {
            ty,
            members,
            member_names,
            member_indices,
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`MemberInfo`] with the given display name, if present.
    #[inline]
    pub fn member(&self, name: &str) -> Option<&MemberInfo> {
        self.member_indices.get(name).map(|&index| &self.members[index])
    }

    /// Returns the [`MemberInfo`] at the given index, if present.
    #[inline]
    pub fn member_at(&self, index: usize) -> Option<&MemberInfo> {
        self.members.get(index)
    }

    /// Returns the index of the given display name, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.member_indices.get(name).copied()
    }

    /// Returns an iterator over the members in **declaration order**.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, MemberInfo> {
        self.members.iter()
    }

    /// Returns the display names in declaration order.
    #[inline]
    pub fn member_names(&self) -> &[&'static str] {
        &self.member_names
    }

    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the type has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<'a> IntoIterator for &'a ObjectInfo {
    type Item = &'a MemberInfo;
    type IntoIter = core::slice::Iter<'a, MemberInfo>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::RwLock;

    use crate::info::{MemberInfo, MemberKind, ObjectInfo};

    static SHARED: RwLock<u32> = RwLock::new(0);

    #[test]
    fn keeps_input_order() {
        let info = ObjectInfo::new::<u8>([
            MemberInfo::shared("b", &SHARED),
            MemberInfo::shared("a", &SHARED),
        ]);
        assert_eq!(info.member_names(), ["b", "a"]);
        assert_eq!(info.member("a").map(MemberInfo::kind), Some(MemberKind::SharedField));
        assert!(info.member("c").is_none());
    }

    #[test]
    #[should_panic(expected = "duplicate member `a`")]
    fn rejects_duplicate_names() {
        ObjectInfo::new::<u8>([
            MemberInfo::shared("a", &SHARED),
            MemberInfo::shared("a", &SHARED),
        ]);
    }
}
