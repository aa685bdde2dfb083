use std::sync::RwLock;

use crate::access::ValueAccessor;
use crate::info::{Type, TypeInfo, Typed};
use crate::{Reflect, ReprEnum};

/// How a member is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// Storage inside each instance.
    InstanceField,
    /// One value shared by every instance, stored in a `static`.
    SharedField,
    /// A getter and setter pair.
    Property,
}

/// One member of an [`ObjectInfo`](crate::info::ObjectInfo).
///
/// - `name`: the display name, used as the document-object key.
/// - `ty`: the declared type. For enum-encoded members this is the enum.
/// - `value_info`: the type the codecs see, i.e. the underlying integer of
///   an enum-encoded member, otherwise the declared type.
///
/// The constructors mirror the ones of [`ValueAccessor`].
#[derive(Debug)]
pub struct MemberInfo {
    name: &'static str,
    kind: MemberKind,
    enum_encoded: bool,
    ty: Type,
    value_info: fn() -> &'static TypeInfo,
    accessor: ValueAccessor,
}

impl MemberInfo {
    /// A field stored in `T`.
    pub fn field<T: Reflect, V: Reflect + Typed>(
        name: &'static str,
        get: impl Fn(&T) -> &V + Send + Sync + 'static,
        get_mut: impl Fn(&mut T) -> &mut V + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            kind: MemberKind::InstanceField,
            enum_encoded: false,
            ty: Type::of::<V>(),
            value_info: V::type_info,
            accessor: ValueAccessor::field(get, get_mut),
        }
    }

    /// A computed property of `T`.
    pub fn property<T: Reflect, V: Reflect + Typed>(
        name: &'static str,
        get: impl Fn(&T) -> V + Send + Sync + 'static,
        set: impl Fn(&mut T, V) + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            kind: MemberKind::Property,
            enum_encoded: false,
            ty: Type::of::<V>(),
            value_info: V::type_info,
            accessor: ValueAccessor::property(get, set),
        }
    }

    /// A value shared by every instance.
    pub fn shared<V: Reflect + Typed>(name: &'static str, storage: &'static RwLock<V>) -> Self {
        Self {
            name,
            kind: MemberKind::SharedField,
            enum_encoded: false,
            ty: Type::of::<V>(),
            value_info: V::type_info,
            accessor: ValueAccessor::shared(storage),
        }
    }

    /// An enum-encoded field stored in `T`.
    ///
    /// Decoding writes through [`ReprEnum::from_repr`]. An integer that names
    /// no variant is rejected with
    /// [`AccessError::InvalidDiscriminant`](crate::access::AccessError::InvalidDiscriminant)
    /// and the member keeps its current value.
    pub fn enum_field<T: Reflect, E: ReprEnum>(
        name: &'static str,
        get: impl Fn(&T) -> &E + Send + Sync + 'static,
        get_mut: impl Fn(&mut T) -> &mut E + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            kind: MemberKind::InstanceField,
            enum_encoded: true,
            ty: Type::of::<E>(),
            value_info: <E::Repr as Typed>::type_info,
            accessor: ValueAccessor::enum_field(get, get_mut),
        }
    }

    /// An enum-encoded computed property of `T`.
    ///
    /// Decoding writes through [`ReprEnum::from_repr`]. An integer that names
    /// no variant is rejected with
    /// [`AccessError::InvalidDiscriminant`](crate::access::AccessError::InvalidDiscriminant)
    /// and the member keeps its current value.
    pub fn enum_property<T: Reflect, E: ReprEnum>(
        name: &'static str,
        get: impl Fn(&T) -> E + Send + Sync + 'static,
        set: impl Fn(&mut T, E) + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            kind: MemberKind::Property,
            enum_encoded: true,
            ty: Type::of::<E>(),
            value_info: <E::Repr as Typed>::type_info,
            accessor: ValueAccessor::enum_property(get, set),
        }
    }

    /// An enum-encoded value shared by every instance.
    ///
    /// Decoding writes through [`ReprEnum::from_repr`]. An integer that names
    /// no variant is rejected with
    /// [`AccessError::InvalidDiscriminant`](crate::access::AccessError::InvalidDiscriminant)
    /// and the member keeps its current value.
    pub fn enum_shared<E: ReprEnum>(name: &'static str, storage: &'static RwLock<E>) -> Self {
        Self {
            name,
            kind: MemberKind::SharedField,
            enum_encoded: true,
            ty: Type::of::<E>(),
            value_info: <E::Repr as Typed>::type_info,
            accessor: ValueAccessor::enum_shared(storage),
        }
    }

    /// Returns the display name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Returns `true` if the member is encoded through its underlying integer.
    #[inline]
    pub const fn is_enum_encoded(&self) -> bool {
        self.enum_encoded
    }

    /// Returns the declared [`Type`] of the member.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`TypeInfo`] of the value the codecs read and write.
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }

    #[inline]
    pub const fn accessor(&self) -> &ValueAccessor {
        &self.accessor
    }
}
