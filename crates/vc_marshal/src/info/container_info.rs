use crate::info::{Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// PrimitiveInfo

/// Information for a type that maps onto a document scalar.
#[derive(Debug)]
pub struct PrimitiveInfo {
    ty: Type,
}

impl PrimitiveInfo {
    /// Create a new [`PrimitiveInfo`] for `T`.
    #[inline]
    pub fn new<T: Typed>() -> Self {
        Self { ty: Type::of::<T>() }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }
}

// -----------------------------------------------------------------------------
// SequenceInfo

/// Information for a growable homogeneous container such as `Vec<T>`.
///
/// # Examples
///
/// ```
/// use vc_marshal::info::Typed;
///
/// let info = <Vec<u8>>::type_info().as_sequence().unwrap();
/// assert!(info.item_info().type_is::<u8>());
/// ```
#[derive(Debug)]
pub struct SequenceInfo {
    ty: Type,
    item_ty: Type,
    // `TypeInfo` of the item is created on first access.
    item_info: fn() -> &'static TypeInfo,
}

impl SequenceInfo {
    /// Create a new [`SequenceInfo`] for container `T` holding `Item`.
    #[inline]
    pub fn new<T: Typed, Item: Typed>() -> Self {
        Self {
            ty: Type::of::<T>(),
            item_ty: Type::of::<Item>(),
            item_info: Item::type_info,
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the item [`Type`].
    #[inline]
    pub const fn item_ty(&self) -> &Type {
        &self.item_ty
    }

    /// Returns the item [`TypeInfo`].
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}

// -----------------------------------------------------------------------------
// ArrayInfo

/// Information for a fixed-capacity homogeneous container such as `[T; N]`.
///
/// # Examples
///
/// ```
/// use vc_marshal::info::Typed;
///
/// let info = <[f32; 4]>::type_info().as_array().unwrap();
/// assert_eq!(info.capacity(), 4);
/// ```
#[derive(Debug)]
pub struct ArrayInfo {
    ty: Type,
    item_ty: Type,
    item_info: fn() -> &'static TypeInfo,
    capacity: usize,
}

impl ArrayInfo {
    /// Create a new [`ArrayInfo`] for array `T` holding `capacity` items of `Item`.
    #[inline]
    pub fn new<T: Typed, Item: Typed>(capacity: usize) -> Self {
        Self {
            ty: Type::of::<T>(),
            item_ty: Type::of::<Item>(),
            item_info: Item::type_info,
            capacity,
        }
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the item [`Type`].
    #[inline]
    pub const fn item_ty(&self) -> &Type {
        &self.item_ty
    }

    /// Returns the item [`TypeInfo`].
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    /// Returns the fixed number of items.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}
