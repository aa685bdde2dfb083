//! The dynamic document tree the codecs produce and consume.
//!
//! The codecs are generic over [`Document`], the tagged node type of some
//! document library. This crate implements it for [`serde_json::Value`];
//! turning a tree into bytes is left to that library.
//!
//! - [`Scalar`]: A borrowed or owned leaf value, the currency between
//!   [`Primitive`](crate::Primitive) values and document nodes.
//! - [`NodeKind`]: The shape of a node.

// -----------------------------------------------------------------------------
// Modules

mod json;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use scalar::{NodeKind, Scalar};

// -----------------------------------------------------------------------------
// Document

/// A node of a dynamic document tree.
///
/// A node is one of null, boolean, number, string, ordered array or
/// order-preserving keyed object. Backends that can hold raw bytes also
/// support blob nodes and set [`BINARY_BLOBS`](Document::BINARY_BLOBS).
///
/// Implementations must preserve the insertion order of object keys,
/// otherwise documents do not follow the member order of their types.
pub trait Document: Sized {
    /// Whether blob nodes round-trip losslessly through this backend.
    ///
    /// The byte fast path of the container codec is only taken when this
    /// is `true` and enabled in [`MarshalConfig`](crate::codec::MarshalConfig).
    const BINARY_BLOBS: bool = false;

    /// Creates a scalar node.
    ///
    /// Returns `None` if the backend has no representation for the value,
    /// e.g. a non-finite float in JSON.
    fn from_scalar(scalar: Scalar<'_>) -> Option<Self>;

    /// Creates a null node.
    fn null() -> Self;

    /// Returns the shape of this node.
    fn kind(&self) -> NodeKind;

    /// Returns the scalar value of this node, `None` for null and
    /// structured nodes.
    fn as_scalar(&self) -> Option<Scalar<'_>>;

    /// Creates an empty object node.
    fn empty_object() -> Self;

    /// Inserts a member into an object node.
    ///
    /// Does nothing if `self` is not an object.
    fn insert_member(&mut self, key: &str, value: Self);

    /// Returns the member with the given key, if `self` is an object holding it.
    fn member(&self, key: &str) -> Option<&Self>;

    /// Returns `true` if `self` is an object holding `key`.
    #[inline]
    fn has_member(&self, key: &str) -> bool {
        self.member(key).is_some()
    }

    /// Creates an empty array node.
    fn empty_array(capacity: usize) -> Self;

    /// Appends an item to an array node.
    ///
    /// Does nothing if `self` is not an array.
    fn push_item(&mut self, item: Self);

    /// Returns the items of an array node.
    fn as_items(&self) -> Option<&[Self]>;

    /// Creates a blob node.
    ///
    /// Only called when [`BINARY_BLOBS`](Document::BINARY_BLOBS) is `true`.
    #[inline]
    fn from_blob(_bytes: &[u8]) -> Option<Self> {
        None
    }

    /// Returns the bytes of a blob node.
    #[inline]
    fn as_blob(&self) -> Option<&[u8]> {
        None
    }
}
