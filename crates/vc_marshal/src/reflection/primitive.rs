use crate::Reflect;
use crate::codec::MarshalError;
use crate::document::Scalar;

/// A value that maps directly onto a document scalar.
///
/// Implemented for `bool`, `char`, `String`, the integer types and the float
/// types. See [`impls`](crate::impls) for the conversion rules.
pub trait Primitive: Reflect {
    /// Returns the scalar representation of this value.
    fn to_scalar(&self) -> Scalar<'_>;

    /// Assigns a scalar to this value.
    ///
    /// On error the value is left unchanged.
    fn assign_scalar(&mut self, scalar: Scalar<'_>) -> Result<(), MarshalError>;
}
