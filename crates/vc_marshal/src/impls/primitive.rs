use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::any::type_name;

use crate::codec::MarshalError;
use crate::document::Scalar;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{PrimitiveInfo, TypeInfo, Typed};
use crate::{Primitive, Reflect, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Typed + Reflect

macro_rules! impl_primitive_reflect {
    ($($ty:ty),* $(,)?) => {$(
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Primitive(PrimitiveInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Primitive(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Primitive(self)
            }
        }
    )*};
}

impl_primitive_reflect!(
    bool, char, String, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64,
);

// -----------------------------------------------------------------------------
// Conversions

fn mismatch<T: ?Sized>(scalar: &Scalar<'_>) -> MarshalError {
    MarshalError::TypeMismatch {
        expected: type_name::<T>(),
        found: scalar.to_string(),
    }
}

/// Any integral number that fits `T`.
fn integral<T: TryFrom<i64> + TryFrom<u64>>(scalar: &Scalar<'_>) -> Option<T> {
    match *scalar {
        Scalar::Int(v) => T::try_from(v).ok(),
        Scalar::UInt(v) => T::try_from(v).ok(),
        Scalar::Float(v) if v.fract() == 0.0 => {
            if v < 0.0 {
                (v >= i64::MIN as f64).then(|| T::try_from(v as i64).ok())?
            } else {
                (v < u64::MAX as f64).then(|| T::try_from(v as u64).ok())?
            }
        }
        _ => None,
    }
}

macro_rules! impl_integer {
    ($variant:ident: $wide:ty => $($ty:ty),*) => {$(
        impl Primitive for $ty {
            #[inline]
            #[allow(clippy::unnecessary_cast, clippy::cast_lossless)]
            fn to_scalar(&self) -> Scalar<'_> {
                Scalar::$variant(*self as $wide)
            }

            fn assign_scalar(&mut self, scalar: Scalar<'_>) -> Result<(), MarshalError> {
                *self = integral(&scalar).ok_or_else(|| mismatch::<Self>(&scalar))?;
                Ok(())
            }
        }
    )*};
}

impl_integer!(Int: i64 => i8, i16, i32, i64, isize);
impl_integer!(UInt: u64 => u8, u16, u32, u64, usize);

macro_rules! impl_float {
    ($($ty:ty),*) => {$(
        impl Primitive for $ty {
            #[inline]
            #[allow(clippy::unnecessary_cast, clippy::cast_lossless)]
            fn to_scalar(&self) -> Scalar<'_> {
                Scalar::Float(*self as f64)
            }

            fn assign_scalar(&mut self, scalar: Scalar<'_>) -> Result<(), MarshalError> {
                let value = match scalar {
                    Scalar::Int(v) => v as f64,
                    Scalar::UInt(v) => v as f64,
                    Scalar::Float(v) => v,
                    _ => return Err(mismatch::<Self>(&scalar)),
                };
                *self = value as $ty;
                Ok(())
            }
        }
    )*};
}

impl_float!(f32, f64);

impl Primitive for bool {
    #[inline]
    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::Bool(*self)
    }

    fn assign_scalar(&mut self, scalar: Scalar<'_>) -> Result<(), MarshalError> {
        match scalar {
            Scalar::Bool(v) => {
                *self = v;
                Ok(())
            }
            _ => Err(mismatch::<Self>(&scalar)),
        }
    }
}

impl Primitive for String {
    #[inline]
    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::Str(Cow::Borrowed(self))
    }

    fn assign_scalar(&mut self, scalar: Scalar<'_>) -> Result<(), MarshalError> {
        match scalar {
            Scalar::Str(v) => {
                *self = v.into_owned();
                Ok(())
            }
            _ => Err(mismatch::<Self>(&scalar)),
        }
    }
}

impl Primitive for char {
    #[inline]
    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::Str(Cow::Owned(self.to_string()))
    }

    fn assign_scalar(&mut self, scalar: Scalar<'_>) -> Result<(), MarshalError> {
        let value = match &scalar {
            Scalar::Str(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            }
            Scalar::Int(_) | Scalar::UInt(_) | Scalar::Float(_) => {
                integral::<u32>(&scalar).and_then(char::from_u32)
            }
            _ => None,
        };
        *self = value.ok_or_else(|| mismatch::<Self>(&scalar))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::string::String;

    use crate::Primitive;
    use crate::codec::MarshalError;
    use crate::document::Scalar;
    use crate::info::{ReflectKind, Typed};

    fn assign<T: Primitive + Default>(scalar: Scalar<'_>) -> Result<T, MarshalError> {
        let mut value = T::default();
        value.assign_scalar(scalar).map(|()| value)
    }

    #[test]
    fn integers_check_range() {
        assert_eq!(assign::<u8>(Scalar::Int(255)), Ok(255));
        assert!(assign::<u8>(Scalar::Int(256)).is_err());
        assert!(assign::<u16>(Scalar::Int(-1)).is_err());
        assert_eq!(assign::<i32>(Scalar::UInt(7)), Ok(7));
        assert_eq!(assign::<i64>(Scalar::Float(-3.0)), Ok(-3));
        assert!(assign::<i64>(Scalar::Float(2.5)).is_err());
        assert!(assign::<u64>(Scalar::Float(f64::INFINITY)).is_err());
        assert_eq!(assign::<usize>(Scalar::UInt(u64::MAX)).is_ok(), usize::BITS == 64);
    }

    #[test]
    fn integers_reject_other_kinds() {
        let err = assign::<i32>(Scalar::Str(Cow::Borrowed("12"))).unwrap_err();
        assert_eq!(
            err,
            MarshalError::TypeMismatch {
                expected: "i32",
                found: String::from("string \"12\""),
            }
        );
        assert!(assign::<u8>(Scalar::Bool(true)).is_err());
    }

    #[test]
    fn floats_accept_any_number() {
        assert_eq!(assign::<f32>(Scalar::Int(-4)), Ok(-4.0));
        assert_eq!(assign::<f64>(Scalar::UInt(10)), Ok(10.0));
        assert_eq!(assign::<f32>(Scalar::Float(0.25)), Ok(0.25));
        assert!(assign::<f64>(Scalar::Bool(false)).is_err());
    }

    #[test]
    fn char_is_a_one_character_string() {
        assert_eq!('x'.to_scalar(), Scalar::Str(Cow::Borrowed("x")));
        assert_eq!(assign::<char>(Scalar::Str(Cow::Borrowed("é"))), Ok('é'));
        assert_eq!(assign::<char>(Scalar::UInt(65)), Ok('A'));
        assert!(assign::<char>(Scalar::Str(Cow::Borrowed("ab"))).is_err());
        assert!(assign::<char>(Scalar::Str(Cow::Borrowed(""))).is_err());
        assert!(assign::<char>(Scalar::Int(0xD800)).is_err());
    }

    #[test]
    fn char_accepts_an_integral_float_code_point() {
        assert_eq!(assign::<char>(Scalar::Float(65.0)), Ok('A'));
        assert!(assign::<char>(Scalar::Float(65.5)).is_err());
        assert!(assign::<char>(Scalar::Float(-1.0)).is_err());
    }

    #[test]
    fn failed_assignment_keeps_the_value() {
        let mut value = 9_u8;
        assert!(value.assign_scalar(Scalar::Int(-9)).is_err());
        assert_eq!(value, 9);

        let mut text = String::from("keep");
        assert!(text.assign_scalar(Scalar::Bool(true)).is_err());
        assert_eq!(text, "keep");
    }

    #[test]
    fn primitive_type_info() {
        assert_eq!(u16::type_info().kind(), ReflectKind::Primitive);
        assert!(String::type_info().type_is::<String>());
        assert!(core::ptr::eq(f32::type_info(), f32::type_info()));
    }
}
