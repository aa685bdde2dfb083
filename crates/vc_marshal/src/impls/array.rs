use core::any::Any;

use crate::impls::GenericTypeInfoCell;
use crate::info::{ArrayInfo, TypeInfo, Typed};
use crate::{Array, Reflect, ReflectMut, ReflectRef};

impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self, T>(N)))
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Array(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Array(self)
    }
}

impl<T: Reflect + Typed, const N: usize> Array for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|item| item as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(|item| item as &mut dyn Reflect)
    }

    #[inline]
    fn as_bytes(&self) -> Option<&[u8]> {
        <dyn Any>::downcast_ref::<[u8; N]>(self).map(|bytes| bytes.as_slice())
    }

    #[inline]
    fn as_bytes_mut(&mut self) -> Option<&mut [u8]> {
        <dyn Any>::downcast_mut::<[u8; N]>(self).map(|bytes| bytes.as_mut_slice())
    }
}

#[cfg(test)]
mod tests {
    use crate::Array;
    use crate::info::Typed;

    #[test]
    fn fixed_len() {
        let values = [0.5_f32; 3];
        assert_eq!(Array::len(&values), 3);
        assert!(Array::get(&values, 3).is_none());
        assert_eq!(<[f32; 3]>::type_info().as_array().unwrap().capacity(), 3);
    }

    #[test]
    fn byte_arrays_expose_bytes() {
        let mut bytes = [1_u8, 2];
        bytes.as_bytes_mut().unwrap()[1] = 9;
        assert_eq!(Array::as_bytes(&bytes), Some(&[1_u8, 9][..]));
        assert!(Array::as_bytes(&[1_i8, 2]).is_none());
    }
}
