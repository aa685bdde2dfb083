use alloc::vec::Vec;
use core::any::Any;

use crate::impls::GenericTypeInfoCell;
use crate::info::{SequenceInfo, TypeInfo, Typed};
use crate::{Reflect, ReflectMut, ReflectRef, Sequence};

impl<T: Reflect + Typed + Default> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Sequence(SequenceInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed + Default> Reflect for Vec<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Sequence(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Sequence(self)
    }
}

impl<T: Reflect + Typed + Default> Sequence for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|item| item as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        <[T]>::get_mut(self, index).map(|item| item as &mut dyn Reflect)
    }

    fn push_default(&mut self) -> &mut dyn Reflect {
        self.push(T::default());
        let index = Vec::len(self) - 1;
        &mut self[index]
    }

    #[inline]
    fn clear(&mut self) {
        Vec::clear(self);
    }

    #[inline]
    fn as_bytes(&self) -> Option<&[u8]> {
        <dyn Any>::downcast_ref::<Vec<u8>>(self).map(Vec::as_slice)
    }

    fn extend_from_bytes(&mut self, bytes: &[u8]) -> bool {
        match <dyn Any>::downcast_mut::<Vec<u8>>(self) {
            Some(this) => {
                this.extend_from_slice(bytes);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Sequence;
    use crate::info::Typed;

    #[test]
    fn push_default_appends() {
        let mut values = vec![1_i32, 2];
        *Sequence::push_default(&mut values).downcast_mut::<i32>().unwrap() = 3;
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn only_byte_vectors_expose_bytes() {
        let mut bytes: Vec<u8> = vec![1, 2];
        assert_eq!(Sequence::as_bytes(&bytes), Some(&[1_u8, 2][..]));
        assert!(bytes.extend_from_bytes(&[3]));
        assert_eq!(bytes, [1, 2, 3]);

        let mut words: Vec<u16> = vec![1];
        assert!(Sequence::as_bytes(&words).is_none());
        assert!(!words.extend_from_bytes(&[3]));
    }

    #[test]
    fn item_info() {
        let info = <Vec<String>>::type_info().as_sequence().unwrap();
        assert!(info.item_ty().is::<String>());
        assert!(info.item_info().type_is::<String>());
        assert!(<Vec<u8>>::type_info().as_array().is_err());
    }
}
