use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::sync::Arc;
use core::any::type_name;
use core::fmt;
use std::sync::{PoisonError, RwLock};

use crate::access::AccessError;
use crate::{Reflect, ReprEnum};

// -----------------------------------------------------------------------------
// Helpers

type ReadFn = dyn Fn(&dyn Reflect, &mut dyn FnMut(&dyn Reflect)) -> Result<(), AccessError>
    + Send
    + Sync;

type WriteFn = dyn Fn(&mut dyn Reflect, &mut dyn FnMut(&mut dyn Reflect) -> bool) -> Result<bool, AccessError>
    + Send
    + Sync;

fn owner_ref<T: Reflect>(owner: &dyn Reflect) -> Result<&T, AccessError> {
    let found = owner.reflect_type_info().type_path();
    owner.downcast_ref::<T>().ok_or(AccessError::OwnerMismatch {
        expected: type_name::<T>(),
        found,
    })
}

fn owner_mut<T: Reflect>(owner: &mut dyn Reflect) -> Result<&mut T, AccessError> {
    let found = owner.reflect_type_info().type_path();
    owner.downcast_mut::<T>().ok_or(AccessError::OwnerMismatch {
        expected: type_name::<T>(),
        found,
    })
}

fn from_repr<E: ReprEnum>(repr: E::Repr) -> Result<E, AccessError> {
    E::from_repr(repr).ok_or_else(|| AccessError::InvalidDiscriminant {
        enum_path: type_name::<E>(),
        value: repr.to_string(),
    })
}

// -----------------------------------------------------------------------------
// ValueAccessor

/// Scoped read and write access to one member of an owner type.
///
/// Both directions hand the member to a visitor instead of returning a
/// reference, so stored fields, computed properties and shared statics look
/// identical to the caller.
///
/// - [`field`](Self::field): borrows the storage inside the owner.
/// - [`property`](Self::property): reads through the getter; a write calls
///   the getter, lets the visitor modify the temporary, then passes it to the setter.
/// - [`shared`](Self::shared): locks a `&'static RwLock<V>`. The owner is
///   ignored, so every instance reads and writes the same value.
///
/// The `enum_*` constructors present a [`ReprEnum`] member as its underlying
/// integer. A written integer that names no variant is rejected with
/// [`AccessError::InvalidDiscriminant`] and the member keeps its value.
pub struct ValueAccessor {
    read: Box<ReadFn>,
    write: Box<WriteFn>,
}

impl ValueAccessor {
    /// Accessor for a field stored in `T`.
    pub fn field<T: Reflect, V: Reflect>(
        get: impl Fn(&T) -> &V + Send + Sync + 'static,
        get_mut: impl Fn(&mut T) -> &mut V + Send + Sync + 'static,
    ) -> Self {
        Self {
            read: Box::new(
                move |owner: &dyn Reflect, visit: &mut dyn FnMut(&dyn Reflect)| {
                    visit(get(owner_ref::<T>(owner)?));
                    Ok(())
                },
            ),
            write: Box::new(
                move |owner: &mut dyn Reflect, visit: &mut dyn FnMut(&mut dyn Reflect) -> bool| {
                    Ok(visit(get_mut(owner_mut::<T>(owner)?)))
                },
            ),
        }
    }

    /// Accessor for a computed property of `T`.
    pub fn property<T: Reflect, V: Reflect>(
        get: impl Fn(&T) -> V + Send + Sync + 'static,
        set: impl Fn(&mut T, V) + Send + Sync + 'static,
    ) -> Self {
        let getter = Arc::new(get);
        let get = Arc::clone(&getter);
        Self {
            read: Box::new(
                move |owner: &dyn Reflect, visit: &mut dyn FnMut(&dyn Reflect)| {
                    let value = get(owner_ref::<T>(owner)?);
                    visit(&value);
                    Ok(())
                },
            ),
            write: Box::new(
                move |owner: &mut dyn Reflect, visit: &mut dyn FnMut(&mut dyn Reflect) -> bool| {
                    let owner = owner_mut::<T>(owner)?;
                    let mut value = getter(&*owner);
                    let success = visit(&mut value);
                    set(owner, value);
                    Ok(success)
                },
            ),
        }
    }

    /// Accessor for a value shared by every instance.
    ///
    /// A poisoned lock is recovered, the value is still readable.
    pub fn shared<V: Reflect>(storage: &'static RwLock<V>) -> Self {
        Self {
            read: Box::new(
                move |_: &dyn Reflect, visit: &mut dyn FnMut(&dyn Reflect)| {
                    let guard = storage.read().unwrap_or_else(PoisonError::into_inner);
                    visit(&*guard);
                    Ok(())
                },
            ),
            write: Box::new(
                move |_: &mut dyn Reflect, visit: &mut dyn FnMut(&mut dyn Reflect) -> bool| {
                    let mut guard = storage.write().unwrap_or_else(PoisonError::into_inner);
                    Ok(visit(&mut *guard))
                },
            ),
        }
    }

    /// Enum-encoded variant of [`field`](Self::field).
    pub fn enum_field<T: Reflect, E: ReprEnum>(
        get: impl Fn(&T) -> &E + Send + Sync + 'static,
        get_mut: impl Fn(&mut T) -> &mut E + Send + Sync + 'static,
    ) -> Self {
        Self {
            read: Box::new(
                move |owner: &dyn Reflect, visit: &mut dyn FnMut(&dyn Reflect)| {
                    visit(&get(owner_ref::<T>(owner)?).to_repr());
                    Ok(())
                },
            ),
            write: Box::new(
                move |owner: &mut dyn Reflect, visit: &mut dyn FnMut(&mut dyn Reflect) -> bool| {
                    let slot = get_mut(owner_mut::<T>(owner)?);
                    let mut repr = slot.to_repr();
                    let success = visit(&mut repr);
                    *slot = from_repr::<E>(repr)?;
                    Ok(success)
                },
            ),
        }
    }

    /// Enum-encoded variant of [`property`](Self::property).
    pub fn enum_property<T: Reflect, E: ReprEnum>(
        get: impl Fn(&T) -> E + Send + Sync + 'static,
        set: impl Fn(&mut T, E) + Send + Sync + 'static,
    ) -> Self {
        let getter = Arc::new(get);
        let get = Arc::clone(&getter);
        Self {
            read: Box::new(
                move |owner: &dyn Reflect, visit: &mut dyn FnMut(&dyn Reflect)| {
                    visit(&get(owner_ref::<T>(owner)?).to_repr());
                    Ok(())
                },
            ),
            write: Box::new(
                move |owner: &mut dyn Reflect, visit: &mut dyn FnMut(&mut dyn Reflect) -> bool| {
                    let owner = owner_mut::<T>(owner)?;
                    let mut repr = getter(&*owner).to_repr();
                    let success = visit(&mut repr);
                    set(owner, from_repr::<E>(repr)?);
                    Ok(success)
                },
            ),
        }
    }

    /// Enum-encoded variant of [`shared`](Self::shared).
    pub fn enum_shared<E: ReprEnum>(storage: &'static RwLock<E>) -> Self {
        Self {
            read: Box::new(
                move |_: &dyn Reflect, visit: &mut dyn FnMut(&dyn Reflect)| {
                    let guard = storage.read().unwrap_or_else(PoisonError::into_inner);
                    visit(&guard.to_repr());
                    Ok(())
                },
            ),
            write: Box::new(
                move |_: &mut dyn Reflect, visit: &mut dyn FnMut(&mut dyn Reflect) -> bool| {
                    let mut guard = storage.write().unwrap_or_else(PoisonError::into_inner);
                    let mut repr = guard.to_repr();
                    let success = visit(&mut repr);
                    *guard = from_repr::<E>(repr)?;
                    Ok(success)
                },
            ),
        }
    }

    /// Visit the member of `owner` by shared reference.
    #[inline]
    pub fn read(
        &self,
        owner: &dyn Reflect,
        visit: &mut dyn FnMut(&dyn Reflect),
    ) -> Result<(), AccessError> {
        (self.read)(owner, visit)
    }

    /// Visit the member of `owner` by mutable reference.
    ///
    /// Returns the visitor's result once the member has been written back.
    #[inline]
    pub fn write(
        &self,
        owner: &mut dyn Reflect,
        visit: &mut dyn FnMut(&mut dyn Reflect) -> bool,
    ) -> Result<bool, AccessError> {
        (self.write)(owner, visit)
    }
}

impl fmt::Debug for ValueAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueAccessor").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use std::sync::RwLock;

    use super::ValueAccessor;
    use crate::access::AccessError;
    use crate::derive::Marshal;
    use crate::{Reflect, ReprEnum};

    #[derive(Marshal, Debug, Clone, Copy, PartialEq, Eq)]
    #[repr(u8)]
    enum Quality {
        Low = 1,
        High = 3,
    }

    #[derive(Marshal, Default)]
    struct Player {
        name: String,
        volume: f32,
    }

    #[derive(Marshal)]
    struct Preset {
        #[marshal(enum_repr)]
        quality: Quality,
    }

    fn read_f32(accessor: &ValueAccessor, owner: &dyn Reflect) -> f32 {
        let mut out = 0.0;
        accessor
            .read(owner, &mut |value| out = *value.downcast_ref::<f32>().unwrap())
            .unwrap();
        out
    }

    #[test]
    fn field_reads_and_writes_in_place() {
        let accessor = ValueAccessor::field::<Player, f32>(|p| &p.volume, |p| &mut p.volume);
        let mut player = Player { volume: 0.5, ..Default::default() };

        assert_eq!(read_f32(&accessor, &player), 0.5);

        let written = accessor.write(&mut player, &mut |value| {
            *value.downcast_mut::<f32>().unwrap() = 0.75;
            true
        });
        assert_eq!(written, Ok(true));
        assert_eq!(player.volume, 0.75);
    }

    #[test]
    fn property_goes_through_getter_and_setter() {
        let accessor = ValueAccessor::property::<Player, String>(
            |p| p.name.to_uppercase(),
            |p, name| p.name = name,
        );
        let mut player = Player { name: "ada".into(), ..Default::default() };

        accessor
            .read(&player, &mut |value| {
                assert_eq!(value.downcast_ref::<String>().unwrap(), "ADA");
            })
            .unwrap();

        accessor
            .write(&mut player, &mut |value| {
                value.downcast_mut::<String>().unwrap().push('!');
                false
            })
            .unwrap();
        // The setter runs even when the visitor reports failure.
        assert_eq!(player.name, "ADA!");
    }

    #[test]
    fn shared_ignores_the_owner() {
        static COUNTER: RwLock<f32> = RwLock::new(1.0);
        let accessor = ValueAccessor::shared(&COUNTER);

        let mut first = Player::default();
        let second = Player::default();

        accessor
            .write(&mut first, &mut |value| {
                *value.downcast_mut::<f32>().unwrap() = 4.0;
                true
            })
            .unwrap();

        assert_eq!(read_f32(&accessor, &second), 4.0);
        assert_eq!(*COUNTER.read().unwrap(), 4.0);
    }

    #[test]
    fn enum_field_is_seen_as_repr() {
        let accessor = ValueAccessor::enum_field::<Preset, Quality>(|p| &p.quality, |p| &mut p.quality);
        let mut preset = Preset { quality: Quality::Low };

        accessor
            .read(&preset, &mut |value| {
                assert_eq!(value.downcast_ref::<u8>(), Some(&Quality::Low.to_repr()));
            })
            .unwrap();

        let ok = accessor.write(&mut preset, &mut |value| {
            *value.downcast_mut::<u8>().unwrap() = 3;
            true
        });
        assert_eq!(ok, Ok(true));
        assert_eq!(preset.quality, Quality::High);

        let err = accessor.write(&mut preset, &mut |value| {
            *value.downcast_mut::<u8>().unwrap() = 2;
            true
        });
        assert!(matches!(err, Err(AccessError::InvalidDiscriminant { .. })));
        assert_eq!(preset.quality, Quality::High);
    }

    #[test]
    fn wrong_owner_is_reported() {
        let accessor = ValueAccessor::field::<Player, f32>(|p| &p.volume, |p| &mut p.volume);
        let preset = Preset { quality: Quality::Low };

        let err = accessor.read(&preset, &mut |_| {}).unwrap_err();
        assert!(matches!(err, AccessError::OwnerMismatch { .. }));
    }
}
