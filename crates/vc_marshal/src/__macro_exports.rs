//! Items used by code generated from `#[derive(Marshal)]`.

pub use core::option::Option;

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::registry::TypeRegistry;

    /// A registration function submitted by `#[marshal(auto_register)]`.
    pub struct AutoRegistration(pub fn(&mut TypeRegistry));

    inventory::collect!(AutoRegistration);

    pub(crate) fn register_all(registry: &mut TypeRegistry) {
        for AutoRegistration(register) in inventory::iter::<AutoRegistration> {
            register(registry);
        }
    }
}
