// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod object_kind;
mod repr_enum;
mod trait_reflect;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use auto_register::get_auto_register_impl;
use trait_reflect::impl_trait_reflect;
use trait_typed::impl_trait_typed;

pub(crate) use object_kind::impl_object;
pub(crate) use repr_enum::impl_repr_enum;
