use alloc::string::{String, ToString};

use crate::Primitive;
use crate::codec::{Context, MarshalError};
use crate::document::{Document, NodeKind};
use crate::info::ReflectKind;

pub(super) fn serialize<D: Document>(value: &dyn Primitive, cx: &mut Context) -> (D, bool) {
    match D::from_scalar(value.to_scalar()) {
        Some(node) => (node, true),
        None => {
            cx.warn(MarshalError::Unrepresentable {
                type_path: value.reflect_type_info().type_path(),
                value: value.to_scalar().to_string(),
            });
            (D::null(), false)
        }
    }
}

pub(super) fn deserialize<D: Document>(
    node: &D,
    target: &mut dyn Primitive,
    cx: &mut Context,
) -> bool {
    let type_path = target.reflect_type_info().type_path();
    let error = match node.as_scalar() {
        Some(scalar) => match target.assign_scalar(scalar) {
            Ok(()) => return true,
            Err(err) => err,
        },
        None => match node.kind() {
            NodeKind::Null => MarshalError::TypeMismatch {
                expected: type_path,
                found: String::from("null"),
            },
            found => MarshalError::StructuralMismatch {
                type_path,
                expected: ReflectKind::Primitive,
                found,
            },
        },
    };
    cx.warn(error);
    false
}
