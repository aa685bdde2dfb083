use crate::Object;
use crate::codec::{Context, MarshalError, PathSegment};
use crate::document::{Document, NodeKind};
use crate::info::{MemberInfo, ReflectKind};

pub(super) fn serialize<D: Document>(value: &dyn Object, cx: &mut Context) -> (D, bool) {
    let mut node = D::empty_object();
    let mut success = true;

    for member in value.object_info() {
        cx.scoped(PathSegment::Member(member.name()), |cx| {
            let mut encoded = None;
            // An enum-encoded accessor already presents the integer repr.
            let result = member.accessor().read(value, &mut |member_value| {
                encoded = Some(super::serialize_value::<D>(member_value, cx));
            });

            match (result, encoded) {
                (Ok(()), Some((child, ok))) => {
                    node.insert_member(member.name(), child);
                    success &= ok;
                }
                (Err(err), _) => {
                    cx.warn(err.into());
                    success = false;
                }
                (Ok(()), None) => success = false,
            }
        });
    }

    (node, success)
}

pub(super) fn deserialize<D: Document>(node: &D, target: &mut dyn Object, cx: &mut Context) -> bool {
    let info = target.object_info();

    if node.kind() != NodeKind::Object {
        cx.warn(MarshalError::StructuralMismatch {
            type_path: info.ty().path(),
            expected: ReflectKind::Object,
            found: node.kind(),
        });
        return false;
    }

    let mut success = true;
    for member in info {
        success &= cx.scoped(PathSegment::Member(member.name()), |cx| {
            deserialize_member(node, &mut *target, member, cx)
        });
    }
    success
}

fn deserialize_member<D: Document>(
    node: &D,
    target: &mut dyn Object,
    member: &MemberInfo,
    cx: &mut Context,
) -> bool {
    let Some(child) = node.member(member.name()) else {
        cx.warn(MarshalError::MissingField {
            name: member.name(),
        });
        return false;
    };

    let result = member.accessor().write(target, &mut |member_value| {
        super::deserialize_value(child, member_value, cx)
    });

    result.unwrap_or_else(|err| {
        cx.warn(err.into());
        false
    })
}
