use crate::codec::{Context, MarshalError, PathSegment, SequenceMode};
use crate::document::Document;
use crate::info::ReflectKind;
use crate::{Array, Sequence};

// -----------------------------------------------------------------------------
// Helpers

/// The byte fast path needs both the backend capability and the option.
#[inline]
fn blobs_enabled<D: Document>(cx: &Context) -> bool {
    D::BINARY_BLOBS && cx.config().binary_blobs()
}

fn structural_mismatch<D: Document>(
    node: &D,
    type_path: &'static str,
    expected: ReflectKind,
    cx: &mut Context,
) -> bool {
    cx.warn(MarshalError::StructuralMismatch {
        type_path,
        expected,
        found: node.kind(),
    });
    false
}

// -----------------------------------------------------------------------------
// Sequence

pub(super) fn serialize_sequence<D: Document>(value: &dyn Sequence, cx: &mut Context) -> (D, bool) {
    if blobs_enabled::<D>(cx)
        && let Some(bytes) = value.as_bytes()
        && let Some(node) = D::from_blob(bytes)
    {
        return (node, true);
    }

    let mut node = D::empty_array(value.len());
    let mut success = true;
    for index in 0..value.len() {
        let Some(item) = value.get(index) else {
            continue;
        };
        let (child, ok) = cx.scoped(PathSegment::Index(index), |cx| {
            super::serialize_value::<D>(item, cx)
        });
        node.push_item(child);
        success &= ok;
    }
    (node, success)
}

pub(super) fn deserialize_sequence<D: Document>(
    node: &D,
    target: &mut dyn Sequence,
    cx: &mut Context,
) -> bool {
    let replace = cx.config().sequence_mode() == SequenceMode::Replace;

    if blobs_enabled::<D>(cx)
        && let Some(bytes) = node.as_blob()
    {
        if target.as_bytes().is_none() {
            let type_path = target.reflect_type_info().type_path();
            return structural_mismatch(node, type_path, ReflectKind::Sequence, cx);
        }
        if replace {
            target.clear();
        }
        return target.extend_from_bytes(bytes);
    }

    let Some(items) = node.as_items() else {
        let type_path = target.reflect_type_info().type_path();
        return structural_mismatch(node, type_path, ReflectKind::Sequence, cx);
    };

    if replace {
        target.clear();
    }

    let mut success = true;
    for (index, item) in items.iter().enumerate() {
        success &= cx.scoped(PathSegment::Index(index), |cx| {
            super::deserialize_value(item, target.push_default(), cx)
        });
    }
    success
}

// -----------------------------------------------------------------------------
// Array

pub(super) fn serialize_array<D: Document>(value: &dyn Array, cx: &mut Context) -> (D, bool) {
    if blobs_enabled::<D>(cx)
        && let Some(bytes) = value.as_bytes()
        && let Some(node) = D::from_blob(bytes)
    {
        return (node, true);
    }

    let mut node = D::empty_array(value.len());
    let mut success = true;
    for index in 0..value.len() {
        let Some(item) = value.get(index) else {
            continue;
        };
        let (child, ok) = cx.scoped(PathSegment::Index(index), |cx| {
            super::serialize_value::<D>(item, cx)
        });
        node.push_item(child);
        success &= ok;
    }
    (node, success)
}

pub(super) fn deserialize_array<D: Document>(
    node: &D,
    target: &mut dyn Array,
    cx: &mut Context,
) -> bool {
    let type_path = target.reflect_type_info().type_path();
    let capacity = target.len();

    if blobs_enabled::<D>(cx)
        && let Some(bytes) = node.as_blob()
    {
        let Some(slots) = target.as_bytes_mut() else {
            return structural_mismatch(node, type_path, ReflectKind::Array, cx);
        };
        let count = capacity.min(bytes.len());
        slots[..count].copy_from_slice(&bytes[..count]);
        return check_capacity(type_path, capacity, bytes.len(), cx);
    }

    let Some(items) = node.as_items() else {
        return structural_mismatch(node, type_path, ReflectKind::Array, cx);
    };

    let mut success = true;
    for (index, item) in items.iter().enumerate().take(capacity) {
        if let Some(slot) = target.get_mut(index) {
            success &= cx.scoped(PathSegment::Index(index), |cx| {
                super::deserialize_value(item, slot, cx)
            });
        }
    }
    success & check_capacity(type_path, capacity, items.len(), cx)
}

/// Items past the capacity are never written.
fn check_capacity(type_path: &'static str, capacity: usize, len: usize, cx: &mut Context) -> bool {
    if len > capacity {
        cx.warn(MarshalError::TruncatedArray {
            type_path,
            capacity,
            len,
        });
        return false;
    }
    true
}
