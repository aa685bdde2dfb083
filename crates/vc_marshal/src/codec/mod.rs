//! Encode typed values into a [`Document`] and decode them back.
//!
//! The codecs recurse on the [`ReflectKind`](crate::info::ReflectKind) of the
//! current value until only primitives remain:
//!
//! - Primitive: copied to or assigned from a scalar node.
//! - Object: one document-object key per member, in member order.
//! - Sequence: one array item per element; decoding appends by default.
//! - Array: one array item per slot; decoding is bounded by the capacity.
//!
//! Enum-encoded members are handed to the primitive codec as their
//! underlying integer.
//!
//! # Failure policy
//!
//! Both directions are total. A local failure is recorded as a [`Warning`],
//! logged through [`log::warn!`], and turns the aggregated success to
//! `false`; siblings and remaining members are still processed.
//!
//! - A missing key leaves its member untouched.
//! - Keys without a member are ignored.
//! - A node of the wrong shape abandons that subtree only.
//!
//! # Examples
//!
//! ```
//! use serde_json::{Value, json};
//! use vc_marshal::derive::Marshal;
//!
//! #[derive(Marshal, Default, Debug, PartialEq)]
//! struct Point {
//!     x: f32,
//!     y: f32,
//! }
//!
//! let (node, ok) = vc_marshal::serialize::<Value>(&Point { x: 1.5, y: -2.0 });
//! assert!(ok);
//! assert_eq!(node, json!({ "x": 1.5, "y": -2.0 }));
//!
//! let mut point = Point::default();
//! let ok = vc_marshal::deserialize(&json!({ "x": 1.5 }), &mut point);
//! assert!(!ok);
//! assert_eq!(point, Point { x: 1.5, y: 0.0 });
//! ```

// -----------------------------------------------------------------------------
// Modules

mod container;
mod context;
mod error;
mod object;
mod primitive;

// -----------------------------------------------------------------------------
// Exports

pub use context::{MarshalConfig, MemberPath, PathSegment, Report, SequenceMode, Warning};
pub use error::{ErrorCategory, MarshalError};

use context::Context;

use crate::document::Document;
use crate::{Reflect, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Dispatch

fn serialize_value<D: Document>(value: &dyn Reflect, cx: &mut Context) -> (D, bool) {
    match value.reflect_ref() {
        ReflectRef::Primitive(value) => primitive::serialize(value, cx),
        ReflectRef::Object(value) => object::serialize(value, cx),
        ReflectRef::Sequence(value) => container::serialize_sequence(value, cx),
        ReflectRef::Array(value) => container::serialize_array(value, cx),
    }
}

fn deserialize_value<D: Document>(node: &D, target: &mut dyn Reflect, cx: &mut Context) -> bool {
    match target.reflect_mut() {
        ReflectMut::Primitive(target) => primitive::deserialize(node, target, cx),
        ReflectMut::Object(target) => object::deserialize(node, target, cx),
        ReflectMut::Sequence(target) => container::deserialize_sequence(node, target, cx),
        ReflectMut::Array(target) => container::deserialize_array(node, target, cx),
    }
}

// -----------------------------------------------------------------------------
// Marshaler

/// Encodes and decodes with a given [`MarshalConfig`], reporting every
/// warning.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vc_marshal::Marshaler;
/// use vc_marshal::codec::{MarshalConfig, SequenceMode};
///
/// let marshaler = Marshaler::new(MarshalConfig::new().with_sequence_mode(SequenceMode::Replace));
///
/// let mut values: Vec<u16> = vec![7, 8];
/// let report = marshaler.deserialize(&json!([1, 2, 70000]), &mut values);
///
/// assert!(!report.success);
/// assert_eq!(values, [1, 2, 0]);
/// assert_eq!(report.warnings[0].path.to_string(), "[2]");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Marshaler {
    config: MarshalConfig,
}

impl Marshaler {
    #[inline]
    pub const fn new(config: MarshalConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub const fn config(&self) -> &MarshalConfig {
        &self.config
    }

    /// Encodes `value` into a new document tree.
    pub fn serialize<D: Document>(&self, value: &dyn Reflect) -> (D, Report) {
        let mut cx = Context::new(self.config);
        let (node, success) = serialize_value(value, &mut cx);
        (node, cx.finish(success))
    }

    /// Decodes `node` into `target` in place.
    pub fn deserialize<D: Document>(&self, node: &D, target: &mut dyn Reflect) -> Report {
        let mut cx = Context::new(self.config);
        let success = deserialize_value(node, target, &mut cx);
        cx.finish(success)
    }
}

// -----------------------------------------------------------------------------
// Entry points

/// Encodes `value` with the default configuration.
///
/// Returns the document and whether every part was encoded.
#[inline]
pub fn serialize<D: Document>(value: &dyn Reflect) -> (D, bool) {
    let (node, report) = Marshaler::default().serialize(value);
    (node, report.success)
}

/// Decodes `node` into `target` in place with the default configuration.
///
/// Returns whether every member was found and decoded. On `false` the target
/// holds a best-effort partial result.
#[inline]
pub fn deserialize<D: Document>(node: &D, target: &mut dyn Reflect) -> bool {
    Marshaler::default().deserialize(node, target).success
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use std::sync::{Barrier, RwLock};
    use std::thread;

    use serde_json::{Value, json};

    use super::{ErrorCategory, MarshalConfig, MarshalError, Marshaler, SequenceMode};
    use crate::derive::Marshal;
    use crate::document::{Document, NodeKind, Scalar};
    use crate::info::{TypeInfo, Typed};
    use crate::{ReprEnum, deserialize, serialize};

    // -------------------------------------------------------------------------
    // Fixtures

    #[derive(Marshal, Default, Debug, Clone, PartialEq)]
    struct Point {
        x: f32,
        y: f32,
    }

    #[derive(Marshal, Default, Debug, Clone, PartialEq)]
    struct Audio {
        volume: f64,
        muted: bool,
        #[marshal(rename = "deviceName")]
        device: String,
        channels: [u8; 2],
    }

    #[derive(Marshal, Default, Debug, Clone, PartialEq)]
    struct Settings {
        title: String,
        hotkey: char,
        offset: i64,
        retries: u16,
        frames: usize,
        origin: Point,
        audio: Audio,
        path: Vec<Point>,
        blob: Vec<u8>,
        matrix: [[i32; 2]; 2],
        #[marshal(skip)]
        cache: u32,
    }

    fn sample_settings() -> Settings {
        Settings {
            title: String::from("main"),
            hotkey: 'k',
            offset: -40,
            retries: 3,
            frames: 120,
            origin: Point { x: 0.25, y: -8.0 },
            audio: Audio {
                volume: 0.5,
                muted: true,
                device: String::from("speakers"),
                channels: [1, 2],
            },
            path: vec![Point { x: 1.0, y: 2.0 }, Point { x: 3.0, y: 4.0 }],
            blob: vec![0, 127, 255],
            matrix: [[1, 2], [3, 4]],
            cache: 99,
        }
    }

    #[derive(Marshal, Debug, Default, Clone, Copy, PartialEq, Eq)]
    #[repr(u8)]
    enum Quality {
        #[default]
        Low = 0,
        Medium = 1,
        Ultra = 7,
    }

    #[derive(Marshal, Debug, Default, PartialEq)]
    struct Graphics {
        #[marshal(enum_repr)]
        quality: Quality,
        scale: f32,
    }

    #[derive(Marshal, Debug, Default, PartialEq)]
    struct RawGraphics {
        quality: u8,
        scale: f32,
    }

    /// An order-preserving document that can also hold blobs.
    #[derive(Debug, Clone, PartialEq)]
    enum Node {
        Null,
        Leaf(Scalar<'static>),
        Blob(Vec<u8>),
        Array(Vec<Node>),
        Object(Vec<(String, Node)>),
    }

    impl Document for Node {
        const BINARY_BLOBS: bool = true;

        fn from_scalar(scalar: Scalar<'_>) -> Option<Self> {
            Some(Node::Leaf(scalar.into_owned()))
        }

        fn null() -> Self {
            Node::Null
        }

        fn kind(&self) -> NodeKind {
            match self {
                Node::Null => NodeKind::Null,
                Node::Leaf(scalar) => scalar.kind(),
                Node::Blob(_) => NodeKind::Blob,
                Node::Array(_) => NodeKind::Array,
                Node::Object(_) => NodeKind::Object,
            }
        }

        fn as_scalar(&self) -> Option<Scalar<'_>> {
            match self {
                Node::Leaf(scalar) => Some(scalar.clone()),
                _ => None,
            }
        }

        fn empty_object() -> Self {
            Node::Object(Vec::new())
        }

        fn insert_member(&mut self, key: &str, value: Self) {
            if let Node::Object(members) = self {
                members.push((key.to_string(), value));
            }
        }

        fn member(&self, key: &str) -> Option<&Self> {
            match self {
                Node::Object(members) => members.iter().find(|(k, _)| k == key).map(|(_, v)| v),
                _ => None,
            }
        }

        fn empty_array(capacity: usize) -> Self {
            Node::Array(Vec::with_capacity(capacity))
        }

        fn push_item(&mut self, item: Self) {
            if let Node::Array(items) = self {
                items.push(item);
            }
        }

        fn as_items(&self) -> Option<&[Self]> {
            match self {
                Node::Array(items) => Some(items),
                _ => None,
            }
        }

        fn from_blob(bytes: &[u8]) -> Option<Self> {
            Some(Node::Blob(bytes.to_vec()))
        }

        fn as_blob(&self) -> Option<&[u8]> {
            match self {
                Node::Blob(bytes) => Some(bytes),
                _ => None,
            }
        }
    }

    const BLOBS: MarshalConfig = MarshalConfig::new().with_binary_blobs(true);

    // -------------------------------------------------------------------------
    // Objects

    #[test]
    fn point_serializes_in_member_order() {
        let (node, ok) = serialize::<Value>(&Point { x: 1.5, y: -2.0 });
        assert!(ok);
        assert_eq!(node, json!({ "x": 1.5, "y": -2.0 }));

        let keys: Vec<_> = node.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["x", "y"]);
    }

    #[test]
    fn missing_member_keeps_its_value() {
        let mut point = Point { x: 0.0, y: 0.0 };
        let report = Marshaler::default().deserialize(&json!({ "x": 1.5 }), &mut point);

        assert_eq!(point, Point { x: 1.5, y: 0.0 });
        assert!(!report.success);
        assert_eq!(report.warnings.len(), 1);

        let warning = &report.warnings[0];
        assert_eq!(warning.path.to_string(), ".y");
        assert_eq!(warning.error, MarshalError::MissingField { name: "y" });
        assert_eq!(warning.error.category(), ErrorCategory::MissingField);
    }

    #[test]
    fn round_trip_into_default() {
        let settings = sample_settings();
        let (node, ok) = serialize::<Value>(&settings);
        assert!(ok);

        let mut restored = Settings::default();
        assert!(deserialize(&node, &mut restored));

        // Skipped members are neither written nor read.
        assert_eq!(restored.cache, 0);
        restored.cache = settings.cache;
        assert_eq!(restored, settings);
    }

    #[test]
    fn skipped_and_renamed_members() {
        let (node, _) = serialize::<Value>(&sample_settings());

        assert!(node.get("cache").is_none());
        assert_eq!(node["audio"]["deviceName"], json!("speakers"));
        assert!(node["audio"].get("device").is_none());
        assert_eq!(node["hotkey"], json!("k"));
        assert_eq!(node["matrix"], json!([[1, 2], [3, 4]]));
    }

    #[test]
    fn serialize_is_idempotent() {
        let settings = sample_settings();
        let (first, _) = serialize::<Value>(&settings);
        let (second, _) = serialize::<Value>(&settings);
        assert_eq!(first, second);

        let (first, _) = Marshaler::new(BLOBS).serialize::<Node>(&settings);
        let (second, _) = Marshaler::new(BLOBS).serialize::<Node>(&settings);
        assert_eq!(first, second);
    }

    #[test]
    fn every_other_member_survives_a_missing_one() {
        let settings = sample_settings();
        let (mut node, _) = serialize::<Value>(&settings);
        node["audio"].as_object_mut().unwrap().remove("muted");

        let mut restored = Settings::default();
        let report = Marshaler::default().deserialize(&node, &mut restored);

        assert!(!report.success);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].path.to_string(), ".audio.muted");
        assert!(!restored.audio.muted);

        restored.audio.muted = settings.audio.muted;
        restored.cache = settings.cache;
        assert_eq!(restored, settings);
    }

    #[test]
    fn extra_keys_are_ignored() {
        let mut point = Point::default();
        let report = Marshaler::default().deserialize(
            &json!({ "z": [1, 2, 3], "x": 4.0, "y": 5.0, "w": { "nested": true } }),
            &mut point,
        );

        assert!(report.success);
        assert!(report.warnings.is_empty());
        assert_eq!(point, Point { x: 4.0, y: 5.0 });
    }

    #[test]
    fn type_mismatch_does_not_stop_siblings() {
        let mut point = Point { x: 7.0, y: 0.0 };
        let report = Marshaler::default().deserialize(&json!({ "x": "seven", "y": 2 }), &mut point);

        assert!(!report.success);
        assert_eq!(point, Point { x: 7.0, y: 2.0 });
        assert_eq!(report.warnings[0].path.to_string(), ".x");
        assert_eq!(report.warnings[0].error.category(), ErrorCategory::TypeMismatch);
    }

    #[test]
    fn null_is_a_type_mismatch() {
        let mut point = Point { x: 7.0, y: 0.0 };
        let report = Marshaler::default().deserialize(&json!({ "x": null, "y": 1 }), &mut point);

        assert!(!report.success);
        assert_eq!(point.x, 7.0);
        assert_eq!(
            report.warnings[0].error,
            MarshalError::TypeMismatch {
                expected: "f32",
                found: String::from("null"),
            }
        );
    }

    #[test]
    fn structural_mismatch_abandons_one_subtree() {
        let mut settings = Settings::default();
        let report = Marshaler::default().deserialize(
            &json!({
                "title": "t",
                "hotkey": "h",
                "offset": 1,
                "retries": 2,
                "frames": 3,
                "origin": [1, 2],
                "audio": { "volume": 1.0, "muted": false, "deviceName": "d", "channels": 5 },
                "path": {},
                "blob": [],
                "matrix": [[1, 2], [3, 4]],
            }),
            &mut settings,
        );

        assert!(!report.success);
        let paths: Vec<_> = report.warnings.iter().map(|w| w.path.to_string()).collect();
        assert_eq!(paths, [".origin", ".audio.channels", ".path"]);
        for warning in &report.warnings {
            assert_eq!(warning.error.category(), ErrorCategory::StructuralMismatch);
        }

        assert_eq!(settings.title, "t");
        assert_eq!(settings.audio.device, "d");
        assert_eq!(settings.matrix, [[1, 2], [3, 4]]);
        assert_eq!(settings.origin, Point::default());
    }

    #[test]
    fn root_must_be_an_object() {
        let mut point = Point { x: 1.0, y: 1.0 };
        assert!(!deserialize(&json!([1.0, 2.0]), &mut point));
        assert!(!deserialize(&json!(3), &mut point));
        assert_eq!(point, Point { x: 1.0, y: 1.0 });
    }

    #[test]
    fn unrepresentable_float_is_reported() {
        let (node, report) = Marshaler::default().serialize::<Value>(&Point { x: f32::NAN, y: 1.0 });

        assert!(!report.success);
        assert_eq!(node, json!({ "x": null, "y": 1.0 }));
        assert_eq!(report.warnings[0].path.to_string(), ".x");
        assert!(matches!(
            report.warnings[0].error,
            MarshalError::Unrepresentable { .. }
        ));
    }

    #[test]
    fn out_of_range_integer_keeps_value() {
        let mut settings = sample_settings();
        let (mut node, _) = serialize::<Value>(&settings);
        node["retries"] = json!(70_000);
        node["frames"] = json!(-1);

        let report = Marshaler::default().deserialize(&node, &mut settings);
        assert!(!report.success);
        assert_eq!(settings.retries, 3);
        assert_eq!(settings.frames, 120);
        assert_eq!(report.warnings.len(), 2);
    }

    // -------------------------------------------------------------------------
    // Enums

    #[test]
    fn enum_serializes_as_its_repr() {
        for quality in [Quality::Low, Quality::Medium, Quality::Ultra] {
            let (encoded, ok) = serialize::<Value>(&Graphics { quality, scale: 1.0 });
            assert!(ok);

            let raw = RawGraphics {
                quality: quality.to_repr(),
                scale: 1.0,
            };
            let (expected, _) = serialize::<Value>(&raw);
            assert_eq!(encoded, expected);
        }
    }

    #[test]
    fn enum_member_describes_its_repr() {
        let info = Graphics::type_info().as_object().unwrap();
        let quality = info.member("quality").unwrap();
        assert!(quality.is_enum_encoded());
        assert!(quality.ty().is::<Quality>());
        assert!(quality.value_info().type_is::<u8>());
        assert!(!info.member("scale").unwrap().is_enum_encoded());
    }

    #[test]
    fn enum_round_trip() {
        for quality in [Quality::Low, Quality::Medium, Quality::Ultra] {
            let node = json!({ "quality": quality.to_repr(), "scale": 2.0 });
            let mut graphics = Graphics::default();

            assert!(deserialize(&node, &mut graphics));
            assert_eq!(graphics, Graphics { quality, scale: 2.0 });
        }
    }

    #[test]
    fn invalid_discriminant_is_rejected() {
        let mut graphics = Graphics {
            quality: Quality::Medium,
            scale: 0.0,
        };
        let report = Marshaler::default().deserialize(&json!({ "quality": 3, "scale": 2.0 }), &mut graphics);

        assert!(!report.success);
        assert_eq!(graphics.quality, Quality::Medium);
        assert_eq!(graphics.scale, 2.0);

        let warning = &report.warnings[0];
        assert_eq!(warning.path.to_string(), ".quality");
        assert!(matches!(
            &warning.error,
            MarshalError::InvalidDiscriminant { value, .. } if value == "3"
        ));
    }

    #[test]
    fn enum_repr_out_of_range_is_a_type_mismatch() {
        let mut graphics = Graphics::default();
        let report = Marshaler::default().deserialize(&json!({ "quality": 300, "scale": 1 }), &mut graphics);

        assert!(!report.success);
        assert_eq!(graphics.quality, Quality::Low);
        assert_eq!(report.warnings[0].error.category(), ErrorCategory::TypeMismatch);
    }

    // -------------------------------------------------------------------------
    // Properties and shared members

    static SESSION_COUNT: RwLock<u32> = RwLock::new(5);
    static SESSION_QUALITY: RwLock<Quality> = RwLock::new(Quality::Low);

    #[derive(Marshal, Default, Debug)]
    #[marshal(property(name = "label", get = label, set = set_label))]
    #[marshal(property(name = "preset", get = preset, set = set_preset, enum_repr))]
    #[marshal(shared(name = "sessions", storage = SESSION_COUNT))]
    #[marshal(shared(name = "sessionQuality", storage = SESSION_QUALITY, enum_repr))]
    struct Profile {
        id: u32,
        #[marshal(skip)]
        label: String,
        #[marshal(skip)]
        preset: Quality,
        #[marshal(skip)]
        writes: u32,
    }

    impl Profile {
        fn label(&self) -> String {
            self.label.to_uppercase()
        }

        fn set_label(&mut self, label: String) {
            self.label = label.to_lowercase();
            self.writes += 1;
        }

        fn preset(&self) -> Quality {
            self.preset
        }

        fn set_preset(&mut self, preset: Quality) {
            self.preset = preset;
        }
    }

    #[test]
    fn properties_and_shared_members() {
        let profile = Profile {
            id: 1,
            label: String::from("gamer"),
            preset: Quality::Ultra,
            writes: 0,
        };
        let (node, ok) = serialize::<Value>(&profile);
        assert!(ok);

        let sessions = *SESSION_COUNT.read().unwrap();
        let shared_quality = SESSION_QUALITY.read().unwrap().to_repr();
        assert_eq!(
            node,
            json!({
                "id": 1,
                "label": "GAMER",
                "preset": 7,
                "sessions": sessions,
                "sessionQuality": shared_quality,
            })
        );

        let mut other = Profile::default();
        let ok = deserialize(
            &json!({
                "id": 2,
                "label": "Casual",
                "preset": 1,
                "sessions": 42,
                "sessionQuality": 7,
            }),
            &mut other,
        );
        assert!(ok);
        assert_eq!(other.id, 2);
        assert_eq!(other.label, "casual");
        assert_eq!(other.writes, 1);
        assert_eq!(other.preset, Quality::Medium);

        // Shared members are written through any instance, for all of them.
        assert_eq!(*SESSION_COUNT.read().unwrap(), 42);
        assert_eq!(*SESSION_QUALITY.read().unwrap(), Quality::Ultra);
        let (node, _) = serialize::<Value>(&Profile::default());
        assert_eq!(node["sessions"], json!(42));
    }

    // -------------------------------------------------------------------------
    // Containers

    #[test]
    fn sequence_round_trip() {
        let values = vec![String::from("a"), String::from("b"), String::from("c")];
        let (node, ok) = serialize::<Value>(&values);
        assert!(ok);
        assert_eq!(node, json!(["a", "b", "c"]));

        let mut restored: Vec<String> = Vec::new();
        assert!(deserialize(&node, &mut restored));
        assert_eq!(restored, values);
    }

    #[test]
    fn sequence_appends_by_default() {
        let mut values = vec![9_i32, 8];
        assert!(deserialize(&json!([1, 2, 3]), &mut values));
        assert_eq!(values, [9, 8, 1, 2, 3]);
    }

    #[test]
    fn sequence_replace_mode_clears_first() {
        let marshaler = Marshaler::new(MarshalConfig::new().with_sequence_mode(SequenceMode::Replace));
        let mut values = vec![9_i32, 8];

        assert!(marshaler.deserialize(&json!([1, 2, 3]), &mut values).success);
        assert_eq!(values, [1, 2, 3]);

        // A node of the wrong shape leaves the sequence alone.
        assert!(!marshaler.deserialize(&json!({ "0": 1 }), &mut values).success);
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn sequence_item_failure_keeps_the_default() {
        let mut points: Vec<Point> = Vec::new();
        let report = Marshaler::default().deserialize(
            &json!([{ "x": 1, "y": 1 }, { "x": 2 }, { "x": 3, "y": 3 }]),
            &mut points,
        );

        assert!(!report.success);
        assert_eq!(points.len(), 3);
        assert_eq!(points[1], Point { x: 2.0, y: 0.0 });
        assert_eq!(points[2], Point { x: 3.0, y: 3.0 });
        assert_eq!(report.warnings[0].path.to_string(), "[1].y");
    }

    #[test]
    fn byte_sequence_without_fast_path() {
        let bytes: Vec<u8> = vec![1, 2, 3];
        let (node, ok) = serialize::<Value>(&bytes);
        assert!(ok);
        assert_eq!(node, json!([1, 2, 3]));

        let mut restored: Vec<u8> = Vec::new();
        assert!(deserialize(&node, &mut restored));
        assert_eq!(restored, [1, 2, 3]);

        // JSON cannot hold blobs, the option alone changes nothing.
        let (node, _) = Marshaler::new(BLOBS).serialize::<Value>(&bytes);
        assert_eq!(node, json!([1, 2, 3]));

        // Neither does the capability alone.
        let (node, _) = Marshaler::default().serialize::<Node>(&bytes);
        assert_eq!(node.kind(), NodeKind::Array);
    }

    #[test]
    fn byte_fast_path() {
        let marshaler = Marshaler::new(BLOBS);
        let settings = sample_settings();

        let (node, report) = marshaler.serialize::<Node>(&settings);
        assert!(report.success);
        assert_eq!(node.member("blob"), Some(&Node::Blob(vec![0, 127, 255])));
        assert_eq!(
            node.member("audio").and_then(|audio| audio.member("channels")),
            Some(&Node::Blob(vec![1, 2]))
        );
        // Only byte containers take the fast path.
        assert_eq!(node.member("path").map(Node::kind), Some(NodeKind::Array));

        let mut restored = Settings::default();
        assert!(marshaler.deserialize(&node, &mut restored).success);
        restored.cache = settings.cache;
        assert_eq!(restored, settings);

        // Blob decoding appends too.
        let mut bytes: Vec<u8> = vec![7];
        assert!(marshaler.deserialize(&Node::Blob(vec![8, 9]), &mut bytes).success);
        assert_eq!(bytes, [7, 8, 9]);

        // A blob never fits a non-byte container.
        let mut words: Vec<u16> = Vec::new();
        assert!(!marshaler.deserialize(&Node::Blob(vec![8, 9]), &mut words).success);
        assert!(words.is_empty());
    }

    #[test]
    fn fixed_array_ignores_extra_items() {
        let mut values = [0_u8; 2];
        let report = Marshaler::default().deserialize(&json!([10, 20, 30]), &mut values);

        assert_eq!(values, [10, 20]);
        assert!(!report.success);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(
            report.warnings[0].error,
            MarshalError::TruncatedArray {
                type_path: "[u8; 2]",
                capacity: 2,
                len: 3,
            }
        );

        let mut values = [0_u8; 2];
        let report = Marshaler::new(BLOBS).deserialize(&Node::Blob(vec![10, 20, 30]), &mut values);
        assert_eq!(values, [10, 20]);
        assert!(!report.success);
    }

    #[test]
    fn fixed_array_keeps_unwritten_slots() {
        let mut values = [1_i32, 2, 3];
        assert!(deserialize(&json!([7]), &mut values));
        assert_eq!(values, [7, 2, 3]);
    }

    #[test]
    fn fixed_array_serializes_every_slot() {
        let (node, ok) = serialize::<Value>(&[[0.5_f64; 2]; 3]);
        assert!(ok);
        assert_eq!(node, json!([[0.5, 0.5], [0.5, 0.5], [0.5, 0.5]]));
    }

    #[test]
    fn nested_warning_paths() {
        let mut settings = Settings::default();
        let (mut node, _) = serialize::<Value>(&sample_settings());
        node["path"][1]["y"] = json!(true);
        node["audio"]["channels"] = json!([1, 2, 3]);

        let report = Marshaler::default().deserialize(&node, &mut settings);
        let rendered: Vec<_> = report.warnings.iter().map(ToString::to_string).collect();

        assert_eq!(rendered.len(), 2);
        assert!(rendered[0].starts_with(".audio.channels: 3 items do not fit"));
        assert_eq!(rendered[1], ".path[1].y: `f32` cannot hold bool `true`");
    }

    // -------------------------------------------------------------------------
    // Generic objects

    #[derive(Marshal, Default, Debug, PartialEq)]
    struct Pair<T> {
        first: T,
        second: T,
    }

    #[test]
    fn generic_object_round_trip() {
        let pair = Pair {
            first: vec![1_u8, 2],
            second: vec![3],
        };
        let (node, ok) = serialize::<Value>(&pair);
        assert!(ok);
        assert_eq!(node, json!({ "first": [1, 2], "second": [3] }));

        let mut restored: Pair<Vec<u8>> = Pair::default();
        assert!(deserialize(&node, &mut restored));
        assert_eq!(restored, pair);

        let mut points: Pair<Point> = Pair::default();
        assert!(deserialize(
            &json!({ "first": { "x": 1, "y": 2 }, "second": { "x": 3, "y": 4 } }),
            &mut points,
        ));
        assert_eq!(points.second, Point { x: 3.0, y: 4.0 });
    }

    // -------------------------------------------------------------------------
    // Threads

    #[test]
    fn concurrent_round_trips_share_type_info() {
        const THREADS: usize = 8;
        let barrier = Barrier::new(THREADS);

        let infos: Vec<[&'static TypeInfo; 3]> = thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|i| {
                    let barrier = &barrier;
                    s.spawn(move || {
                        // Every thread asks for a not yet built generic info at once.
                        barrier.wait();
                        let fresh = <Pair<[u16; 3]>>::type_info();

                        let mut settings = sample_settings();
                        settings.retries = i as u16;
                        settings.blob.push(i as u8);
                        let (node, ok) = serialize::<Value>(&settings);
                        assert!(ok);
                        let mut restored = Settings::default();
                        assert!(deserialize(&node, &mut restored));
                        restored.cache = settings.cache;
                        assert_eq!(restored, settings);

                        let pair = Pair {
                            first: vec![i as u8; i],
                            second: vec![0xFF],
                        };
                        let (node, ok) = serialize::<Value>(&pair);
                        assert!(ok);
                        let mut restored: Pair<Vec<u8>> = Pair::default();
                        assert!(deserialize(&node, &mut restored));
                        assert_eq!(restored, pair);

                        [Settings::type_info(), <Pair<Vec<u8>>>::type_info(), fresh]
                    })
                })
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        let first = infos[0];
        assert!(first[2].type_is::<Pair<[u16; 3]>>());
        for seen in &infos[1..] {
            for (a, b) in first.iter().zip(seen) {
                assert!(core::ptr::eq(*a, *b));
            }
        }
    }
}
