use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use crate::codec::MarshalError;

// -----------------------------------------------------------------------------
// Config

/// How a growable sequence is filled from a document array.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceMode {
    /// Append one item per document element, keeping existing items.
    #[default]
    Append,
    /// Clear the sequence first.
    Replace,
}

/// Options of a [`Marshaler`](crate::Marshaler).
///
/// # Examples
///
/// ```
/// use vc_marshal::codec::{MarshalConfig, SequenceMode};
///
/// const CONFIG: MarshalConfig = MarshalConfig::new()
///     .with_sequence_mode(SequenceMode::Replace)
///     .with_binary_blobs(true);
///
/// assert_eq!(CONFIG.sequence_mode(), SequenceMode::Replace);
/// assert_eq!(MarshalConfig::default().sequence_mode(), SequenceMode::Append);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MarshalConfig {
    sequence_mode: SequenceMode,
    binary_blobs: bool,
}

impl MarshalConfig {
    /// The default configuration: append, no blobs.
    #[inline]
    pub const fn new() -> Self {
        Self {
            sequence_mode: SequenceMode::Append,
            binary_blobs: false,
        }
    }

    #[inline]
    pub const fn with_sequence_mode(mut self, mode: SequenceMode) -> Self {
        self.sequence_mode = mode;
        self
    }

    /// Encode byte containers as blob nodes.
    ///
    /// Only takes effect with a backend whose
    /// [`Document::BINARY_BLOBS`](crate::document::Document::BINARY_BLOBS) is `true`.
    #[inline]
    pub const fn with_binary_blobs(mut self, enabled: bool) -> Self {
        self.binary_blobs = enabled;
        self
    }

    #[inline]
    pub const fn sequence_mode(&self) -> SequenceMode {
        self.sequence_mode
    }

    #[inline]
    pub const fn binary_blobs(&self) -> bool {
        self.binary_blobs
    }
}

// -----------------------------------------------------------------------------
// Path

/// One step from a value to a nested value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A member, by display name.
    Member(&'static str),
    /// A container item, by position in the document array.
    Index(usize),
}

/// The location of a value inside the root, e.g. `.audio.volume[2]`.
///
/// The root itself renders as `$`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct MemberPath(Vec<PathSegment>);

impl MemberPath {
    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MemberPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("$");
        }
        for segment in &self.0 {
            match segment {
                PathSegment::Member(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Report

/// A recoverable failure and where it happened.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub path: MemberPath,
    pub error: MarshalError,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.error)
    }
}

/// The outcome of one encode or decode.
///
/// `success` is `false` as soon as one warning was recorded; the value or
/// document is then a best-effort partial result.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub success: bool,
    pub warnings: Vec<Warning>,
}

impl Report {
    /// Returns the warnings whose path is exactly `path`, e.g. `".audio.volume"`.
    pub fn warnings_at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Warning> + 'a {
        self.warnings
            .iter()
            .filter(move |warning| warning.path.to_string() == path)
    }
}

// -----------------------------------------------------------------------------
// Context

/// Per-call state threaded through the codecs.
pub(crate) struct Context {
    config: MarshalConfig,
    path: Vec<PathSegment>,
    warnings: Vec<Warning>,
}

impl Context {
    #[inline]
    pub const fn new(config: MarshalConfig) -> Self {
        Self {
            config,
            path: Vec::new(),
            warnings: Vec::new(),
        }
    }

    #[inline]
    pub const fn config(&self) -> &MarshalConfig {
        &self.config
    }

    /// Runs `func` one segment deeper.
    #[inline]
    pub fn scoped<R>(&mut self, segment: PathSegment, func: impl FnOnce(&mut Self) -> R) -> R {
        self.path.push(segment);
        let result = func(self);
        self.path.pop();
        result
    }

    /// Logs and records a warning at the current path.
    pub fn warn(&mut self, error: MarshalError) {
        let path = MemberPath(self.path.clone());
        log::warn!("{path}: {error}");
        self.warnings.push(Warning { path, error });
    }

    pub fn finish(self, success: bool) -> Report {
        Report {
            success,
            warnings: self.warnings,
        }
    }
}
