//! Error types.

use std::io::Error as IoError;
use std::path::PathBuf;

use crate::frame::Axis;

/// Errors that occur while loading, transforming or saving an atlas.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The atlas file could not be read.
    #[error("failed to read atlas file '{}'", path.display())]
    Read {
        /// The path we tried to read.
        path: PathBuf,
        /// The underlying error.
        source: IoError,
    },
    /// The output file could not be created or written.
    #[error("failed to write atlas file '{}'", path.display())]
    Write {
        /// The path we tried to write.
        path: PathBuf,
        /// The underlying error.
        source: IoError,
    },
    /// The input is not valid JSON.
    #[error("failed to parse atlas JSON")]
    Parse(#[source] serde_json::Error),
    /// The atlas could not be serialized.
    #[error("failed to serialize atlas JSON")]
    Serialize(#[source] serde_json::Error),
    /// The root of the document is not a JSON object.
    #[error("the atlas document must be a JSON object")]
    ExpectedObject,
    /// The document has no `frames` key.
    #[error("the atlas document has no 'frames' entry")]
    MissingFrames,
    /// The `frames` entry is not a JSON object.
    #[error("the atlas 'frames' entry must be a JSON object")]
    InvalidFrames,
    /// A single frame entry is malformed.
    #[error(transparent)]
    Frame(#[from] FrameError),
}

/// An error in a single frame entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("frame '{name}': {kind}")]
pub struct FrameError {
    /// The frame identifier, as it appears in the `frames` object.
    pub name: String,
    /// What is wrong with the entry.
    pub kind: FrameErrorKind,
}

impl FrameError {
    pub(crate) fn new(name: impl Into<String>, kind: FrameErrorKind) -> Self {
        FrameError { name: name.into(), kind }
    }
}

/// The reason a frame entry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FrameErrorKind {
    /// The entry is not a JSON object.
    #[error("the entry must be a JSON object")]
    NotAnObject,
    /// The entry has no `frame` box.
    #[error("missing the 'frame' box")]
    MissingBox,
    /// The `frame` box is not a JSON object.
    #[error("the 'frame' box must be a JSON object")]
    InvalidBox,
    /// The box has no coordinate for this axis.
    #[error("missing the '{0}' coordinate")]
    MissingCoordinate(Axis),
    /// The coordinate for this axis is not a number.
    #[error("the '{0}' coordinate is not a number")]
    NotANumber(Axis),
    /// Adding the offset overflowed the coordinate.
    #[error("the offset overflows the '{0}' coordinate")]
    Overflow(Axis),
}
