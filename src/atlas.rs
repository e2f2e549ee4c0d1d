//! Reading and writing sprite atlas documents.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

use crate::frame::{Axis, Frame, FRAME_BOX_KEY};
use crate::write::{self, WriteOptions};
use crate::Error;

pub(crate) static FRAMES_KEY: &str = "frames";

/// A sprite atlas in the "JSON hash" layout written by TexturePacker and
/// friends.
///
/// The document is kept as loaded: entries keep their order and every key
/// this crate does not understand (`meta`, `rotated`, `sourceSize`, ...) is
/// carried through untouched.
///
/// # Examples
///
/// ```
/// use atlaspad::Atlas;
///
/// let src = r#"{"frames": {"coin.png": {"frame": {"x": 0, "y": 0, "w": 8, "h": 8}}}}"#;
/// let mut atlas: Atlas = src.parse().unwrap();
/// atlas.offset_frames(2).unwrap();
/// let coin = atlas.frame("coin.png").unwrap();
/// assert_eq!(coin.x().unwrap().as_i64(), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Atlas {
    // top-level entries; the `frames` slot is a placeholder that only
    // remembers where the key goes.
    root: IndexMap<String, Value>,
    frames: IndexMap<String, Value>,
}

impl Default for Atlas {
    fn default() -> Self {
        let mut root = IndexMap::new();
        root.insert(FRAMES_KEY.to_string(), Value::Null);
        Atlas { root, frames: IndexMap::new() }
    }
}

impl Atlas {
    /// Returns a new atlas with no frames.
    pub fn new() -> Self {
        Atlas::default()
    }

    /// Loads an atlas from the JSON file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Atlas, Error> {
        let path = path.as_ref();
        log::debug!("loading atlas from '{}'", path.display());
        let file =
            File::open(path).map_err(|source| Error::Read { path: path.to_owned(), source })?;
        Atlas::from_reader(BufReader::new(file))
    }

    /// Parses an atlas from a reader of JSON text.
    pub fn from_reader<R: Read>(reader: R) -> Result<Atlas, Error> {
        let value = serde_json::from_reader(reader).map_err(Error::Parse)?;
        Atlas::from_value(value)
    }

    /// Builds an atlas from an already parsed JSON value.
    ///
    /// The value must be an object with a `frames` object. Frame entries
    /// themselves are only checked when they are used.
    pub fn from_value(value: Value) -> Result<Atlas, Error> {
        let Value::Object(map) = value else {
            return Err(Error::ExpectedObject);
        };
        let mut root: IndexMap<String, Value> = map.into_iter().collect();
        let frames: IndexMap<String, Value> = match root.get_mut(FRAMES_KEY).map(Value::take) {
            Some(Value::Object(frames)) => frames.into_iter().collect(),
            Some(_) => return Err(Error::InvalidFrames),
            None => return Err(Error::MissingFrames),
        };
        Ok(Atlas { root, frames })
    }

    /// Returns the number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if the atlas has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterate over the frame identifiers, in document order.
    pub fn frame_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.frames.keys().map(String::as_str)
    }

    /// Iterate over the frames, in document order.
    pub fn frames(&self) -> impl Iterator<Item = Frame<'_>> + '_ {
        self.frames.iter().map(|(name, entry)| Frame::new(name, entry))
    }

    /// Returns the frame with this identifier, if it exists.
    pub fn frame(&self, name: &str) -> Option<Frame<'_>> {
        self.frames.get_key_value(name).map(|(name, entry)| Frame::new(name, entry))
    }

    /// Returns a top-level entry other than `frames`, such as `meta`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        if key == FRAMES_KEY {
            return None;
        }
        self.root.get(key)
    }

    /// Adds `offset` to the `x` and `y` of every frame box.
    ///
    /// Every frame is checked before any is changed: on error the atlas is
    /// left exactly as it was. Integer coordinates stay integers and
    /// floating-point coordinates stay floating-point.
    ///
    /// Returns the number of frames that were moved.
    ///
    /// This is not idempotent; applying it twice moves every frame by
    /// `2 * offset`.
    pub fn offset_frames(&mut self, offset: i64) -> Result<usize, Error> {
        let mut shifted = Vec::with_capacity(self.frames.len());
        for frame in self.frames() {
            shifted.push((frame.shifted(Axis::X, offset)?, frame.shifted(Axis::Y, offset)?));
        }

        for ((name, entry), (x, y)) in self.frames.iter_mut().zip(shifted) {
            let Some(frame_box) = entry.get_mut(FRAME_BOX_KEY).and_then(Value::as_object_mut)
            else {
                continue;
            };
            log::trace!("frame '{}' moved to ({}, {})", name, x, y);
            for (axis, number) in [(Axis::X, x), (Axis::Y, y)] {
                if let Some(slot) = frame_box.get_mut(axis.key()) {
                    *slot = Value::Number(number);
                }
            }
        }

        log::debug!("moved {} frames by {}", self.frames.len(), offset);
        Ok(self.frames.len())
    }

    /// Serialize the atlas to `path` using the default [`WriteOptions`],
    /// overwriting any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.save_with_options(path, &WriteOptions::default())
    }

    /// Serialize the atlas to `path` with custom [`WriteOptions`],
    /// overwriting any existing file.
    ///
    /// Note: a failure part way through can leave an incomplete file behind.
    pub fn save_with_options(
        &self,
        path: impl AsRef<Path>,
        options: &WriteOptions,
    ) -> Result<(), Error> {
        let path = path.as_ref();
        log::debug!("saving atlas to '{}'", path.display());
        write::write_json_to_file(path, self, options)
    }

    /// Serialize the atlas to a string with custom [`WriteOptions`].
    pub fn to_string_with_options(&self, options: &WriteOptions) -> Result<String, Error> {
        write::to_string(self, options)
    }

    /// Returns the whole document as a JSON value.
    pub fn into_value(self) -> Value {
        let Atlas { root, mut frames } = self;
        let document = root
            .into_iter()
            .map(|(key, value)| {
                if key == FRAMES_KEY {
                    let frames = std::mem::take(&mut frames).into_iter().collect();
                    (key, Value::Object(frames))
                } else {
                    (key, value)
                }
            })
            .collect();
        Value::Object(document)
    }
}

impl FromStr for Atlas {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = serde_json::from_str(s).map_err(Error::Parse)?;
        Atlas::from_value(value)
    }
}

impl Serialize for Atlas {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.root.len()))?;
        for (key, value) in &self.root {
            if key == FRAMES_KEY {
                map.serialize_entry(key, &self.frames)?;
            } else {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}
