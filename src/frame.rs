//! Frame entries and their bounding boxes.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::{FrameError, FrameErrorKind};

pub(crate) static FRAME_BOX_KEY: &str = "frame";

/// One of the two origin coordinates of a frame box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal origin, stored under `x`.
    X,
    /// The vertical origin, stored under `y`.
    Y,
}

impl Axis {
    /// Both axes, in the order they are shifted.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// The key of this coordinate inside a frame box.
    pub fn key(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The bounding box of a frame, in sprite sheet pixels.
///
/// This is a read-only snapshot; changes to it are not written back to the
/// atlas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width, if the box has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<f64>,
    /// Height, if the box has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<f64>,
}

/// A borrowed view of one entry in an atlas' `frames` object.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    name: &'a str,
    entry: &'a Value,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(name: &'a str, entry: &'a Value) -> Self {
        Frame { name, entry }
    }

    /// The frame identifier, usually the source image's file name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The raw JSON of the whole entry.
    pub fn entry(&self) -> &'a Value {
        self.entry
    }

    /// The `x` coordinate of the frame box.
    pub fn x(&self) -> Result<&'a Number, FrameError> {
        self.coordinate(Axis::X)
    }

    /// The `y` coordinate of the frame box.
    pub fn y(&self) -> Result<&'a Number, FrameError> {
        self.coordinate(Axis::Y)
    }

    /// The coordinate of the frame box along `axis`.
    pub fn coordinate(&self, axis: Axis) -> Result<&'a Number, FrameError> {
        match self.frame_box()?.get(axis.key()) {
            Some(Value::Number(number)) => Ok(number),
            Some(_) => Err(self.error(FrameErrorKind::NotANumber(axis))),
            None => Err(self.error(FrameErrorKind::MissingCoordinate(axis))),
        }
    }

    /// Returns the frame box as a [`Rect`].
    pub fn rect(&self) -> Result<Rect, FrameError> {
        for axis in Axis::ALL {
            self.coordinate(axis)?;
        }
        let frame_box = self.entry.get(FRAME_BOX_KEY).unwrap_or(&Value::Null);
        Rect::deserialize(frame_box).map_err(|_| self.error(FrameErrorKind::InvalidBox))
    }

    /// Computes the coordinate along `axis` moved by `offset`.
    pub(crate) fn shifted(&self, axis: Axis, offset: i64) -> Result<Number, FrameError> {
        let number = self.coordinate(axis)?;
        shift(number, offset).ok_or_else(|| self.error(FrameErrorKind::Overflow(axis)))
    }

    fn frame_box(&self) -> Result<&'a Map<String, Value>, FrameError> {
        let entry = self.entry.as_object().ok_or_else(|| self.error(FrameErrorKind::NotAnObject))?;
        entry
            .get(FRAME_BOX_KEY)
            .ok_or_else(|| self.error(FrameErrorKind::MissingBox))?
            .as_object()
            .ok_or_else(|| self.error(FrameErrorKind::InvalidBox))
    }

    fn error(&self, kind: FrameErrorKind) -> FrameError {
        FrameError::new(self.name, kind)
    }
}

/// Adds `offset` to a JSON number, keeping integers integral.
///
/// Integers are added exactly, even past the range of `u64`; an integer too
/// large for `i128` is never rounded through `f64`. Returns `None` if the
/// result cannot be represented.
pub(crate) fn shift(number: &Number, offset: i64) -> Option<Number> {
    if let Some(value) = number.as_i128() {
        return value.checked_add(i128::from(offset)).and_then(Number::from_i128);
    }
    if is_integer(number) {
        return None;
    }
    number.as_f64().and_then(|value| Number::from_f64(value + offset as f64))
}

fn is_integer(number: &Number) -> bool {
    !number.as_str().contains(['.', 'e', 'E'])
}
