//! Utilities for fixing up JSON sprite atlases.
//!
//! Sprite packers describe each frame of a sprite sheet by its bounding box.
//! When the sheet gains a border, every box has to move with it; this crate
//! loads such an atlas, shifts the `x` and `y` of every frame box and writes
//! the result back out, leaving everything else as it was.
//!
//! # Basic usage:
//!
//! ```no_run
//! use atlaspad::Atlas;
//!
//! let mut atlas = Atlas::load("collectables.json").expect("failed to load atlas");
//! atlas.offset_frames(2).expect("malformed frame");
//! atlas.save("collectables_padded.json").expect("failed to save atlas");
//! ```
//!
//! Or, with the same defaults as the `atlaspad` binary:
//!
//! ```no_run
//! let report = atlaspad::pad_file(&atlaspad::PadOptions::default()).unwrap();
//! println!("moved {} frames", report.frames);
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

mod atlas;
pub mod error;
mod frame;
mod pad;
pub mod write;

pub use atlas::Atlas;
pub use error::{Error, FrameError, FrameErrorKind};
pub use frame::{Axis, Frame, Rect};
pub use pad::{
    pad_file, PadOptions, PadReport, DEFAULT_INPUT_FILE, DEFAULT_OFFSET, DEFAULT_OUTPUT_FILE,
};
pub use write::WriteOptions;
