//! Pad a single atlas file in one call.

use std::path::{Path, PathBuf};

use crate::write::WriteOptions;
use crate::{Atlas, Error};

/// The atlas read when no input is given.
pub static DEFAULT_INPUT_FILE: &str = "collectables.json";
/// The file written when no output is given.
pub static DEFAULT_OUTPUT_FILE: &str = "collectables_padded.json";
/// The number of pixels added to each frame origin by default.
pub const DEFAULT_OFFSET: i64 = 2;

/// Describes one padding run: where to read, where to write and by how much
/// to move the frames.
///
/// The defaults read `collectables.json`, write `collectables_padded.json`
/// and move every frame by 2 pixels, both relative to the working directory.
///
/// # Examples
///
/// ```
/// use atlaspad::PadOptions;
///
/// let options = PadOptions::default()
///     .input("assets/ui.json")
///     .output("assets/ui_padded.json")
///     .offset(1);
/// assert_eq!(options.offset_value(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PadOptions {
    pub(crate) input: PathBuf,
    pub(crate) output: PathBuf,
    pub(crate) offset: i64,
    pub(crate) write_options: WriteOptions,
}

impl Default for PadOptions {
    fn default() -> Self {
        PadOptions {
            input: DEFAULT_INPUT_FILE.into(),
            output: DEFAULT_OUTPUT_FILE.into(),
            offset: DEFAULT_OFFSET,
            write_options: WriteOptions::default(),
        }
    }
}

impl PadOptions {
    /// Set the atlas file to read.
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = path.into();
        self
    }

    /// Set the file to write the padded atlas to.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    /// Set the offset added to every frame's `x` and `y`.
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Set how the output file is formatted.
    pub fn write_options(mut self, options: WriteOptions) -> Self {
        self.write_options = options;
        self
    }

    /// The atlas file to read.
    pub fn input_path(&self) -> &Path {
        &self.input
    }

    /// The file the padded atlas is written to.
    pub fn output_path(&self) -> &Path {
        &self.output
    }

    /// The offset added to every frame's `x` and `y`.
    pub fn offset_value(&self) -> i64 {
        self.offset
    }
}

/// What a successful [`pad_file`] run did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PadReport {
    /// The number of frames moved.
    pub frames: usize,
    /// The offset that was applied.
    pub offset: i64,
    /// The file that was written.
    pub output: PathBuf,
}

/// Load the input atlas, move every frame and write the output atlas.
///
/// The output file is only created once the whole atlas has been loaded and
/// every frame moved, so a missing input or a malformed frame never leaves an
/// output file behind.
pub fn pad_file(options: &PadOptions) -> Result<PadReport, Error> {
    let mut atlas = Atlas::load(&options.input)?;
    let frames = atlas.offset_frames(options.offset)?;
    atlas.save_with_options(&options.output, &options.write_options)?;
    log::info!(
        "padded {} frames of '{}' into '{}'",
        frames,
        options.input.display(),
        options.output.display()
    );
    Ok(PadReport { frames, offset: options.offset, output: options.output.clone() })
}
