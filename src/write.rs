//! Customize serialization behaviour

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

use crate::Error;

/// Options that can be set when writing an atlas to disk.
///
/// The defaults reproduce the layout sprite tools commonly emit: two-space
/// indentation, `": "` after keys, non-ASCII characters escaped as `\uXXXX`
/// and no trailing newline.
///
/// You construct `WriteOptions` using builder semantics:
///
/// ```
/// # use atlaspad::WriteOptions;
/// let two_spaces = WriteOptions::default();
///
/// let tabs = WriteOptions::default().whitespace("\t");
///
/// let utf8_with_newline = WriteOptions::default()
///     .ensure_ascii(false)
///     .trailing_newline(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    pub(crate) indent_str: Cow<'static, str>,
    pub(crate) ensure_ascii: bool,
    pub(crate) trailing_newline: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions { indent_str: "  ".into(), ensure_ascii: true, trailing_newline: false }
    }
}

impl WriteOptions {
    /// Builder-style method to customize the whitespace.
    ///
    /// By default, we indent with two spaces ("  ").
    ///
    /// The argument may be either a `'static str` or a `String`, made up of
    /// spaces and tabs only.
    ///
    /// # Panics
    ///
    /// Panics if the provided string is empty, or if it contains anything
    /// other than spaces and tabs.
    pub fn whitespace(mut self, indent_str: impl Into<Cow<'static, str>>) -> Self {
        let indent_str = indent_str.into();
        assert!(!indent_str.is_empty(), "whitespace str must not be empty");
        assert!(indent_str.bytes().all(|c| c == b' ' || c == b'\t'), "invalid whitespace");
        self.indent_str = indent_str;
        self
    }

    /// Builder-style method to choose whether non-ASCII characters are
    /// escaped.
    ///
    /// Enabled by default. When disabled, strings are written as plain UTF-8.
    pub fn ensure_ascii(mut self, ensure_ascii: bool) -> Self {
        self.ensure_ascii = ensure_ascii;
        self
    }

    /// Builder-style method to end the file with a newline.
    ///
    /// Disabled by default.
    pub fn trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }

    /// The indentation string.
    pub fn indent_str(&self) -> &str {
        &self.indent_str
    }
}

/// Write any `Serialize` to file as JSON, providing custom options.
pub fn write_json_to_file(
    path: &Path,
    value: &impl Serialize,
    options: &WriteOptions,
) -> Result<(), Error> {
    let write_error = |source: io::Error| Error::Write { path: path.to_owned(), source };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    serialize(&mut writer, value, options).map_err(|e| {
        if e.is_io() {
            write_error(e.into())
        } else {
            Error::Serialize(e)
        }
    })?;
    if options.trailing_newline {
        writer.write_all(b"\n").map_err(write_error)?;
    }
    let file = writer.into_inner().map_err(|e| write_error(e.into_error()))?;
    file.sync_all().map_err(write_error)?;
    Ok(())
}

/// Serialize any `Serialize` to a JSON string, providing custom options.
pub fn to_string(value: &impl Serialize, options: &WriteOptions) -> Result<String, Error> {
    let mut buf = Vec::new();
    serialize(&mut buf, value, options).map_err(Error::Serialize)?;
    if options.trailing_newline {
        buf.push(b'\n');
    }
    String::from_utf8(buf).map_err(|e| Error::Serialize(serde_json::Error::custom(e)))
}

fn serialize<W: Write>(
    writer: W,
    value: &impl Serialize,
    options: &WriteOptions,
) -> Result<(), serde_json::Error> {
    let formatter = AtlasFormatter {
        pretty: PrettyFormatter::with_indent(options.indent_str.as_bytes()),
        ensure_ascii: options.ensure_ascii,
    };
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser)
}

/// A pretty printer that can escape everything outside ASCII.
struct AtlasFormatter<'a> {
    pretty: PrettyFormatter<'a>,
    ensure_ascii: bool,
}

impl Formatter for AtlasFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        if !self.ensure_ascii || fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                // astral characters become a surrogate pair
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}
