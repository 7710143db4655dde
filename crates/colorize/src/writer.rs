//! A [`Write`] adapter that colorizes everything written through it.

use std::io::{self, Write};

use crate::colorizer::Colorizer;
use crate::error::ColorizeError;

/// Wraps a sink so every write is passed through a [`Colorizer`] first.
///
/// Both parts are optional so they can be swapped after construction; a
/// write while either is missing fails without touching the sink.
///
/// Formatting changes the byte length of the payload. [`Write::write`]
/// reports the number of *input* bytes consumed, as the trait requires;
/// [`write_rendered`](Self::write_rendered) reports the length of the
/// forwarded payload instead.
///
/// # Example
///
/// ```rust
/// use std::io::Write;
/// use colorize::{AnsiColorizer, ColorWriter};
///
/// let mut writer = ColorWriter::new(Vec::new(), AnsiColorizer::new());
/// write!(writer, r#"status: colorize "green" "ok""#).unwrap();
/// let (out, _) = writer.into_parts();
/// assert_eq!(out.unwrap(), b"status: \x1b[32mok\x1b[0m");
/// ```
#[derive(Debug)]
pub struct ColorWriter<W, C> {
    out: Option<W>,
    colorizer: Option<C>,
}

impl<W, C> Default for ColorWriter<W, C> {
    fn default() -> Self {
        Self {
            out: None,
            colorizer: None,
        }
    }
}

impl<W: Write, C: Colorizer> ColorWriter<W, C> {
    /// Creates a writer forwarding colorized output to `out`.
    pub fn new(out: W, colorizer: C) -> Self {
        Self {
            out: Some(out),
            colorizer: Some(colorizer),
        }
    }

    pub fn set_output(&mut self, out: W) {
        self.out = Some(out);
    }

    pub fn set_colorizer(&mut self, colorizer: C) {
        self.colorizer = Some(colorizer);
    }

    /// Detaches and returns the sink, leaving the writer unusable until a
    /// new one is set.
    pub fn take_output(&mut self) -> Option<W> {
        self.out.take()
    }

    pub fn output(&self) -> Option<&W> {
        self.out.as_ref()
    }

    pub fn colorizer_mut(&mut self) -> Option<&mut C> {
        self.colorizer.as_mut()
    }

    pub fn into_parts(self) -> (Option<W>, Option<C>) {
        (self.out, self.colorizer)
    }

    /// Formats `buf` and forwards it, returning the forwarded byte count.
    pub fn write_rendered(&mut self, buf: &[u8]) -> io::Result<usize> {
        let (out, colorizer) = self.parts()?;

        match std::str::from_utf8(buf) {
            Ok(text) => {
                let rendered = colorizer.format(text);
                out.write_all(rendered.as_bytes())?;
                Ok(rendered.len())
            }
            Err(_) => {
                log::debug!("forwarding {} non-UTF-8 bytes unformatted", buf.len());
                out.write_all(buf)?;
                Ok(buf.len())
            }
        }
    }

    fn parts(&mut self) -> io::Result<(&mut W, &C)> {
        let out = self.out.as_mut().ok_or_else(|| config_error(ColorizeError::MissingOutput))?;
        let colorizer = self
            .colorizer
            .as_ref()
            .ok_or_else(|| config_error(ColorizeError::MissingColorizer))?;
        Ok((out, colorizer))
    }
}

impl<W: Write, C: Colorizer> Write for ColorWriter<W, C> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_rendered(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.out.as_mut() {
            Some(out) => out.flush(),
            None => Err(config_error(ColorizeError::MissingOutput)),
        }
    }
}

fn config_error(err: ColorizeError) -> io::Error {
    io::Error::other(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorizer::AnsiColorizer;

    /// Colorizer double that upper-cases its input.
    struct Shouting;

    impl Colorizer for Shouting {
        fn format(&self, input: &str) -> String {
            input.to_uppercase()
        }

        fn rename(&mut self, _name: &str) {}
    }

    fn config_kind(err: &io::Error) -> Option<&ColorizeError> {
        err.get_ref()?.downcast_ref::<ColorizeError>()
    }

    #[test]
    fn test_write_formats_before_forwarding() {
        let mut writer = ColorWriter::new(Vec::new(), Shouting);
        let n = writer.write(b"quiet").unwrap();
        assert_eq!(n, 5);
        assert_eq!(writer.output().unwrap(), b"QUIET");
    }

    #[test]
    fn test_write_rendered_reports_forwarded_length() {
        let mut writer = ColorWriter::new(Vec::new(), AnsiColorizer::new());
        let input = br#"colorize "red" "x""#;
        let n = writer.write_rendered(input).unwrap();
        assert_eq!(n, "\x1b[31mx\x1b[0m".len());
        assert_ne!(n, input.len());
    }

    #[test]
    fn test_write_all_with_growing_payload() {
        let mut writer = ColorWriter::new(Vec::new(), AnsiColorizer::new());
        writer
            .write_all(br#"a colorize "bold;bg-blue" "b" c"#)
            .unwrap();
        assert_eq!(
            writer.output().unwrap(),
            b"a \x1b[1m\x1b[44mb\x1b[0m c"
        );
    }

    #[test]
    fn test_missing_output_fails_without_writing() {
        let mut writer: ColorWriter<Vec<u8>, AnsiColorizer> = ColorWriter::default();
        writer.set_colorizer(AnsiColorizer::new());
        let err = writer.write(b"hello").unwrap_err();
        assert!(matches!(
            config_kind(&err),
            Some(ColorizeError::MissingOutput)
        ));
        assert!(writer.flush().is_err());
    }

    #[test]
    fn test_missing_colorizer_fails_without_writing() {
        let mut writer: ColorWriter<Vec<u8>, AnsiColorizer> = ColorWriter::default();
        writer.set_output(Vec::new());
        let err = writer.write(b"hello").unwrap_err();
        assert!(matches!(
            config_kind(&err),
            Some(ColorizeError::MissingColorizer)
        ));
        assert!(writer.output().unwrap().is_empty());
    }

    #[test]
    fn test_take_output_detaches_sink() {
        let mut writer = ColorWriter::new(Vec::new(), Shouting);
        writer.write_all(b"one").unwrap();
        let first = writer.take_output().unwrap();
        assert_eq!(first, b"ONE");
        assert!(writer.write(b"two").is_err());
    }

    #[test]
    fn test_non_utf8_passes_through() {
        let mut writer = ColorWriter::new(Vec::new(), Shouting);
        let bytes = [0x61, 0xff, 0x62];
        assert_eq!(writer.write(&bytes).unwrap(), 3);
        assert_eq!(writer.output().unwrap(), &bytes);
    }

    #[test]
    fn test_rename_through_writer() {
        let mut writer = ColorWriter::new(Vec::new(), AnsiColorizer::new());
        writer.colorizer_mut().unwrap().rename("paint");
        writer.write_all(br#"paint "cyan" "x""#).unwrap();
        assert_eq!(writer.output().unwrap(), b"\x1b[36mx\x1b[0m");
    }
}
