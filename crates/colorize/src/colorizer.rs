//! Invocation scanning and rendering.
//!
//! A [`Colorizer`] turns text containing invocations such as
//!
//! ```text
//! colorize "bold;red" "ALERT"
//! {{ colorize "underline" "see below" }}
//! ```
//!
//! into text carrying ANSI codes. Each invocation is replaced by the codes of
//! its modifiers (in the order written), the literal text, and a reset code.
//! Everything else passes through untouched.
//!
//! ## Degradation
//!
//! [`Colorizer::format`] never fails:
//!
//! - unknown modifiers are skipped, the remaining ones still apply;
//! - an invocation where nothing resolves renders its text and the reset code;
//! - a marker with missing or unterminated arguments is left as written.
//!
//! Use [`AnsiColorizer::validate`] to catch unknown modifiers up front.
//!
//! ## Sharing
//!
//! [`AnsiColorizer::rename`](Colorizer::rename) needs `&mut self`. To share one
//! instance between threads wrap it in `Arc<RwLock<_>>`, which implements
//! [`Colorizer`] by taking the read lock to format and the write lock to rename.

use std::ops::Range;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{ColorizeError, UnknownModifier, UnknownModifiers};
use crate::modifier::ModifierSet;

/// Marker name recognized when none is configured.
pub const DEFAULT_FUNCTION_NAME: &str = "colorize";

/// Something that renders invocation markers in text.
pub trait Colorizer {
    /// Renders every invocation in `input`. Total over all inputs.
    fn format(&self, input: &str) -> String;

    /// Changes the marker name recognized by later [`format`](Self::format) calls.
    fn rename(&mut self, name: &str);
}

impl<C: Colorizer + ?Sized> Colorizer for Box<C> {
    fn format(&self, input: &str) -> String {
        (**self).format(input)
    }

    fn rename(&mut self, name: &str) {
        (**self).rename(name)
    }
}

impl<C: Colorizer> Colorizer for Arc<RwLock<C>> {
    fn format(&self, input: &str) -> String {
        self.read()
            .unwrap_or_else(PoisonError::into_inner)
            .format(input)
    }

    fn rename(&mut self, name: &str) {
        self.write()
            .unwrap_or_else(PoisonError::into_inner)
            .rename(name)
    }
}

/// Construction-time options, applied in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorizerOption {
    /// Recognize `name` instead of `colorize` as the invocation marker.
    CustomFunctionName(String),
}

impl ColorizerOption {
    pub fn custom_function_name(name: impl Into<String>) -> Self {
        ColorizerOption::CustomFunctionName(name.into())
    }
}

/// Per-instance colorizer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorizerConfig {
    /// The invocation marker. An empty name disables recognition.
    pub function_name: String,
}

impl Default for ColorizerConfig {
    fn default() -> Self {
        Self {
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
        }
    }
}

impl ColorizerConfig {
    fn apply(&mut self, option: ColorizerOption) {
        match option {
            ColorizerOption::CustomFunctionName(name) => self.function_name = name,
        }
    }
}

/// The ANSI rendering engine.
///
/// # Example
///
/// ```rust
/// use colorize::{AnsiColorizer, Colorizer, ColorizerOption};
///
/// let colorizer = AnsiColorizer::new();
/// assert_eq!(
///     colorizer.format(r#"colorize "bold;red" "ALERT""#),
///     "\x1b[1m\x1b[31mALERT\x1b[0m"
/// );
///
/// let styled = AnsiColorizer::with_options([ColorizerOption::custom_function_name("style")]);
/// assert_eq!(
///     styled.format(r#"style "underline" "hi""#),
///     colorizer.format(r#"colorize "underline" "hi""#)
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnsiColorizer {
    config: ColorizerConfig,
}

impl AnsiColorizer {
    /// Creates a colorizer recognizing the default `colorize` marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a colorizer, applying `options` in order.
    pub fn with_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = ColorizerOption>,
    {
        let mut config = ColorizerConfig::default();
        for option in options {
            config.apply(option);
        }
        Self { config }
    }

    pub fn from_config(config: ColorizerConfig) -> Self {
        Self { config }
    }

    /// Sets the marker name.
    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.config.function_name = name.into();
        self
    }

    /// The marker name currently recognized.
    pub fn function_name(&self) -> &str {
        &self.config.function_name
    }

    /// Checks every invocation in `input` for unknown modifiers.
    ///
    /// Returns [`ColorizeError::UnknownModifiers`] listing each unknown name
    /// together with the byte offset of its invocation.
    pub fn validate(&self, input: &str) -> Result<(), ColorizeError> {
        let mut unknown = UnknownModifiers::default();

        for segment in Scanner::new(input, self.function_name()) {
            if let Segment::Invocation(invocation) = segment {
                let (_, names) = ModifierSet::parse(&invocation.spec);
                unknown
                    .errors
                    .extend(names.into_iter().map(|name| UnknownModifier {
                        name: name.to_string(),
                        offset: invocation.span.start,
                    }));
            }
        }

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(unknown.into())
        }
    }
}

impl Colorizer for AnsiColorizer {
    fn format(&self, input: &str) -> String {
        let marker = self.function_name();
        if marker.is_empty() || !input.contains(marker) {
            return input.to_string();
        }

        let mut output = String::with_capacity(input.len());
        for segment in Scanner::new(input, marker) {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Invocation(invocation) => {
                    output.push_str(&render(&invocation.spec, &invocation.text))
                }
            }
        }
        output
    }

    fn rename(&mut self, name: &str) {
        log::trace!(
            "renaming colorizer marker '{}' to '{}'",
            self.config.function_name,
            name
        );
        self.config.function_name = name.to_string();
    }
}

/// Renders one invocation: the codes of `spec`, `text`, then a reset.
///
/// Unknown modifiers in `spec` are skipped.
pub fn render(spec: &str, text: &str) -> String {
    let (modifiers, unknown) = ModifierSet::parse(spec);
    for name in unknown {
        log::debug!("skipping unknown modifier '{}'", name);
    }
    modifiers.apply(text)
}

/// A parsed `<marker> "<spec>" "<text>"` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Invocation {
    pub spec: String,
    pub text: String,
    /// Byte range of the whole invocation, delimiters included.
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Literal(&'a str),
    Invocation(Invocation),
}

/// Single forward pass over the input, yielding literal runs and invocations.
pub(crate) struct Scanner<'a> {
    input: &'a str,
    marker: &'a str,
    pos: usize,
    pending: Option<Invocation>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str, marker: &'a str) -> Self {
        Self {
            input,
            marker,
            pos: 0,
            pending: None,
        }
    }

    /// Finds the first well-formed invocation starting at or after `from`.
    fn find_from(&self, from: usize) -> Option<Invocation> {
        if self.marker.is_empty() {
            return None;
        }

        let mut prev = self.input[..from].chars().next_back();
        // A `{{ <marker>` opening that fails to parse stays literal through the marker.
        let mut skip_to = from;
        for (offset, ch) in self.input[from..].char_indices() {
            let at = from + offset;
            let rest = &self.input[at..];

            if at < skip_to {
                prev = Some(ch);
                continue;
            }

            if rest.starts_with("{{") {
                if let Some(after_marker) = self.delimited_marker_end(at) {
                    match self.parse_delimited(at, after_marker) {
                        Some(invocation) => return Some(invocation),
                        None => {
                            log::debug!(
                                "leaving malformed '{{{{ {}' invocation at byte {} as written",
                                self.marker,
                                at
                            );
                            skip_to = after_marker;
                        }
                    }
                }
            } else if rest.starts_with(self.marker) && !prev.is_some_and(is_ident_char) {
                match self.parse_bare(at) {
                    Some(invocation) => return Some(invocation),
                    None => log::debug!(
                        "leaving malformed '{}' invocation at byte {} as written",
                        self.marker,
                        at
                    ),
                }
            }

            prev = Some(ch);
        }

        None
    }

    fn parse_bare(&self, at: usize) -> Option<Invocation> {
        let (spec, text, end) = parse_args(self.input, at + self.marker.len())?;
        Some(Invocation {
            spec,
            text,
            span: at..end,
        })
    }

    /// Position right after the marker when `{{` at `at` opens one.
    fn delimited_marker_end(&self, at: usize) -> Option<usize> {
        let pos = skip_ws(self.input, at + 2);
        self.input[pos..]
            .starts_with(self.marker)
            .then_some(pos + self.marker.len())
    }

    fn parse_delimited(&self, at: usize, after_marker: usize) -> Option<Invocation> {
        let (spec, text, pos) = parse_args(self.input, after_marker)?;
        let pos = skip_ws(self.input, pos);
        if !self.input[pos..].starts_with("}}") {
            return None;
        }
        Some(Invocation {
            spec,
            text,
            span: at..pos + 2,
        })
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(invocation) = self.pending.take() {
            self.pos = invocation.span.end;
            return Some(Segment::Invocation(invocation));
        }

        let input = self.input;
        if self.pos >= input.len() {
            return None;
        }

        match self.find_from(self.pos) {
            Some(invocation) if invocation.span.start == self.pos => {
                self.pos = invocation.span.end;
                Some(Segment::Invocation(invocation))
            }
            Some(invocation) => {
                let literal = &input[self.pos..invocation.span.start];
                self.pos = invocation.span.start;
                self.pending = Some(invocation);
                Some(Segment::Literal(literal))
            }
            None => {
                let literal = &input[self.pos..];
                self.pos = input.len();
                Some(Segment::Literal(literal))
            }
        }
    }
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '-'
}

fn skip_ws(input: &str, pos: usize) -> usize {
    let rest = &input[pos..];
    pos + (rest.len() - rest.trim_start().len())
}

fn skip_required_ws(input: &str, pos: usize) -> Option<usize> {
    let next = skip_ws(input, pos);
    (next > pos).then_some(next)
}

/// Parses ` "<spec>" "<text>"` starting right after the marker name.
fn parse_args(input: &str, pos: usize) -> Option<(String, String, usize)> {
    let pos = skip_required_ws(input, pos)?;
    let (spec, pos) = parse_quoted(input, pos)?;
    let pos = skip_required_ws(input, pos)?;
    let (text, pos) = parse_quoted(input, pos)?;
    Some((spec, text, pos))
}

/// Parses a `"..."` string (escapes `\" \\ \n \t`, no raw newlines) or a
/// `` `...` `` raw string. Returns the value and the position after the
/// closing quote.
fn parse_quoted(input: &str, pos: usize) -> Option<(String, usize)> {
    let rest = &input[pos..];
    let mut chars = rest.char_indices();

    match chars.next()?.1 {
        '`' => {
            let close = rest[1..].find('`')?;
            Some((rest[1..1 + close].to_string(), pos + close + 2))
        }
        '"' => {
            let mut value = String::new();
            while let Some((i, ch)) = chars.next() {
                match ch {
                    '"' => return Some((value, pos + i + 1)),
                    '\n' => return None,
                    '\\' => match chars.next()?.1 {
                        '"' => value.push('"'),
                        '\\' => value.push('\\'),
                        'n' => value.push('\n'),
                        't' => value.push('\t'),
                        other => {
                            value.push('\\');
                            value.push(other);
                        }
                    },
                    _ => value.push(ch),
                }
            }
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(input: &str) -> Vec<Segment<'_>> {
        Scanner::new(input, DEFAULT_FUNCTION_NAME).collect()
    }

    #[test]
    fn test_scanner_plain_text() {
        assert_eq!(segments("no markers"), vec![Segment::Literal("no markers")]);
        assert!(segments("").is_empty());
    }

    #[test]
    fn test_scanner_splits_literals_and_invocations() {
        let input = r#"a colorize "bold" "b" c"#;
        let segs = segments(input);
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0], Segment::Literal("a "));
        match &segs[1] {
            Segment::Invocation(inv) => {
                assert_eq!(inv.spec, "bold");
                assert_eq!(inv.text, "b");
                assert_eq!(&input[inv.span.clone()], r#"colorize "bold" "b""#);
            }
            other => panic!("Expected Invocation, got {:?}", other),
        }
        assert_eq!(segs[2], Segment::Literal(" c"));
    }

    #[test]
    fn test_scanner_delimited_span_includes_braces() {
        let input = r#"x {{ colorize "red" "y" }} z"#;
        let segs = segments(input);
        match &segs[1] {
            Segment::Invocation(inv) => {
                assert_eq!(&input[inv.span.clone()], r#"{{ colorize "red" "y" }}"#)
            }
            other => panic!("Expected Invocation, got {:?}", other),
        }
    }

    #[test]
    fn test_scanner_requires_word_boundary() {
        assert_eq!(
            segments(r#"recolorize "red" "x""#),
            vec![Segment::Literal(r#"recolorize "red" "x""#)]
        );
        assert_eq!(segments(r#"colorizer "red" "x""#).len(), 1);
    }

    #[test]
    fn test_parse_quoted_escapes() {
        let (value, end) = parse_quoted(r#""a\"b\\c\nd""#, 0).unwrap();
        assert_eq!(value, "a\"b\\c\nd");
        assert_eq!(end, 12);
    }

    #[test]
    fn test_parse_quoted_raw() {
        let (value, end) = parse_quoted("`a \"b\"\nc` rest", 0).unwrap();
        assert_eq!(value, "a \"b\"\nc");
        assert_eq!(end, 9);
    }

    #[test]
    fn test_parse_quoted_rejects_unterminated() {
        assert!(parse_quoted(r#""abc"#, 0).is_none());
        assert!(parse_quoted("\"ab\ncd\"", 0).is_none());
        assert!(parse_quoted("abc", 0).is_none());
        assert!(parse_quoted("", 0).is_none());
    }

    #[test]
    fn test_format_default_marker() {
        let c = AnsiColorizer::new();
        assert_eq!(
            c.format(r#"colorize "bold;red" "ALERT""#),
            "\x1b[1m\x1b[31mALERT\x1b[0m"
        );
    }

    #[test]
    fn test_format_skips_unknown_modifier() {
        let c = AnsiColorizer::new();
        assert_eq!(
            c.format(r#"colorize "glow;green" "ok""#),
            "\x1b[32mok\x1b[0m"
        );
    }

    #[test]
    fn test_format_nothing_resolves_still_resets() {
        let c = AnsiColorizer::new();
        assert_eq!(c.format(r#"[colorize "glow" "ok"]"#), "[ok\x1b[0m]");
        assert_eq!(c.format(r#"colorize "" "ok""#), "ok\x1b[0m");
        assert_eq!(c.format(r#"colorize " ; " "ok""#), "ok\x1b[0m");
    }

    #[test]
    fn test_format_malformed_left_as_written() {
        let c = AnsiColorizer::new();
        for input in [
            r#"colorize "bold""#,
            r#"colorize "bold" text"#,
            r#"colorize "bold" "unterminated"#,
            r#"colorize"bold" "x""#,
            "colorize",
            "please colorize this",
        ] {
            assert_eq!(c.format(input), input);
        }
    }

    #[test]
    fn test_format_malformed_then_valid() {
        let c = AnsiColorizer::new();
        assert_eq!(
            c.format(r#"colorize "bold" | colorize "red" "x""#),
            "colorize \"bold\" | \x1b[31mx\x1b[0m"
        );
    }

    #[test]
    fn test_format_malformed_delimited_left_as_written() {
        let c = AnsiColorizer::new();
        for input in [
            r#"{{ colorize "red" "x" oops }}"#,
            r#"{{ colorize "red" "x""#,
            r#"{{ colorize "red" }}"#,
            r#"{{colorize "red" "x" }"#,
        ] {
            assert_eq!(c.format(input), input);
            assert!(c.validate(input).is_ok());
        }
    }

    #[test]
    fn test_format_malformed_delimited_then_valid() {
        let c = AnsiColorizer::new();
        assert_eq!(
            c.format(r#"{{ colorize "red" "x" oops }} colorize "bold" "y""#),
            "{{ colorize \"red\" \"x\" oops }} \x1b[1my\x1b[0m"
        );
    }

    #[test]
    fn test_format_escaped_quotes_in_text() {
        let c = AnsiColorizer::new();
        assert_eq!(
            c.format(r#"colorize "italic" "say \"hi\"""#),
            "\x1b[3msay \"hi\"\x1b[0m"
        );
    }

    #[test]
    fn test_rename_affects_later_calls_only() {
        let mut c = AnsiColorizer::new();
        let before = c.format(r#"style "bold" "x""#);
        c.rename("style");
        assert_eq!(before, r#"style "bold" "x""#);
        assert_eq!(c.format(r#"style "bold" "x""#), "\x1b[1mx\x1b[0m");
        assert_eq!(c.format(r#"colorize "bold" "x""#), r#"colorize "bold" "x""#);
        assert_eq!(c.function_name(), "style");
    }

    #[test]
    fn test_empty_marker_disables_rendering() {
        let c = AnsiColorizer::new().with_function_name("");
        assert_eq!(c.format(r#" "bold" "x""#), r#" "bold" "x""#);
    }

    #[test]
    fn test_options_apply_in_order() {
        let c = AnsiColorizer::with_options([
            ColorizerOption::custom_function_name("first"),
            ColorizerOption::custom_function_name("second"),
        ]);
        assert_eq!(c.function_name(), "second");
        assert_eq!(AnsiColorizer::with_options([]).function_name(), "colorize");
    }

    #[test]
    fn test_validate() {
        let c = AnsiColorizer::new();
        assert!(c.validate(r#"colorize "bold;red" "x""#).is_ok());

        let input = r#"colorize "glow" "a" and colorize "red;sparkle" "b""#;
        match c.validate(input) {
            Err(ColorizeError::UnknownModifiers(errs)) => {
                assert_eq!(errs.len(), 2);
                assert_eq!(errs.errors[0].name, "glow");
                assert_eq!(errs.errors[0].offset, 0);
                assert_eq!(errs.errors[1].name, "sparkle");
                assert_eq!(errs.errors[1].offset, input.find("colorize \"red").unwrap());
            }
            other => panic!("Expected UnknownModifiers, got {:?}", other),
        }
    }

    #[test]
    fn test_shared_colorizer() {
        let mut shared = Arc::new(RwLock::new(AnsiColorizer::new()));
        let reader = Arc::clone(&shared);
        shared.rename("paint");
        assert_eq!(reader.format(r#"paint "red" "x""#), "\x1b[31mx\x1b[0m");
    }

    #[test]
    fn test_boxed_colorizer() {
        let boxed: Box<dyn Colorizer> = Box::new(AnsiColorizer::new());
        assert_eq!(boxed.format(r#"colorize "bold" "x""#), "\x1b[1mx\x1b[0m");
    }
}
