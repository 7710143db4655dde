//! Colorizer adapter for targets without escape-code support.

use crate::colorizer::Colorizer;

/// Renders through an inner colorizer, then strips every escape sequence.
///
/// Invocations collapse to their text; everything else is unchanged.
///
/// ```rust
/// use colorize::{AnsiColorizer, Colorizer, PlainColorizer};
///
/// let plain = PlainColorizer::new(AnsiColorizer::new());
/// assert_eq!(plain.format(r#"a colorize "bold;red" "b" c"#), "a b c");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlainColorizer<C> {
    inner: C,
}

impl<C: Colorizer> PlainColorizer<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Colorizer> Colorizer for PlainColorizer<C> {
    fn format(&self, input: &str) -> String {
        console::strip_ansi_codes(&self.inner.format(input)).into_owned()
    }

    fn rename(&mut self, name: &str) {
        self.inner.rename(name)
    }
}
