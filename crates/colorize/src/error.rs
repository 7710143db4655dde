//! Error types for colorizing.

use std::fmt;

/// Errors produced by the colorizer, the writer adapter and the template binding.
///
/// [`Colorizer::format`](crate::Colorizer::format) itself never fails; these
/// surface only from the writer, from strict parsing and from validation.
#[derive(Debug, thiserror::Error)]
pub enum ColorizeError {
    /// The writer has no downstream sink.
    #[error("color writer has no output to write to")]
    MissingOutput,

    /// The writer has no colorizer.
    #[error("color writer has no colorizer")]
    MissingColorizer,

    /// A modifier name is not in the modifier table.
    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),

    /// Validation found one or more unknown modifiers.
    #[error(transparent)]
    UnknownModifiers(#[from] UnknownModifiers),

    /// The template engine failed to compile or render.
    #[error("template error: {0}")]
    Template(String),
}

impl From<minijinja::Error> for ColorizeError {
    fn from(err: minijinja::Error) -> Self {
        ColorizeError::Template(err.to_string())
    }
}

/// An unknown modifier found inside an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModifier {
    /// The modifier name as written.
    pub name: String,
    /// Byte offset of the invocation that contains it.
    pub offset: usize,
}

/// Every unknown modifier found by a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnknownModifiers {
    pub errors: Vec<UnknownModifier>,
}

impl UnknownModifiers {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl fmt::Display for UnknownModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} unknown modifier(s):", self.errors.len())?;
        for err in &self.errors {
            write!(f, " '{}' at byte {};", err.name, err.offset)?;
        }
        Ok(())
    }
}

impl std::error::Error for UnknownModifiers {}
