//! MiniJinja binding.
//!
//! Invocations usually originate in templates. This module exposes the same
//! rendering as a template function, so
//!
//! ```jinja
//! {{ colorize("bold;red", title) }}
//! ```
//!
//! produces the same bytes as the marker `colorize "bold;red" "<title>"`.
//! The function is registered under the colorizer's marker name, so a
//! renamed colorizer registers a renamed function.

use minijinja::{Environment, Value};
use serde::Serialize;

use crate::colorizer::{render, AnsiColorizer};
use crate::error::ColorizeError;

/// Adds the marker function to `env`.
///
/// The result is marked safe so auto-escaping never mangles the codes.
pub fn register_colorize(env: &mut Environment<'_>, colorizer: &AnsiColorizer) {
    env.add_function(
        colorizer.function_name().to_string(),
        |spec: Value, text: Value| -> Value {
            Value::from_safe_string(render(&spec.to_string(), &text.to_string()))
        },
    );
}

impl AnsiColorizer {
    /// A fresh environment with the marker function registered.
    pub fn environment(&self) -> Environment<'static> {
        let mut env = Environment::new();
        register_colorize(&mut env, self);
        env
    }

    /// Renders a MiniJinja template source with `ctx`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colorize::AnsiColorizer;
    ///
    /// let out = AnsiColorizer::new()
    ///     .render_template(r#"{{ colorize("bold", name) }}!"#, minijinja::context! { name => "hi" })
    ///     .unwrap();
    /// assert_eq!(out, "\x1b[1mhi\x1b[0m!");
    /// ```
    pub fn render_template<S: Serialize>(
        &self,
        source: &str,
        ctx: S,
    ) -> Result<String, ColorizeError> {
        Ok(self.environment().render_str(source, ctx)?)
    }
}
