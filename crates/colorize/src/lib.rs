//! # Colorize - Template-Driven Terminal Styling
//!
//! `colorize` renders text annotated with style invocations into text carrying
//! ANSI escape sequences. Templates mark styled spans with a function-call
//! form:
//!
//! ```text
//! colorize "bold;red" "ALERT"
//! {{ colorize "bright-bg-green;black" "PASS" }}
//! ```
//!
//! ## Core Concepts
//!
//! - [`ModifierTable`]: static lookup from modifier name to [`StyleCode`]
//! - [`Colorizer`]: capability trait, implemented by [`AnsiColorizer`]
//! - [`ColorWriter`]: a [`std::io::Write`] adapter colorizing every write
//! - [`PlainColorizer`]: renders, then strips the codes for plain targets
//! - [`register_colorize`]: the same rendering as a MiniJinja function
//!
//! ## Quick Start
//!
//! ```rust
//! use colorize::{AnsiColorizer, Colorizer};
//!
//! let colorizer = AnsiColorizer::new();
//! let out = colorizer.format(r#"Build colorize "bold;green" "passed" in 3s"#);
//! assert_eq!(out, "Build \x1b[1m\x1b[32mpassed\x1b[0m in 3s");
//! ```
//!
//! ## Modifiers
//!
//! | Category | Names |
//! |---|---|
//! | Style | `bold`, `faint`, `italic`, `strikethrough`, `underline` |
//! | Color | `black`, `red`, `green`, `yellow`, `blue`, `magenta`, `cyan`, `white` |
//!
//! Every color also accepts the `bright-`, `bg-` and `bright-bg-` prefixes.
//! See [`modifier`] for the exact codes.
//!
//! ## Renaming the Marker
//!
//! ```rust
//! use colorize::{AnsiColorizer, Colorizer, ColorizerOption};
//!
//! let colorizer = AnsiColorizer::with_options([ColorizerOption::custom_function_name("style")]);
//! assert_eq!(colorizer.format(r#"style "underline" "hi""#), "\x1b[4mhi\x1b[0m");
//! ```
//!
//! Whether the target supports escape codes at all is for the caller to decide.

mod colorizer;
mod error;
pub mod modifier;
mod plain;
mod template;
mod writer;

pub use colorizer::{
    render, AnsiColorizer, Colorizer, ColorizerConfig, ColorizerOption, DEFAULT_FUNCTION_NAME,
};
pub use error::{ColorizeError, UnknownModifier, UnknownModifiers};
pub use modifier::{Attribute, Color, Modifier, ModifierSet, ModifierTable, StyleCode};
pub use plain::PlainColorizer;
pub use template::register_colorize;
pub use writer::ColorWriter;
