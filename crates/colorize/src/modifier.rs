//! Modifier names and the ANSI codes they resolve to.
//!
//! A modifier is either a text attribute or one of the eight ANSI colors in
//! one of four variants. Every modifier maps to exactly one SGR parameter:
//!
//! | Modifier | Code |
//! |----------|------|
//! | `bold`, `faint`, `italic`, `underline`, `strikethrough` | 1, 2, 3, 4, 9 |
//! | `<color>` | 30–37 |
//! | `bg-<color>` | 40–47 |
//! | `bright-<color>` | 90–97 |
//! | `bright-bg-<color>` | 100–107 |
//!
//! Colors are numbered in ANSI order: black, red, green, yellow, blue,
//! magenta, cyan, white. The reset code is 0.
//!
//! # Example
//!
//! ```rust
//! use colorize::{ModifierTable, StyleCode};
//!
//! assert_eq!(ModifierTable::resolve("bright-red").unwrap().sgr(), 91);
//! assert_eq!(ModifierTable::resolve("bg-cyan").unwrap().to_string(), "\x1b[46m");
//! assert!(ModifierTable::resolve("purple").is_none());
//! assert_eq!(StyleCode::RESET.to_string(), "\x1b[0m");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::ColorizeError;

/// A text attribute that is not a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold,
    Faint,
    Italic,
    Strikethrough,
    Underline,
}

impl Attribute {
    /// All attributes, in documentation order.
    pub const ALL: [Attribute; 5] = [
        Attribute::Bold,
        Attribute::Faint,
        Attribute::Italic,
        Attribute::Strikethrough,
        Attribute::Underline,
    ];

    /// The modifier name of this attribute.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Bold => "bold",
            Attribute::Faint => "faint",
            Attribute::Italic => "italic",
            Attribute::Strikethrough => "strikethrough",
            Attribute::Underline => "underline",
        }
    }

    fn sgr(self) -> u8 {
        match self {
            Attribute::Bold => 1,
            Attribute::Faint => 2,
            Attribute::Italic => 3,
            Attribute::Underline => 4,
            Attribute::Strikethrough => 9,
        }
    }
}

/// One of the eight base ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// All colors, in ANSI order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// The base modifier name of this color.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    // Position within a 30/40/90/100 block.
    fn offset(self) -> u8 {
        self as u8
    }
}

/// A single named style directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// `bold`, `faint`, ...
    Attribute(Attribute),
    /// `red`
    Foreground(Color),
    /// `bright-red`
    BrightForeground(Color),
    /// `bg-red`
    Background(Color),
    /// `bright-bg-red`
    BrightBackground(Color),
}

impl Modifier {
    /// Iterates over every known modifier: attributes first, then each color
    /// in its plain, bright, background and bright background variants.
    pub fn all() -> impl Iterator<Item = Modifier> {
        Attribute::ALL
            .into_iter()
            .map(Modifier::Attribute)
            .chain(Color::ALL.into_iter().flat_map(|color| {
                [
                    Modifier::Foreground(color),
                    Modifier::BrightForeground(color),
                    Modifier::Background(color),
                    Modifier::BrightBackground(color),
                ]
            }))
    }

    /// The style code this modifier renders as.
    pub fn code(self) -> StyleCode {
        match self {
            Modifier::Attribute(attr) => StyleCode(attr.sgr()),
            Modifier::Foreground(color) => StyleCode(30 + color.offset()),
            Modifier::Background(color) => StyleCode(40 + color.offset()),
            Modifier::BrightForeground(color) => StyleCode(90 + color.offset()),
            Modifier::BrightBackground(color) => StyleCode(100 + color.offset()),
        }
    }

    /// The canonical name, e.g. `bright-bg-green`.
    pub fn name(self) -> String {
        match self {
            Modifier::Attribute(attr) => attr.name().to_string(),
            Modifier::Foreground(color) => color.name().to_string(),
            Modifier::BrightForeground(color) => format!("bright-{}", color.name()),
            Modifier::Background(color) => format!("bg-{}", color.name()),
            Modifier::BrightBackground(color) => format!("bright-bg-{}", color.name()),
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Modifier {
    type Err = ColorizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModifierTable::get(s).ok_or_else(|| ColorizeError::UnknownModifier(s.trim().to_string()))
    }
}

/// An SGR parameter, rendered as `ESC [ n m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleCode(u8);

impl StyleCode {
    /// Terminates all active styling.
    pub const RESET: StyleCode = StyleCode(0);

    /// The raw SGR parameter.
    pub const fn sgr(self) -> u8 {
        self.0
    }
}

impl fmt::Display for StyleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.0)
    }
}

static TABLE: Lazy<HashMap<String, Modifier>> =
    Lazy::new(|| Modifier::all().map(|m| (m.name(), m)).collect());

/// Static lookup from modifier name to [`Modifier`] and [`StyleCode`].
///
/// Names are matched after trimming surrounding whitespace and are ASCII
/// case-insensitive.
pub struct ModifierTable;

impl ModifierTable {
    /// Looks up a modifier by name.
    pub fn get(name: &str) -> Option<Modifier> {
        let name = name.trim();
        match TABLE.get(name) {
            Some(modifier) => Some(*modifier),
            None => TABLE.get(&name.to_ascii_lowercase()).copied(),
        }
    }

    /// Resolves a modifier name to its style code, `None` on a miss.
    pub fn resolve(name: &str) -> Option<StyleCode> {
        Self::get(name).map(Modifier::code)
    }

    /// Number of entries (5 attributes + 8 colors × 4 variants).
    pub fn len() -> usize {
        TABLE.len()
    }

    /// Iterates over `(name, modifier)` pairs in the order of [`Modifier::all`].
    pub fn iter() -> impl Iterator<Item = (String, Modifier)> {
        Modifier::all().map(|m| (m.name(), m))
    }
}

/// An ordered list of modifiers parsed from a `;`-delimited spec.
///
/// Codes are emitted in spec order, so when two colors of the same kind
/// appear the later one wins on the terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierSet {
    modifiers: Vec<Modifier>,
}

impl ModifierSet {
    /// Parses a spec such as `"bold;red"`.
    ///
    /// Empty segments are ignored. Unknown names are left out of the set and
    /// returned separately, in the order they appeared.
    pub fn parse(spec: &str) -> (Self, Vec<&str>) {
        let mut modifiers = Vec::new();
        let mut unknown = Vec::new();

        for segment in spec.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            match ModifierTable::get(segment) {
                Some(modifier) => modifiers.push(modifier),
                None => unknown.push(segment),
            }
        }

        (Self { modifiers }, unknown)
    }

    /// The parsed modifiers, in spec order.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// The concatenated codes of every modifier.
    pub fn prefix(&self) -> String {
        self.modifiers.iter().map(|m| m.code().to_string()).collect()
    }

    /// Wraps `text` in this set's codes and a trailing reset.
    ///
    /// The reset is appended even for an empty set.
    pub fn apply(&self, text: &str) -> String {
        format!("{}{}{}", self.prefix(), text, StyleCode::RESET)
    }
}

impl FromStr for ModifierSet {
    type Err = ColorizeError;

    /// Strict parse: the first unknown name is an error.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (set, unknown) = ModifierSet::parse(spec);
        match unknown.first() {
            Some(name) => Err(ColorizeError::UnknownModifier(name.to_string())),
            None => Ok(set),
        }
    }
}
